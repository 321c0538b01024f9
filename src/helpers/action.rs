//! Keyboard Actions and Shortcuts
//!
//! The workspace shortcut table is static. Each entry maps a chord to a
//! [`WorkspaceAction`]; the table is turned into gpui key bindings scoped to
//! the [`WORKSPACE_CONTEXT`] key context, so the bindings only fire while a
//! workspace element is mounted and focused in the window.

use crate::app::controller::{Panel, WorkspaceAction};
use crate::app::navigation::Mode;
use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context set on the workspace root element
pub const WORKSPACE_CONTEXT: &str = "Workspace";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Mode selection actions, one per sidebar item
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    Video,
    Assistant,
    NotesEditor,
    NotesLibrary,
    Settings,
}

/// Sidebar and panel visibility actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LayoutAction {
    ToggleSidebar,
    ToggleVideoPanel,
    ToggleSidePanel,
}

impl From<Mode> for NavAction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Video => NavAction::Video,
            Mode::Assistant => NavAction::Assistant,
            Mode::NotesEditor => NavAction::NotesEditor,
            Mode::NotesLibrary => NavAction::NotesLibrary,
            Mode::Settings => NavAction::Settings,
        }
    }
}

impl From<NavAction> for WorkspaceAction {
    fn from(action: NavAction) -> Self {
        let mode = match action {
            NavAction::Video => Mode::Video,
            NavAction::Assistant => Mode::Assistant,
            NavAction::NotesEditor => Mode::NotesEditor,
            NavAction::NotesLibrary => Mode::NotesLibrary,
            NavAction::Settings => Mode::Settings,
        };
        WorkspaceAction::SetMode(mode)
    }
}

impl From<LayoutAction> for WorkspaceAction {
    fn from(action: LayoutAction) -> Self {
        match action {
            LayoutAction::ToggleSidebar => WorkspaceAction::ToggleSidebar,
            LayoutAction::ToggleVideoPanel => WorkspaceAction::TogglePanel(Panel::Video),
            LayoutAction::ToggleSidePanel => WorkspaceAction::TogglePanel(Panel::Side),
        }
    }
}

// ==================== Chords ====================

/// A key chord: the platform primary modifier (⌘ / Ctrl), optional shift,
/// and a single character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub primary: bool,
    pub shift: bool,
    pub key: char,
}

impl Chord {
    /// Parse gpui keystroke syntax such as `secondary-shift-v`.
    ///
    /// `secondary`, `cmd` and `ctrl` all count as the primary modifier.
    /// Modifier order does not matter and the key is case-insensitive.
    pub fn parse(keystroke: &str) -> Option<Chord> {
        let mut primary = false;
        let mut shift = false;
        let mut key = None;

        for part in keystroke.split('-') {
            match part.to_ascii_lowercase().as_str() {
                "secondary" | "cmd" | "ctrl" | "meta" => primary = true,
                "shift" => shift = true,
                other => {
                    let mut chars = other.chars();
                    let (Some(c), None) = (chars.next(), chars.next()) else {
                        return None;
                    };
                    if key.replace(c).is_some() {
                        return None;
                    }
                }
            }
        }

        key.map(|key| Chord {
            primary,
            shift,
            key,
        })
    }

    /// Human-readable label, e.g. `Ctrl+Shift+V` or `⌘⇧V` on macOS
    pub fn display(&self) -> String {
        #[cfg(target_os = "macos")]
        let (primary, shift, separator) = ("⌘", "⇧", "");
        #[cfg(not(target_os = "macos"))]
        let (primary, shift, separator) = ("Ctrl", "Shift", "+");

        let mut parts = Vec::with_capacity(3);
        if self.primary {
            parts.push(primary.to_string());
        }
        if self.shift {
            parts.push(shift.to_string());
        }
        parts.push(self.key.to_ascii_uppercase().to_string());
        parts.join(separator)
    }
}

/// One entry of the workspace shortcut table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// gpui keystroke syntax
    pub keystroke: &'static str,
    pub action: WorkspaceAction,
}

/// The fixed workspace shortcut table
pub fn workspace_shortcuts() -> Vec<Shortcut> {
    let mut shortcuts: Vec<Shortcut> = Mode::all()
        .iter()
        .map(|mode| Shortcut {
            keystroke: mode.keystroke(),
            action: WorkspaceAction::SetMode(*mode),
        })
        .collect();

    shortcuts.extend([
        Shortcut {
            keystroke: "secondary-b",
            action: WorkspaceAction::ToggleSidebar,
        },
        Shortcut {
            keystroke: "secondary-shift-v",
            action: WorkspaceAction::TogglePanel(Panel::Video),
        },
        Shortcut {
            keystroke: "secondary-shift-r",
            action: WorkspaceAction::TogglePanel(Panel::Side),
        },
    ]);

    shortcuts
}

/// Display label for the chord bound to an action
pub fn shortcut_label(action: WorkspaceAction) -> Option<String> {
    workspace_shortcuts()
        .into_iter()
        .find(|shortcut| shortcut.action == action)
        .and_then(|shortcut| Chord::parse(shortcut.keystroke))
        .map(|chord| chord.display())
}

fn key_binding(shortcut: &Shortcut) -> KeyBinding {
    let context = Some(WORKSPACE_CONTEXT);
    match shortcut.action {
        WorkspaceAction::SetMode(mode) => {
            KeyBinding::new(shortcut.keystroke, NavAction::from(mode), context)
        }
        WorkspaceAction::ToggleSidebar => {
            KeyBinding::new(shortcut.keystroke, LayoutAction::ToggleSidebar, context)
        }
        WorkspaceAction::TogglePanel(Panel::Video) => {
            KeyBinding::new(shortcut.keystroke, LayoutAction::ToggleVideoPanel, context)
        }
        WorkspaceAction::TogglePanel(Panel::Side) => {
            KeyBinding::new(shortcut.keystroke, LayoutAction::ToggleSidePanel, context)
        }
    }
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![KeyBinding::new("secondary-q", MenuAction::Quit, None)];
    bindings.extend(workspace_shortcuts().iter().map(key_binding));
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::KeyBindingContextPredicate;

    fn chord(keystroke: &str) -> Chord {
        Chord::parse(keystroke).expect("valid chord")
    }

    fn lookup_shortcut(chord: Chord) -> Option<WorkspaceAction> {
        workspace_shortcuts()
            .into_iter()
            .find(|shortcut| Chord::parse(shortcut.keystroke) == Some(chord))
            .map(|shortcut| shortcut.action)
    }

    fn dispatches(binding: &KeyBinding, action: WorkspaceAction) -> bool {
        let bound = binding.action();
        match action {
            WorkspaceAction::SetMode(mode) => bound.partial_eq(&NavAction::from(mode)),
            WorkspaceAction::ToggleSidebar => bound.partial_eq(&LayoutAction::ToggleSidebar),
            WorkspaceAction::TogglePanel(Panel::Video) => {
                bound.partial_eq(&LayoutAction::ToggleVideoPanel)
            }
            WorkspaceAction::TogglePanel(Panel::Side) => {
                bound.partial_eq(&LayoutAction::ToggleSidePanel)
            }
        }
    }

    #[test]
    fn key_bindings_mirror_the_table_under_the_workspace_context() {
        let shortcuts = workspace_shortcuts();
        let bindings = new_key_bindings();
        assert_eq!(bindings.len(), shortcuts.len() + 1);

        let quit = &bindings[0];
        assert!(quit.action().partial_eq(&MenuAction::Quit));
        assert!(quit.predicate().is_none());

        let workspace =
            KeyBindingContextPredicate::parse(WORKSPACE_CONTEXT).expect("valid context");
        for (shortcut, binding) in shortcuts.iter().zip(&bindings[1..]) {
            assert_eq!(binding.keystrokes().len(), 1, "{}", shortcut.keystroke);
            assert!(dispatches(binding, shortcut.action), "{}", shortcut.keystroke);
            assert_eq!(binding.predicate().as_deref(), Some(&workspace));
        }
    }

    #[test]
    fn parses_modifiers_in_any_order() {
        assert_eq!(
            chord("shift-secondary-V"),
            Chord {
                primary: true,
                shift: true,
                key: 'v'
            }
        );
        assert_eq!(chord("ctrl-b"), chord("cmd-b"));
        assert_eq!(Chord::parse("secondary-"), None);
        assert_eq!(Chord::parse("secondary-ab"), None);
    }

    #[test]
    fn digits_select_modes_in_sidebar_order() {
        for (index, mode) in Mode::all().iter().enumerate() {
            let keystroke = format!("ctrl-{}", index + 1);
            assert_eq!(
                lookup_shortcut(chord(&keystroke)),
                Some(WorkspaceAction::SetMode(*mode))
            );
        }
        assert_eq!(
            lookup_shortcut(chord("secondary-2")),
            Some(WorkspaceAction::SetMode(Mode::Assistant))
        );
    }

    #[test]
    fn layout_chords_map_to_toggles() {
        assert_eq!(
            lookup_shortcut(chord("secondary-b")),
            Some(WorkspaceAction::ToggleSidebar)
        );
        assert_eq!(
            lookup_shortcut(chord("secondary-shift-v")),
            Some(WorkspaceAction::TogglePanel(Panel::Video))
        );
        assert_eq!(
            lookup_shortcut(chord("secondary-shift-r")),
            Some(WorkspaceAction::TogglePanel(Panel::Side))
        );
    }

    #[test]
    fn unbound_chords_are_ignored() {
        assert_eq!(lookup_shortcut(chord("secondary-6")), None);
        assert_eq!(lookup_shortcut(chord("secondary-v")), None);
        assert_eq!(lookup_shortcut(chord("shift-b")), None);
        assert_eq!(lookup_shortcut(chord("b")), None);
    }

    #[test]
    fn table_has_no_duplicate_chords() {
        let chords: Vec<_> = workspace_shortcuts()
            .iter()
            .map(|shortcut| chord(shortcut.keystroke))
            .collect();
        for (i, a) in chords.iter().enumerate() {
            assert!(!chords[i + 1..].contains(a), "duplicate chord {a:?}");
        }
    }

    #[test]
    fn gpui_actions_round_trip_to_workspace_actions() {
        for mode in Mode::all() {
            assert_eq!(
                WorkspaceAction::from(NavAction::from(*mode)),
                WorkspaceAction::SetMode(*mode)
            );
        }
        assert_eq!(
            WorkspaceAction::from(LayoutAction::ToggleSidePanel),
            WorkspaceAction::TogglePanel(Panel::Side)
        );
    }

    #[test]
    fn labels_name_the_primary_modifier() {
        let label = shortcut_label(WorkspaceAction::TogglePanel(Panel::Video))
            .expect("bound action");
        assert!(label.ends_with('V'));
        assert!(label.len() > 1);
    }
}
