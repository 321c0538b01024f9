//! Navigation - Workspace Modes
//!
//! Defines the five top-level modes reachable from the sidebar and the
//! ordering used by the `primary + 1..5` shortcuts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Top-level view selector. Exactly one mode is active at any time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Focused video playback
    #[default]
    Video,
    /// Video plus the AI chat assistant
    Assistant,
    /// Video plus the smart notes editor
    NotesEditor,
    /// Saved notes library (full width)
    NotesLibrary,
    /// Preferences (full width)
    Settings,
}

impl Mode {
    /// Sidebar order; position `n` (0-based) is bound to `primary + (n + 1)`
    pub const ALL: [Mode; 5] = [
        Mode::Video,
        Mode::Assistant,
        Mode::NotesEditor,
        Mode::NotesLibrary,
        Mode::Settings,
    ];

    /// Get all modes in sidebar order
    pub fn all() -> &'static [Mode] {
        &Self::ALL
    }

    /// Translation key suffix for labels (`sidebar.<key>`, `sidebar.<key>_desc`)
    pub fn i18n_key(self) -> &'static str {
        match self {
            Mode::Video => "video",
            Mode::Assistant => "assistant",
            Mode::NotesEditor => "notes_editor",
            Mode::NotesLibrary => "notes_library",
            Mode::Settings => "settings",
        }
    }

    /// Element id used for the sidebar entry
    pub fn element_id(self) -> &'static str {
        match self {
            Mode::Video => "nav-video",
            Mode::Assistant => "nav-assistant",
            Mode::NotesEditor => "nav-notes-editor",
            Mode::NotesLibrary => "nav-notes-library",
            Mode::Settings => "nav-settings",
        }
    }

    /// Keystroke bound to this mode, in gpui keystroke syntax
    pub fn keystroke(self) -> &'static str {
        match self {
            Mode::Video => "secondary-1",
            Mode::Assistant => "secondary-2",
            Mode::NotesEditor => "secondary-3",
            Mode::NotesLibrary => "secondary-4",
            Mode::Settings => "secondary-5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_chords_follow_sidebar_order() {
        for (index, mode) in Mode::all().iter().enumerate() {
            assert_eq!(mode.keystroke(), format!("secondary-{}", index + 1));
        }
    }

    #[test]
    fn default_mode_is_video() {
        assert_eq!(Mode::default(), Mode::Video);
    }
}
