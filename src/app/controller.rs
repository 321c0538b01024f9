//! Workspace Controller - Mode and Panel State Machine
//!
//! Owns the active mode, the sidebar collapse flag and the two panel
//! visibility flags. All transitions are total; there is nothing to fail.
//!
//! Panel flags are global rather than per mode: toggling a panel that the
//! current mode does not show is still recorded, and the value is picked up
//! again when a mode that shows the panel becomes active.

use crate::app::layout::Layout;
use crate::app::navigation::Mode;
use tracing::{debug, info};

/// Collapsible region inside a two-pane mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The video player
    Video,
    /// The fixed-width side column (assistant or notes editor)
    Side,
}

/// Visibility flags for the two panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelVisibility {
    pub video: bool,
    pub side: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            video: true,
            side: true,
        }
    }
}

impl PanelVisibility {
    pub fn is_visible(&self, panel: Panel) -> bool {
        match panel {
            Panel::Video => self.video,
            Panel::Side => self.side,
        }
    }

    /// Flip one flag, leaving the other untouched
    pub fn toggle(&mut self, panel: Panel) {
        match panel {
            Panel::Video => self.video = !self.video,
            Panel::Side => self.side = !self.side,
        }
    }
}

/// A state transition of the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceAction {
    SetMode(Mode),
    ToggleSidebar,
    TogglePanel(Panel),
}

/// Layout state of the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceController {
    mode: Mode,
    sidebar_collapsed: bool,
    panels: PanelVisibility,
}

impl WorkspaceController {
    /// Fresh state: video mode, sidebar expanded, both panels visible
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    /// Arrangement of the content area for the current state
    pub fn layout(&self) -> Layout {
        Layout::select(self.mode, self.panels)
    }

    // ==================== Transitions ====================

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!(from = ?self.mode, to = ?mode, "Switching workspace mode");
        }
        self.mode = mode;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        debug!(collapsed = self.sidebar_collapsed, "Sidebar toggled");
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        self.panels.toggle(panel);
        debug!(
            ?panel,
            visible = self.panels.is_visible(panel),
            mode = ?self.mode,
            "Panel toggled"
        );
    }

    /// Apply one transition
    pub fn apply(&mut self, action: WorkspaceAction) {
        match action {
            WorkspaceAction::SetMode(mode) => self.set_mode(mode),
            WorkspaceAction::ToggleSidebar => self.toggle_sidebar(),
            WorkspaceAction::TogglePanel(panel) => self.toggle_panel(panel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::layout::{FullWidthView, PanelSlot, SideView};

    #[test]
    fn starts_in_video_mode_with_everything_visible() {
        let controller = WorkspaceController::new();
        assert_eq!(controller.mode(), Mode::Video);
        assert!(!controller.sidebar_collapsed());
        assert_eq!(controller.panels(), PanelVisibility::default());
        assert!(controller.panels().video && controller.panels().side);
    }

    #[test]
    fn set_mode_leaves_sidebar_and_panels_alone() {
        let mut controller = WorkspaceController::new();
        controller.toggle_sidebar();
        controller.toggle_panel(Panel::Side);
        let before = (controller.sidebar_collapsed(), controller.panels());

        for mode in Mode::all() {
            controller.set_mode(*mode);
            assert_eq!(controller.mode(), *mode);
            assert_eq!((controller.sidebar_collapsed(), controller.panels()), before);
        }
    }

    #[test]
    fn layout_depends_only_on_mode_and_panels() {
        for sidebar_toggles in 0..2 {
            for video_toggles in 0..2 {
                for side_toggles in 0..2 {
                    let mut controller = WorkspaceController::new();
                    for _ in 0..sidebar_toggles {
                        controller.toggle_sidebar();
                    }
                    for _ in 0..video_toggles {
                        controller.toggle_panel(Panel::Video);
                    }
                    for _ in 0..side_toggles {
                        controller.toggle_panel(Panel::Side);
                    }
                    for mode in Mode::all() {
                        controller.set_mode(*mode);
                        assert_eq!(
                            controller.layout(),
                            Layout::select(*mode, controller.panels())
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sidebar_toggle_is_an_involution() {
        let mut controller = WorkspaceController::new();
        controller.toggle_sidebar();
        assert!(controller.sidebar_collapsed());
        controller.toggle_sidebar();
        assert!(!controller.sidebar_collapsed());
        assert_eq!(controller.mode(), Mode::Video);
        assert_eq!(controller.panels(), PanelVisibility::default());
    }

    #[test]
    fn panel_toggle_is_an_involution_and_independent() {
        for panel in [Panel::Video, Panel::Side] {
            let mut controller = WorkspaceController::new();
            let other = match panel {
                Panel::Video => Panel::Side,
                Panel::Side => Panel::Video,
            };

            controller.toggle_panel(panel);
            assert!(!controller.panels().is_visible(panel));
            assert!(controller.panels().is_visible(other));

            controller.toggle_panel(panel);
            assert!(controller.panels().is_visible(panel));
            assert!(controller.panels().is_visible(other));
        }
    }

    #[test]
    fn hidden_side_panel_survives_mode_switches() {
        let mut controller = WorkspaceController::new();
        controller.apply(WorkspaceAction::SetMode(Mode::Assistant));
        controller.apply(WorkspaceAction::TogglePanel(Panel::Side));
        controller.apply(WorkspaceAction::SetMode(Mode::NotesLibrary));
        assert_eq!(
            controller.layout(),
            Layout::FullWidth(FullWidthView::NotesLibrary)
        );

        controller.apply(WorkspaceAction::SetMode(Mode::Assistant));
        assert!(!controller.panels().side);
        assert_eq!(
            controller.layout().side(),
            Some((SideView::Assistant, PanelSlot { collapsed: true }))
        );
    }

    #[test]
    fn toggling_an_unshown_panel_is_recorded() {
        let mut controller = WorkspaceController::new();
        controller.set_mode(Mode::Settings);
        controller.toggle_panel(Panel::Side);
        assert_eq!(controller.layout(), Layout::FullWidth(FullWidthView::Settings));

        controller.set_mode(Mode::NotesEditor);
        assert_eq!(
            controller.layout().side(),
            Some((SideView::NotesEditor, PanelSlot { collapsed: true }))
        );
    }

    #[test]
    fn hiding_video_collapses_the_video_view_only() {
        let mut controller = WorkspaceController::new();
        controller.apply(WorkspaceAction::TogglePanel(Panel::Video));

        assert_eq!(controller.mode(), Mode::Video);
        assert!(!controller.panels().video);
        assert_eq!(
            controller.layout(),
            Layout::VideoFocus {
                video: PanelSlot { collapsed: true }
            }
        );
    }
}
