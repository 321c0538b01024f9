//! Layout - Mode to Arrangement Policy
//!
//! A pure function of the active mode and the panel flags decides which leaf
//! views are mounted and how they are arranged. Rendering code only follows
//! the returned [`Layout`]; it never inspects the mode on its own.

use crate::app::controller::PanelVisibility;
use crate::app::navigation::Mode;

/// Presentation of a collapsible panel inside a layout.
///
/// A collapsed slot keeps its view mounted at zero content width and the view
/// renders its own minimized affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSlot {
    pub collapsed: bool,
}

impl PanelSlot {
    fn from_visible(visible: bool) -> Self {
        Self {
            collapsed: !visible,
        }
    }
}

/// How much room the video view gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelDensity {
    /// Fills the content area; highlights and transcript are shown
    #[default]
    Full,
    /// Shares the row with a side panel; player controls only
    Compact,
}

/// Leaf view shown in the fixed-width side column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideView {
    Assistant,
    NotesEditor,
}

/// Leaf view that takes the whole content area and ignores panel flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullWidthView {
    NotesLibrary,
    Settings,
}

/// View arrangement for the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Video view alone, sized to fill
    VideoFocus { video: PanelSlot },
    /// Compact video view beside a fixed-width side column
    TwoPane {
        video: PanelSlot,
        side_view: SideView,
        side: PanelSlot,
    },
    /// A single full-width view
    FullWidth(FullWidthView),
}

impl Layout {
    /// Select the arrangement for `mode` given the current panel flags
    pub fn select(mode: Mode, panels: PanelVisibility) -> Self {
        match mode {
            Mode::Video => Layout::VideoFocus {
                video: PanelSlot::from_visible(panels.video),
            },
            Mode::Assistant => Layout::TwoPane {
                video: PanelSlot::from_visible(panels.video),
                side_view: SideView::Assistant,
                side: PanelSlot::from_visible(panels.side),
            },
            Mode::NotesEditor => Layout::TwoPane {
                video: PanelSlot::from_visible(panels.video),
                side_view: SideView::NotesEditor,
                side: PanelSlot::from_visible(panels.side),
            },
            Mode::NotesLibrary => Layout::FullWidth(FullWidthView::NotesLibrary),
            Mode::Settings => Layout::FullWidth(FullWidthView::Settings),
        }
    }

    /// Video slot and its density, if the video view is mounted
    pub fn video(&self) -> Option<(PanelSlot, PanelDensity)> {
        match *self {
            Layout::VideoFocus { video } => Some((video, PanelDensity::Full)),
            Layout::TwoPane { video, .. } => Some((video, PanelDensity::Compact)),
            Layout::FullWidth(_) => None,
        }
    }

    /// Side column contents, if any
    pub fn side(&self) -> Option<(SideView, PanelSlot)> {
        match *self {
            Layout::TwoPane {
                side_view, side, ..
            } => Some((side_view, side)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PANELS: [PanelVisibility; 4] = [
        PanelVisibility {
            video: true,
            side: true,
        },
        PanelVisibility {
            video: true,
            side: false,
        },
        PanelVisibility {
            video: false,
            side: true,
        },
        PanelVisibility {
            video: false,
            side: false,
        },
    ];

    #[test]
    fn video_mode_fills_with_video_only() {
        for panels in ALL_PANELS {
            let layout = Layout::select(Mode::Video, panels);
            assert_eq!(
                layout,
                Layout::VideoFocus {
                    video: PanelSlot {
                        collapsed: !panels.video
                    }
                }
            );
            assert_eq!(layout.side(), None);
            assert_eq!(
                layout.video().map(|(_, density)| density),
                Some(PanelDensity::Full)
            );
        }
    }

    #[test]
    fn two_pane_modes_keep_both_views_mounted() {
        for (mode, expected_side) in [
            (Mode::Assistant, SideView::Assistant),
            (Mode::NotesEditor, SideView::NotesEditor),
        ] {
            for panels in ALL_PANELS {
                let layout = Layout::select(mode, panels);
                let (video, density) = layout.video().expect("video mounted");
                let (side_view, side) = layout.side().expect("side mounted");
                assert_eq!(density, PanelDensity::Compact);
                assert_eq!(video.collapsed, !panels.video);
                assert_eq!(side_view, expected_side);
                assert_eq!(side.collapsed, !panels.side);
            }
        }
    }

    #[test]
    fn full_width_modes_ignore_panel_flags() {
        for panels in ALL_PANELS {
            assert_eq!(
                Layout::select(Mode::NotesLibrary, panels),
                Layout::FullWidth(FullWidthView::NotesLibrary)
            );
            assert_eq!(
                Layout::select(Mode::Settings, panels),
                Layout::FullWidth(FullWidthView::Settings)
            );
            assert_eq!(Layout::select(Mode::Settings, panels).video(), None);
        }
    }
}
