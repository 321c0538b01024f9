//! Workspace - Main Shell with Layout and Keyboard Dispatch
//!
//! The workspace holds the title bar, the sidebar and the content area. It
//! owns the [`WorkspaceController`], turns chords and clicks into controller
//! transitions, and after every transition reconciles the mounted leaf views
//! with the selected [`Layout`].
//!
//! Chords are bound under the `Workspace` key context and handled by
//! listeners on this element, so they only fire while the workspace is in the
//! tree and disappear with it.

use crate::app::controller::{Panel, WorkspaceAction, WorkspaceController};
use crate::app::layout::{FullWidthView, Layout, PanelDensity, SideView};
use crate::constants::{COLLAPSED_PANEL_WIDTH, SIDE_PANEL_WIDTH};
use crate::helpers::{LayoutAction, NavAction, WORKSPACE_CONTEXT};
use crate::views::panel::{PanelHandle, PanelProps, ToggleHandler};
use crate::views::{
    AssistantView, EduSidebar, EduTitleBar, NotesEditorView, NotesLibraryView, SettingsView,
    SidebarHandler, VideoView,
};
use gpui::{
    AnyElement, AnyView, Context, Entity, FocusHandle, Window, div, prelude::*, px,
};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use std::rc::Rc;
use tracing::debug;

/// Main workspace containing the application layout
pub struct Workspace {
    controller: WorkspaceController,
    title_bar: Entity<EduTitleBar>,
    sidebar: Entity<EduSidebar>,
    /// Mounted while the layout contains the video slot
    video: Option<PanelHandle>,
    /// Mounted side column view
    side: Option<(SideView, PanelHandle)>,
    /// Mounted full-width view
    full_width: Option<(FullWidthView, AnyView)>,
    focus_handle: FocusHandle,
}

impl Workspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let title_bar = cx.new(|cx| EduTitleBar::new(window, cx));

        let weak = cx.weak_entity();
        let on_sidebar: SidebarHandler = Rc::new(move |action, window, cx| {
            let _ = weak.update(cx, |this, cx| this.dispatch(action, window, cx));
        });
        let sidebar = cx.new(|cx| EduSidebar::new(on_sidebar, window, cx));

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let mut workspace = Self {
            controller: WorkspaceController::new(),
            title_bar,
            sidebar,
            video: None,
            side: None,
            full_width: None,
            focus_handle,
        };
        workspace.reconcile(window, cx);
        workspace
    }

    /// Apply one transition and bring the mounted views in line with it
    pub fn dispatch(&mut self, action: WorkspaceAction, window: &mut Window, cx: &mut Context<Self>) {
        debug!(action = ?action, "Workspace action");
        self.controller.apply(action);
        self.reconcile(window, cx);
        // Focus may have lived in a view that was just unmounted
        if matches!(action, WorkspaceAction::SetMode(_)) {
            window.focus(&self.focus_handle);
        }
        cx.notify();
    }

    fn toggle_handler(panel: Panel, cx: &mut Context<Self>) -> ToggleHandler {
        let weak = cx.weak_entity();
        Rc::new(move |window, cx| {
            let _ = weak.update(cx, |this, cx| {
                this.dispatch(WorkspaceAction::TogglePanel(panel), window, cx)
            });
        })
    }

    /// Mount, unmount and update leaf views for the current layout
    fn reconcile(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let layout = self.controller.layout();

        match layout.video() {
            Some((slot, density)) => {
                let on_toggle = Self::toggle_handler(Panel::Video, cx);
                let handle = self.video.get_or_insert_with(|| {
                    debug!("Mount video view");
                    PanelHandle::new(cx.new(|cx| VideoView::new(window, cx)))
                });
                handle.apply(
                    PanelProps {
                        collapsed: slot.collapsed,
                        density,
                        on_toggle: Some(on_toggle),
                    },
                    cx,
                );
            }
            None => {
                if self.video.take().is_some() {
                    debug!("Unmount video view");
                }
            }
        }

        match layout.side() {
            Some((view, slot)) => {
                if self.side.as_ref().map(|(mounted, _)| *mounted) != Some(view) {
                    debug!(view = ?view, "Mount side view");
                    let handle = match view {
                        SideView::Assistant => {
                            PanelHandle::new(cx.new(|cx| AssistantView::new(window, cx)))
                        }
                        SideView::NotesEditor => {
                            PanelHandle::new(cx.new(|cx| NotesEditorView::new(window, cx)))
                        }
                    };
                    self.side = Some((view, handle));
                }
                let on_toggle = Self::toggle_handler(Panel::Side, cx);
                if let Some((_, handle)) = &self.side {
                    handle.apply(
                        PanelProps {
                            collapsed: slot.collapsed,
                            density: PanelDensity::Full,
                            on_toggle: Some(on_toggle),
                        },
                        cx,
                    );
                }
            }
            None => {
                if let Some((view, _)) = self.side.take() {
                    debug!(view = ?view, "Unmount side view");
                }
            }
        }

        match layout {
            Layout::FullWidth(view) => {
                if self.full_width.as_ref().map(|(mounted, _)| *mounted) != Some(view) {
                    debug!(view = ?view, "Mount full-width view");
                    let any_view: AnyView = match view {
                        FullWidthView::NotesLibrary => {
                            cx.new(|cx| NotesLibraryView::new(window, cx)).into()
                        }
                        FullWidthView::Settings => {
                            cx.new(|cx| SettingsView::new(window, cx)).into()
                        }
                    };
                    self.full_width = Some((view, any_view));
                }
            }
            _ => {
                if let Some((view, _)) = self.full_width.take() {
                    debug!(view = ?view, "Unmount full-width view");
                }
            }
        }

        let (mode, collapsed) = (self.controller.mode(), self.controller.sidebar_collapsed());
        self.sidebar
            .update(cx, |sidebar, cx| sidebar.sync(mode, collapsed, cx));
    }

    fn render_content(&self, cx: &mut Context<Self>) -> AnyElement {
        match self.controller.layout() {
            Layout::VideoFocus { .. } => div()
                .size_full()
                .children(self.video.as_ref().map(PanelHandle::view))
                .into_any_element(),
            Layout::TwoPane { video, side, .. } => {
                let video_column = div()
                    .h_full()
                    .overflow_hidden()
                    .map(|this| {
                        if video.collapsed {
                            this.flex_none().w(px(COLLAPSED_PANEL_WIDTH))
                        } else {
                            this.flex_1()
                        }
                    })
                    .children(self.video.as_ref().map(PanelHandle::view));

                let side_width = if side.collapsed {
                    COLLAPSED_PANEL_WIDTH
                } else {
                    SIDE_PANEL_WIDTH
                };
                let side_column = div()
                    .h_full()
                    .flex_none()
                    .overflow_hidden()
                    .w(px(side_width))
                    .border_l_1()
                    .border_color(cx.theme().border)
                    .children(self.side.as_ref().map(|(_, handle)| handle.view()));

                h_flex()
                    .size_full()
                    .child(video_column)
                    // Fills the row when the video is collapsed
                    .when(video.collapsed, |this| this.child(div().flex_1()))
                    .child(side_column)
                    .into_any_element()
            }
            Layout::FullWidth(_) => div()
                .size_full()
                .children(self.full_width.as_ref().map(|(_, view)| view.clone()))
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("workspace")
            .key_context(WORKSPACE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|this, action: &NavAction, window, cx| {
                this.dispatch((*action).into(), window, cx);
            }))
            .on_action(cx.listener(|this, action: &LayoutAction, window, cx| {
                this.dispatch((*action).into(), window, cx);
            }))
            .size_full()
            .bg(cx.theme().background)
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .h_full()
                            .overflow_hidden()
                            .child(self.render_content(cx)),
                    ),
            )
    }
}

