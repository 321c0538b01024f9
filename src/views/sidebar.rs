//! Sidebar Navigation Component
//!
//! Mode switcher with a collapse toggle. The workspace owns the state; the
//! sidebar only mirrors it and reports clicks back as workspace actions.

use crate::app::controller::WorkspaceAction;
use crate::app::navigation::Mode;
use crate::assets::CustomIconName;
use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};
use crate::helpers::shortcut_label;
use crate::states::i18n_sidebar;
use gpui::{App, Context, Hsla, SharedString, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    tooltip::Tooltip,
    v_flex,
};
use std::rc::Rc;

/// Callback the sidebar uses to request workspace transitions
pub type SidebarHandler = Rc<dyn Fn(WorkspaceAction, &mut Window, &mut App)>;

const NAV_ITEM_HEIGHT: f32 = 56.0;

/// Tooltip for a nav item; only collapsed items show one, since the label is hidden
fn nav_tooltip(label: &SharedString, mode: Mode, collapsed: bool) -> Option<SharedString> {
    if !collapsed {
        return None;
    }
    Some(match shortcut_label(WorkspaceAction::SetMode(mode)) {
        Some(chord) => format!("{label}  {chord}").into(),
        None => label.clone(),
    })
}

/// Sidebar navigation component
pub struct EduSidebar {
    mode: Mode,
    collapsed: bool,
    on_action: SidebarHandler,
}

impl EduSidebar {
    pub fn new(on_action: SidebarHandler, _window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            mode: Mode::default(),
            collapsed: false,
            on_action,
        }
    }

    /// Mirror the workspace state
    pub fn sync(&mut self, mode: Mode, collapsed: bool, cx: &mut Context<Self>) {
        if self.mode != mode || self.collapsed != collapsed {
            self.mode = mode;
            self.collapsed = collapsed;
            cx.notify();
        }
    }

    fn mode_icon(mode: Mode) -> Icon {
        match mode {
            Mode::Video => CustomIconName::Play.into(),
            Mode::Assistant => CustomIconName::MessageCircle.into(),
            Mode::NotesEditor => CustomIconName::FileText.into(),
            Mode::NotesLibrary => Icon::new(IconName::FolderOpen),
            Mode::Settings => Icon::new(IconName::Settings),
        }
    }

    fn mode_color(mode: Mode, cx: &App) -> Hsla {
        let theme = cx.theme();
        match mode {
            Mode::Video => theme.primary,
            Mode::Assistant => theme.info,
            Mode::NotesEditor => theme.success,
            Mode::NotesLibrary => theme.warning,
            Mode::Settings => theme.muted_foreground,
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .items_center()
            .gap_3()
            .p_4()
            .border_b_1()
            .border_color(cx.theme().border)
            .when(self.collapsed, |this| this.justify_center())
            .child(Icon::from(CustomIconName::GraduationCap).large())
            .when(!self.collapsed, |this| {
                this.child(
                    v_flex()
                        .child(Label::new("EduAI").text_lg())
                        .child(
                            Label::new(i18n_sidebar(cx, "tagline"))
                                .text_xs()
                                .text_color(cx.theme().muted_foreground),
                        ),
                )
            })
    }

    fn render_nav_item(&self, mode: Mode, cx: &mut Context<Self>) -> impl IntoElement {
        let is_active = self.mode == mode;
        let collapsed = self.collapsed;
        let label = i18n_sidebar(cx, mode.i18n_key());
        let description = i18n_sidebar(cx, &format!("{}_desc", mode.i18n_key()));
        let tooltip = nav_tooltip(&label, mode, collapsed);
        let muted = cx.theme().muted_foreground;
        let accent = Self::mode_color(mode, cx);
        let on_action = self.on_action.clone();

        let content = h_flex()
            .w_full()
            .items_center()
            .gap_3()
            .when(collapsed, |this| this.justify_center())
            .child(Self::mode_icon(mode).text_color(accent))
            .when(!collapsed, |this| {
                this.child(
                    v_flex()
                        .flex_1()
                        .min_w_0()
                        .items_start()
                        .child(Label::new(label).text_sm())
                        .child(Label::new(description).text_xs().text_color(muted)),
                )
                .when(mode == Mode::Assistant, |this| {
                    this.child(
                        div()
                            .px_2()
                            .rounded_md()
                            .bg(accent.opacity(0.15))
                            .text_xs()
                            .text_color(accent)
                            .child("AI"),
                    )
                })
            });

        let btn = Button::new(mode.element_id())
            .ghost()
            .w_full()
            .h(px(NAV_ITEM_HEIGHT))
            .child(content)
            .on_click(move |_, window, cx| on_action(WorkspaceAction::SetMode(mode), window, cx));

        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;

        div()
            .id(SharedString::from(format!("{}-wrapper", mode.element_id())))
            .rounded_md()
            .when_some(tooltip, |this, tooltip| {
                this.tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx))
            })
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }

    fn render_collapse_toggle(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let (icon, key) = if self.collapsed {
            (IconName::ChevronRight, "expand")
        } else {
            (IconName::ChevronLeft, "collapse")
        };
        let label = i18n_sidebar(cx, key);
        let tooltip: SharedString = match shortcut_label(WorkspaceAction::ToggleSidebar) {
            Some(chord) => format!("{label} ({chord})").into(),
            None => label.clone(),
        };
        let on_action = self.on_action.clone();

        let mut btn = Button::new("sidebar-collapse")
            .ghost()
            .small()
            .w_full()
            .icon(icon)
            .tooltip(tooltip)
            .on_click(move |_, window, cx| on_action(WorkspaceAction::ToggleSidebar, window, cx));
        if !self.collapsed {
            btn = btn.label(label);
        }

        div().p_2().child(btn)
    }
}

impl Render for EduSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let width = if self.collapsed {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        let items: Vec<_> = Mode::all()
            .iter()
            .map(|mode| self.render_nav_item(*mode, cx).into_any_element())
            .collect();

        v_flex()
            .w(px(width))
            .h_full()
            .flex_none()
            .bg(cx.theme().sidebar)
            .border_r_1()
            .border_color(cx.theme().border)
            .child(self.render_header(cx))
            .child(v_flex().flex_1().gap_1().p_2().children(items))
            .child(self.render_collapse_toggle(cx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_tooltip_only_when_collapsed() {
        let label: SharedString = "Assistant".into();
        assert_eq!(nav_tooltip(&label, Mode::Assistant, false), None);

        let tooltip = nav_tooltip(&label, Mode::Assistant, true).expect("collapsed tooltip");
        assert!(tooltip.starts_with("Assistant  "));
        assert!(tooltip.ends_with('2'));
    }
}
