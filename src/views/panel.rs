//! Collapsible Panel Contract
//!
//! Views that can sit in a two-pane layout implement [`CollapsiblePanel`].
//! The workspace holds them as type-erased [`PanelHandle`]s and only ever
//! pushes [`PanelProps`] into them; it never touches a concrete view type.
//!
//! A collapsed panel stays mounted and renders a minimized affordance instead
//! of its content. A panel without an `on_toggle` handler renders no collapse
//! control at all.

use crate::app::controller::WorkspaceAction;
use crate::app::layout::PanelDensity;
use crate::helpers::shortcut_label;
use gpui::{AnyView, App, Context, Entity, Render, SharedString, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    label::Label,
    tooltip::Tooltip,
    v_flex,
};
use std::rc::Rc;

/// No-argument toggle callback handed down by the workspace
pub type ToggleHandler = Rc<dyn Fn(&mut Window, &mut App)>;

/// Inputs a collapsible panel receives from the workspace
#[derive(Clone, Default)]
pub struct PanelProps {
    pub collapsed: bool,
    /// Layout hint; panels that have a single presentation ignore it
    pub density: PanelDensity,
    pub on_toggle: Option<ToggleHandler>,
}

/// Capability of views that participate in the two-pane layout
pub trait CollapsiblePanel: Render + Sized {
    /// Replace the props; implementations notify when the presentation changes
    fn set_props(&mut self, props: PanelProps, cx: &mut Context<Self>);
}

/// Type-erased handle to a mounted collapsible panel
pub struct PanelHandle {
    view: AnyView,
    apply: Box<dyn Fn(PanelProps, &mut App)>,
}

impl PanelHandle {
    pub fn new<V: CollapsiblePanel>(entity: Entity<V>) -> Self {
        let view: AnyView = entity.clone().into();
        Self {
            view,
            apply: Box::new(move |props, cx| {
                entity.update(cx, |panel, cx| panel.set_props(props, cx));
            }),
        }
    }

    /// The view to place in the element tree
    pub fn view(&self) -> AnyView {
        self.view.clone()
    }

    /// Push new props into the panel
    pub fn apply(&self, props: PanelProps, cx: &mut App) {
        (self.apply)(props, cx);
    }
}

/// Whether two prop sets render the same way
pub fn same_presentation(a: &PanelProps, b: &PanelProps) -> bool {
    a.collapsed == b.collapsed
        && a.density == b.density
        && a.on_toggle.is_some() == b.on_toggle.is_some()
}

/// Tooltip text with the chord bound to `action`, e.g. `Collapse (Ctrl+Shift+V)`
pub fn tooltip_with_shortcut(label: SharedString, action: WorkspaceAction) -> SharedString {
    match shortcut_label(action) {
        Some(chord) => format!("{label} ({chord})").into(),
        None => label,
    }
}

/// Icon-only expand control shown by a collapsed panel
pub fn render_collapsed_affordance(
    id: &'static str,
    icon: impl Into<Icon>,
    label: SharedString,
    tooltip: SharedString,
    on_toggle: Option<ToggleHandler>,
    cx: &App,
) -> impl IntoElement {
    let expand_icon = Icon::new(IconName::ChevronRight).small();

    let mut btn = Button::new(id).ghost().w_full().child(
        v_flex()
            .items_center()
            .gap_2()
            .py_4()
            .child(expand_icon)
            .child(icon.into())
            .child(Label::new(label).text_xs()),
    );
    if let Some(on_toggle) = on_toggle {
        btn = btn.on_click(move |_, window, cx| on_toggle(window, cx));
    }

    div()
        .id(SharedString::from(format!("{id}-wrapper")))
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .bg(cx.theme().secondary)
        .tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx))
        .child(btn)
}

/// Collapse control rendered in a panel header, if the panel has a handler
pub fn render_collapse_button(
    id: &'static str,
    icon: impl Into<Icon>,
    tooltip: SharedString,
    on_toggle: Option<&ToggleHandler>,
) -> Option<Button> {
    let on_toggle = on_toggle?.clone();
    Some(
        Button::new(id)
            .ghost()
            .small()
            .icon(icon)
            .tooltip(tooltip)
            .on_click(move |_, window, cx| on_toggle(window, cx)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::Panel;

    #[test]
    fn presentation_ignores_handler_identity() {
        let noop: ToggleHandler = Rc::new(|_, _| {});
        let other: ToggleHandler = Rc::new(|_, _| {});
        let a = PanelProps {
            on_toggle: Some(noop),
            ..PanelProps::default()
        };
        let b = PanelProps {
            on_toggle: Some(other),
            ..PanelProps::default()
        };
        assert!(same_presentation(&a, &b));

        let collapsed = PanelProps {
            collapsed: true,
            ..b.clone()
        };
        assert!(!same_presentation(&b, &collapsed));
        assert!(!same_presentation(&b, &PanelProps::default()));

        let compact = PanelProps {
            density: PanelDensity::Compact,
            ..b.clone()
        };
        assert!(!same_presentation(&b, &compact));
    }

    #[test]
    fn tooltip_appends_the_bound_chord() {
        let tooltip = tooltip_with_shortcut(
            "Collapse".into(),
            WorkspaceAction::TogglePanel(Panel::Video),
        );
        assert!(tooltip.starts_with("Collapse ("));
        assert!(tooltip.ends_with("V)"));
    }
}
