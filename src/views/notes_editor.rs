//! Notes Editor View
//!
//! Free-text notes next to the video, with toolbar actions that append fixed
//! template blocks and an optional AI suggestion list.

use crate::app::controller::{Panel, WorkspaceAction};
use crate::assets::CustomIconName;
use crate::states::{AI_SUGGESTIONS, ExportFormat, NotesEditorState, i18n_editor, i18n_format};
use crate::views::panel::{
    CollapsiblePanel, PanelProps, render_collapse_button, render_collapsed_affordance,
    same_presentation, tooltip_with_shortcut,
};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, Icon, IconName, Selectable, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};
use tracing::info;

/// Markdown notes editor panel
pub struct NotesEditorView {
    state: NotesEditorState,
    editor: Entity<InputState>,
    props: PanelProps,
    _subscriptions: Vec<Subscription>,
}

impl NotesEditorView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let state = NotesEditorState::new();
        let initial = state.buffer().to_string();
        let editor = cx.new(|cx| {
            InputState::new(window, cx)
                .multi_line(true)
                .default_value(initial)
        });

        let subscriptions = vec![cx.subscribe(&editor, |this, editor, event, cx| {
            if matches!(event, InputEvent::Change) {
                let text = editor.read(cx).value().to_string();
                this.state.set_buffer(text);
                cx.notify();
            }
        })];

        Self {
            state,
            editor,
            props: PanelProps::default(),
            _subscriptions: subscriptions,
        }
    }

    /// Apply a buffer edit from the toolbar and mirror it into the input
    fn edit_buffer(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut NotesEditorState),
    ) {
        f(&mut self.state);
        let text = self.state.buffer().to_string();
        self.editor
            .update(cx, |editor, cx| editor.set_value(text, window, cx));
        cx.notify();
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let collapse_tooltip = tooltip_with_shortcut(
            i18n_editor(cx, "collapse"),
            WorkspaceAction::TogglePanel(Panel::Side),
        );

        h_flex()
            .items_center()
            .justify_between()
            .gap_2()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(Icon::from(CustomIconName::FileText).small())
                    .child(Label::new(i18n_editor(cx, "title")).text_sm()),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        Button::new("editor-insert-frame")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Image)
                            .tooltip(i18n_editor(cx, "insert_frame"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.edit_buffer(window, cx, NotesEditorState::insert_frame_snapshot);
                            })),
                    )
                    .child(
                        Button::new("editor-ai-notes")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Sparkles)
                            .tooltip(i18n_editor(cx, "generate_ai_notes"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.edit_buffer(window, cx, NotesEditorState::append_ai_notes);
                            })),
                    )
                    .child(
                        Button::new("editor-suggestions")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Brain)
                            .selected(self.state.show_suggestions())
                            .tooltip(i18n_editor(cx, "toggle_suggestions"))
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.state.toggle_suggestions();
                                cx.notify();
                            })),
                    )
                    .child(
                        Button::new("editor-save")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Save)
                            .tooltip(i18n_editor(cx, "save"))
                            .on_click(cx.listener(|this, _, _, _| {
                                info!(words = this.state.word_count(), "Save notes requested");
                            })),
                    )
                    .children(
                        ExportFormat::ALL
                            .iter()
                            .map(|format| self.render_export_button(*format, cx)),
                    )
                    .children(render_collapse_button(
                        "editor-collapse",
                        IconName::ChevronRight,
                        collapse_tooltip,
                        self.props.on_toggle.as_ref(),
                    )),
            )
    }

    fn render_export_button(&self, format: ExportFormat, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let id = match format {
            ExportFormat::Markdown => "editor-export-md",
            ExportFormat::Pdf => "editor-export-pdf",
            ExportFormat::Docx => "editor-export-docx",
        };
        let tooltip = i18n_editor(cx, &format!("export_{}", format.label()));

        Button::new(id)
            .ghost()
            .small()
            .icon(CustomIconName::Download)
            .tooltip(tooltip)
            .on_click(cx.listener(move |this, _, _, _| {
                info!(
                    format = format.label(),
                    bytes = this.state.buffer().len(),
                    "Export notes requested"
                );
            }))
    }

    fn render_suggestions(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let hover_bg = cx.theme().background;
        let rows: Vec<_> = AI_SUGGESTIONS
            .iter()
            .enumerate()
            .map(|(index, suggestion)| {
                let suggestion: &'static str = suggestion;
                div()
                    .id(("editor-suggestion", index))
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .text_sm()
                    .cursor_pointer()
                    .hover(|this| this.bg(hover_bg))
                    .child(suggestion)
                    .on_click(cx.listener(move |this, _, window, cx| {
                        this.edit_buffer(window, cx, |state| state.append_suggestion(suggestion));
                    }))
            })
            .collect();

        v_flex()
            .gap_2()
            .p_3()
            .m_3()
            .rounded_lg()
            .bg(cx.theme().secondary)
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(Icon::from(CustomIconName::Brain).small())
                    .child(Label::new(i18n_editor(cx, "suggestions")).text_sm()),
            )
            .children(rows)
    }
}

impl CollapsiblePanel for NotesEditorView {
    fn set_props(&mut self, props: PanelProps, cx: &mut Context<Self>) {
        let changed = !same_presentation(&self.props, &props);
        self.props = props;
        if changed {
            cx.notify();
        }
    }
}

impl Render for NotesEditorView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.props.collapsed {
            let tooltip = tooltip_with_shortcut(
                i18n_editor(cx, "expand"),
                WorkspaceAction::TogglePanel(Panel::Side),
            );
            return render_collapsed_affordance(
                "editor-expand",
                CustomIconName::FileText,
                i18n_editor(cx, "title"),
                tooltip,
                self.props.on_toggle.clone(),
                cx,
            )
            .into_any_element();
        }

        let word_count = self.state.word_count().to_string();

        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .child(self.render_toolbar(cx))
            .child(
                div()
                    .flex_1()
                    .p_3()
                    .child(Input::new(&self.editor).h_full()),
            )
            .when(self.state.show_suggestions(), |this| {
                this.child(self.render_suggestions(cx))
            })
            .child(
                h_flex()
                    .px_4()
                    .py_1()
                    .border_t_1()
                    .border_color(cx.theme().border)
                    .child(
                        Label::new(i18n_format(
                            cx,
                            "editor.word_count",
                            &[("count", &word_count)],
                        ))
                        .text_xs()
                        .text_color(cx.theme().muted_foreground),
                    ),
            )
            .into_any_element()
    }
}
