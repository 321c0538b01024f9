//! Assistant View
//!
//! Chat panel next to the video. Sent questions appear immediately; the
//! canned reply arrives after the configured delay. Each outstanding reply is
//! a task owned by this view, so dropping the view cancels it.

use crate::app::controller::{Panel, WorkspaceAction};
use crate::assets::CustomIconName;
use crate::states::{
    AssistantState, ChatMessage, EduGlobalStore, MessageId, MessageRole, QUICK_QUESTIONS,
    i18n_assistant,
};
use crate::views::panel::{
    CollapsiblePanel, PanelProps, render_collapse_button, render_collapsed_affordance,
    same_presentation, tooltip_with_shortcut,
};
use gpui::{Context, Entity, Subscription, Task, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};
use std::collections::HashMap;
use tracing::{debug, info};

const BUBBLE_MAX_WIDTH: f32 = 300.0;

/// AI assistant chat panel
pub struct AssistantView {
    state: AssistantState,
    /// Draft input
    input: Entity<InputState>,
    /// Reply timers keyed by the question they answer
    pending: HashMap<MessageId, Task<()>>,
    props: PanelProps,
    _subscriptions: Vec<Subscription>,
}

impl AssistantView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input = cx.new(|cx| {
            let placeholder = i18n_assistant(cx, "placeholder");
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });

        let subscriptions = vec![cx.subscribe_in(
            &input,
            window,
            |this, _input, event, window, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    this.send(window, cx);
                }
            },
        )];

        Self {
            state: AssistantState::new(),
            input,
            pending: HashMap::new(),
            props: PanelProps::default(),
            _subscriptions: subscriptions,
        }
    }

    /// Submit the current draft and schedule the reply
    fn send(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let draft = self.input.read(cx).value().to_string();
        let Some(question) = self.state.submit(&draft) else {
            return;
        };
        self.input
            .update(cx, |input, cx| input.set_value("", window, cx));

        let delay = cx.global::<EduGlobalStore>().read(cx).reply_delay();
        info!(
            question,
            delay_ms = delay.as_millis() as u64,
            "Assistant reply scheduled"
        );

        let task = cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(delay).await;
            let _ = handle.update(cx, |this, cx| this.complete_reply(question, cx));
        });
        self.pending.insert(question, task);
        cx.notify();
    }

    fn complete_reply(&mut self, question: MessageId, cx: &mut Context<Self>) {
        self.pending.remove(&question);
        if self.state.deliver_reply(question) {
            info!(question, "Assistant reply delivered");
            cx.notify();
        }
    }

    fn fill_draft(&mut self, text: &'static str, window: &mut Window, cx: &mut Context<Self>) {
        self.input
            .update(cx, |input, cx| input.set_value(text, window, cx));
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let collapse_tooltip = tooltip_with_shortcut(
            i18n_assistant(cx, "collapse"),
            WorkspaceAction::TogglePanel(Panel::Side),
        );

        h_flex()
            .items_center()
            .justify_between()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(Icon::from(CustomIconName::MessageCircle).small())
                    .child(Label::new(i18n_assistant(cx, "title")).text_sm()),
            )
            .children(render_collapse_button(
                "assistant-collapse",
                IconName::ChevronRight,
                collapse_tooltip,
                self.props.on_toggle.as_ref(),
            ))
    }

    fn render_message(&self, message: &ChatMessage, cx: &mut Context<Self>) -> impl IntoElement {
        let is_user = message.role == MessageRole::User;
        let (bg, fg) = if is_user {
            (cx.theme().primary, cx.theme().primary_foreground)
        } else {
            (cx.theme().secondary, cx.theme().secondary_foreground)
        };
        let muted = cx.theme().muted_foreground;

        let mut bubble = v_flex()
            .max_w(px(BUBBLE_MAX_WIDTH))
            .gap_2()
            .px_3()
            .py_2()
            .rounded_lg()
            .bg(bg)
            .text_color(fg)
            .child(div().text_sm().child(message.content.clone()));

        if message.has_frame {
            bubble = bubble.child(
                div()
                    .h(px(72.0))
                    .w_full()
                    .rounded_md()
                    .bg(cx.theme().background)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(Icon::from(CustomIconName::Image).text_color(muted)),
            );
        }

        if let Some(frame) = &message.frame_reference {
            bubble = bubble.child(
                h_flex()
                    .gap_1()
                    .items_center()
                    .child(Icon::from(CustomIconName::Sparkles).xsmall())
                    .child(Label::new(frame.clone()).text_xs()),
            );
        }

        if let Some(timestamp) = message.timestamp.clone() {
            let label = i18n_assistant(cx, "jump_to");
            bubble = bubble.child(
                Button::new(("assistant-jump", message.id as usize))
                    .ghost()
                    .xsmall()
                    .icon(CustomIconName::Clock)
                    .label(format!("{label} {timestamp}"))
                    .on_click(move |_, _, _| {
                        // Views are independent; the player is not driven from here
                        info!(timestamp = %timestamp, "Jump to timestamp requested");
                    }),
            );
        }

        h_flex()
            .w_full()
            .when(is_user, |this| this.justify_end())
            .child(bubble)
    }

    fn render_typing(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .gap_2()
            .items_center()
            .px_3()
            .py_2()
            .child(Icon::from(CustomIconName::Sparkles).small())
            .child(
                Label::new(i18n_assistant(cx, "typing"))
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_quick_questions(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let chips: Vec<_> = QUICK_QUESTIONS
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let question: &'static str = question;
                Button::new(("assistant-quick", index))
                    .outline()
                    .xsmall()
                    .label(question)
                    .on_click(cx.listener(move |this, _, window, cx| {
                        debug!(question, "Quick question picked");
                        this.fill_draft(question, window, cx);
                    }))
            })
            .collect();

        h_flex().flex_wrap().gap_1().children(chips)
    }
}

impl CollapsiblePanel for AssistantView {
    fn set_props(&mut self, props: PanelProps, cx: &mut Context<Self>) {
        let changed = !same_presentation(&self.props, &props);
        self.props = props;
        if changed {
            cx.notify();
        }
    }
}

impl Render for AssistantView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.props.collapsed {
            let tooltip = tooltip_with_shortcut(
                i18n_assistant(cx, "expand"),
                WorkspaceAction::TogglePanel(Panel::Side),
            );
            return render_collapsed_affordance(
                "assistant-expand",
                CustomIconName::MessageCircle,
                i18n_assistant(cx, "title"),
                tooltip,
                self.props.on_toggle.clone(),
                cx,
            )
            .into_any_element();
        }

        let messages: Vec<_> = self
            .state
            .messages()
            .iter()
            .map(|message| self.render_message(message, cx).into_any_element())
            .collect();
        let typing = self.state.is_typing();

        v_flex()
            .size_full()
            .bg(cx.theme().background)
            .child(self.render_header(cx))
            .child(
                div()
                    .id("assistant-messages")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_4()
                    .child(
                        v_flex()
                            .gap_3()
                            .children(messages)
                            .when(typing, |this| this.child(self.render_typing(cx))),
                    ),
            )
            .child(
                v_flex()
                    .gap_2()
                    .p_3()
                    .border_t_1()
                    .border_color(cx.theme().border)
                    .child(self.render_quick_questions(cx))
                    .child(
                        h_flex()
                            .gap_2()
                            .items_center()
                            .child(div().flex_1().child(Input::new(&self.input)))
                            .child(
                                Button::new("assistant-send")
                                    .primary()
                                    .small()
                                    .icon(CustomIconName::Send)
                                    .tooltip(i18n_assistant(cx, "send"))
                                    .on_click(cx.listener(|this, _, window, cx| {
                                        this.send(window, cx);
                                    })),
                            ),
                    ),
            )
            .into_any_element()
    }
}
