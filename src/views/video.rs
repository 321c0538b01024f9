//! Video View
//!
//! Simulated lecture player: playback controls, a progress bar with the AI
//! highlight markers, and (in the full presentation) the highlight list and
//! transcript. Seeking only moves the position marker; no media is decoded.

use crate::app::controller::{Panel, WorkspaceAction};
use crate::app::layout::PanelDensity;
use crate::assets::CustomIconName;
use crate::helpers::{format_timestamp, parse_timestamp};
use crate::states::{
    HIGHLIGHTS, Highlight, HighlightCategory, LECTURE_TITLE, PlayerState, TRANSCRIPT, i18n_video,
};
use crate::views::panel::{
    CollapsiblePanel, PanelProps, render_collapse_button, render_collapsed_affordance,
    same_presentation, tooltip_with_shortcut,
};
use gpui::{
    Context, Entity, Hsla, SharedString, Subscription, Window, div, prelude::*, px, relative,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Selectable, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    slider::{Slider, SliderEvent, SliderState},
    tooltip::Tooltip,
    v_flex,
};
use tracing::debug;

const PROGRESS_BAR_HEIGHT: f32 = 6.0;
const MARKER_WIDTH: f32 = 3.0;
const VOLUME_SLIDER_WIDTH: f32 = 88.0;

/// Lecture player view
pub struct VideoView {
    player: PlayerState,
    /// Seek slider in seconds
    position: Entity<SliderState>,
    /// Volume slider in percent
    volume: Entity<SliderState>,
    props: PanelProps,
    _subscriptions: Vec<Subscription>,
}

impl VideoView {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let player = PlayerState::new();
        let duration = player.duration() as f32;
        let initial_volume = player.volume() as f32;

        let position = cx.new(|_| {
            SliderState::new()
                .min(0.0)
                .max(duration)
                .step(1.0)
                .default_value(0.0)
        });
        let volume = cx.new(|_| {
            SliderState::new()
                .min(0.0)
                .max(100.0)
                .step(1.0)
                .default_value(initial_volume)
        });

        let subscriptions = vec![
            cx.subscribe(&position, |this, _, event: &SliderEvent, cx| {
                let SliderEvent::Change(value) = event;
                this.player.scrub(value.start());
                cx.notify();
            }),
            cx.subscribe(&volume, |this, _, event: &SliderEvent, cx| {
                let SliderEvent::Change(value) = event;
                this.player.scrub_volume(value.start());
                cx.notify();
            }),
        ];

        Self {
            player,
            position,
            volume,
            props: PanelProps::default(),
            _subscriptions: subscriptions,
        }
    }

    fn update_player(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut PlayerState),
    ) {
        f(&mut self.player);
        self.sync_sliders(window, cx);
        cx.notify();
    }

    /// Move the slider thumbs after a change made by buttons or markers
    fn sync_sliders(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let position = self.player.position() as f32;
        let volume = self.player.volume() as f32;
        self.position
            .update(cx, |slider, cx| slider.set_value(position, window, cx));
        self.volume
            .update(cx, |slider, cx| slider.set_value(volume, window, cx));
    }

    fn seek_to(&mut self, time: &str, window: &mut Window, cx: &mut Context<Self>) {
        if self.player.seek_to_timestamp(time) {
            debug!(time, position = self.player.position(), "Seek");
            self.sync_sliders(window, cx);
            cx.notify();
        }
    }

    fn category_color(category: HighlightCategory, cx: &Context<Self>) -> Hsla {
        let theme = cx.theme();
        match category {
            HighlightCategory::Concept => theme.primary,
            HighlightCategory::Example => theme.success,
            HighlightCategory::Demo => theme.info,
            HighlightCategory::Tip => theme.warning,
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let collapse_tooltip = tooltip_with_shortcut(
            i18n_video(cx, "collapse"),
            WorkspaceAction::TogglePanel(Panel::Video),
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
                    .child(Icon::from(CustomIconName::Video).small())
                    .child(Label::new(LECTURE_TITLE).text_sm()),
            )
            .children(render_collapse_button(
                "video-collapse",
                IconName::ChevronLeft,
                collapse_tooltip,
                self.props.on_toggle.as_ref(),
            ))
    }

    fn render_screen(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let icon = if self.player.is_playing() {
            CustomIconName::Pause
        } else {
            CustomIconName::Play
        };

        div()
            .id("video-screen")
            .flex_1()
            .min_h(px(160.0))
            .flex()
            .items_center()
            .justify_center()
            .bg(gpui::black())
            .cursor_pointer()
            .child(Icon::from(icon).large().text_color(gpui::white()))
            .on_click(cx.listener(|this, _, window, cx| {
                this.update_player(window, cx, PlayerState::toggle_playing);
            }))
    }

    fn render_progress(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let mut markers = div()
            .relative()
            .w_full()
            .h(px(PROGRESS_BAR_HEIGHT));

        for (index, highlight) in HIGHLIGHTS.iter().enumerate() {
            let Some(fraction) = self.player.marker_fraction(highlight.time) else {
                continue;
            };
            let tooltip: SharedString = format!("{} {}", highlight.time, highlight.title).into();
            let time = highlight.time;
            markers = markers.child(
                div()
                    .id(("video-marker", index))
                    .absolute()
                    .top_0()
                    .left(relative(fraction))
                    .w(px(MARKER_WIDTH))
                    .h_full()
                    .bg(Self::category_color(highlight.category, cx))
                    .cursor_pointer()
                    .tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx))
                    .on_click(cx.listener(move |this, _, window, cx| this.seek_to(time, window, cx))),
            );
        }

        v_flex()
            .w_full()
            .gap_1()
            .child(markers)
            .child(Slider::new(&self.position).w_full())
    }

    fn render_controls(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let play_icon = if self.player.is_playing() {
            CustomIconName::Pause
        } else {
            CustomIconName::Play
        };
        let volume_icon = if self.player.effective_volume() == 0 {
            CustomIconName::VolumeX
        } else {
            CustomIconName::Volume
        };
        let fullscreen_icon = if self.player.is_fullscreen() {
            IconName::Minimize
        } else {
            IconName::Maximize
        };
        let time_label = format!(
            "{} / {}",
            format_timestamp(self.player.position()),
            format_timestamp(self.player.duration())
        );

        h_flex()
            .items_center()
            .justify_between()
            .gap_2()
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        Button::new("video-skip-back")
                            .ghost()
                            .small()
                            .icon(CustomIconName::SkipBack)
                            .tooltip(i18n_video(cx, "skip_back"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.update_player(window, cx, PlayerState::skip_back);
                            })),
                    )
                    .child(
                        Button::new("video-play")
                            .ghost()
                            .small()
                            .icon(play_icon)
                            .tooltip(i18n_video(cx, "play_pause"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.update_player(window, cx, PlayerState::toggle_playing);
                            })),
                    )
                    .child(
                        Button::new("video-skip-forward")
                            .ghost()
                            .small()
                            .icon(CustomIconName::SkipForward)
                            .tooltip(i18n_video(cx, "skip_forward"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.update_player(window, cx, PlayerState::skip_forward);
                            })),
                    )
                    .child(
                        Label::new(time_label)
                            .text_xs()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        Button::new("video-mute")
                            .ghost()
                            .small()
                            .icon(volume_icon)
                            .tooltip(i18n_video(cx, "mute"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.update_player(window, cx, PlayerState::toggle_mute);
                            })),
                    )
                    .child(
                        div()
                            .w(px(VOLUME_SLIDER_WIDTH))
                            .child(Slider::new(&self.volume).w_full()),
                    )
                    .child(
                        Label::new(format!("{}%", self.player.effective_volume()))
                            .text_xs()
                            .w(px(36.0)),
                    )
                    .child(
                        Button::new("video-transcript")
                            .ghost()
                            .small()
                            .icon(CustomIconName::Captions)
                            .selected(self.player.show_transcript())
                            .tooltip(i18n_video(cx, "transcript"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.update_player(window, cx, PlayerState::toggle_transcript);
                            })),
                    )
                    .child(
                        Button::new("video-fullscreen")
                            .ghost()
                            .small()
                            .icon(fullscreen_icon)
                            .tooltip(i18n_video(cx, "fullscreen"))
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.update_player(window, cx, PlayerState::toggle_fullscreen);
                            })),
                    ),
            )
    }

    fn render_highlight(
        &self,
        index: usize,
        highlight: &'static Highlight,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let color = Self::category_color(highlight.category, cx);
        let category = i18n_video(cx, highlight.category.label());
        let hover_bg = cx.theme().secondary;

        h_flex()
            .id(("video-highlight", index))
            .items_center()
            .gap_3()
            .px_3()
            .py_2()
            .rounded_md()
            .cursor_pointer()
            .hover(|this| this.bg(hover_bg))
            .child(div().size(px(8.0)).rounded_full().bg(color))
            .child(
                Label::new(highlight.time)
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .w(px(40.0)),
            )
            .child(Label::new(highlight.title).text_sm().flex_1())
            .child(Label::new(category).text_xs().text_color(color))
            .on_click(cx.listener(move |this, _, window, cx| {
                this.seek_to(highlight.time, window, cx)
            }))
    }

    fn render_highlights(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let rows: Vec<_> = HIGHLIGHTS
            .iter()
            .enumerate()
            .map(|(index, highlight)| self.render_highlight(index, highlight, cx))
            .collect();

        v_flex()
            .gap_1()
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(Icon::from(CustomIconName::Sparkles).small())
                    .child(Label::new(i18n_video(cx, "highlights")).text_sm()),
            )
            .children(rows)
    }

    fn render_transcript(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let position = self.player.position();
        let hover_bg = cx.theme().secondary;
        let muted = cx.theme().muted_foreground;
        let rows: Vec<_> = TRANSCRIPT
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let time = line.time;
                let is_current = parse_timestamp(time)
                    .is_some_and(|start| start <= position);
                h_flex()
                    .id(("video-transcript-line", index))
                    .gap_3()
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(|this| this.bg(hover_bg))
                    .child(Label::new(time).text_xs().text_color(muted).w(px(40.0)))
                    .child(
                        div()
                            .flex_1()
                            .text_sm()
                            .when(!is_current, |this| this.text_color(muted))
                            .child(line.text),
                    )
                    .on_click(cx.listener(move |this, _, window, cx| this.seek_to(time, window, cx)))
            })
            .collect();

        v_flex()
            .gap_1()
            .child(Label::new(i18n_video(cx, "transcript")).text_sm())
            .children(rows)
    }
}

impl CollapsiblePanel for VideoView {
    fn set_props(&mut self, props: PanelProps, cx: &mut Context<Self>) {
        let changed = !same_presentation(&self.props, &props);
        self.props = props;
        if changed {
            cx.notify();
        }
    }
}

impl Render for VideoView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.props.collapsed {
            let tooltip = tooltip_with_shortcut(
                i18n_video(cx, "expand"),
                WorkspaceAction::TogglePanel(Panel::Video),
            );
            return render_collapsed_affordance(
                "video-expand",
                CustomIconName::Video,
                i18n_video(cx, "title"),
                tooltip,
                self.props.on_toggle.clone(),
                cx,
            )
            .into_any_element();
        }

        let compact = self.props.density == PanelDensity::Compact;
        let fullscreen = self.player.is_fullscreen();

        v_flex()
            .id("video-view")
            .size_full()
            .bg(cx.theme().background)
            .when(!fullscreen, |this| this.child(self.render_header(cx)))
            .child(
                v_flex()
                    .flex_1()
                    .gap_3()
                    .p_4()
                    .child(self.render_screen(cx))
                    .child(self.render_progress(cx))
                    .child(self.render_controls(cx)),
            )
            .when(self.player.shows_details(compact), |this| {
                this.child(
                    div()
                        .id("video-details")
                        .flex_none()
                        .max_h(px(320.0))
                        .overflow_y_scroll()
                        .px_4()
                        .pb_4()
                        .child(
                            v_flex()
                                .gap_4()
                                .child(self.render_highlights(cx))
                                .when(self.player.show_transcript(), |this| {
                                    this.child(self.render_transcript(cx))
                                }),
                        ),
                )
            })
            .into_any_element()
    }
}
