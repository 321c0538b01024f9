//! Settings View
//!
//! Session preferences. Values live in memory only; save and reset are
//! acknowledged in the log and nothing else.

use crate::assets::CustomIconName;
use crate::states::{
    MAX_PLAYBACK_SPEED, MIN_PLAYBACK_SPEED, PLAYBACK_SPEED_STEP, Preferences, ThemePreference,
    VOLUME_STEP, VideoQuality, i18n_settings,
};
use gpui::{
    AnyElement, Context, Corner, Entity, FocusHandle, MouseButton, SharedString, Subscription,
    Window, div, prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants, DropdownButton},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    slider::{Slider, SliderEvent, SliderState},
    switch::Switch,
    v_flex,
};
use tracing::{debug, info};

const CONTENT_MAX_WIDTH: f32 = 720.0;
const READOUT_WIDTH: f32 = 56.0;
const SLIDER_WIDTH: f32 = 200.0;

/// Preferences screen
pub struct SettingsView {
    prefs: Preferences,
    api_key: Entity<InputState>,
    speed: Entity<SliderState>,
    volume: Entity<SliderState>,
    /// Menu actions are dispatched relative to this handle
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl SettingsView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let api_key = cx.new(|cx| {
            let placeholder = i18n_settings(cx, "api_key_placeholder");
            InputState::new(window, cx)
                .masked(true)
                .placeholder(placeholder)
        });

        let prefs = Preferences::new();
        let initial_speed = prefs.playback_speed();
        let initial_volume = prefs.default_volume() as f32;
        let speed = cx.new(|_| {
            SliderState::new()
                .min(MIN_PLAYBACK_SPEED)
                .max(MAX_PLAYBACK_SPEED)
                .step(PLAYBACK_SPEED_STEP)
                .default_value(initial_speed)
        });
        let volume = cx.new(|_| {
            SliderState::new()
                .min(0.0)
                .max(100.0)
                .step(VOLUME_STEP as f32)
                .default_value(initial_volume)
        });

        let subscriptions = vec![
            cx.subscribe(&api_key, |this, input, event, cx| {
                if matches!(event, InputEvent::Change) {
                    this.prefs.api_key_draft = input.read(cx).value().to_string();
                }
            }),
            cx.subscribe(&speed, |this, _, event: &SliderEvent, cx| {
                let SliderEvent::Change(value) = event;
                this.update_prefs(cx, |prefs| prefs.set_playback_speed(value.start()));
            }),
            cx.subscribe(&volume, |this, _, event: &SliderEvent, cx| {
                let SliderEvent::Change(value) = event;
                this.update_prefs(cx, |prefs| prefs.scrub_default_volume(value.start()));
            }),
        ];

        Self {
            prefs,
            api_key,
            speed,
            volume,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    fn update_prefs(&mut self, cx: &mut Context<Self>, f: impl FnOnce(&mut Preferences)) {
        f(&mut self.prefs);
        cx.notify();
    }

    fn render_section(
        &self,
        icon: impl Into<Icon>,
        title: SharedString,
        rows: Vec<AnyElement>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_3()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(icon.into())
                    .child(Label::new(title).text_base()),
            )
            .children(rows)
    }

    fn render_row(
        &self,
        label: SharedString,
        control: impl IntoElement,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        h_flex()
            .items_center()
            .justify_between()
            .min_h(px(32.0))
            .child(
                Label::new(label)
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(control)
            .into_any_element()
    }

    fn render_slider(
        &self,
        slider: &Entity<SliderState>,
        readout: String,
    ) -> impl IntoElement {
        h_flex()
            .items_center()
            .gap_2()
            .child(div().w(px(SLIDER_WIDTH)).child(Slider::new(slider).w_full()))
            .child(
                div()
                    .w(px(READOUT_WIDTH))
                    .flex()
                    .justify_end()
                    .text_sm()
                    .child(readout),
            )
    }

    fn render_appearance(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let current = self.prefs.theme;
        let options: Vec<_> = ThemePreference::ALL
            .iter()
            .map(|t| (*t, i18n_settings(cx, t.i18n_key())))
            .collect();
        let current_label = i18n_settings(cx, current.i18n_key());

        let theme_dropdown = DropdownButton::new("settings-theme-dropdown")
            .button(
                Button::new("settings-theme-btn")
                    .outline()
                    .small()
                    .label(current_label),
            )
            .dropdown_menu_with_anchor(Corner::TopRight, move |menu, _, _| {
                options.iter().fold(menu, |menu, (option, label)| {
                    let label = label.clone();
                    menu.menu_element_with_check(
                        current == *option,
                        Box::new(*option),
                        move |_, _cx| Label::new(label.clone()).ml_2().text_xs(),
                    )
                })
            });

        let rows = vec![self.render_row(i18n_settings(cx, "theme"), theme_dropdown, cx)];
        self.render_section(IconName::Palette, i18n_settings(cx, "appearance"), rows, cx)
    }

    fn render_playback(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let quality = self.prefs.quality;
        let quality_dropdown = DropdownButton::new("settings-quality-dropdown")
            .button(
                Button::new("settings-quality-btn")
                    .outline()
                    .small()
                    .label(quality.label()),
            )
            .dropdown_menu_with_anchor(Corner::TopRight, move |menu, _, _| {
                VideoQuality::ALL.iter().fold(menu, |menu, option| {
                    let option = *option;
                    menu.menu_element_with_check(
                        quality == option,
                        Box::new(option),
                        move |_, _cx| Label::new(option.label()).ml_2().text_xs(),
                    )
                })
            });

        let autoplay = Switch::new("settings-autoplay")
            .checked(self.prefs.autoplay)
            .on_click(cx.listener(|this, checked: &bool, _, cx| {
                this.update_prefs(cx, |prefs| prefs.autoplay = *checked);
            }));

        let speed = self.render_slider(&self.speed, self.prefs.playback_speed_label());
        let volume =
            self.render_slider(&self.volume, format!("{}%", self.prefs.default_volume()));

        let rows = vec![
            self.render_row(i18n_settings(cx, "autoplay"), autoplay, cx),
            self.render_row(i18n_settings(cx, "playback_speed"), speed, cx),
            self.render_row(i18n_settings(cx, "quality"), quality_dropdown, cx),
            self.render_row(i18n_settings(cx, "default_volume"), volume, cx),
        ];
        self.render_section(CustomIconName::Video, i18n_settings(cx, "playback"), rows, cx)
    }

    fn render_ai(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let auto_notes = Switch::new("settings-auto-notes")
            .checked(self.prefs.auto_generate_notes)
            .on_click(cx.listener(|this, checked: &bool, _, cx| {
                this.update_prefs(cx, |prefs| prefs.auto_generate_notes = *checked);
            }));
        let api_key = div().w(px(280.0)).child(Input::new(&self.api_key));

        let rows = vec![
            self.render_row(i18n_settings(cx, "auto_generate_notes"), auto_notes, cx),
            self.render_row(i18n_settings(cx, "api_key"), api_key, cx),
        ];
        self.render_section(CustomIconName::Sparkles, i18n_settings(cx, "ai"), rows, cx)
    }

    fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .justify_end()
            .gap_2()
            .child(
                Button::new("settings-reset")
                    .outline()
                    .small()
                    .icon(CustomIconName::RotateCcw)
                    .label(i18n_settings(cx, "reset"))
                    .on_click(|_, _, _| {
                        info!("Reset settings requested");
                    }),
            )
            .child(
                Button::new("settings-save")
                    .primary()
                    .small()
                    .icon(CustomIconName::Save)
                    .label(i18n_settings(cx, "save"))
                    .on_click(cx.listener(|this, _, _, _| {
                        let prefs = &this.prefs;
                        info!(
                            theme = ?prefs.theme,
                            autoplay = prefs.autoplay,
                            speed = prefs.playback_speed(),
                            quality = prefs.quality.label(),
                            volume = prefs.default_volume(),
                            auto_notes = prefs.auto_generate_notes,
                            has_api_key = !prefs.api_key_draft.is_empty(),
                            "Save settings requested"
                        );
                    })),
            )
    }
}

impl Render for SettingsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("settings-view")
            .track_focus(&self.focus_handle)
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _, window, cx| {
                    if !this.focus_handle.contains_focused(window, cx) {
                        this.focus_handle.focus(window);
                    }
                }),
            )
            .on_action(cx.listener(|this, theme: &ThemePreference, _, cx| {
                debug!(theme = ?theme, "Theme preference changed");
                this.update_prefs(cx, |prefs| prefs.theme = *theme);
            }))
            .on_action(cx.listener(|this, quality: &VideoQuality, _, cx| {
                debug!(quality = quality.label(), "Quality preference changed");
                this.update_prefs(cx, |prefs| prefs.quality = *quality);
            }))
            .size_full()
            .overflow_y_scroll()
            .bg(cx.theme().background)
            .child(
                v_flex()
                    .max_w(px(CONTENT_MAX_WIDTH))
                    .mx_auto()
                    .gap_4()
                    .p_6()
                    .child(
                        h_flex()
                            .items_center()
                            .gap_2()
                            .child(Icon::new(IconName::Settings))
                            .child(Label::new(i18n_settings(cx, "title")).text_xl()),
                    )
                    .child(self.render_appearance(cx))
                    .child(self.render_playback(cx))
                    .child(self.render_ai(cx))
                    .child(self.render_footer(cx)),
            )
    }
}
