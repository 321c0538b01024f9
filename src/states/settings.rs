//! Settings State
//!
//! Independent preference fields edited by the settings screen. They are held
//! in memory for the session; "save" and "reset" are not wired to anything.

use gpui::Action;
use schemars::JsonSchema;
use serde::Deserialize;

pub const MIN_PLAYBACK_SPEED: f32 = 0.25;
pub const MAX_PLAYBACK_SPEED: f32 = 2.0;
pub const PLAYBACK_SPEED_STEP: f32 = 0.25;
pub const VOLUME_STEP: u8 = 5;

/// Theme preference selected in the appearance section
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, JsonSchema, Action)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemePreference::Light => "theme_light",
            ThemePreference::Dark => "theme_dark",
            ThemePreference::System => "theme_system",
        }
    }
}

/// Preferred stream quality
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize, JsonSchema, Action)]
pub enum VideoQuality {
    #[default]
    Auto,
    P1080,
    P720,
    P480,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 4] = [
        VideoQuality::Auto,
        VideoQuality::P1080,
        VideoQuality::P720,
        VideoQuality::P480,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VideoQuality::Auto => "Auto",
            VideoQuality::P1080 => "1080p",
            VideoQuality::P720 => "720p",
            VideoQuality::P480 => "480p",
        }
    }
}

/// All preference fields of the settings screen
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub theme: ThemePreference,
    pub autoplay: bool,
    playback_speed: f32,
    pub quality: VideoQuality,
    default_volume: u8,
    pub auto_generate_notes: bool,
    pub api_key_draft: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            autoplay: true,
            playback_speed: 1.0,
            quality: VideoQuality::Auto,
            default_volume: 80,
            auto_generate_notes: false,
            api_key_draft: String::new(),
        }
    }
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playback_speed(&self) -> f32 {
        self.playback_speed
    }

    pub fn default_volume(&self) -> u8 {
        self.default_volume
    }

    /// Set the playback speed, snapped to the 0.25 grid and clamped to
    /// `0.25..=2.0`
    pub fn set_playback_speed(&mut self, speed: f32) {
        let snapped = (speed / PLAYBACK_SPEED_STEP).round() * PLAYBACK_SPEED_STEP;
        self.playback_speed = snapped.clamp(MIN_PLAYBACK_SPEED, MAX_PLAYBACK_SPEED);
    }

    /// Set the default volume, snapped to multiples of 5 and clamped to 100
    pub fn set_default_volume(&mut self, volume: u8) {
        let volume = volume.min(100);
        let snapped = ((volume as u16 + VOLUME_STEP as u16 / 2) / VOLUME_STEP as u16)
            * VOLUME_STEP as u16;
        self.default_volume = snapped.min(100) as u8;
    }

    /// Set the default volume from a slider position
    pub fn scrub_default_volume(&mut self, percent: f32) {
        self.set_default_volume(percent.round().clamp(0.0, 100.0) as u8);
    }

    /// Label for the speed readout, e.g. `1.25x`
    pub fn playback_speed_label(&self) -> String {
        let speed = format!("{:.2}", self.playback_speed);
        let speed = speed.trim_end_matches('0').trim_end_matches('.');
        format!("{speed}x")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_settings_screen() {
        let prefs = Preferences::new();
        assert_eq!(prefs.theme, ThemePreference::System);
        assert!(prefs.autoplay);
        assert_eq!(prefs.playback_speed(), 1.0);
        assert_eq!(prefs.quality, VideoQuality::Auto);
        assert_eq!(prefs.default_volume(), 80);
        assert!(!prefs.auto_generate_notes);
        assert!(prefs.api_key_draft.is_empty());
    }

    #[test]
    fn playback_speed_snaps_and_clamps() {
        let mut prefs = Preferences::new();
        prefs.set_playback_speed(1.3);
        assert_eq!(prefs.playback_speed(), 1.25);
        prefs.set_playback_speed(5.0);
        assert_eq!(prefs.playback_speed(), 2.0);
        prefs.set_playback_speed(0.0);
        assert_eq!(prefs.playback_speed(), 0.25);
        prefs.set_playback_speed(1.1);
        assert_eq!(prefs.playback_speed(), 1.0);
    }

    #[test]
    fn volume_moves_in_steps_of_five() {
        let mut prefs = Preferences::new();
        prefs.set_default_volume(42);
        assert_eq!(prefs.default_volume(), 40);
        prefs.set_default_volume(200);
        assert_eq!(prefs.default_volume(), 100);

        prefs.scrub_default_volume(86.9);
        assert_eq!(prefs.default_volume(), 85);
        prefs.scrub_default_volume(-10.0);
        assert_eq!(prefs.default_volume(), 0);
        prefs.scrub_default_volume(150.0);
        assert_eq!(prefs.default_volume(), 100);
    }

    #[test]
    fn speed_label_drops_trailing_zeros() {
        let mut prefs = Preferences::new();
        assert_eq!(prefs.playback_speed_label(), "1x");
        prefs.set_playback_speed(1.5);
        assert_eq!(prefs.playback_speed_label(), "1.5x");
        prefs.set_playback_speed(0.25);
        assert_eq!(prefs.playback_speed_label(), "0.25x");
    }
}
