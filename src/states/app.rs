//! Application State
//!
//! Global application state: locale, theme and the ambient configuration read
//! from `eduai.toml`. The file is optional and never written back.

use crate::constants::{DEFAULT_REPLY_DELAY_MS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::error::Result;
use crate::helpers::{get_config_path, read_config_file};
use gpui::{Action, App, AppContext, Context, Entity, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info, warn};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

// ==================== Config ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

/// Contents of `eduai.toml`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: Option<String>,
    pub theme: Option<String>,
    pub reply_delay_ms: Option<u64>,
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
}

impl AppConfig {
    /// Parse config text; blank text yields the defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Read the config file if present
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        match read_config_file()? {
            Some(value) => Self::parse(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse config file");
                e
            }),
            None => Ok(Self::default()),
        }
    }
}

// ==================== App State ====================

/// Session-wide application state
#[derive(Debug, Clone)]
pub struct EduAppState {
    locale: String,
    theme: Option<String>,
    reply_delay: Duration,
    window_size: (f32, f32),
}

impl Default for EduAppState {
    fn default() -> Self {
        Self::from_config(AppConfig::default(), None)
    }
}

impl EduAppState {
    /// Build state from config, falling back to `system_locale` and then `en`
    pub fn from_config(config: AppConfig, system_locale: Option<String>) -> Self {
        let locale = config
            .locale
            .filter(|l| !l.is_empty())
            .or(system_locale)
            .unwrap_or_else(|| "en".to_string());

        Self {
            locale,
            theme: config.theme,
            reply_delay: Duration::from_millis(
                config.reply_delay_ms.unwrap_or(DEFAULT_REPLY_DELAY_MS),
            ),
            window_size: (
                config.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH),
                config.window_height.unwrap_or(DEFAULT_WINDOW_HEIGHT),
            ),
        }
    }

    /// Load state from the config file; errors fall back to defaults
    pub fn load() -> Self {
        let config = AppConfig::try_load().unwrap_or_else(|e| {
            warn!(error = %e, "Using default configuration");
            AppConfig::default()
        });
        Self::from_config(config, system_language())
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn window_size(&self) -> (f32, f32) {
        self.window_size
    }

    // ==================== Setters ====================

    pub fn set_theme(&mut self, theme: Option<ThemeMode>, cx: &mut Context<Self>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
        cx.notify();
    }

    pub fn set_locale(&mut self, locale: impl Into<String>, cx: &mut Context<Self>) {
        self.locale = locale.into();
        info!(locale = %self.locale, "Locale changed");
        cx.notify();
    }
}

/// Language part of the OS locale, e.g. `zh` for `zh-CN`
fn system_language() -> Option<String> {
    let current = Locale::current().to_string();
    let lang = current.split(['-', '_']).next()?.to_string();
    (!lang.is_empty()).then_some(lang)
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<EduGlobalStore>()`
#[derive(Clone)]
pub struct EduGlobalStore {
    app_state: Entity<EduAppState>,
}

impl EduGlobalStore {
    pub fn new(app_state: Entity<EduAppState>) -> Self {
        Self { app_state }
    }

    /// Create the app state entity and register the store as a global
    pub fn init(state: EduAppState, cx: &mut App) {
        let app_state = cx.new(|_| state);
        cx.set_global(Self::new(app_state));
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a EduAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut EduAppState, &mut Context<EduAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for EduGlobalStore {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_yields_defaults() {
        let config = AppConfig::parse("  \n").expect("blank config parses");
        assert_eq!(config, AppConfig::default());

        let state = EduAppState::from_config(config, None);
        assert_eq!(state.locale(), "en");
        assert_eq!(state.theme(), None);
        assert_eq!(state.reply_delay(), Duration::from_millis(1500));
        assert_eq!(state.window_size(), (1400.0, 900.0));
    }

    #[test]
    fn config_fields_override_defaults() {
        let config = AppConfig::parse(
            r#"
locale = "zh"
theme = "dark"
reply_delay_ms = 250
window_width = 1200.0
"#,
        )
        .expect("valid config");

        let state = EduAppState::from_config(config, Some("en".to_string()));
        assert_eq!(state.locale(), "zh");
        assert_eq!(state.theme(), Some(ThemeMode::Dark));
        assert_eq!(state.reply_delay(), Duration::from_millis(250));
        assert_eq!(state.window_size(), (1200.0, 900.0));
    }

    #[test]
    fn system_locale_fills_missing_locale() {
        let state = EduAppState::from_config(AppConfig::default(), Some("zh".to_string()));
        assert_eq!(state.locale(), "zh");

        let config = AppConfig {
            locale: Some(String::new()),
            ..AppConfig::default()
        };
        let state = EduAppState::from_config(config, Some("de".to_string()));
        assert_eq!(state.locale(), "de");
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(AppConfig::parse("reply_delay_ms = \"soon\"").is_err());
        assert!(AppConfig::parse("theme = ").is_err());
    }
}
