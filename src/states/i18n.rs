//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::EduGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn translate(cx: &App, namespace: &str, key: &str) -> SharedString {
    let locale = cx.global::<EduGlobalStore>().read(cx).locale();
    t!(format!("{namespace}.{key}"), locale = locale).into()
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    translate(cx, "sidebar", key)
}

/// Get translated string from "titlebar" namespace
pub fn i18n_titlebar(cx: &App, key: &str) -> SharedString {
    translate(cx, "titlebar", key)
}

/// Get translated string from "video" namespace
pub fn i18n_video(cx: &App, key: &str) -> SharedString {
    translate(cx, "video", key)
}

/// Get translated string from "assistant" namespace
pub fn i18n_assistant(cx: &App, key: &str) -> SharedString {
    translate(cx, "assistant", key)
}

/// Get translated string from "editor" namespace
pub fn i18n_editor(cx: &App, key: &str) -> SharedString {
    translate(cx, "editor", key)
}

/// Get translated string from "library" namespace
pub fn i18n_library(cx: &App, key: &str) -> SharedString {
    translate(cx, "library", key)
}

/// Get translated string from "settings" namespace
pub fn i18n_settings(cx: &App, key: &str) -> SharedString {
    translate(cx, "settings", key)
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `notes_count: "{count} notes"`
/// i18n_format(cx, "library.notes_count", &[("count", "3")])
/// // Returns "3 notes"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<EduGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
