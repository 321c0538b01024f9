//! EduAI Learning Workspace
//!
//! Desktop shell for video-based learning: a lecture player, an AI chat
//! assistant, a notes editor, a notes library and settings, arranged by a
//! mode and panel state machine.

pub mod app;
pub mod assets;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod views;

rust_i18n::i18n!("locales", fallback = "en");
