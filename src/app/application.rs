//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::helpers::{MenuAction, new_key_bindings};
use crate::states::{EduAppState, EduGlobalStore, LocaleAction, ThemeAction};
use gpui::{
    AnyView, App, AppContext, Application, BorrowAppContext, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, point, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info};

/// Apply the stored theme, following the OS when none is set
fn apply_theme(theme: Option<ThemeMode>, cx: &mut App) {
    match theme {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
    cx.refresh_windows();
}

fn register_actions(cx: &mut App) {
    cx.on_action(|_: &MenuAction, cx: &mut App| {
        info!("Quit requested");
        cx.quit();
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let theme = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        info!(theme = ?theme, "Theme changed");
        cx.update_global::<EduGlobalStore, ()>(|store, cx| {
            store.update(cx, |state, cx| state.set_theme(theme, cx));
        });
        apply_theme(theme, cx);
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = match action {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        };
        cx.update_global::<EduGlobalStore, ()>(|store, cx| {
            store.update(cx, |state, cx| state.set_locale(locale, cx));
        });
        cx.refresh_windows();
    });
}

/// Run the EduAI application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        let state = EduAppState::load();
        let (width, height) = state.window_size();
        let theme = state.theme();
        info!(locale = state.locale(), "Application state loaded");
        EduGlobalStore::init(state, cx);
        apply_theme(theme, cx);

        cx.bind_keys(new_key_bindings());
        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("EduAI")),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(window, cx));
            let view: AnyView = workspace.into();
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
