//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar width when expanded (labels and descriptions visible)
pub const SIDEBAR_WIDTH: f32 = 256.0;

/// Sidebar width when collapsed (icons only)
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 64.0;

/// Fixed width of the side column (assistant / notes editor) in two-pane modes
pub const SIDE_PANEL_WIDTH: f32 = 384.0;

/// Width of the minimized affordance a collapsed panel keeps on screen
pub const COLLAPSED_PANEL_WIDTH: f32 = 48.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Delay before the simulated assistant reply lands
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

/// Length of the sample lecture in seconds
pub const VIDEO_DURATION_SECS: u32 = 1200;

/// Seconds moved by the skip back / skip forward buttons
pub const SKIP_STEP_SECS: u32 = 10;

/// Default playback volume (percent)
pub const DEFAULT_VOLUME: u8 = 80;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "eduai.toml";
