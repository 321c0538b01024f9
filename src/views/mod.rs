//! View Components
//!
//! UI components for the EduAI workspace.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├──────────┬──────────────────────────────────┬───────────────┤
//! │          │                                  │               │
//! │ Sidebar  │        Video (compact)           │  Assistant /  │
//! │ (256px,  │                                  │  Notes Editor │
//! │  64px    │                                  │  (384px)      │
//! │  folded) │                                  │               │
//! └──────────┴──────────────────────────────────┴───────────────┘
//! ```
//!
//! Video mode shows the player alone; library and settings take the whole
//! content area.

mod assistant;
mod library;
mod notes_editor;
pub mod panel;
mod settings;
mod sidebar;
mod title_bar;
mod video;

pub use assistant::*;
pub use library::*;
pub use notes_editor::*;
pub use settings::*;
pub use sidebar::*;
pub use title_bar::*;
pub use video::*;
