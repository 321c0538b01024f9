//! State Management Layer
//!
//! Plain state models for the application and for each leaf view. Views own
//! their model exclusively; nothing here is shared between views except the
//! global [`EduGlobalStore`] (locale and theme).
//!
//! ```text
//! UI Action → State Method → notify → UI Refresh
//! ```

mod app;
mod assistant;
mod i18n;
mod library;
mod notes_editor;
mod player;
mod settings;

pub use app::*;
pub use assistant::*;
pub use i18n::*;
pub use library::*;
pub use notes_editor::*;
pub use player::*;
pub use settings::*;
