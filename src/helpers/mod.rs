//! Helper Utilities
//!
//! Common utilities used across the application.

mod action;
mod fs;
mod time;

pub use action::*;
pub use fs::*;
pub use time::*;
