//! Application Layer
//!
//! App initialization, the workspace controller and the workspace shell.

pub mod application;
pub mod controller;
pub mod layout;
pub mod navigation;
pub mod workspace;
