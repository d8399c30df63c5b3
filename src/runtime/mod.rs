//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the window:
//! - `app` - ApplicationHandler, window management and command execution
//! - `input` - Keyboard event to message mapping

pub mod app;
pub mod input;

pub use app::App;
