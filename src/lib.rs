//! DevByte - Elm-style chat workspace
//!
//! This crate provides the core types and logic for the chat workspace:
//! the resizable panel engine, the chat and preview state, and the
//! message/update loop that drives them. Window and rendering code lives
//! in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod resizable;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
