//! cellfind - search highlighting across notebook cell editors
//!
//! This crate provides the core types and logic for a notebook of
//! independent cell editors sharing one find/replace query, implementing the
//! Elm Architecture pattern: viewport-limited match highlighting, query
//! broadcast to every writable cell, and syntax-aware go-to-definition.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod highlight;
pub mod messages;
pub mod model;
pub mod render;
pub mod search;
pub mod syntax;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
