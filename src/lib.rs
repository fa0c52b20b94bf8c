//! Caddy - workspace layout engine and side panel state machine
//!
//! This crate provides the core types and logic for arranging open documents
//! in a workspace, implementing the Elm Architecture pattern: UI intents are
//! [`Msg`] values, [`update::update`] applies them to an [`AppModel`], and
//! side effects come back as [`Cmd`]s.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod persistence;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::CaddyConfig;
pub use error::{CaddyError, ErrorKind, Result};
pub use layout::LayoutMode;
pub use messages::Msg;
pub use model::{AppModel, Workspace};
pub use panel::{PanelState, PanelVisibility};
