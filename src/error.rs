//! Error taxonomy for workspace and panel commands
//!
//! Every command either applies completely or returns one of these errors
//! without touching state. Callers use [`CaddyError::kind`] to decide how to
//! present a failure, and [`CaddyError::is_retryable`] to offer "retry save"
//! for persistence problems only.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, CaddyError>;

/// Coarse classification of a [`CaddyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
    Persistence,
}

/// Errors raised by workspace, panel and persistence commands
#[derive(Debug, Error)]
pub enum CaddyError {
    // === NotFound ===
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    // === Conflict ===
    #[error("document is already open: {0}")]
    DocumentAlreadyOpen(String),

    #[error("a workspace named {0:?} already exists")]
    WorkspaceNameAlreadyExists(String),

    // === Validation ===
    #[error("invalid dimensions {width}x{height} (minimum {min_width}x{min_height})")]
    InvalidDimensions {
        width: f64,
        height: f64,
        min_width: f64,
        min_height: f64,
    },

    #[error("invalid position ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },

    #[error("invalid layout mode: {0:?}")]
    InvalidLayoutMode(String),

    #[error("invalid workspace name: {0:?}")]
    InvalidWorkspaceName(String),

    #[error("document file path must not be empty")]
    InvalidFilePath,

    #[error("malformed identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("invalid panel state: {0:?}")]
    InvalidPanelState(String),

    #[error("section visibility cannot hide both the file and category explorers")]
    InvalidSectionVisibility,

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid stored data in {}: {source}", path.display())]
    InvalidStoredData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Persistence ===
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl CaddyError {
    /// Classify the error for presentation
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WorkspaceNotFound(_) | Self::DocumentNotFound(_) => ErrorKind::NotFound,
            Self::DocumentAlreadyOpen(_) | Self::WorkspaceNameAlreadyExists(_) => {
                ErrorKind::Conflict
            }
            Self::InvalidDimensions { .. }
            | Self::InvalidPosition { .. }
            | Self::InvalidLayoutMode(_)
            | Self::InvalidWorkspaceName(_)
            | Self::InvalidFilePath
            | Self::InvalidIdentifier(_)
            | Self::InvalidPanelState(_)
            | Self::InvalidSectionVisibility
            | Self::InvariantViolation(_)
            | Self::InvalidStoredData { .. } => ErrorKind::Validation,
            Self::Persistence(_) => ErrorKind::Persistence,
        }
    }

    /// Only persistence failures are worth retrying as-is; everything else
    /// needs different input.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Persistence
    }

    /// Short message suitable for a status bar or toast
    pub fn user_message(&self) -> String {
        match self {
            Self::DocumentAlreadyOpen(path) => format!("Already open: {}", path),
            // Workspace sizes only need to be positive
            Self::InvalidDimensions {
                width,
                height,
                min_width,
                min_height,
            } if *min_width <= 0.0 && *min_height <= 0.0 => format!(
                "Workspace size must be positive, got {}x{}",
                width, height
            ),
            Self::InvalidDimensions {
                min_width,
                min_height,
                ..
            } => format!(
                "Documents must be at least {}x{} pixels",
                min_width, min_height
            ),
            Self::Persistence(e) => format!("Could not save workspace: {}", e),
            other => {
                let mut msg = other.to_string();
                if let Some(first) = msg.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                msg
            }
        }
    }
}

/// Failures of the persistence backend
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no storage directory available")]
    NoStorageDirectory,
}
