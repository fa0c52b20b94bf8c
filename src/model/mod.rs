//! Application model - the complete state of a workspace session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod geometry;
pub mod ids;
pub mod snapshot;
pub mod workspace;

pub use document::{Document, LifecycleState};
pub use geometry::{
    Dimensions, Frame, Position, WorkspaceSize, MIN_DOCUMENT_HEIGHT, MIN_DOCUMENT_WIDTH,
};
pub use ids::{DocumentId, WorkspaceId};
pub use snapshot::{DocumentSnapshot, WorkspaceSnapshot, WorkspaceSummary};
pub use workspace::{Workspace, MAX_WORKSPACE_NAME_CHARS};

use crate::config::CaddyConfig;
use crate::error::Result;
use crate::gesture::GestureBuffer;
use crate::panel::PanelVisibility;

/// The complete application model
///
/// The workspace and the panels never share state; `AppModel` only owns both
/// so a single `update` can route messages to either.
#[derive(Debug)]
pub struct AppModel {
    /// Open documents, their geometry and the layout mode
    pub workspace: Workspace,
    /// Side panel visibility
    pub panels: PanelVisibility,
    /// Pending drag/resize values awaiting the next flush
    pub gestures: GestureBuffer,
    /// Loaded configuration
    pub config: CaddyConfig,
}

impl AppModel {
    /// Create a model around a fresh, empty workspace
    pub fn new(name: &str, config: CaddyConfig) -> Result<Self> {
        let workspace =
            Workspace::with_layout_mode(name, config.workspace_size, config.default_layout_mode)?;
        Ok(Self::from_workspace(workspace, config))
    }

    /// Create a model around an already loaded workspace
    pub fn from_workspace(workspace: Workspace, config: CaddyConfig) -> Self {
        Self {
            workspace,
            panels: PanelVisibility::new(),
            gestures: GestureBuffer::new(),
            config,
        }
    }
}
