//! Document (caddy) model - one open file's on-screen container

use serde::Serialize;

use super::geometry::{Dimensions, Frame, Position};
use super::ids::DocumentId;

/// Loading state of a document's content
///
/// Content extraction happens outside the core; the caller reports the outcome
/// through `Workspace::mark_document_ready` / `mark_document_failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    #[default]
    Loading,
    Ready,
    Error,
}

/// An open document inside a workspace
///
/// `position`, `dimensions` and `z_index` are the *stored* geometry: what the
/// user last placed and what gets persisted. `frame` and `is_visible` are the
/// *rendered* geometry produced by the current layout mode, which only equals
/// the stored geometry in freeform mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    /// Natural key; unique within a workspace and stored verbatim
    pub file_path: String,
    pub title: String,

    pub position: Position,
    pub dimensions: Dimensions,
    pub z_index: u32,

    pub is_active: bool,
    pub is_visible: bool,
    pub lifecycle: LifecycleState,
    /// Set when `lifecycle` is `Error`
    pub error_message: Option<String>,

    /// Rendered geometry (set by the layout strategy)
    pub frame: Frame,
}

impl Document {
    pub(crate) fn new(
        id: DocumentId,
        file_path: String,
        title: String,
        position: Position,
        dimensions: Dimensions,
        z_index: u32,
    ) -> Self {
        Self {
            id,
            file_path,
            title,
            position,
            dimensions,
            z_index,
            is_active: false,
            is_visible: true,
            lifecycle: LifecycleState::Loading,
            error_message: None,
            frame: Frame::new(position, dimensions, z_index),
        }
    }

    /// Stored geometry as a frame
    pub fn stored_frame(&self) -> Frame {
        Frame::new(self.position, self.dimensions, self.z_index)
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle == LifecycleState::Ready
    }

    /// Title to show in chrome, falling back to the file name
    pub fn display_title(&self) -> &str {
        if !self.title.trim().is_empty() {
            return &self.title;
        }
        self.file_path
            .rsplit(['/', '\\'])
            .find(|part| !part.is_empty())
            .unwrap_or(&self.file_path)
    }
}
