//! Persisted snapshot schema
//!
//! Plain serde structs in the wire shape (camelCase JSON, ISO-8601
//! timestamps). A snapshot is an owned copy of workspace state, so it can be
//! handed to a persistence backend without borrowing the live workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geometry::{Dimensions, Position, WorkspaceSize};
use super::ids::{DocumentId, WorkspaceId};
use crate::layout::LayoutMode;

/// Serialized form of a [`Workspace`](super::Workspace)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub id: WorkspaceId,
    pub name: String,
    pub layout_mode: LayoutMode,
    pub workspace_size: WorkspaceSize,
    pub documents: Vec<DocumentSnapshot>,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

/// Serialized form of a [`Document`](super::Document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub id: DocumentId,
    pub file_path: String,
    pub title: String,
    pub position: Position,
    pub dimensions: Dimensions,
    pub z_index: u32,
    pub is_active: bool,
}

/// Lightweight listing entry for stored workspaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub id: WorkspaceId,
    pub name: String,
    pub document_count: usize,
    pub last_modified: DateTime<Utc>,
}

impl From<&WorkspaceSnapshot> for WorkspaceSummary {
    fn from(snapshot: &WorkspaceSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name.clone(),
            document_count: snapshot.documents.len(),
            last_modified: snapshot.last_modified,
        }
    }
}
