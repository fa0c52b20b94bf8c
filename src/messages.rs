//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Geometry arrives as
//! raw numbers straight from the UI; `update` validates it.

use crate::layout::LayoutMode;
use crate::model::DocumentId;
use crate::panel::PanelState;

/// Workspace messages (document set, geometry, layout)
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceMsg {
    // === Document set ===
    /// Open a file; missing geometry falls back to the origin and default size
    AddDocument {
        file_path: String,
        title: String,
        position: Option<(f64, f64)>,
        dimensions: Option<(f64, f64)>,
    },
    /// Close one document
    RemoveDocument(DocumentId),
    /// Close every document
    RemoveAllDocuments,
    /// Bring a document to the front and make it active
    ActivateDocument(DocumentId),

    // === Geometry ===
    /// Committed drag (switches to freeform)
    MoveDocument { id: DocumentId, x: f64, y: f64 },
    /// Committed resize (switches to freeform)
    ResizeDocument {
        id: DocumentId,
        width: f64,
        height: f64,
    },
    /// Choose a layout strategy
    SwitchLayoutMode(LayoutMode),
    /// The visible workspace area changed size
    UpdateWorkspaceSize { width: f64, height: f64 },

    // === Workspace metadata ===
    Rename(String),

    // === Content lifecycle ===
    /// Content extraction finished
    DocumentLoaded(DocumentId),
    /// Content extraction failed
    DocumentFailed { id: DocumentId, message: String },
}

/// Side panel messages
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    ToggleFilesCategories,
    ToggleSearch,
    ToggleFileExplorerSection,
    ToggleCategoryExplorerSection,
    /// Jump straight to a state
    SetState(PanelState),
    /// Restore a state by name, as read back from storage
    RestoreState(String),
    /// Overwrite the remembered section pair
    SetLastValidState {
        file_explorer_visible: bool,
        category_explorer_visible: bool,
    },
}

/// In-flight pointer gestures, coalesced until the next flush
#[derive(Debug, Clone, PartialEq)]
pub enum GestureMsg {
    Move { id: DocumentId, x: f64, y: f64 },
    Resize {
        id: DocumentId,
        width: f64,
        height: f64,
    },
    /// Gesture aborted (e.g. Escape during a drag)
    Cancel(DocumentId),
    /// Render tick: commit everything pending
    Flush,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Workspace messages (documents, layout)
    Workspace(WorkspaceMsg),
    /// Panel visibility messages
    Panel(PanelMsg),
    /// Drag/resize gesture messages
    Gesture(GestureMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Open a document with default geometry
    pub fn add_document(file_path: impl Into<String>, title: impl Into<String>) -> Self {
        Msg::Workspace(WorkspaceMsg::AddDocument {
            file_path: file_path.into(),
            title: title.into(),
            position: None,
            dimensions: None,
        })
    }

    pub fn activate(id: DocumentId) -> Self {
        Msg::Workspace(WorkspaceMsg::ActivateDocument(id))
    }

    pub fn move_document(id: DocumentId, x: f64, y: f64) -> Self {
        Msg::Workspace(WorkspaceMsg::MoveDocument { id, x, y })
    }

    pub fn resize_document(id: DocumentId, width: f64, height: f64) -> Self {
        Msg::Workspace(WorkspaceMsg::ResizeDocument { id, width, height })
    }

    pub fn switch_layout(mode: LayoutMode) -> Self {
        Msg::Workspace(WorkspaceMsg::SwitchLayoutMode(mode))
    }

    pub fn panel(msg: PanelMsg) -> Self {
        Msg::Panel(msg)
    }
}
