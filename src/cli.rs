//! Command-line argument parsing
//!
//! Every subcommand loads state through the configured persistence gateway,
//! applies at most one message, saves, and prints the result as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::layout::LayoutMode;
use crate::messages::{Msg, PanelMsg, WorkspaceMsg};
use crate::model::{Document, DocumentId, Frame, LifecycleState, Workspace, WorkspaceId};

/// Arrange documents in research workspaces
#[derive(Parser, Debug)]
#[command(name = "caddy", version, about = "Arrange documents in research workspaces")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/caddy/config.yaml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Store workspaces as JSON in DIR, overriding the configured backend
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create an empty workspace
    New {
        name: String,
        /// Layout mode (defaults to the configured one)
        #[arg(long)]
        layout: Option<LayoutMode>,
    },
    /// Print a workspace with its rendered layout
    Show { workspace: WorkspaceId },
    /// List stored workspaces, most recently modified first
    List,
    /// Open a document in a workspace
    Add {
        workspace: WorkspaceId,
        path: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, allow_negative_numbers = true, requires = "y")]
        x: Option<f64>,
        #[arg(long, allow_negative_numbers = true, requires = "x")]
        y: Option<f64>,
        #[arg(long, requires = "height")]
        width: Option<f64>,
        #[arg(long, requires = "width")]
        height: Option<f64>,
    },
    /// Close a document
    Remove {
        workspace: WorkspaceId,
        document: DocumentId,
    },
    /// Close every document
    Clear { workspace: WorkspaceId },
    /// Make a document active and bring it to the front
    Activate {
        workspace: WorkspaceId,
        document: DocumentId,
    },
    /// Move a document (switches to freeform)
    Move {
        workspace: WorkspaceId,
        document: DocumentId,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Resize a document (switches to freeform)
    Resize {
        workspace: WorkspaceId,
        document: DocumentId,
        width: f64,
        height: f64,
    },
    /// Switch layout mode: stacked, grid or freeform
    Layout {
        workspace: WorkspaceId,
        mode: LayoutMode,
    },
    /// Change the workspace size
    Size {
        workspace: WorkspaceId,
        width: f64,
        height: f64,
    },
    /// Rename a workspace
    Rename { workspace: WorkspaceId, name: String },
    /// Show or toggle side panels
    Panels {
        #[arg(value_enum, default_value_t = PanelAction::Show)]
        action: PanelAction,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Show,
    FilesCategories,
    Search,
    FileExplorer,
    CategoryExplorer,
}

impl PanelAction {
    /// The message this action sends, `None` for read-only `show`
    pub fn message(self) -> Option<PanelMsg> {
        match self {
            PanelAction::Show => None,
            PanelAction::FilesCategories => Some(PanelMsg::ToggleFilesCategories),
            PanelAction::Search => Some(PanelMsg::ToggleSearch),
            PanelAction::FileExplorer => Some(PanelMsg::ToggleFileExplorerSection),
            PanelAction::CategoryExplorer => Some(PanelMsg::ToggleCategoryExplorerSection),
        }
    }
}

/// What the binary should do for one invocation
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Create {
        name: String,
        layout: Option<LayoutMode>,
    },
    List,
    Show(WorkspaceId),
    /// Load `workspace`, apply `msg`, save
    Apply { workspace: WorkspaceId, msg: Msg },
    Panels(Option<PanelMsg>),
}

impl Command {
    /// Translate the parsed subcommand into an action
    pub fn into_action(self) -> Action {
        let apply = |workspace, msg| Action::Apply {
            workspace,
            msg: Msg::Workspace(msg),
        };

        match self {
            Command::New { name, layout } => Action::Create { name, layout },
            Command::Show { workspace } => Action::Show(workspace),
            Command::List => Action::List,
            Command::Add {
                workspace,
                path,
                title,
                x,
                y,
                width,
                height,
            } => apply(
                workspace,
                WorkspaceMsg::AddDocument {
                    file_path: path,
                    title: title.unwrap_or_default(),
                    position: x.zip(y),
                    dimensions: width.zip(height),
                },
            ),
            Command::Remove {
                workspace,
                document,
            } => apply(workspace, WorkspaceMsg::RemoveDocument(document)),
            Command::Clear { workspace } => apply(workspace, WorkspaceMsg::RemoveAllDocuments),
            Command::Activate {
                workspace,
                document,
            } => apply(workspace, WorkspaceMsg::ActivateDocument(document)),
            Command::Move {
                workspace,
                document,
                x,
                y,
            } => apply(
                workspace,
                WorkspaceMsg::MoveDocument {
                    id: document,
                    x,
                    y,
                },
            ),
            Command::Resize {
                workspace,
                document,
                width,
                height,
            } => apply(
                workspace,
                WorkspaceMsg::ResizeDocument {
                    id: document,
                    width,
                    height,
                },
            ),
            Command::Layout { workspace, mode } => {
                apply(workspace, WorkspaceMsg::SwitchLayoutMode(mode))
            }
            Command::Size {
                workspace,
                width,
                height,
            } => apply(workspace, WorkspaceMsg::UpdateWorkspaceSize { width, height }),
            Command::Rename { workspace, name } => apply(workspace, WorkspaceMsg::Rename(name)),
            Command::Panels { action } => Action::Panels(action.message()),
        }
    }
}

// ============================================================================
// Read model
// ============================================================================

/// JSON view of a workspace as it would be drawn
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceView<'a> {
    pub id: WorkspaceId,
    pub name: &'a str,
    pub layout_mode: LayoutMode,
    pub active_document_id: Option<DocumentId>,
    pub documents: Vec<DocumentView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView<'a> {
    pub id: DocumentId,
    pub title: &'a str,
    pub file_path: &'a str,
    pub is_active: bool,
    pub is_visible: bool,
    pub lifecycle: LifecycleState,
    /// Stored geometry
    pub stored: Frame,
    /// Geometry under the current layout mode
    pub frame: Frame,
}

impl<'a> WorkspaceView<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self {
            id: workspace.id(),
            name: workspace.name(),
            layout_mode: workspace.layout_mode(),
            active_document_id: workspace.active_document_id(),
            documents: workspace.documents().iter().map(DocumentView::new).collect(),
        }
    }
}

impl<'a> DocumentView<'a> {
    fn new(doc: &'a Document) -> Self {
        Self {
            id: doc.id,
            title: doc.display_title(),
            file_path: &doc.file_path,
            is_active: doc.is_active,
            is_visible: doc.is_visible,
            lifecycle: doc.lifecycle,
            stored: doc.stored_frame(),
            frame: doc.frame,
        }
    }
}
