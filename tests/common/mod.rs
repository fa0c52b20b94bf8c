//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use caddy::config::CaddyConfig;
use caddy::messages::{Msg, WorkspaceMsg};
use caddy::model::{AppModel, Dimensions, DocumentId, Position, Workspace, WorkspaceSize};
use caddy::update::update;

pub fn pos(x: f64, y: f64) -> Position {
    Position::new(x, y).unwrap()
}

pub fn dims(width: f64, height: f64) -> Dimensions {
    Dimensions::new(width, height).unwrap()
}

pub fn size(width: f64, height: f64) -> WorkspaceSize {
    WorkspaceSize::new(width, height).unwrap()
}

/// Empty freeform workspace of the given size
pub fn test_workspace(width: f64, height: f64) -> Workspace {
    Workspace::new("Test workspace", size(width, height)).unwrap()
}

/// Add a document with explicit stored geometry, returning its id
pub fn add_doc(
    ws: &mut Workspace,
    path: &str,
    position: (f64, f64),
    dimensions: (f64, f64),
) -> DocumentId {
    ws.add_document(
        path,
        path,
        pos(position.0, position.1),
        dims(dimensions.0, dimensions.1),
    )
    .unwrap()
    .id
}

/// Model around an empty workspace of the given size
pub fn test_model(width: f64, height: f64) -> AppModel {
    AppModel::from_workspace(test_workspace(width, height), CaddyConfig::default())
}

/// Open a document through `update`, returning its id
pub fn open(
    model: &mut AppModel,
    path: &str,
    position: (f64, f64),
    dimensions: (f64, f64),
) -> DocumentId {
    update(
        model,
        Msg::Workspace(WorkspaceMsg::AddDocument {
            file_path: path.to_string(),
            title: path.to_string(),
            position: Some(position),
            dimensions: Some(dimensions),
        }),
    )
    .unwrap();
    model.workspace.document_by_path(path).unwrap().id
}

/// Number of documents flagged active
pub fn active_count(ws: &Workspace) -> usize {
    ws.documents().iter().filter(|d| d.is_active).count()
}
