//! Workspace update handlers - document set, geometry and layout mode

use crate::commands::Cmd;
use crate::error::{CaddyError, Result};
use crate::messages::WorkspaceMsg;
use crate::model::{AppModel, Dimensions, DocumentId, Position, WorkspaceSize};

/// Handle workspace messages
pub fn update_workspace(model: &mut AppModel, msg: WorkspaceMsg) -> Result<Option<Cmd>> {
    match msg {
        WorkspaceMsg::AddDocument {
            file_path,
            title,
            position,
            dimensions,
        } => {
            let position = match position {
                Some((x, y)) => Position::new(x, y)?,
                None => Position::ORIGIN,
            };
            let dimensions = match dimensions {
                Some((width, height)) => Dimensions::new(width, height)?,
                None => Dimensions::default(),
            };
            model
                .workspace
                .add_document(&file_path, &title, position, dimensions)?;
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::RemoveDocument(id) => {
            model.workspace.remove_document(id)?;
            model.gestures.cancel(id);
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::RemoveAllDocuments => {
            if model.workspace.is_empty() {
                return Ok(None);
            }
            model.workspace.remove_all_documents();
            model.gestures.clear();
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::ActivateDocument(id) => {
            model.workspace.activate_document(id)?;
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::MoveDocument { id, x, y } => {
            // Unknown documents are reported before malformed numbers
            ensure_exists(model, id)?;
            let position = Position::new(x, y)?;
            model.workspace.move_document(id, position)?;
            model.gestures.cancel(id);
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::ResizeDocument { id, width, height } => {
            ensure_exists(model, id)?;
            let dimensions = Dimensions::new(width, height)?;
            model.workspace.resize_document(id, dimensions)?;
            model.gestures.cancel(id);
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::SwitchLayoutMode(mode) => {
            if !model.workspace.switch_layout_mode(mode) {
                return Ok(None);
            }
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::UpdateWorkspaceSize { width, height } => {
            let size = WorkspaceSize::new(width, height)?;
            if size == model.workspace.workspace_size() {
                return Ok(None);
            }
            model.workspace.update_workspace_size(size);
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::Rename(name) => {
            model.workspace.rename(&name)?;
            Ok(Some(saved(model)))
        }

        WorkspaceMsg::DocumentLoaded(id) => {
            model.workspace.mark_document_ready(id)?;
            Ok(Some(Cmd::Redraw))
        }

        WorkspaceMsg::DocumentFailed { id, message } => {
            let doc = model.workspace.mark_document_failed(id, &message)?;
            let notice = format!("Could not load {}: {}", doc.display_title(), message);
            Ok(Some(Cmd::batch(vec![Cmd::Redraw, Cmd::ShowMessage(notice)])))
        }
    }
}

fn ensure_exists(model: &AppModel, id: DocumentId) -> Result<()> {
    match model.workspace.document(id) {
        Some(_) => Ok(()),
        None => Err(CaddyError::DocumentNotFound(id.to_string())),
    }
}

fn saved(model: &AppModel) -> Cmd {
    Cmd::redraw_and_save(model.workspace.snapshot())
}
