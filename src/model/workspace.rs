//! Workspace aggregate - the open-document set, its geometry and layout mode
//!
//! The workspace is the only thing allowed to mutate its documents. Every
//! command validates first and mutates afterwards, so a failed command leaves
//! the workspace exactly as it was. After each successful command:
//!
//! - exactly one document is active when any are open, none otherwise
//! - no two documents share a file path
//! - every stored `Dimensions` is at least the minimum
//! - every document's rendered frame matches the current layout mode

use chrono::{DateTime, Utc};

use super::document::{Document, LifecycleState};
use super::geometry::{Dimensions, Frame, Position, WorkspaceSize};
use super::ids::{DocumentId, WorkspaceId};
use super::snapshot::{DocumentSnapshot, WorkspaceSnapshot};
use crate::error::{CaddyError, Result};
use crate::layout::LayoutMode;

/// Longest accepted workspace name, in characters
pub const MAX_WORKSPACE_NAME_CHARS: usize = 120;

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_WORKSPACE_NAME_CHARS {
        return Err(CaddyError::InvalidWorkspaceName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

/// A named collection of open documents arranged by a layout mode
#[derive(Debug, Clone)]
pub struct Workspace {
    id: WorkspaceId,
    name: String,
    layout_mode: LayoutMode,
    /// Insertion order is significant (grid order, removal fallback)
    documents: Vec<Document>,
    active_document_id: Option<DocumentId>,
    workspace_size: WorkspaceSize,
    created_at: DateTime<Utc>,
    last_modified: DateTime<Utc>,
}

impl Workspace {
    /// Create an empty freeform workspace
    pub fn new(name: &str, workspace_size: WorkspaceSize) -> Result<Self> {
        let name = validate_name(name)?;
        let now = Utc::now();
        Ok(Self {
            id: WorkspaceId::new(),
            name,
            layout_mode: LayoutMode::default(),
            documents: Vec::new(),
            active_document_id: None,
            workspace_size,
            created_at: now,
            last_modified: now,
        })
    }

    /// Create an empty workspace that starts in `layout_mode`
    pub fn with_layout_mode(
        name: &str,
        workspace_size: WorkspaceSize,
        layout_mode: LayoutMode,
    ) -> Result<Self> {
        let mut workspace = Self::new(name, workspace_size)?;
        workspace.layout_mode = layout_mode;
        Ok(workspace)
    }

    // ========================================================================
    // Read side
    // ========================================================================

    pub fn id(&self) -> WorkspaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn document_by_path(&self, file_path: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.file_path == file_path)
    }

    pub fn active_document_id(&self) -> Option<DocumentId> {
        self.active_document_id
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active_document_id.and_then(|id| self.document(id))
    }

    pub fn workspace_size(&self) -> WorkspaceSize {
        self.workspace_size
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Documents in paint order (lowest rendered z first)
    pub fn paint_order(&self) -> Vec<&Document> {
        let mut ordered: Vec<&Document> = self.documents.iter().collect();
        ordered.sort_by_key(|d| d.frame.z_index);
        ordered
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Rename the workspace
    pub fn rename(&mut self, name: &str) -> Result<()> {
        self.name = validate_name(name)?;
        self.touch();
        Ok(())
    }

    /// Open a document
    ///
    /// The stored path is used verbatim; existence checks are the caller's
    /// job. The first document opened becomes active.
    pub fn add_document(
        &mut self,
        file_path: &str,
        title: &str,
        position: Position,
        dimensions: Dimensions,
    ) -> Result<&Document> {
        if file_path.trim().is_empty() {
            return Err(CaddyError::InvalidFilePath);
        }
        if self.document_by_path(file_path).is_some() {
            return Err(CaddyError::DocumentAlreadyOpen(file_path.to_string()));
        }

        let z_index = self.next_z_index();
        let stored = Frame::new(position, dimensions, z_index).clamped(self.workspace_size);
        let mut document = Document::new(
            DocumentId::new(),
            file_path.to_string(),
            title.to_string(),
            stored.position,
            stored.dimensions,
            stored.z_index,
        );
        let id = document.id;
        if self.documents.is_empty() {
            document.is_active = true;
            self.active_document_id = Some(id);
        }
        self.documents.push(document);

        tracing::debug!(document = %id, path = file_path, "document added");
        self.relayout();
        self.touch();

        let index = self.documents.len() - 1;
        Ok(&self.documents[index])
    }

    /// Close a document
    ///
    /// If it was active, the predecessor in list order takes over, else the
    /// successor, else nothing is active.
    pub fn remove_document(&mut self, id: DocumentId) -> Result<Document> {
        let index = self.index_of(id)?;
        let removed = self.documents.remove(index);

        if removed.is_active {
            let next = if index > 0 {
                self.documents.get(index - 1)
            } else {
                self.documents.first()
            }
            .map(|d| d.id);
            self.set_active(next);
        }

        tracing::debug!(document = %id, "document removed");
        self.relayout();
        self.touch();
        Ok(removed)
    }

    /// Close every document
    pub fn remove_all_documents(&mut self) {
        self.documents.clear();
        self.active_document_id = None;
        self.touch();
    }

    /// Make `id` the single active document and bring it to the front
    pub fn activate_document(&mut self, id: DocumentId) -> Result<&Document> {
        let index = self.index_of(id)?;
        let raise = self
            .documents
            .iter()
            .any(|d| d.id != id && d.z_index >= self.documents[index].z_index);

        self.set_active(Some(id));
        if raise {
            let z_index = self.next_z_index();
            self.documents[index].z_index = z_index;
        }

        self.relayout();
        self.touch();
        Ok(&self.documents[index])
    }

    /// Move a document
    ///
    /// Manual manipulation wins over structured layouts: outside freeform the
    /// workspace switches to freeform first. The position is clamped so the
    /// document stays inside the workspace.
    pub fn move_document(&mut self, id: DocumentId, position: Position) -> Result<&Document> {
        let index = self.index_of(id)?;
        self.ensure_freeform();

        let doc = &mut self.documents[index];
        doc.position = position.clamp_to_bounds(doc.dimensions, self.workspace_size);

        self.relayout();
        self.touch();
        Ok(&self.documents[index])
    }

    /// Resize a document, switching to freeform first like [`Self::move_document`]
    pub fn resize_document(&mut self, id: DocumentId, dimensions: Dimensions) -> Result<&Document> {
        let index = self.index_of(id)?;
        self.ensure_freeform();

        let doc = &mut self.documents[index];
        let frame = Frame::new(doc.position, dimensions, doc.z_index).clamped(self.workspace_size);
        doc.dimensions = frame.dimensions;
        doc.position = frame.position;

        self.relayout();
        self.touch();
        Ok(&self.documents[index])
    }

    /// Change the layout mode; a no-op when already in `mode`
    ///
    /// Returns whether anything changed.
    pub fn switch_layout_mode(&mut self, mode: LayoutMode) -> bool {
        if self.layout_mode == mode {
            return false;
        }
        tracing::debug!(from = %self.layout_mode, to = %mode, "switching layout mode");
        self.layout_mode = mode;
        self.relayout();
        self.touch();
        true
    }

    /// Resize the workspace, pulling any document that no longer fits back
    /// inside the new bounds
    pub fn update_workspace_size(&mut self, size: WorkspaceSize) {
        self.workspace_size = size;
        for doc in &mut self.documents {
            let frame = doc.stored_frame().clamped(size);
            doc.position = frame.position;
            doc.dimensions = frame.dimensions;
        }
        self.relayout();
        self.touch();
    }

    /// Record that a document's content finished loading
    pub fn mark_document_ready(&mut self, id: DocumentId) -> Result<&Document> {
        let index = self.index_of(id)?;
        let doc = &mut self.documents[index];
        doc.lifecycle = LifecycleState::Ready;
        doc.error_message = None;
        self.touch();
        Ok(&self.documents[index])
    }

    /// Record that a document's content could not be loaded
    pub fn mark_document_failed(&mut self, id: DocumentId, message: &str) -> Result<&Document> {
        let index = self.index_of(id)?;
        let doc = &mut self.documents[index];
        doc.lifecycle = LifecycleState::Error;
        doc.error_message = Some(message.to_string());
        tracing::warn!(document = %id, error = message, "document failed to load");
        self.touch();
        Ok(&self.documents[index])
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    /// Owned copy of the persistable state
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            id: self.id,
            name: self.name.clone(),
            layout_mode: self.layout_mode,
            workspace_size: self.workspace_size,
            documents: self
                .documents
                .iter()
                .map(|d| DocumentSnapshot {
                    id: d.id,
                    file_path: d.file_path.clone(),
                    title: d.title.clone(),
                    position: d.position,
                    dimensions: d.dimensions,
                    z_index: d.z_index,
                    is_active: d.is_active,
                })
                .collect(),
            created_at: self.created_at,
            last_modified: self.last_modified,
        }
    }

    /// Rebuild a workspace from a snapshot
    ///
    /// Duplicate paths or ids are rejected. A snapshot with no active document
    /// (or several) is repaired: the first flagged document wins, else the
    /// first document.
    pub fn from_snapshot(snapshot: WorkspaceSnapshot) -> Result<Self> {
        let name = validate_name(&snapshot.name)?;
        let mut documents: Vec<Document> = Vec::with_capacity(snapshot.documents.len());

        for entry in snapshot.documents {
            if entry.file_path.trim().is_empty() {
                return Err(CaddyError::InvalidFilePath);
            }
            if documents.iter().any(|d| d.file_path == entry.file_path) {
                return Err(CaddyError::DocumentAlreadyOpen(entry.file_path));
            }
            if documents.iter().any(|d| d.id == entry.id) {
                return Err(CaddyError::InvariantViolation(format!(
                    "duplicate document id {}",
                    entry.id
                )));
            }
            documents.push(Document::new(
                entry.id,
                entry.file_path,
                entry.title,
                entry.position,
                entry.dimensions,
                entry.z_index,
            ));
            if entry.is_active {
                if let Some(doc) = documents.last_mut() {
                    doc.is_active = true;
                }
            }
        }

        let active = documents
            .iter()
            .find(|d| d.is_active)
            .or(documents.first())
            .map(|d| d.id);

        let mut workspace = Self {
            id: snapshot.id,
            name,
            layout_mode: snapshot.layout_mode,
            documents,
            active_document_id: None,
            workspace_size: snapshot.workspace_size,
            created_at: snapshot.created_at,
            last_modified: snapshot.last_modified,
        };
        workspace.set_active(active);
        if workspace.documents.iter().any(|d| d.z_index == u32::MAX) {
            // Nothing could ever be raised above it
            workspace.compact_z_indices();
        }
        workspace.relayout();
        Ok(workspace)
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    /// Check every workspace invariant, reporting the first violation
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |msg: String| Err(CaddyError::InvariantViolation(msg));

        let active: Vec<&Document> = self.documents.iter().filter(|d| d.is_active).collect();
        let expected = usize::from(!self.documents.is_empty());
        if active.len() != expected {
            return violation(format!(
                "{} active documents among {}",
                active.len(),
                self.documents.len()
            ));
        }
        if active.first().map(|d| d.id) != self.active_document_id {
            return violation("active_document_id does not match active flag".to_string());
        }

        for (i, doc) in self.documents.iter().enumerate() {
            if self.documents[..i].iter().any(|d| d.file_path == doc.file_path) {
                return violation(format!("duplicate file path {}", doc.file_path));
            }
            if Dimensions::new(doc.dimensions.width(), doc.dimensions.height()).is_err() {
                return violation(format!("document {} is below minimum size", doc.id));
            }
        }

        let slots = self.layout_mode.compute(&self.documents, self.workspace_size);
        for (slot, doc) in slots.iter().zip(&self.documents) {
            if slot.frame != doc.frame || slot.visible != doc.is_visible {
                return violation(format!("document {} has stale rendered geometry", doc.id));
            }
        }
        Ok(())
    }

    /// Assert invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("workspace {}: {}", self.id, e);
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}

    // ========================================================================
    // Internals
    // ========================================================================

    fn index_of(&self, id: DocumentId) -> Result<usize> {
        self.documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| CaddyError::DocumentNotFound(id.to_string()))
    }

    /// A z-index above every document, renumbering first when the top is
    /// about to run out
    ///
    /// Stored z-indices stay below `u32::MAX` so the stacked layout can
    /// always render the active document one above the rest.
    fn next_z_index(&mut self) -> u32 {
        let top = self.documents.iter().map(|d| d.z_index).max().unwrap_or(0);
        match top.checked_add(1) {
            Some(next) if next < u32::MAX => next,
            _ => {
                self.compact_z_indices();
                self.documents.len() as u32 + 1
            }
        }
    }

    /// Renumber z-indices to `1..=n`, keeping paint order (ties by list order)
    fn compact_z_indices(&mut self) {
        let mut order: Vec<usize> = (0..self.documents.len()).collect();
        order.sort_by_key(|&i| self.documents[i].z_index);
        for (rank, i) in order.into_iter().enumerate() {
            self.documents[i].z_index = rank as u32 + 1;
        }
        tracing::debug!(workspace = %self.id, "z-indices renumbered");
    }

    fn set_active(&mut self, id: Option<DocumentId>) {
        for doc in &mut self.documents {
            doc.is_active = Some(doc.id) == id;
        }
        self.active_document_id = id;
    }

    fn ensure_freeform(&mut self) {
        if !self.layout_mode.allows_direct_manipulation() {
            tracing::debug!(from = %self.layout_mode, "manual manipulation, switching to freeform");
            self.layout_mode = LayoutMode::Freeform;
        }
    }

    /// Copy the current strategy's output into each document's rendered state
    fn relayout(&mut self) {
        let slots = self.layout_mode.compute(&self.documents, self.workspace_size);
        for (doc, slot) in self.documents.iter_mut().zip(slots) {
            doc.frame = slot.frame;
            doc.is_visible = slot.visible;
        }
    }

    fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}
