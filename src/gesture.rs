//! Drag and resize coalescing
//!
//! Pointer gestures fire far more often than the screen redraws. Pending
//! values are kept per document, latest wins, and committed to the
//! workspace once per render tick via [`GestureBuffer::flush`].

use crate::error::CaddyError;
use crate::model::{Dimensions, DocumentId, Position, Workspace};

/// Pending values for one document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PendingGesture {
    position: Option<(f64, f64)>,
    dimensions: Option<(f64, f64)>,
}

/// Outcome of a single flush
#[derive(Debug, Default)]
pub struct FlushReport {
    /// Documents whose stored geometry was updated
    pub applied: Vec<DocumentId>,
    /// Values the workspace refused, with the reason
    pub rejected: Vec<(DocumentId, CaddyError)>,
}

impl FlushReport {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.rejected.is_empty()
    }
}

/// Latest-wins buffer of in-flight drag/resize values
#[derive(Debug, Default, Clone)]
pub struct GestureBuffer {
    // Insertion ordered; a handful of entries at most
    pending: Vec<(DocumentId, PendingGesture)>,
}

impl GestureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: DocumentId) -> bool {
        self.pending.iter().any(|(pending_id, _)| *pending_id == id)
    }

    /// Record a drag position, replacing any earlier one for `id`
    pub fn push_move(&mut self, id: DocumentId, x: f64, y: f64) {
        self.entry(id).position = Some((x, y));
    }

    /// Record a resize, replacing any earlier one for `id`
    pub fn push_resize(&mut self, id: DocumentId, width: f64, height: f64) {
        self.entry(id).dimensions = Some((width, height));
    }

    /// Drop whatever is pending for `id`; returns whether anything was
    pub fn cancel(&mut self, id: DocumentId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(pending_id, _)| *pending_id != id);
        before != self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Commit every pending gesture, in the order documents were first touched
    ///
    /// Each document's values go through the normal workspace commands, so
    /// the same validation and freeform auto-switch apply. A rejected value
    /// leaves that document untouched.
    pub fn flush(&mut self, workspace: &mut Workspace) -> FlushReport {
        let mut report = FlushReport::default();

        for (id, gesture) in self.pending.drain(..) {
            match apply(workspace, id, gesture) {
                Ok(()) => report.applied.push(id),
                Err(e) => {
                    tracing::debug!(document = %id, error = %e, "gesture rejected");
                    report.rejected.push((id, e));
                }
            }
        }

        if !report.is_empty() {
            tracing::debug!(
                applied = report.applied.len(),
                rejected = report.rejected.len(),
                "gestures flushed"
            );
        }
        report
    }

    fn entry(&mut self, id: DocumentId) -> &mut PendingGesture {
        let index = match self.pending.iter().position(|(pending_id, _)| *pending_id == id) {
            Some(index) => index,
            None => {
                self.pending.push((id, PendingGesture::default()));
                self.pending.len() - 1
            }
        };
        &mut self.pending[index].1
    }
}

fn apply(
    workspace: &mut Workspace,
    id: DocumentId,
    gesture: PendingGesture,
) -> Result<(), CaddyError> {
    // Validate everything before touching the workspace
    let dimensions = gesture
        .dimensions
        .map(|(w, h)| Dimensions::new(w, h))
        .transpose()?;
    let position = gesture
        .position
        .map(|(x, y)| Position::new(x, y))
        .transpose()?;

    if workspace.document(id).is_none() {
        return Err(CaddyError::DocumentNotFound(id.to_string()));
    }
    if let Some(dimensions) = dimensions {
        workspace.resize_document(id, dimensions)?;
    }
    if let Some(position) = position {
        workspace.move_document(id, position)?;
    }
    Ok(())
}
