//! Freeform layout - rendered geometry is the stored geometry

use super::LayoutSlot;
use crate::model::Document;

pub(super) fn compute(documents: &[Document]) -> Vec<LayoutSlot> {
    documents
        .iter()
        .map(|doc| LayoutSlot {
            id: doc.id,
            frame: doc.stored_frame(),
            visible: true,
        })
        .collect()
}
