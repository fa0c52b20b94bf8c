//! Stacked layout - one document at a time, filling the workspace

use super::LayoutSlot;
use crate::model::{Dimensions, Document, Frame, Position, WorkspaceSize};

/// Inset from every workspace edge, in logical pixels
pub const STACK_MARGIN: f64 = 16.0;

pub(super) fn compute(documents: &[Document], size: WorkspaceSize) -> Vec<LayoutSlot> {
    let dimensions = Dimensions::at_least_min(
        size.width() - 2.0 * STACK_MARGIN,
        size.height() - 2.0 * STACK_MARGIN,
    );
    let position = Position::new(STACK_MARGIN, STACK_MARGIN).unwrap_or(Position::ORIGIN);
    let top_z = documents
        .iter()
        .map(|d| d.z_index)
        .max()
        .unwrap_or(0)
        .saturating_add(1);

    documents
        .iter()
        .map(|doc| LayoutSlot {
            id: doc.id,
            frame: Frame::new(
                position,
                dimensions,
                if doc.is_active { top_z } else { doc.z_index },
            ),
            visible: doc.is_active,
        })
        .collect()
}
