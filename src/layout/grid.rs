//! Grid layout - documents tiled in insertion order

use super::LayoutSlot;
use crate::model::{Dimensions, Document, Frame, Position, WorkspaceSize};

/// Space between neighbouring cells; each cell is inset by half of it
pub const GRID_GUTTER: f64 = 8.0;

/// Columns and rows used to tile `count` documents
///
/// `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`. Returns `(0, 0)` for no
/// documents.
pub fn grid_shape(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    (cols, rows)
}

/// Tile `documents` into equal cells
///
/// Frames never overlap while each cell is at least the minimum document
/// size plus the gutter (208x158). Smaller cells are floored at the minimum,
/// so neighbouring frames overlap.
pub(super) fn compute(documents: &[Document], size: WorkspaceSize) -> Vec<LayoutSlot> {
    let (cols, rows) = grid_shape(documents.len());
    if cols == 0 {
        return Vec::new();
    }

    let cell_width = size.width() / cols as f64;
    let cell_height = size.height() / rows as f64;
    let inset = GRID_GUTTER / 2.0;
    let dimensions = Dimensions::at_least_min(cell_width - GRID_GUTTER, cell_height - GRID_GUTTER);

    documents
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let col = index % cols;
            let row = index / cols;
            let position = Position::new(
                col as f64 * cell_width + inset,
                row as f64 * cell_height + inset,
            )
            .unwrap_or(Position::ORIGIN);
            LayoutSlot {
                id: doc.id,
                frame: Frame::new(position, dimensions, doc.z_index),
                visible: true,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::LayoutMode;
    use super::*;
    use crate::model::Workspace;

    fn workspace_with(count: usize, size: WorkspaceSize) -> Workspace {
        let mut ws = Workspace::new("grid", size).unwrap();
        for i in 0..count {
            ws.add_document(
                &format!("/doc{}.pdf", i),
                "doc",
                Position::ORIGIN,
                Dimensions::default(),
            )
            .unwrap();
        }
        ws
    }

    #[test]
    fn test_grid_shape() {
        assert_eq!(grid_shape(0), (0, 0));
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(2), (2, 1));
        assert_eq!(grid_shape(3), (2, 2));
        assert_eq!(grid_shape(4), (2, 2));
        assert_eq!(grid_shape(5), (3, 2));
        assert_eq!(grid_shape(7), (3, 3));
        assert_eq!(grid_shape(10), (4, 3));
    }

    #[test]
    fn test_single_document_fills_workspace() {
        let size = WorkspaceSize::new(1000.0, 800.0).unwrap();
        let ws = workspace_with(1, size);
        let slots = LayoutMode::Grid.compute(ws.documents(), size);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].frame.position, Position::new(4.0, 4.0).unwrap());
        assert_eq!(
            slots[0].frame.dimensions,
            Dimensions::new(992.0, 792.0).unwrap()
        );
    }

    #[test]
    fn test_cells_follow_insertion_order() {
        let size = WorkspaceSize::new(1200.0, 900.0).unwrap();
        let ws = workspace_with(5, size);
        let slots = LayoutMode::Grid.compute(ws.documents(), size);

        // 3 columns x 2 rows, cell 400x450
        let expected = [(4.0, 4.0), (404.0, 4.0), (804.0, 4.0), (4.0, 454.0), (404.0, 454.0)];
        for (slot, (x, y)) in slots.iter().zip(expected) {
            assert_eq!(slot.frame.position, Position::new(x, y).unwrap());
            assert_eq!(slot.frame.dimensions, Dimensions::new(392.0, 442.0).unwrap());
            assert!(slot.visible);
        }
        for (slot, doc) in slots.iter().zip(ws.documents()) {
            assert_eq!(slot.id, doc.id);
        }
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let size = WorkspaceSize::new(1920.0, 1080.0).unwrap();
        let ws = workspace_with(6, size);
        let slots = LayoutMode::Grid.compute(ws.documents(), size);

        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!(!a.frame.overlaps(&b.frame));
            }
        }
    }

    #[test]
    fn test_minimum_cells_just_fit() {
        // Two cells of exactly 208x158
        let size = WorkspaceSize::new(416.0, 158.0).unwrap();
        let ws = workspace_with(2, size);
        let slots = LayoutMode::Grid.compute(ws.documents(), size);

        assert_eq!(slots[0].frame.dimensions, Dimensions::MIN);
        assert_eq!(slots[1].frame.position, Position::new(212.0, 4.0).unwrap());
        assert!(!slots[0].frame.overlaps(&slots[1].frame));
    }

    #[test]
    fn test_undersized_cells_overlap() {
        let size = WorkspaceSize::new(300.0, 300.0).unwrap();
        let ws = workspace_with(2, size);
        let slots = LayoutMode::Grid.compute(ws.documents(), size);

        assert_eq!(slots[1].frame.position, Position::new(154.0, 4.0).unwrap());
        assert_eq!(slots[0].frame.dimensions.width(), 200.0);
        assert!(slots[0].frame.overlaps(&slots[1].frame));
    }

    #[test]
    fn test_empty_workspace_is_noop() {
        let size = WorkspaceSize::default();
        let ws = workspace_with(0, size);
        assert!(LayoutMode::Grid.compute(ws.documents(), size).is_empty());
    }
}
