//! Integration tests for workspace commands
//!
//! Tests the document set, activation, geometry commands and snapshots.

mod common;

use common::{active_count, add_doc, dims, pos, size, test_workspace};

use caddy::error::{CaddyError, ErrorKind};
use caddy::layout::LayoutMode;
use caddy::model::{DocumentId, LifecycleState, Workspace};

// ============================================================================
// Document set
// ============================================================================

#[test]
fn test_first_document_becomes_active() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let b = add_doc(&mut ws, "/b.pdf", (50.0, 50.0), (400.0, 300.0));

    assert_eq!(ws.active_document_id(), Some(a));
    assert!(!ws.document(b).unwrap().is_active);
    assert_eq!(active_count(&ws), 1);
}

#[test]
fn test_new_documents_stack_on_top() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let b = add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));
    assert!(ws.document(b).unwrap().z_index > ws.document(a).unwrap().z_index);

    let order: Vec<DocumentId> = ws.paint_order().iter().map(|d| d.id).collect();
    assert_eq!(order, vec![a, b]);
}

#[test]
fn test_new_documents_start_loading() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    assert_eq!(ws.document(a).unwrap().lifecycle, LifecycleState::Loading);

    ws.mark_document_ready(a).unwrap();
    assert!(ws.document(a).unwrap().is_ready());

    ws.mark_document_failed(a, "unsupported format").unwrap();
    let doc = ws.document(a).unwrap();
    assert_eq!(doc.lifecycle, LifecycleState::Error);
    assert_eq!(doc.error_message.as_deref(), Some("unsupported format"));
}

#[test]
fn test_duplicate_path_is_conflict() {
    let mut ws = test_workspace(1600.0, 1000.0);
    add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let err = ws
        .add_document("/a.pdf", "again", pos(0.0, 0.0), dims(400.0, 300.0))
        .unwrap_err();
    assert!(matches!(err, CaddyError::DocumentAlreadyOpen(ref p) if p == "/a.pdf"));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(ws.len(), 1);
}

#[test]
fn test_empty_path_rejected() {
    let mut ws = test_workspace(1600.0, 1000.0);
    assert!(matches!(
        ws.add_document("", "blank", pos(0.0, 0.0), dims(400.0, 300.0)),
        Err(CaddyError::InvalidFilePath)
    ));
}

#[test]
fn test_remove_active_prefers_predecessor() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let b = add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));
    let c = add_doc(&mut ws, "/c.pdf", (0.0, 0.0), (400.0, 300.0));

    ws.activate_document(c).unwrap();
    ws.remove_document(c).unwrap();
    assert_eq!(ws.active_document_id(), Some(b));

    ws.activate_document(a).unwrap();
    ws.remove_document(a).unwrap();
    assert_eq!(ws.active_document_id(), Some(b));

    ws.remove_document(b).unwrap();
    assert_eq!(ws.active_document_id(), None);
    assert_eq!(active_count(&ws), 0);
}

#[test]
fn test_remove_inactive_keeps_active() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let b = add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));
    ws.remove_document(b).unwrap();
    assert_eq!(ws.active_document_id(), Some(a));
}

#[test]
fn test_remove_unknown_document() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let err = ws.remove_document(DocumentId::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_remove_all_documents() {
    let mut ws = test_workspace(1600.0, 1000.0);
    add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));
    ws.remove_all_documents();
    assert!(ws.is_empty());
    assert_eq!(ws.active_document(), None);
    ws.check_invariants().unwrap();
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_move_and_resize_switch_to_freeform() {
    for mode in [LayoutMode::Stacked, LayoutMode::Grid] {
        let mut ws = test_workspace(1600.0, 1000.0);
        let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
        ws.switch_layout_mode(mode);
        ws.move_document(a, pos(10.0, 10.0)).unwrap();
        assert_eq!(ws.layout_mode(), LayoutMode::Freeform);

        ws.switch_layout_mode(mode);
        ws.resize_document(a, dims(500.0, 400.0)).unwrap();
        assert_eq!(ws.layout_mode(), LayoutMode::Freeform);
    }
}

#[test]
fn test_move_clamps_to_bounds() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let doc = ws.move_document(a, pos(-50.0, 5000.0)).unwrap();
    assert_eq!((doc.position.x(), doc.position.y()), (0.0, 700.0));
}

#[test]
fn test_resize_never_below_minimum() {
    assert!(matches!(
        caddy::model::Dimensions::new(199.0, 400.0),
        Err(CaddyError::InvalidDimensions { .. })
    ));
    let mut ws = test_workspace(300.0, 200.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (200.0, 150.0));
    let doc = ws.resize_document(a, dims(900.0, 900.0)).unwrap();
    assert_eq!(doc.dimensions, dims(300.0, 200.0));
}

#[test]
fn test_tiny_workspace_keeps_minimum_dimensions() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (100.0, 100.0), (400.0, 300.0));
    ws.update_workspace_size(size(120.0, 90.0));
    let doc = ws.document(a).unwrap();
    assert_eq!(doc.dimensions, dims(200.0, 150.0));
    assert_eq!(doc.position, pos(0.0, 0.0));
    ws.check_invariants().unwrap();
}

#[test]
fn test_activate_unknown_document() {
    let mut ws = test_workspace(1600.0, 1000.0);
    add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    assert!(matches!(
        ws.activate_document(DocumentId::new()),
        Err(CaddyError::DocumentNotFound(_))
    ));
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn test_workspace_name_validation() {
    assert!(Workspace::new("  ", size(800.0, 600.0)).is_err());
    assert!(Workspace::new(&"x".repeat(121), size(800.0, 600.0)).is_err());
    let ws = Workspace::new(&"x".repeat(120), size(800.0, 600.0)).unwrap();
    assert_eq!(ws.name().len(), 120);

    let mut ws = Workspace::new("  Thesis  ", size(800.0, 600.0)).unwrap();
    assert_eq!(ws.name(), "Thesis");
    assert!(ws.rename("").is_err());
    assert_eq!(ws.name(), "Thesis");
}

#[test]
fn test_commands_touch_last_modified() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let before = ws.last_modified();
    std::thread::sleep(std::time::Duration::from_millis(5));
    add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    assert!(ws.last_modified() > before);
    assert_eq!(ws.created_at(), before);
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_snapshot_round_trip_preserves_geometry_and_mode() {
    let mut ws = test_workspace(1600.0, 1000.0);
    add_doc(&mut ws, "/a.pdf", (10.0, 20.0), (400.0, 300.0));
    let b = add_doc(&mut ws, "/b.pdf", (300.0, 200.0), (640.0, 480.0));
    ws.activate_document(b).unwrap();
    ws.switch_layout_mode(LayoutMode::Grid);

    let json = serde_json::to_string(&ws.snapshot()).unwrap();
    let restored = Workspace::from_snapshot(serde_json::from_str(&json).unwrap()).unwrap();

    assert_eq!(restored.snapshot(), ws.snapshot());
    assert_eq!(restored.layout_mode(), LayoutMode::Grid);
    assert_eq!(restored.active_document_id(), Some(b));
    // Rendered frames are recomputed on load
    for (a, b) in restored.documents().iter().zip(ws.documents()) {
        assert_eq!(a.frame, b.frame);
    }
}

#[test]
fn test_snapshot_with_no_active_document_is_repaired() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));

    let mut snapshot = ws.snapshot();
    for doc in &mut snapshot.documents {
        doc.is_active = false;
    }
    let restored = Workspace::from_snapshot(snapshot).unwrap();
    assert_eq!(restored.active_document_id(), Some(a));
    restored.check_invariants().unwrap();
}

#[test]
fn test_snapshot_with_two_active_documents_is_repaired() {
    let mut ws = test_workspace(1600.0, 1000.0);
    add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let b = add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));
    let c = add_doc(&mut ws, "/c.pdf", (0.0, 0.0), (400.0, 300.0));

    let mut snapshot = ws.snapshot();
    snapshot.documents[0].is_active = false;
    snapshot.documents[1].is_active = true;
    snapshot.documents[2].is_active = true;
    let restored = Workspace::from_snapshot(snapshot).unwrap();
    assert_eq!(restored.active_document_id(), Some(b));
    assert!(!restored.document(c).unwrap().is_active);
    assert_eq!(active_count(&restored), 1);
}

#[test]
fn test_snapshot_with_duplicate_paths_rejected() {
    let mut ws = test_workspace(1600.0, 1000.0);
    add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));

    let mut snapshot = ws.snapshot();
    snapshot.documents[1].file_path = "/a.pdf".into();
    assert!(matches!(
        Workspace::from_snapshot(snapshot),
        Err(CaddyError::DocumentAlreadyOpen(_))
    ));
}

#[test]
fn test_z_index_near_limit_keeps_paint_order() {
    let mut ws = test_workspace(1600.0, 1000.0);
    let a = add_doc(&mut ws, "/a.pdf", (0.0, 0.0), (400.0, 300.0));
    let b = add_doc(&mut ws, "/b.pdf", (0.0, 0.0), (400.0, 300.0));

    let mut snapshot = ws.snapshot();
    snapshot.documents[0].z_index = u32::MAX - 1;
    snapshot.documents[1].z_index = 3;
    let mut restored = Workspace::from_snapshot(snapshot).unwrap();
    assert_eq!(restored.document(a).unwrap().z_index, u32::MAX - 1);

    // No room above `a`: everything is renumbered and the new document lands on top
    let c = add_doc(&mut restored, "/c.pdf", (0.0, 0.0), (400.0, 300.0));
    let order: Vec<DocumentId> = restored.paint_order().iter().map(|d| d.id).collect();
    assert_eq!(order, vec![b, a, c]);
    assert_eq!(restored.document(c).unwrap().z_index, 3);

    restored.activate_document(b).unwrap();
    restored.switch_layout_mode(LayoutMode::Stacked);
    let top = restored.documents().iter().map(|d| d.frame.z_index).max().unwrap();
    assert_eq!(restored.document(b).unwrap().frame.z_index, top);
    restored.check_invariants().unwrap();
}
