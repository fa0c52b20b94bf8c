//! Shared helpers for benchmarks

use caddy::config::CaddyConfig;
use caddy::layout::LayoutMode;
use caddy::model::{AppModel, Dimensions, Position, Workspace, WorkspaceSize};

/// Create a workspace with `count` documents spread across a 1920x1080 canvas
#[allow(dead_code)]
pub fn make_workspace(count: usize, mode: LayoutMode) -> Workspace {
    let size = WorkspaceSize::new(1920.0, 1080.0).unwrap();
    let mut workspace = Workspace::with_layout_mode("Bench", size, mode).unwrap();
    for i in 0..count {
        let offset = (i % 32) as f64 * 24.0;
        workspace
            .add_document(
                &format!("/bench/{}.pdf", i),
                &format!("Document {}", i),
                Position::new(offset, offset).unwrap(),
                Dimensions::new(480.0, 360.0).unwrap(),
            )
            .unwrap();
    }
    workspace
}

/// Create an AppModel around [`make_workspace`]
#[allow(dead_code)]
pub fn make_model(count: usize, mode: LayoutMode) -> AppModel {
    AppModel::from_workspace(make_workspace(count, mode), CaddyConfig::default())
}
