//! Workspace and panel persistence
//!
//! The core never decides where state lives. Callers hand owned snapshots
//! to a [`PersistenceGateway`] chosen up front from configuration via
//! [`open_gateway`].

mod json_store;
mod memory;

pub use json_store::{JsonFileStore, PANELS_FILE};
pub use memory::MemoryStore;

use crate::config::{PersistenceBackend, PersistenceConfig};
use crate::error::{CaddyError, PersistenceError, Result};
use crate::layout::LayoutMode;
use crate::model::{Workspace, WorkspaceId, WorkspaceSize, WorkspaceSnapshot, WorkspaceSummary};
use crate::panel::PanelSnapshot;

/// Storage capability for workspaces and panel visibility
pub trait PersistenceGateway {
    /// Store a workspace, replacing any earlier copy with the same id
    fn save(&mut self, snapshot: &WorkspaceSnapshot) -> Result<()>;

    /// Fetch a workspace; `WorkspaceNotFound` when nothing is stored under `id`
    fn load(&self, id: &WorkspaceId) -> Result<WorkspaceSnapshot>;

    /// Every stored workspace, most recently modified first
    fn list(&self) -> Result<Vec<WorkspaceSummary>>;

    fn save_panels(&mut self, panels: &PanelSnapshot) -> Result<()>;

    /// `None` until panels have been saved at least once
    fn load_panels(&self) -> Result<Option<PanelSnapshot>>;
}

/// Build the gateway named by `config`
pub fn open_gateway(config: &PersistenceConfig) -> Result<Box<dyn PersistenceGateway>> {
    match config.backend {
        PersistenceBackend::Memory => {
            tracing::debug!("using in-memory persistence");
            Ok(Box::new(MemoryStore::new()))
        }
        PersistenceBackend::Json => {
            let directory = config
                .directory
                .clone()
                .or_else(crate::config_paths::workspaces_dir)
                .ok_or(PersistenceError::NoStorageDirectory)?;
            Ok(Box::new(JsonFileStore::open(directory)?))
        }
    }
}

/// Create a workspace and store it, refusing names already in use
pub fn create_workspace(
    gateway: &mut dyn PersistenceGateway,
    name: &str,
    size: WorkspaceSize,
    layout_mode: LayoutMode,
) -> Result<Workspace> {
    let workspace = Workspace::with_layout_mode(name, size, layout_mode)?;
    if gateway
        .list()?
        .iter()
        .any(|summary| summary.name == workspace.name())
    {
        return Err(CaddyError::WorkspaceNameAlreadyExists(
            workspace.name().to_string(),
        ));
    }

    gateway.save(&workspace.snapshot())?;
    tracing::info!(workspace = %workspace.id(), name = workspace.name(), "workspace created");
    Ok(workspace)
}

/// Load and re-validate a stored workspace
pub fn load_workspace(gateway: &dyn PersistenceGateway, id: &WorkspaceId) -> Result<Workspace> {
    Workspace::from_snapshot(gateway.load(id)?)
}

fn sort_summaries(summaries: &mut [WorkspaceSummary]) {
    summaries.sort_by(|a, b| {
        b.last_modified
            .cmp(&a.last_modified)
            .then_with(|| a.name.cmp(&b.name))
    });
}
