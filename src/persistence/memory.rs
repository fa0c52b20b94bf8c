//! In-memory persistence, for tests and throwaway sessions

use std::collections::HashMap;

use super::{sort_summaries, PersistenceGateway};
use crate::error::{CaddyError, Result};
use crate::model::{WorkspaceId, WorkspaceSnapshot, WorkspaceSummary};
use crate::panel::PanelSnapshot;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    workspaces: HashMap<WorkspaceId, WorkspaceSnapshot>,
    panels: Option<PanelSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceGateway for MemoryStore {
    fn save(&mut self, snapshot: &WorkspaceSnapshot) -> Result<()> {
        self.workspaces.insert(snapshot.id, snapshot.clone());
        Ok(())
    }

    fn load(&self, id: &WorkspaceId) -> Result<WorkspaceSnapshot> {
        self.workspaces
            .get(id)
            .cloned()
            .ok_or_else(|| CaddyError::WorkspaceNotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<WorkspaceSummary>> {
        let mut summaries: Vec<WorkspaceSummary> =
            self.workspaces.values().map(WorkspaceSummary::from).collect();
        sort_summaries(&mut summaries);
        Ok(summaries)
    }

    fn save_panels(&mut self, panels: &PanelSnapshot) -> Result<()> {
        self.panels = Some(panels.clone());
        Ok(())
    }

    fn load_panels(&self) -> Result<Option<PanelSnapshot>> {
        Ok(self.panels.clone())
    }
}
