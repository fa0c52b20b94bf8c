//! JSON file persistence
//!
//! One pretty-printed `<workspace id>.json` per workspace plus a single
//! `panels.json`, all in one directory. Writes go to a sibling temp file
//! first and are renamed into place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;

use super::{sort_summaries, PersistenceGateway};
use crate::error::{CaddyError, PersistenceError, Result};
use crate::model::{WorkspaceId, WorkspaceSnapshot, WorkspaceSummary};
use crate::panel::PanelSnapshot;

/// File name of the stored panel visibility
pub const PANELS_FILE: &str = "panels.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    /// Use `directory`, creating it if needed
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory).map_err(|source| PersistenceError::Io {
            path: directory.clone(),
            source,
        })?;
        tracing::debug!("workspace store at {}", directory.display());
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn workspace_path(&self, id: &WorkspaceId) -> PathBuf {
        self.directory.join(format!("{}.json", id))
    }

    fn panels_path(&self) -> PathBuf {
        self.directory.join(PANELS_FILE)
    }
}

impl PersistenceGateway for JsonFileStore {
    fn save(&mut self, snapshot: &WorkspaceSnapshot) -> Result<()> {
        let path = self.workspace_path(&snapshot.id);
        write_json(&path, snapshot)?;
        tracing::info!(
            workspace = %snapshot.id,
            documents = snapshot.documents.len(),
            "saved workspace to {}",
            path.display()
        );
        Ok(())
    }

    fn load(&self, id: &WorkspaceId) -> Result<WorkspaceSnapshot> {
        let path = self.workspace_path(id);
        if !path.exists() {
            return Err(CaddyError::WorkspaceNotFound(id.to_string()));
        }
        let snapshot: WorkspaceSnapshot = read_json(&path)?;
        if snapshot.id != *id {
            return Err(CaddyError::InvariantViolation(format!(
                "{} holds workspace {}",
                path.display(),
                snapshot.id
            )));
        }
        tracing::debug!(workspace = %id, "loaded workspace");
        Ok(snapshot)
    }

    fn list(&self) -> Result<Vec<WorkspaceSummary>> {
        let entries = fs::read_dir(&self.directory).map_err(|source| PersistenceError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let mut summaries = Vec::new();
        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            let is_workspace = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.ends_with(".json") && n != PANELS_FILE)
                .unwrap_or(false);
            if !is_workspace {
                continue;
            }

            // One unreadable file should not hide every other workspace
            match read_json::<WorkspaceSnapshot>(&path) {
                Ok(snapshot) => summaries.push(WorkspaceSummary::from(&snapshot)),
                Err(e) => tracing::warn!("Skipping unreadable workspace file: {}", e),
            }
        }

        sort_summaries(&mut summaries);
        Ok(summaries)
    }

    fn save_panels(&mut self, panels: &PanelSnapshot) -> Result<()> {
        write_json(&self.panels_path(), panels)?;
        tracing::info!(state = %panels.state, "saved panel visibility");
        Ok(())
    }

    fn load_panels(&self) -> Result<Option<PanelSnapshot>> {
        let path = self.panels_path();
        if !path.exists() {
            return Ok(None);
        }
        read_json(&path).map(Some)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| match source.classify() {
        // Well-formed JSON that fails validation will not get better on retry
        Category::Data => CaddyError::InvalidStoredData {
            path: path.to_path_buf(),
            source,
        },
        _ => PersistenceError::Json {
            path: path.to_path_buf(),
            source,
        }
        .into(),
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).map_err(|source| PersistenceError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)
        .and_then(|()| fs::rename(&tmp, path))
        .map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}
