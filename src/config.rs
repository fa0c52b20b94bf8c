//! Caddy configuration
//!
//! Stores user preferences in `~/.config/caddy/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::LayoutMode;
use crate::model::WorkspaceSize;

/// Where workspaces and panel state are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// One JSON file per workspace on disk
    #[default]
    Json,
    /// Nothing survives the process
    Memory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub backend: PersistenceBackend,
    /// Storage directory for the JSON backend; defaults to
    /// `~/.config/caddy/workspaces/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaddyConfig {
    /// Layout mode for newly created workspaces
    #[serde(default)]
    pub default_layout_mode: LayoutMode,
    /// Workspace size assumed until the window reports its real size
    #[serde(default)]
    pub workspace_size: WorkspaceSize,
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl CaddyConfig {
    /// Load config from the standard location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: CaddyConfig = serde_yaml::from_str("default_layout_mode: grid\n").unwrap();
        assert_eq!(config.default_layout_mode, LayoutMode::Grid);
        assert_eq!(config.workspace_size, WorkspaceSize::default());
        assert_eq!(config.persistence.backend, PersistenceBackend::Json);
        assert_eq!(config.persistence.directory, None);
    }

    #[test]
    fn test_memory_backend() {
        let yaml = "persistence:\n  backend: memory\n";
        let config: CaddyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.persistence.backend, PersistenceBackend::Memory);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let yaml = "workspace_size:\n  width: -5\n  height: 800\n";
        assert!(serde_yaml::from_str::<CaddyConfig>(yaml).is_err());
    }
}
