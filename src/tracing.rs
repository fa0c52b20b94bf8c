//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging layout
//! and panel state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=caddy::persistence=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/caddy/logs/caddy.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::layout::LayoutMode;
use crate::model::{AppModel, DocumentId, Frame};
use crate::panel::PanelState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// to `~/.config/caddy/logs/caddy.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so command output on stdout stays parseable
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout and panel state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub layout_mode: LayoutMode,
    pub active: Option<DocumentId>,
    pub panel_state: PanelState,
    pub documents: Vec<DocumentInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub id: DocumentId,
    pub frame: Frame,
    pub visible: bool,
}

impl LayoutSnapshot {
    pub fn capture(model: &AppModel) -> Self {
        Self {
            layout_mode: model.workspace.layout_mode(),
            active: model.workspace.active_document_id(),
            panel_state: model.panels.state(),
            documents: model
                .workspace
                .documents()
                .iter()
                .map(|d| DocumentInfo {
                    id: d.id,
                    frame: d.frame,
                    visible: d.is_visible,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.layout_mode != other.layout_mode {
            changes.push(format!("mode: {} → {}", self.layout_mode, other.layout_mode));
        }
        if self.panel_state != other.panel_state {
            changes.push(format!("panels: {} → {}", self.panel_state, other.panel_state));
        }
        if self.active != other.active {
            changes.push(format!(
                "active: {} → {}",
                describe(self.active),
                describe(other.active)
            ));
        }

        if self.documents.len() != other.documents.len() {
            changes.push(format!(
                "documents: {} → {}",
                self.documents.len(),
                other.documents.len()
            ));
        } else {
            for (before, after) in self.documents.iter().zip(&other.documents) {
                if before.frame != after.frame {
                    let (b, a) = (before.frame, after.frame);
                    changes.push(format!(
                        "{}: ({},{} {}x{} z{}) → ({},{} {}x{} z{})",
                        after.id,
                        b.position.x(),
                        b.position.y(),
                        b.dimensions.width(),
                        b.dimensions.height(),
                        b.z_index,
                        a.position.x(),
                        a.position.y(),
                        a.dimensions.width(),
                        a.dimensions.height(),
                        a.z_index
                    ));
                }
                if before.visible != after.visible {
                    let status = if after.visible { "shown" } else { "hidden" };
                    changes.push(format!("{}: {}", after.id, status));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(id: Option<DocumentId>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string())
}
