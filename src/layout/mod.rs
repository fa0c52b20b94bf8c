//! Layout strategies - how document geometry is rendered
//!
//! Each [`LayoutMode`] maps to one pure function from a document list and a
//! workspace size to a list of [`LayoutSlot`]s. Strategies never touch a
//! document's stored geometry; the workspace copies the computed slots into
//! each document's rendered `frame` / `is_visible`.
//!
//! - `Stacked`: every document fills the workspace, only the active one shows
//! - `Grid`: documents tiled in insertion order, `ceil(sqrt(n))` columns
//! - `Freeform`: stored geometry passes straight through

mod freeform;
mod grid;
mod stacked;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CaddyError, Result};
use crate::model::{Document, DocumentId, Frame, WorkspaceSize};

pub use grid::{grid_shape, GRID_GUTTER};
pub use stacked::STACK_MARGIN;

/// Strategy governing how document geometry is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Stacked,
    Grid,
    #[default]
    Freeform,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Stacked, LayoutMode::Grid, LayoutMode::Freeform];

    /// Compute the rendered geometry for `documents` under this mode
    pub fn compute(&self, documents: &[Document], size: WorkspaceSize) -> Vec<LayoutSlot> {
        match self {
            LayoutMode::Stacked => stacked::compute(documents, size),
            LayoutMode::Grid => grid::compute(documents, size),
            LayoutMode::Freeform => freeform::compute(documents),
        }
    }

    /// Whether dragging and resizing maps directly onto stored geometry
    pub fn allows_direct_manipulation(&self) -> bool {
        matches!(self, LayoutMode::Freeform)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Stacked => "stacked",
            LayoutMode::Grid => "grid",
            LayoutMode::Freeform => "freeform",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LayoutMode::Stacked => "Stacked",
            LayoutMode::Grid => "Grid",
            LayoutMode::Freeform => "Freeform",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = CaddyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stacked" => Ok(LayoutMode::Stacked),
            "grid" => Ok(LayoutMode::Grid),
            "freeform" => Ok(LayoutMode::Freeform),
            _ => Err(CaddyError::InvalidLayoutMode(s.to_string())),
        }
    }
}

/// Rendered geometry for one document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSlot {
    pub id: DocumentId,
    pub frame: Frame,
    pub visible: bool,
}
