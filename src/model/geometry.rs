//! Geometry primitives shared by the workspace and the layout strategies
//!
//! All values are immutable once constructed. Constructors validate
//! finiteness (and minimums for [`Dimensions`]) so the rest of the crate can
//! rely on every `Position`/`Dimensions` it holds being usable.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CaddyError, Result};

/// Smallest width a document may have, in logical pixels
pub const MIN_DOCUMENT_WIDTH: f64 = 200.0;
/// Smallest height a document may have, in logical pixels
pub const MIN_DOCUMENT_HEIGHT: f64 = 150.0;

// ============================================================================
// Position
// ============================================================================

/// Top-left corner of a document, relative to the workspace origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(CaddyError::InvalidPosition { x, y });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Keep a rectangle of `dimensions` anchored here inside `bounds`
    ///
    /// When the rectangle is larger than the workspace on an axis it is pinned
    /// to 0 on that axis.
    pub fn clamp_to_bounds(&self, dimensions: Dimensions, bounds: WorkspaceSize) -> Self {
        let max_x = (bounds.width() - dimensions.width()).max(0.0);
        let max_y = (bounds.height() - dimensions.height()).max(0.0);
        Self {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
        }
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            x: f64,
            y: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Position::new(raw.x, raw.y).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Dimensions
// ============================================================================

/// Size of a document; never smaller than [`MIN_DOCUMENT_WIDTH`] x [`MIN_DOCUMENT_HEIGHT`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    width: f64,
    height: f64,
}

/// Unvalidated `{width, height}` pair as it appears on the wire
#[derive(Deserialize)]
struct RawSize {
    width: f64,
    height: f64,
}

impl Dimensions {
    pub const MIN: Dimensions = Dimensions {
        width: MIN_DOCUMENT_WIDTH,
        height: MIN_DOCUMENT_HEIGHT,
    };

    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = width.is_finite()
            && height.is_finite()
            && width >= MIN_DOCUMENT_WIDTH
            && height >= MIN_DOCUMENT_HEIGHT;
        if !valid {
            return Err(CaddyError::InvalidDimensions {
                width,
                height,
                min_width: MIN_DOCUMENT_WIDTH,
                min_height: MIN_DOCUMENT_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }

    /// Build dimensions from computed values, flooring each axis at the minimum
    ///
    /// Used by layout strategies whose cells can get smaller than a document
    /// is allowed to be. Non-finite input collapses to the minimum.
    pub fn at_least_min(width: f64, height: f64) -> Self {
        let width = if width.is_finite() { width } else { 0.0 };
        let height = if height.is_finite() { height } else { 0.0 };
        Self {
            width: width.max(MIN_DOCUMENT_WIDTH),
            height: height.max(MIN_DOCUMENT_HEIGHT),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Shrink to fit inside `bounds`, but never below the minimum
    pub fn clamp_to_bounds(&self, bounds: WorkspaceSize) -> Self {
        Self::at_least_min(
            self.width.min(bounds.width()),
            self.height.min(bounds.height()),
        )
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawSize::deserialize(deserializer)?;
        Dimensions::new(raw.width, raw.height).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Workspace size
// ============================================================================

/// Size of the area documents are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkspaceSize {
    width: f64,
    height: f64,
}

impl WorkspaceSize {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !valid {
            return Err(CaddyError::InvalidDimensions {
                width,
                height,
                min_width: 0.0,
                min_height: 0.0,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for WorkspaceSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl<'de> Deserialize<'de> for WorkspaceSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawSize::deserialize(deserializer)?;
        WorkspaceSize::new(raw.width, raw.height).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Frame
// ============================================================================

/// Complete on-screen geometry of one document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub position: Position,
    pub dimensions: Dimensions,
    pub z_index: u32,
}

impl Frame {
    pub fn new(position: Position, dimensions: Dimensions, z_index: u32) -> Self {
        Self {
            position,
            dimensions,
            z_index,
        }
    }

    /// Clamp dimensions first, then position, so the frame fits `bounds`
    pub fn clamped(&self, bounds: WorkspaceSize) -> Self {
        let dimensions = self.dimensions.clamp_to_bounds(bounds);
        Self {
            position: self.position.clamp_to_bounds(dimensions, bounds),
            dimensions,
            z_index: self.z_index,
        }
    }

    pub fn right(&self) -> f64 {
        self.position.x() + self.dimensions.width()
    }

    pub fn bottom(&self) -> f64 {
        self.position.y() + self.dimensions.height()
    }

    /// Whether two frames share any area (touching edges do not count)
    pub fn overlaps(&self, other: &Frame) -> bool {
        self.position.x() < other.right()
            && other.position.x() < self.right()
            && self.position.y() < other.bottom()
            && other.position.y() < self.bottom()
    }
}
