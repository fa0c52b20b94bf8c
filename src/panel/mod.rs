//! Panel system - which side panel is open and which of its sections show
//!
//! ## Architecture
//!
//! - `PanelState`: the five mutually exclusive panel configurations
//! - `SectionVisibility`: file explorer / category explorer flags
//! - `PanelVisibility`: the state machine plus the remembered "last valid"
//!   section pair used to reopen the Files & Categories panel
//! - `PanelSnapshot`: flat persisted form
//!
//! ## Integration
//!
//! Panel visibility is independent of the workspace: it is driven by
//! `Msg::Panel` through `update::update_panel` and persisted through the
//! `PersistenceGateway` panel methods.

mod visibility;

pub use visibility::{PanelSnapshot, PanelState, PanelVisibility, SectionVisibility};
