//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. A failed message
//! returns the error and leaves the model exactly as it was.

mod gesture;
mod panel;
mod workspace;

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use gesture::update_gesture;
pub use panel::update_panel;
pub use workspace::update_workspace;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Result<Option<Cmd>> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Result<Option<Cmd>> {
    match msg {
        Msg::Workspace(m) => workspace::update_workspace(model, m),
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Gesture(m) => gesture::update_gesture(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state, logs the diff and asserts workspace
/// invariants. Gesture pushes fire on every pointer event, so they are not
/// logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Result<Option<Cmd>> {
    use crate::messages::GestureMsg;

    let is_noisy = matches!(
        &msg,
        Msg::Gesture(GestureMsg::Move { .. } | GestureMsg::Resize { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::capture(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Err(ref e) = result {
        debug!(target: "message", msg = %msg_name, error = %e, "rejected");
    }

    let after = LayoutSnapshot::capture(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    if let Err(e) = model.workspace.check_invariants() {
        panic!("after {}: {}", msg_name, e);
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Workspace::SwitchLayoutMode(Grid)`
/// - `Panel::ToggleSearch`
/// - `Gesture::Flush`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Workspace(m) => format!("Workspace::{:?}", m),
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Gesture(m) => format!("Gesture::{:?}", m),
    }
}
