//! Gesture update handlers - buffer pointer updates, commit on flush

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::GestureMsg;
use crate::model::AppModel;

/// Handle gesture messages
///
/// Pushes only touch the buffer; nothing is drawn or saved until `Flush`.
pub fn update_gesture(model: &mut AppModel, msg: GestureMsg) -> Result<Option<Cmd>> {
    match msg {
        GestureMsg::Move { id, x, y } => {
            model.gestures.push_move(id, x, y);
            Ok(None)
        }
        GestureMsg::Resize { id, width, height } => {
            model.gestures.push_resize(id, width, height);
            Ok(None)
        }
        GestureMsg::Cancel(id) => {
            // Rendered geometry never saw the pending values
            model.gestures.cancel(id);
            Ok(None)
        }
        GestureMsg::Flush => {
            let report = model.gestures.flush(&mut model.workspace);
            let mut cmds = Vec::new();
            if !report.applied.is_empty() {
                cmds.push(Cmd::redraw_and_save(model.workspace.snapshot()));
            }
            if let Some((_, e)) = report.rejected.first() {
                cmds.push(Cmd::ShowMessage(e.user_message()));
            }
            Ok(match cmds.len() {
                0 => None,
                1 => cmds.pop(),
                _ => Some(Cmd::batch(cmds)),
            })
        }
    }
}
