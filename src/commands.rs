//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Persistence payloads are owned snapshots taken inside `update`, so running
//! a command later can never observe a half-applied mutation.

use crate::error::Result;
use crate::model::WorkspaceSnapshot;
use crate::panel::PanelSnapshot;
use crate::persistence::PersistenceGateway;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the workspace and panels
    Redraw,
    /// Persist the workspace
    SaveWorkspace(Box<WorkspaceSnapshot>),
    /// Persist panel visibility
    SavePanels(PanelSnapshot),
    /// Surface a short message to the user (status bar / toast)
    ShowMessage(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

/// What running a command did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdOutcome {
    pub redraw: bool,
    pub saved_workspace: bool,
    pub saved_panels: bool,
    pub messages: Vec<String>,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw, then save the workspace
    pub fn redraw_and_save(snapshot: WorkspaceSnapshot) -> Self {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveWorkspace(Box::new(snapshot))])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Saving never changes what is on screen
            Cmd::SaveWorkspace(_) | Cmd::SavePanels(_) => false,
            Cmd::ShowMessage(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Run the command against `gateway`
    ///
    /// Stops at the first persistence failure; the caller decides whether to
    /// retry (see `CaddyError::is_retryable`).
    pub fn execute(self, gateway: &mut dyn PersistenceGateway) -> Result<CmdOutcome> {
        let mut outcome = CmdOutcome::default();
        self.execute_into(gateway, &mut outcome)?;
        Ok(outcome)
    }

    fn execute_into(
        self,
        gateway: &mut dyn PersistenceGateway,
        outcome: &mut CmdOutcome,
    ) -> Result<()> {
        match self {
            Cmd::None => {}
            Cmd::Redraw => outcome.redraw = true,
            Cmd::SaveWorkspace(snapshot) => {
                gateway.save(&snapshot)?;
                outcome.saved_workspace = true;
            }
            Cmd::SavePanels(panels) => {
                gateway.save_panels(&panels)?;
                outcome.saved_panels = true;
            }
            Cmd::ShowMessage(message) => {
                outcome.redraw = true;
                outcome.messages.push(message);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.execute_into(gateway, outcome)?;
                }
            }
        }
        Ok(())
    }
}
