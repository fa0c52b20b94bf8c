//! Panel update handlers

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::PanelMsg;
use crate::model::AppModel;
use crate::panel::SectionVisibility;

/// Handle panel visibility messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Result<Option<Cmd>> {
    let before = model.panels;

    match msg {
        PanelMsg::ToggleFilesCategories => {
            model.panels.toggle_files_categories();
        }
        PanelMsg::ToggleSearch => {
            model.panels.toggle_search();
        }
        PanelMsg::ToggleFileExplorerSection => {
            model.panels.toggle_file_explorer_section();
        }
        PanelMsg::ToggleCategoryExplorerSection => {
            model.panels.toggle_category_explorer_section();
        }
        PanelMsg::SetState(state) => {
            model.panels.set_state(state);
        }
        PanelMsg::RestoreState(state) => {
            model.panels.set_state_str(&state)?;
        }
        PanelMsg::SetLastValidState {
            file_explorer_visible,
            category_explorer_visible,
        } => {
            model.panels.set_last_valid_state(SectionVisibility::new(
                file_explorer_visible,
                category_explorer_visible,
            ))?;
        }
    }

    if model.panels == before {
        return Ok(None);
    }

    let save = Cmd::SavePanels(model.panels.snapshot());
    if model.panels.state() == before.state() {
        // Only the remembered pair changed; nothing on screen moves
        Ok(Some(save))
    } else {
        Ok(Some(Cmd::batch(vec![Cmd::Redraw, save])))
    }
}
