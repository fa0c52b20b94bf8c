//! Integration tests for side panel visibility
//!
//! Drives the panel state machine through `update`, the way the UI does.

mod common;

use common::test_model;

use caddy::messages::{Msg, PanelMsg};
use caddy::model::AppModel;
use caddy::panel::{PanelState, PanelVisibility, SectionVisibility};
use caddy::update::update;

fn send(model: &mut AppModel, msg: PanelMsg) {
    update(model, Msg::Panel(msg)).unwrap();
}

#[test]
fn test_panels_are_mutually_exclusive() {
    let mut model = test_model(1280.0, 800.0);
    send(&mut model, PanelMsg::ToggleFilesCategories);
    assert!(model.panels.is_files_categories_panel_active());

    send(&mut model, PanelMsg::ToggleSearch);
    assert!(model.panels.is_search_panel_active());
    assert!(!model.panels.is_files_categories_panel_active());

    send(&mut model, PanelMsg::ToggleFilesCategories);
    assert!(model.panels.is_files_categories_panel_active());
    assert!(!model.panels.is_search_panel_active());
}

#[test]
fn test_reopen_restores_sections_after_search() {
    let mut model = test_model(1280.0, 800.0);
    send(&mut model, PanelMsg::ToggleFilesCategories);
    send(&mut model, PanelMsg::ToggleFileExplorerSection);
    assert_eq!(model.panels.state(), PanelState::CategoriesOnly);

    send(&mut model, PanelMsg::ToggleSearch);
    send(&mut model, PanelMsg::ToggleSearch);
    assert_eq!(model.panels.state(), PanelState::None);

    send(&mut model, PanelMsg::ToggleFilesCategories);
    assert_eq!(model.panels.state(), PanelState::CategoriesOnly);
    assert!(!model.panels.file_explorer_visible());
    assert!(model.panels.category_explorer_visible());
}

#[test]
fn test_drag_drop_needs_both_sections() {
    let mut model = test_model(1280.0, 800.0);
    assert!(!model.panels.is_drag_drop_available());
    send(&mut model, PanelMsg::ToggleFilesCategories);
    assert!(model.panels.is_drag_drop_available());
    send(&mut model, PanelMsg::ToggleCategoryExplorerSection);
    assert!(!model.panels.is_drag_drop_available());
}

#[test]
fn test_derived_flags_for_every_state() {
    for state in PanelState::ALL {
        let mut panels = PanelVisibility::new();
        panels.set_state(state);
        let sections = state.sections();
        assert_eq!(panels.file_explorer_visible(), sections.file_explorer_visible);
        assert_eq!(
            panels.category_explorer_visible(),
            sections.category_explorer_visible
        );
        assert_eq!(
            panels.is_files_categories_panel_active(),
            matches!(
                state,
                PanelState::FilesOnly | PanelState::CategoriesOnly | PanelState::FilesAndCategories
            )
        );
    }
}

#[test]
fn test_set_last_valid_state_then_open() {
    let mut model = test_model(1280.0, 800.0);
    send(
        &mut model,
        PanelMsg::SetLastValidState {
            file_explorer_visible: true,
            category_explorer_visible: false,
        },
    );
    send(&mut model, PanelMsg::ToggleFilesCategories);
    assert_eq!(model.panels.state(), PanelState::FilesOnly);
}

#[test]
fn test_rejected_last_valid_state_leaves_panels_untouched() {
    let mut model = test_model(1280.0, 800.0);
    let before = model.panels;
    let result = update(
        &mut model,
        Msg::Panel(PanelMsg::SetLastValidState {
            file_explorer_visible: false,
            category_explorer_visible: false,
        }),
    );
    assert!(matches!(
        result,
        Err(caddy::CaddyError::InvalidSectionVisibility)
    ));
    assert_eq!(model.panels, before);
    assert_eq!(
        model.panels.last_valid_files_categories(),
        SectionVisibility::new(true, true)
    );
}

#[test]
fn test_restore_state_by_name() {
    let mut model = test_model(1280.0, 800.0);
    send(&mut model, PanelMsg::RestoreState("FilesAndCategories".into()));
    assert_eq!(model.panels.state(), PanelState::FilesAndCategories);
}
