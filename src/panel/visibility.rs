//! Side panel visibility state machine
//!
//! The Files & Categories panel and the Search panel share the same screen
//! region, so at most one is open. The Files & Categories panel has two
//! independently toggleable sections; closing it remembers which sections
//! were showing so reopening restores them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CaddyError, Result};

/// Which side panel is open, and which sections of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelState {
    #[default]
    None,
    FilesOnly,
    CategoriesOnly,
    FilesAndCategories,
    Search,
}

impl PanelState {
    pub const ALL: [PanelState; 5] = [
        PanelState::None,
        PanelState::FilesOnly,
        PanelState::CategoriesOnly,
        PanelState::FilesAndCategories,
        PanelState::Search,
    ];

    /// Whether this is one of the Files & Categories states
    pub fn is_files_categories(&self) -> bool {
        matches!(
            self,
            PanelState::FilesOnly | PanelState::CategoriesOnly | PanelState::FilesAndCategories
        )
    }

    /// Section visibility implied by this state; both hidden outside Files & Categories
    pub fn sections(&self) -> SectionVisibility {
        match self {
            PanelState::FilesOnly => SectionVisibility::new(true, false),
            PanelState::CategoriesOnly => SectionVisibility::new(false, true),
            PanelState::FilesAndCategories => SectionVisibility::new(true, true),
            PanelState::None | PanelState::Search => SectionVisibility::new(false, false),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::None => "None",
            PanelState::FilesOnly => "FilesOnly",
            PanelState::CategoriesOnly => "CategoriesOnly",
            PanelState::FilesAndCategories => "FilesAndCategories",
            PanelState::Search => "Search",
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelState {
    type Err = CaddyError;

    fn from_str(s: &str) -> Result<Self> {
        PanelState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| CaddyError::InvalidPanelState(s.to_string()))
    }
}

/// Visibility of the two Files & Categories sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    pub file_explorer_visible: bool,
    pub category_explorer_visible: bool,
}

impl SectionVisibility {
    pub const fn new(file_explorer_visible: bool, category_explorer_visible: bool) -> Self {
        Self {
            file_explorer_visible,
            category_explorer_visible,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.file_explorer_visible && !self.category_explorer_visible
    }

    /// Files & Categories state showing these sections
    ///
    /// (false, false) has no such state and falls back to `FilesOnly`.
    pub fn to_state(self) -> PanelState {
        match (self.file_explorer_visible, self.category_explorer_visible) {
            (true, true) => PanelState::FilesAndCategories,
            (true, false) => PanelState::FilesOnly,
            (false, true) => PanelState::CategoriesOnly,
            (false, false) => PanelState::FilesOnly,
        }
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Flat persisted form of [`PanelVisibility`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot {
    /// Kept as text so unknown values are rejected on restore, not on parse
    pub state: String,
    pub file_explorer_visible: bool,
    pub category_explorer_visible: bool,
    pub last_valid_files_categories: SectionVisibility,
}

/// Panel state plus the remembered section pair
///
/// `last_valid_files_categories` is never (false, false).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    state: PanelState,
    last_valid_files_categories: SectionVisibility,
}

impl PanelVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Derived flags
    // ========================================================================

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn last_valid_files_categories(&self) -> SectionVisibility {
        self.last_valid_files_categories
    }

    pub fn is_files_categories_panel_active(&self) -> bool {
        self.state.is_files_categories()
    }

    pub fn is_search_panel_active(&self) -> bool {
        self.state == PanelState::Search
    }

    /// Categorizing by drag-and-drop needs both sections on screen
    pub fn is_drag_drop_available(&self) -> bool {
        self.state == PanelState::FilesAndCategories
    }

    pub fn file_explorer_visible(&self) -> bool {
        self.state.sections().file_explorer_visible
    }

    pub fn category_explorer_visible(&self) -> bool {
        self.state.sections().category_explorer_visible
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Open the Files & Categories panel where it was left, or close it
    pub fn toggle_files_categories(&mut self) -> PanelState {
        if self.state.is_files_categories() {
            self.remember_sections(self.state.sections());
            self.transition(PanelState::None)
        } else {
            self.transition(self.last_valid_files_categories.to_state())
        }
    }

    /// Open or close the Search panel
    pub fn toggle_search(&mut self) -> PanelState {
        if self.state == PanelState::Search {
            return self.transition(PanelState::None);
        }
        if self.state.is_files_categories() {
            self.remember_sections(self.state.sections());
        }
        self.transition(PanelState::Search)
    }

    /// Flip the file explorer section; no-op unless Files & Categories is open
    pub fn toggle_file_explorer_section(&mut self) -> PanelState {
        self.toggle_section(|s| s.file_explorer_visible = !s.file_explorer_visible)
    }

    /// Flip the category explorer section; no-op unless Files & Categories is open
    pub fn toggle_category_explorer_section(&mut self) -> PanelState {
        self.toggle_section(|s| s.category_explorer_visible = !s.category_explorer_visible)
    }

    /// Jump straight to `state`
    pub fn set_state(&mut self, state: PanelState) -> PanelState {
        self.transition(state)
    }

    /// Restore a state by name, rejecting anything that is not one of the five
    pub fn set_state_str(&mut self, state: &str) -> Result<PanelState> {
        let parsed: PanelState = state.parse()?;
        Ok(self.set_state(parsed))
    }

    /// Overwrite the remembered section pair; (false, false) is rejected
    pub fn set_last_valid_state(&mut self, sections: SectionVisibility) -> Result<()> {
        if sections.is_empty() {
            return Err(CaddyError::InvalidSectionVisibility);
        }
        self.last_valid_files_categories = sections;
        Ok(())
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    pub fn snapshot(&self) -> PanelSnapshot {
        let sections = self.state.sections();
        PanelSnapshot {
            state: self.state.as_str().to_string(),
            file_explorer_visible: sections.file_explorer_visible,
            category_explorer_visible: sections.category_explorer_visible,
            last_valid_files_categories: self.last_valid_files_categories,
        }
    }

    /// Rebuild from a persisted snapshot, validating both fields up front
    pub fn restore(snapshot: &PanelSnapshot) -> Result<Self> {
        let mut restored = Self::new();
        restored.set_last_valid_state(snapshot.last_valid_files_categories)?;
        restored.set_state_str(&snapshot.state)?;
        Ok(restored)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn toggle_section(&mut self, flip: impl FnOnce(&mut SectionVisibility)) -> PanelState {
        if !self.state.is_files_categories() {
            return self.state;
        }
        let before = self.state.sections();
        let mut after = before;
        flip(&mut after);

        if after.is_empty() {
            // Auto-close remembers the pair from just before the flip
            self.remember_sections(before);
            self.transition(PanelState::None)
        } else {
            self.transition(after.to_state())
        }
    }

    fn remember_sections(&mut self, sections: SectionVisibility) {
        if !sections.is_empty() {
            self.last_valid_files_categories = sections;
        }
    }

    fn transition(&mut self, next: PanelState) -> PanelState {
        if next != self.state {
            tracing::debug!(from = %self.state, to = %next, "panel state");
        }
        self.state = next;
        self.state
    }
}
