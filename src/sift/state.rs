use crate::model::{Category, Tab};
use serde::Serialize;
use std::collections::BTreeSet;

/// The mutable side of a session: what the user typed, which categories are shown, which tab
/// is selected and whether the settings panel is open.
///
/// Fields are only writable from inside the crate; every change goes through a command so that
/// the selected tab is always `All` or an active category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityState {
    pub(crate) search_text: String,
    pub(crate) active: BTreeSet<Category>,
    pub(crate) selected: Tab,
    pub(crate) dropdown_open: bool,
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            active: Category::ALL.into_iter().collect(),
            selected: Tab::All,
            dropdown_open: false,
        }
    }
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting state with some categories already hidden. Selection starts on `All`.
    pub fn with_hidden(hidden: &[Category]) -> Self {
        let mut state = Self::default();
        for category in hidden {
            state.active.remove(category);
        }
        state
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn active_categories(&self) -> &BTreeSet<Category> {
        &self.active
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active.contains(&category)
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Whether a tab is offered on the tab row. `All` always is.
    pub fn is_offered(&self, tab: Tab) -> bool {
        match tab {
            Tab::All => true,
            Tab::Category(c) => self.is_active(c),
        }
    }
}
