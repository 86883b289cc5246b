//! The settings panel: an open/closed flag plus one checkbox per category.

use crate::commands::CmdResult;
use crate::model::Category;
use crate::state::VisibilityState;
use serde::Serialize;

/// A checkbox row in the settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsItem {
    pub category: Category,
    pub checked: bool,
}

pub fn toggle(state: &mut VisibilityState) -> CmdResult {
    state.dropdown_open = !state.dropdown_open;
    CmdResult::default().with_changed(true)
}

pub fn set_open(state: &mut VisibilityState, open: bool) -> CmdResult {
    let changed = state.dropdown_open != open;
    state.dropdown_open = open;
    CmdResult::default().with_changed(changed)
}

pub fn settings_items(state: &VisibilityState) -> Vec<SettingsItem> {
    Category::SETTINGS_ORDER
        .into_iter()
        .map(|category| SettingsItem {
            category,
            checked: state.is_active(category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::toggle as toggle_tab;
    use crate::model::Tab;

    #[test]
    fn toggle_flips() {
        let mut state = VisibilityState::new();
        toggle(&mut state);
        assert!(state.dropdown_open());
        toggle(&mut state);
        assert!(!state.dropdown_open());
    }

    #[test]
    fn set_open_reports_change() {
        let mut state = VisibilityState::new();
        assert!(!set_open(&mut state, false).changed);
        assert!(set_open(&mut state, true).changed);
        assert!(state.dropdown_open());
    }

    #[test]
    fn items_follow_active_set() {
        let mut state = VisibilityState::new();
        toggle_tab::run(&mut state, Tab::PEOPLE);

        let items = settings_items(&state);
        let rows: Vec<(Category, bool)> = items.iter().map(|i| (i.category, i.checked)).collect();
        assert_eq!(
            rows,
            vec![
                (Category::Files, true),
                (Category::People, false),
                (Category::Chats, true),
            ]
        );
    }
}
