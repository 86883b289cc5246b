use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SiftError};
use crate::model::Tab;
use crate::state::VisibilityState;

/// Selects the tab that drives the primary filter.
///
/// Selecting a hidden category is rejected rather than showing it; activation is only done
/// through [`toggle`](super::toggle).
pub fn run(state: &mut VisibilityState, tab: Tab) -> Result<CmdResult> {
    if let Tab::Category(category) = tab {
        if !state.is_active(category) {
            return Err(SiftError::CategoryNotActive(category));
        }
    }

    let changed = state.selected != tab;
    state.selected = tab;
    Ok(CmdResult::default()
        .with_changed(changed)
        .with_message(CmdMessage::info(format!("Showing {}", tab))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::toggle;
    use crate::model::Category;

    #[test]
    fn selects_active_category() {
        let mut state = VisibilityState::new();
        let result = run(&mut state, Tab::FILES).unwrap();
        assert!(result.changed);
        assert_eq!(state.selected_tab(), Tab::FILES);
    }

    #[test]
    fn all_is_always_selectable() {
        let mut state = VisibilityState::new();
        for category in Category::ALL {
            toggle::run(&mut state, category.into());
        }
        run(&mut state, Tab::All).unwrap();
        assert_eq!(state.selected_tab(), Tab::All);
    }

    #[test]
    fn rejects_hidden_category_and_keeps_state() {
        let mut state = VisibilityState::new();
        toggle::run(&mut state, Tab::CHATS);
        run(&mut state, Tab::PEOPLE).unwrap();
        let before = state.clone();

        let err = run(&mut state, Tab::CHATS).unwrap_err();
        assert!(matches!(err, SiftError::CategoryNotActive(Category::Chats)));
        assert_eq!(state, before);
        assert!(!state.is_active(Category::Chats));
    }

    #[test]
    fn reselecting_is_not_a_change() {
        let mut state = VisibilityState::new();
        let result = run(&mut state, Tab::All).unwrap();
        assert!(!result.changed);
    }
}
