use crate::commands::{CmdMessage, CmdResult};
use crate::model::Tab;
use crate::state::VisibilityState;

/// Shows or hides a category.
///
/// `All` cannot be toggled and is a no-op. Hiding the selected category moves the
/// selection back to `All` in the same step.
pub fn run(state: &mut VisibilityState, tab: Tab) -> CmdResult {
    let Tab::Category(category) = tab else {
        return CmdResult::default().with_message(CmdMessage::info("All is always shown"));
    };

    let mut result = CmdResult::default().with_changed(true);

    if state.active.remove(&category) {
        if state.selected == tab {
            state.selected = Tab::All;
            result.add_message(CmdMessage::info(format!(
                "{} was selected, switched to All",
                category
            )));
        }
        result.add_message(CmdMessage::success(format!("{} hidden", category)));
    } else {
        state.active.insert(category);
        result.add_message(CmdMessage::success(format!("{} shown", category)));
    }

    result
}

/// Hides a category if it is shown. Asking to hide `All` or an already hidden category
/// changes nothing and reports a warning.
pub fn hide(state: &mut VisibilityState, tab: Tab) -> CmdResult {
    match tab {
        Tab::All => CmdResult::default().with_message(CmdMessage::warning("All cannot be hidden")),
        Tab::Category(category) if !state.is_active(category) => CmdResult::default()
            .with_message(CmdMessage::warning(format!("{} is already hidden", category))),
        Tab::Category(_) => run(state, tab),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{select, MessageLevel};
    use crate::model::Category;

    #[test]
    fn hides_then_shows() {
        let mut state = VisibilityState::new();

        run(&mut state, Tab::FILES);
        assert!(!state.is_active(Category::Files));

        run(&mut state, Tab::FILES);
        assert!(state.is_active(Category::Files));
    }

    #[test]
    fn hiding_selected_tab_resets_to_all() {
        let mut state = VisibilityState::new();
        select::run(&mut state, Tab::PEOPLE).unwrap();

        let result = run(&mut state, Tab::PEOPLE);
        assert!(result.changed);
        assert_eq!(state.selected_tab(), Tab::All);
        assert!(!state.is_active(Category::People));
    }

    #[test]
    fn hiding_another_tab_keeps_selection() {
        let mut state = VisibilityState::new();
        select::run(&mut state, Tab::CHATS).unwrap();

        run(&mut state, Tab::FILES);
        assert_eq!(state.selected_tab(), Tab::CHATS);
    }

    #[test]
    fn toggling_all_is_a_no_op() {
        let mut state = VisibilityState::new();
        run(&mut state, Tab::PEOPLE);
        let before = state.clone();

        let result = run(&mut state, Tab::All);
        assert!(!result.changed);
        assert_eq!(state, before);
    }

    #[test]
    fn can_hide_every_category() {
        let mut state = VisibilityState::new();
        for category in Category::ALL {
            run(&mut state, category.into());
        }
        assert!(state.active_categories().is_empty());
        assert_eq!(state.selected_tab(), Tab::All);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut state = VisibilityState::new();
        select::run(&mut state, Tab::CHATS).unwrap();
        let before = state.clone();

        run(&mut state, Tab::PEOPLE);
        run(&mut state, Tab::PEOPLE);
        assert_eq!(state, before);
    }

    #[test]
    fn hide_only_hides() {
        let mut state = VisibilityState::new();
        assert!(hide(&mut state, Tab::FILES).changed);
        assert!(!state.is_active(Category::Files));

        let before = state.clone();
        let result = hide(&mut state, Tab::FILES);
        assert!(!result.changed);
        assert_eq!(state, before);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Files is already hidden");

        let result = hide(&mut state, Tab::All);
        assert!(!result.changed);
        assert_eq!(result.messages[0].content, "All cannot be hidden");
        assert_eq!(state, before);
    }
}
