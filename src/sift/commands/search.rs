use crate::commands::CmdResult;
use crate::state::VisibilityState;

/// Replaces the search text verbatim. Case folding happens only when matching.
pub fn run(state: &mut VisibilityState, text: impl Into<String>) -> CmdResult {
    let text = text.into();
    let changed = state.search_text != text;
    state.search_text = text;
    CmdResult::default().with_changed(changed)
}

pub fn clear(state: &mut VisibilityState) -> CmdResult {
    run(state, String::new())
}
