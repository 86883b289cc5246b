//! Per-tab counts and the tab row.
//!
//! Counts summarize the catalog under the current visibility. The search box never changes
//! them.

use crate::catalog::Catalog;
use crate::model::Tab;
use crate::state::VisibilityState;
use serde::Serialize;

/// One entry of the tab row, as drawn by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSummary {
    pub tab: Tab,
    pub label: &'static str,
    pub icon: &'static str,
    pub count: usize,
    pub selected: bool,
}

pub fn tab_count(catalog: &Catalog, state: &VisibilityState, tab: Tab) -> usize {
    match tab {
        Tab::All => state
            .active_categories()
            .iter()
            .map(|category| catalog.count_of(*category))
            .sum(),
        Tab::Category(category) if state.is_active(category) => catalog.count_of(category),
        Tab::Category(_) => 0,
    }
}

/// The tabs currently on offer, in `order`, with their counts.
///
/// Hidden categories are left out. `All` shows up wherever `order` puts it.
pub fn tab_row(catalog: &Catalog, state: &VisibilityState, order: &[Tab]) -> Vec<TabSummary> {
    order
        .iter()
        .filter(|tab| state.is_offered(**tab))
        .map(|tab| TabSummary {
            tab: *tab,
            label: tab.label(),
            icon: tab.icon(),
            count: tab_count(catalog, state, *tab),
            selected: state.selected_tab() == *tab,
        })
        .collect()
}
