use crate::catalog::Catalog;
use crate::model::{Record, Tab};
use crate::state::VisibilityState;

/// Records the user currently sees, in catalog order.
///
/// With `All` selected a record must match the search and belong to an active category.
/// With a category selected it must match the search and be of that category; the category
/// is known to be active because selection never points at a hidden one.
pub fn run<'a>(catalog: &'a Catalog, state: &VisibilityState) -> Vec<&'a Record> {
    let needle = state.search_text().to_lowercase();

    catalog
        .records()
        .iter()
        .filter(|record| matches_search(record, &needle))
        .filter(|record| match state.selected_tab() {
            Tab::All => state.is_active(record.category),
            Tab::Category(selected) => record.category == selected,
        })
        .collect()
}

/// `needle` must already be lowercased. An empty needle matches everything.
pub fn matches_search(record: &Record, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
}
