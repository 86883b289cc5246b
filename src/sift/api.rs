//! # API Facade
//!
//! [`VisibilityController`] is the single entry point for a presentation layer. It owns the
//! catalog and the [`VisibilityState`], forwards each user event to the matching command and
//! exposes the derived views (visible records, tab row, settings panel).
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command modules
//! - **Normalizes inputs**: tab names typed by a user become [`Tab`] values here, which is
//!   where an unknown name turns into `InvalidCategory`
//! - **Returns structured types**: records and summaries, never formatted text
//!
//! State is never handed out mutably. A rejected event returns an error and leaves the
//! state as it was, so the controller can keep serving the session.

use crate::catalog::Catalog;
use crate::commands::{self, counts, dropdown, search, select, toggle, visible};
use crate::config::SiftConfig;
use crate::error::Result;
use crate::model::{Category, Record, Tab};
use crate::state::VisibilityState;
use crate::store::RecordSource;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

pub struct VisibilityController {
    catalog: Catalog,
    state: VisibilityState,
    tab_order: Vec<Tab>,
}

impl VisibilityController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: VisibilityState::default(),
            tab_order: Tab::ALL_TABS.to_vec(),
        }
    }

    pub fn from_source<S: RecordSource>(source: &S) -> Result<Self> {
        let catalog = Catalog::new(source.load()?)?;
        debug!(source = %source.describe(), records = catalog.len(), "catalog ready");
        Ok(Self::new(catalog))
    }

    /// Applies startup settings: tab order and initially hidden categories.
    pub fn with_config(mut self, config: &SiftConfig) -> Self {
        self.tab_order = config.tab_order.clone();
        self.state = VisibilityState::with_hidden(&config.hidden);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    pub fn search_text(&self) -> &str {
        self.state.search_text()
    }

    pub fn active_categories(&self) -> &BTreeSet<Category> {
        self.state.active_categories()
    }

    pub fn selected_tab(&self) -> Tab {
        self.state.selected_tab()
    }

    pub fn dropdown_open(&self) -> bool {
        self.state.dropdown_open()
    }

    pub fn visible_records(&self) -> Vec<&Record> {
        visible::run(&self.catalog, &self.state)
    }

    pub fn tab_count(&self, tab: Tab) -> usize {
        counts::tab_count(&self.catalog, &self.state, tab)
    }

    /// The tab row in configured order, hidden categories left out.
    pub fn tabs(&self) -> Vec<counts::TabSummary> {
        counts::tab_row(&self.catalog, &self.state, &self.tab_order)
    }

    pub fn settings_items(&self) -> Vec<dropdown::SettingsItem> {
        dropdown::settings_items(&self.state)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> commands::CmdResult {
        let result = search::run(&mut self.state, text);
        debug!(text = %self.state.search_text(), "search text set");
        result
    }

    pub fn clear_search(&mut self) -> commands::CmdResult {
        search::clear(&mut self.state)
    }

    pub fn toggle_category(&mut self, tab: Tab) -> commands::CmdResult {
        let result = toggle::run(&mut self.state, tab);
        debug!(
            %tab,
            active = ?self.state.active_categories(),
            selected = %self.state.selected_tab(),
            "toggled category"
        );
        result
    }

    /// Hide without toggling: a hidden category stays hidden and `All` is refused with a warning.
    pub fn hide_category(&mut self, tab: Tab) -> commands::CmdResult {
        let result = toggle::hide(&mut self.state, tab);
        debug!(%tab, changed = result.changed, "hide category");
        result
    }

    /// Toggle by user-supplied name. Names outside the tab set fail with `InvalidCategory`.
    pub fn toggle_category_named(&mut self, name: &str) -> Result<commands::CmdResult> {
        let tab = name.parse::<Tab>().inspect_err(|e| warn!("toggle rejected: {}", e))?;
        Ok(self.toggle_category(tab))
    }

    pub fn select_category(&mut self, tab: Tab) -> Result<commands::CmdResult> {
        let result =
            select::run(&mut self.state, tab).inspect_err(|e| warn!("select rejected: {}", e))?;
        debug!(%tab, "selected tab");
        Ok(result)
    }

    pub fn select_category_named(&mut self, name: &str) -> Result<commands::CmdResult> {
        let tab = name.parse::<Tab>().inspect_err(|e| warn!("select rejected: {}", e))?;
        self.select_category(tab)
    }

    pub fn toggle_dropdown(&mut self) -> commands::CmdResult {
        dropdown::toggle(&mut self.state)
    }

    pub fn set_dropdown_open(&mut self, open: bool) -> commands::CmdResult {
        dropdown::set_open(&mut self.state, open)
    }
}

/// Show or change the configuration stored in `dir`.
pub fn config(dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
    commands::config::run(dir, action)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::counts::TabSummary;
pub use crate::commands::dropdown::SettingsItem;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
