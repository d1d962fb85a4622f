//! Dashboard application model.
//!
//! [`DashboardApp`] owns the loaded records, the catalog derived from them,
//! the filter state, and the cached indices of records passing the filters.
//! Every filter mutation goes through [`DashboardApp::apply_filter_change`],
//! which recomputes the cache, so the table never shows a stale view.
//!
//! # Module Structure
//!
//! - `filter_handlers`: picker toggles, dismissal, and reset
//! - `navigation`: focus, picker, and cursor movement
//! - `data_handlers`: load completion and export
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `rendering`: header, status bar, and help overlay

use bubbletea_rs::Cmd;
use camino::Utf8PathBuf;

use crate::catalog::FieldCatalog;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::fields::build_pickers;
use crate::filter::{FilterState, MatchPolicy, matching_indices};
use crate::record::Record;
use crate::selection::MultiSelect;

use super::messages::AppMsg;

mod data_handlers;
mod filter_handlers;
mod model_impl;
mod navigation;
mod rendering;


/// Which half of the screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The filter panel.
    #[default]
    Filters,
    /// The record table.
    Table,
}

/// Main application model for the dashboard.
#[derive(Debug)]
pub struct DashboardApp {
    /// Every loaded record, in load order.
    pub(crate) records: Vec<Record>,
    catalog: FieldCatalog,
    pub(crate) filter_state: FilterState,
    policy: MatchPolicy,
    /// Indices of records passing `filter_state`, recomputed on every change.
    filtered_indices: Vec<usize>,
    pub(crate) loading: bool,
    /// Last status or error line.
    pub(crate) status: Option<String>,
    pickers: Vec<MultiSelect>,
    active_picker: usize,
    focus: Focus,
    cursor_position: usize,
    scroll_offset: usize,
    pub(crate) show_help: bool,
    width: u16,
    height: u16,
    export_path: Utf8PathBuf,
}

impl DashboardApp {
    /// Creates an app over `records` with no filters applied.
    #[must_use]
    pub fn new(records: Vec<Record>, policy: MatchPolicy) -> Self {
        let mut app = Self {
            records: Vec::new(),
            catalog: FieldCatalog::default(),
            filter_state: FilterState::new(),
            policy,
            filtered_indices: Vec::new(),
            loading: false,
            status: None,
            pickers: Vec::new(),
            active_picker: 0,
            focus: Focus::default(),
            cursor_position: 0,
            scroll_offset: 0,
            show_help: false,
            width: 80,
            height: 24,
            export_path: Utf8PathBuf::from(DEFAULT_EXPORT_FILE),
        };
        app.replace_records(records);
        app
    }

    /// Creates an empty app, as shown before the first load.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), MatchPolicy::default())
    }

    /// Sets the spreadsheet written by the export action.
    #[must_use]
    pub fn with_export_path(mut self, path: Utf8PathBuf) -> Self {
        self.export_path = path;
        self
    }

    /// Replaces the filter state and recomputes the view.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.apply_filter_change(|state| *state = filters);
        self
    }

    /// Every loaded record.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records passing the current filters, in load order.
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&Record> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.records.get(index))
            .collect()
    }

    /// Number of records passing the current filters.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Current filter state.
    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filter_state
    }

    /// Catalog derived from the loaded records.
    #[must_use]
    pub const fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Pickers in panel order.
    #[must_use]
    pub fn pickers(&self) -> &[MultiSelect] {
        &self.pickers
    }

    /// The picker receiving toggles, if any.
    #[must_use]
    pub fn active_picker(&self) -> Option<&MultiSelect> {
        self.pickers.get(self.active_picker)
    }

    /// Which half of the screen has focus.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Cursor row within the filtered table.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Whether the load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last status or error line.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Installs a freshly loaded record set.
    ///
    /// Rebuilds the catalog and the pickers, then recomputes the view
    /// under the current filters.
    pub(crate) fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.catalog = FieldCatalog::build(&self.records);
        self.pickers = build_pickers(&self.catalog);
        self.active_picker = self.active_picker.min(self.pickers.len().saturating_sub(1));
        self.rebuild_filter_cache();
    }

    /// Applies `change` to the filter state and recomputes the view.
    pub(crate) fn apply_filter_change<F>(&mut self, change: F)
    where
        F: FnOnce(&mut FilterState),
    {
        change(&mut self.filter_state);
        self.rebuild_filter_cache();
    }

    fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = matching_indices(&self.records, &self.filter_state, self.policy);
        self.clamp_cursor();
    }

    /// Handles a message and updates state accordingly.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::MoveUp => self.handle_move_up(),
            AppMsg::MoveDown => self.handle_move_down(),
            AppMsg::PreviousPicker => self.handle_previous_picker(),
            AppMsg::NextPicker => self.handle_next_picker(),
            AppMsg::SwitchFocus => self.handle_switch_focus(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ToggleHighlighted => self.handle_toggle_highlighted(),
            AppMsg::ToggleAll => self.handle_toggle_all(),
            AppMsg::DismissHighlighted => self.handle_dismiss_highlighted(),
            AppMsg::Reset => self.handle_reset(),
            _ => {
                debug_assert!(false, "non-filter message routed to handle_filter_msg");
                None
            }
        }
    }

    fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RecordsLoaded(records) => self.handle_records_loaded(records),
            AppMsg::Export => self.handle_export(),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                self.ensure_cursor_visible();
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }
}
