//! Rendering components for the dashboard.
//!
//! Components are stateless: each takes a view context borrowing the app's
//! state and returns the rendered lines.

mod filter_panel;
mod record_table;
mod text_fit;

pub use filter_panel::{FilterPanelComponent, FilterPanelViewContext};
pub use record_table::{
    EMPTY_TEXT, LOADING_TEXT, RecordTableComponent, RecordTableViewContext, TABLE_HEADERS,
};
pub use text_fit::{Align, fit_cell};
