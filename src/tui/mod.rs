//! Terminal dashboard for browsing and filtering labour-market records.
//!
//! The dashboard follows the Model-View-Update pattern of bubbletea-rs:
//!
//! - **Model**: [`app::DashboardApp`]
//! - **View**: [`components`] render the filter panel and the record table
//! - **Update**: [`messages::AppMsg`] transitions handled by the app
//!
//! # Start-up context
//!
//! bubbletea-rs calls `Model::init()` without arguments, so the record
//! source and session settings are stored in a module-level [`OnceLock`].
//! Call [`set_dashboard_context`] before starting the program; `init()` then
//! issues the one-off load as a command.

use std::sync::{Arc, OnceLock};

use camino::Utf8PathBuf;

use crate::filter::{FilterState, MatchPolicy};
use crate::source::RecordSource;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::DashboardApp;

static DASHBOARD_CONTEXT: OnceLock<DashboardContext> = OnceLock::new();

/// Everything the dashboard needs before its first frame.
#[derive(Clone)]
pub struct DashboardContext {
    /// Where records are loaded from.
    pub source: Arc<dyn RecordSource>,
    /// Value comparison policy.
    pub policy: MatchPolicy,
    /// Spreadsheet written by the export action.
    pub export_path: Utf8PathBuf,
    /// Filters applied before the first load completes.
    pub initial_filters: FilterState,
}

impl std::fmt::Debug for DashboardContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardContext")
            .field("source", &self.source.describe())
            .field("policy", &self.policy)
            .field("export_path", &self.export_path)
            .field("initial_filters", &self.initial_filters)
            .finish()
    }
}

/// Stores the start-up context for [`DashboardApp::init`](bubbletea_rs::Model::init).
///
/// Returns `false` if a context was already stored; the first one is kept.
pub fn set_dashboard_context(context: DashboardContext) -> bool {
    DASHBOARD_CONTEXT.set(context).is_ok()
}

pub(crate) fn dashboard_context() -> Option<&'static DashboardContext> {
    DASHBOARD_CONTEXT.get()
}
