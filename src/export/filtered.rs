//! One-shot load, filter, and export.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::DashboardError;
use crate::filter::{FilterState, MatchPolicy, evaluate};
use crate::source::{RecordSource, load_records};

use super::xlsx::export_records;

/// Outcome of [`export_filtered`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Records loaded from the source.
    pub loaded: usize,
    /// Rows written to the spreadsheet.
    pub exported: usize,
    /// Spreadsheet written.
    pub path: Utf8PathBuf,
}

impl std::fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Exported {} of {} records to {}",
            self.exported, self.loaded, self.path
        )
    }
}

/// Loads every record from `source`, keeps those passing `filters`, and
/// writes them to `path`.
///
/// A failed load is logged and exported as an empty sheet.
///
/// # Errors
///
/// Returns [`DashboardError::Export`] when the spreadsheet cannot be written.
pub async fn export_filtered(
    source: &dyn RecordSource,
    filters: &FilterState,
    policy: MatchPolicy,
    path: &Utf8Path,
) -> Result<ExportSummary, DashboardError> {
    let records = load_records(source).await;
    let kept = evaluate(&records, filters, policy);
    let exported = export_records(path, &kept)?;

    Ok(ExportSummary {
        loaded: records.len(),
        exported,
        path: path.to_owned(),
    })
}
