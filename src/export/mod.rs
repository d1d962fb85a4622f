//! Spreadsheet export of the filtered record set.
//!
//! The export has a fixed column set drawn from the record's category and
//! measure fields. Rows follow the filtered order; absent values become
//! blank cells.

mod filtered;
mod model;
mod xlsx;

pub use filtered::{ExportSummary, export_filtered};
pub use model::{Cell, EXPORT_HEADERS, ExportRow};
pub use xlsx::{DEFAULT_EXPORT_FILE, SHEET_NAME, export_records, workbook_bytes, write_workbook};
