//! Labour-market indicators dashboard.
//!
//! The library loads a flat record set from Firestore or a JSON file,
//! derives the per-field option catalog, filters records by multi-value
//! selections, and exports the filtered rows to a spreadsheet. The
//! [`tui`] module drives these pieces from a terminal dashboard.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod fields;
pub mod filter;
pub mod logging;
pub mod record;
pub mod selection;
pub mod source;
pub mod tui;

pub use catalog::FieldCatalog;
pub use config::{LabordashConfig, OperationMode};
pub use error::DashboardError;
pub use export::{ExportSummary, export_filtered, export_records};
pub use filter::{FilterState, MatchPolicy, evaluate};
pub use record::{FieldValue, Record};
pub use selection::MultiSelect;
pub use source::{
    FirestoreSettings, FirestoreSource, JsonFileSource, RecordSource, SourceSelection,
    load_records,
};
