//! Record sources.
//!
//! The dashboard never talks to the document store directly: it is handed a
//! [`RecordSource`] and calls [`load_records`] once. The trait-based design
//! lets tests substitute mocks while [`FirestoreSource`] performs real HTTP
//! requests and [`JsonFileSource`] reads a local export.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use camino::Utf8PathBuf;

use crate::error::DashboardError;
use crate::record::Record;

pub mod firestore;
mod json_file;

pub use firestore::{FirestoreSettings, FirestoreSource};
pub use json_file::JsonFileSource;

/// Capability that returns every record of the configured collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches all records in one bulk read.
    async fn fetch_all(&self) -> Result<Vec<Record>, DashboardError>;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Where records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    /// A local JSON file.
    JsonFile(Utf8PathBuf),
    /// A Firestore collection.
    Firestore(FirestoreSettings),
}

impl SourceSelection {
    /// Builds the selected source.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when the Firestore settings
    /// are invalid.
    pub fn into_source(self) -> Result<Arc<dyn RecordSource>, DashboardError> {
        match self {
            Self::JsonFile(path) => Ok(Arc::new(JsonFileSource::new(path))),
            Self::Firestore(settings) => Ok(Arc::new(FirestoreSource::new(&settings)?)),
        }
    }
}

/// Loads the record set once.
///
/// Failures are logged and degrade to an empty record set; there is no
/// retry.
pub async fn load_records(source: &dyn RecordSource) -> Vec<Record> {
    let started = Instant::now();
    match source.fetch_all().await {
        Ok(records) => {
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            tracing::info!(
                source = %source.describe(),
                count = records.len(),
                elapsed_ms,
                "records loaded"
            );
            records
        }
        Err(error) => {
            tracing::error!(source = %source.describe(), %error, "failed to load records");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_selection_builds_file_source() {
        let source = SourceSelection::JsonFile(Utf8PathBuf::from("dados.json"))
            .into_source()
            .expect("source should build");

        assert_eq!(source.describe(), "dados.json");
    }

    #[test]
    fn firestore_selection_validates_settings() {
        let settings = FirestoreSettings {
            project_id: String::new(),
            ..FirestoreSettings::for_project("p")
        };

        assert!(matches!(
            SourceSelection::Firestore(settings).into_source(),
            Err(DashboardError::Configuration { .. })
        ));
    }

    #[tokio::test]
    async fn load_returns_fetched_records() {
        let mut source = MockRecordSource::new();
        source
            .expect_fetch_all()
            .times(1)
            .returning(|| Ok(vec![Record::new().with("uf", "Bahia")]));
        source.expect_describe().return_const("mock".to_owned());

        let records = load_records(&source).await;

        assert_eq!(records, vec![Record::new().with("uf", "Bahia")]);
    }

    #[tokio::test]
    async fn load_failure_degrades_to_empty_set() {
        let mut source = MockRecordSource::new();
        source.expect_fetch_all().times(1).returning(|| {
            Err(DashboardError::Network {
                message: "connection refused".to_owned(),
            })
        });
        source.expect_describe().return_const("mock".to_owned());

        let records = load_records(&source).await;

        assert!(records.is_empty());
    }
}
