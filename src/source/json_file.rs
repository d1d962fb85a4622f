//! Local JSON file implementation of [`RecordSource`].

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;

use crate::error::DashboardError;
use crate::record::Record;

use super::RecordSource;

/// Reads records from a JSON array of flat objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Parses a JSON array of flat objects into records.
///
/// # Errors
///
/// Returns [`DashboardError::Decode`] when the text is not JSON, is not an
/// array, or contains a non-object element.
pub fn parse_records(text: &str) -> Result<Vec<Record>, DashboardError> {
    let value: Value = serde_json::from_str(text).map_err(|error| DashboardError::Decode {
        message: error.to_string(),
    })?;
    let Value::Array(items) = value else {
        return Err(DashboardError::Decode {
            message: "expected a JSON array of records".to_owned(),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => Ok(Record::from_json_object(object)),
            _ => Err(DashboardError::Decode {
                message: format!("record {index} is not a JSON object"),
            }),
        })
        .collect()
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, DashboardError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|error| {
                DashboardError::io(&format!("failed to read '{}'", self.path), &error)
            })?;
        parse_records(&text)
    }

    fn describe(&self) -> String {
        self.path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rstest::rstest;

    use super::*;
    use crate::record::FieldValue;

    #[test]
    fn parses_flat_objects() {
        let records = parse_records(
            r#"[{"categoria": "A", "uf": "Bahia", "saldo": 8}, {"uf": null}]"#,
        )
        .expect("should parse");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("saldo"), Some(&FieldValue::Integer(8)));
        assert_eq!(records[1].get("uf"), Some(&FieldValue::Null));
    }

    #[rstest]
    #[case::not_json("{")]
    #[case::not_array(r#"{"uf": "Bahia"}"#)]
    #[case::scalar_element(r#"[{"uf": "Bahia"}, 3]"#)]
    fn rejects_malformed_input(#[case] text: &str) {
        assert!(matches!(
            parse_records(text),
            Err(DashboardError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn reads_records_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"uf": "Acre"}}]"#).expect("write fixture");
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf-8 path");

        let records = JsonFileSource::new(path)
            .fetch_all()
            .await
            .expect("should load");

        assert_eq!(records, vec![Record::new().with("uf", "Acre")]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/labordash/records.json");
        assert!(matches!(
            source.fetch_all().await,
            Err(DashboardError::Io { .. })
        ));
    }
}
