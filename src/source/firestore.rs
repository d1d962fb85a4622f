//! Firestore REST implementation of [`RecordSource`].
//!
//! Lists every document of one collection through the `documents` endpoint,
//! following `nextPageToken` until the collection is exhausted. Firestore's
//! typed values are flattened into [`FieldValue`]s.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::error::DashboardError;
use crate::record::{FieldValue, Record};

use super::RecordSource;

/// Public Firestore REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
/// Collection holding the labour-market records.
pub const DEFAULT_COLLECTION: &str = "dados";
/// Documents requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 300;
/// HTTP timeout applied to each page request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ERROR_BODY_LIMIT: usize = 160;

/// Connection settings for [`FirestoreSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreSettings {
    /// REST base URL, e.g. `https://firestore.googleapis.com/v1`.
    pub base_url: String,
    /// Google Cloud project identifier.
    pub project_id: String,
    /// Collection to list.
    pub collection: String,
    /// Optional web API key sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// Documents requested per page.
    pub page_size: u32,
    /// HTTP timeout per request.
    pub timeout: Duration,
}

impl FirestoreSettings {
    /// Settings for `project_id` with default endpoint and collection.
    #[must_use]
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            project_id: project_id.into(),
            collection: DEFAULT_COLLECTION.to_owned(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Record source backed by the Firestore REST API.
#[derive(Debug, Clone)]
pub struct FirestoreSource {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    page_size: u32,
}

impl FirestoreSource {
    /// Builds a source from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when the base URL is invalid,
    /// the project or collection is empty, or the HTTP client cannot be
    /// constructed.
    pub fn new(settings: &FirestoreSettings) -> Result<Self, DashboardError> {
        let endpoint = documents_endpoint(settings)?;
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|error| DashboardError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key.clone(),
            page_size: settings.page_size.max(1),
        })
    }

    /// The collection URL this source lists.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListDocuments, DashboardError> {
        let mut query: Vec<(&str, String)> = vec![("pageSize", self.page_size.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_owned()));
        }
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query)
            .send()
            .await
            .map_err(|error| DashboardError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| DashboardError::Network {
                message: format!("failed to read response body: {error}"),
            })?;

        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|error| DashboardError::Decode {
            message: format!("unexpected document listing: {error}"),
        })
    }
}

#[async_trait]
impl RecordSource for FirestoreSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, DashboardError> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page = 0_u32;

        loop {
            let listing = self.fetch_page(page_token.as_deref()).await?;
            page = page.saturating_add(1);
            tracing::debug!(page, documents = listing.documents.len(), "fetched page");

            records.extend(listing.documents.iter().map(Document::to_record));

            match listing.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(records)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

fn documents_endpoint(settings: &FirestoreSettings) -> Result<Url, DashboardError> {
    for (name, value) in [
        ("project id", &settings.project_id),
        ("collection", &settings.collection),
    ] {
        if value.trim().is_empty() {
            return Err(DashboardError::Configuration {
                message: format!("Firestore {name} must not be empty"),
            });
        }
    }

    let mut endpoint =
        Url::parse(&settings.base_url).map_err(|error| DashboardError::Configuration {
            message: format!("invalid Firestore base URL '{}': {error}", settings.base_url),
        })?;

    endpoint
        .path_segments_mut()
        .map_err(|()| DashboardError::Configuration {
            message: format!("Firestore base URL '{}' cannot have a path", settings.base_url),
        })?
        .pop_if_empty()
        .extend([
            "projects",
            settings.project_id.as_str(),
            "databases",
            "(default)",
            "documents",
            settings.collection.as_str(),
        ]);

    Ok(endpoint)
}

fn map_status_error(status: StatusCode, body: &str) -> DashboardError {
    let message = format!("status {}: {}", status.as_u16(), truncate(body.trim()));
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        DashboardError::Authentication { message }
    } else {
        DashboardError::Api { message }
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= ERROR_BODY_LIMIT {
        return text.to_owned();
    }
    let prefix: String = text.chars().take(ERROR_BODY_LIMIT).collect();
    format!("{prefix}...")
}

#[derive(Debug, Deserialize)]
struct ListDocuments {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(rename = "nextPageToken", default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl Document {
    fn to_record(&self) -> Record {
        self.fields
            .iter()
            .filter_map(|(field, typed)| {
                let decoded = decode_value(typed);
                if decoded.is_none() {
                    tracing::debug!(
                        document = %self.name,
                        field = %field,
                        "skipping unsupported value"
                    );
                }
                decoded.map(|value| (field.clone(), value))
            })
            .collect()
    }
}

/// Flattens one Firestore typed value (`{"stringValue": "..."}` and so on).
fn decode_value(typed: &Value) -> Option<FieldValue> {
    let Value::Object(wrapper) = typed else {
        return None;
    };
    let (kind, inner) = wrapper.iter().next()?;

    match (kind.as_str(), inner) {
        ("stringValue" | "timestampValue", Value::String(text)) => {
            Some(FieldValue::Text(text.clone()))
        }
        ("integerValue", Value::String(digits)) => digits.parse().ok().map(FieldValue::Integer),
        ("integerValue", Value::Number(number)) => number.as_i64().map(FieldValue::Integer),
        ("doubleValue", Value::Number(number)) => number.as_f64().map(FieldValue::Float),
        ("booleanValue", Value::Bool(flag)) => Some(FieldValue::Text(flag.to_string())),
        ("nullValue", _) => Some(FieldValue::Null),
        _ => None,
    }
}
