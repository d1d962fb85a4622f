//! Application configuration loaded from CLI, environment, and files.
//!
//! [`LabordashConfig`] merges values from command-line arguments, environment
//! variables, and configuration files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.labordash.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `LABORDASH_PROJECT_ID`,
//!    `LABORDASH_API_KEY`, and so on
//! 4. **Command-line arguments** – `--project-id`/`-p`, `--input`/`-i`, ...
//!
//! # Configuration File
//!
//! ```toml
//! project_id = "painel-emprego"
//! api_key = "AIza-example"
//! collection = "dados"
//! export_path = "relatorios/dados_filtrados.xlsx"
//! match_policy = "normalised"
//! log_file = "labordash.log"
//! ```

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::filter::{FilterState, MatchPolicy};
use crate::source::{FirestoreSettings, SourceSelection, firestore};

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive dashboard.
    Dashboard,
    /// Load, filter, export, and exit.
    ExportOnly,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use labordash::LabordashConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = LabordashConfig::load().expect("failed to load configuration");
/// let policy = config.match_policy().expect("valid match policy");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "LABORDASH",
    discovery(
        dotfile_name = ".labordash.toml",
        config_file_name = "labordash.toml",
        app_name = "labordash"
    )
)]
pub struct LabordashConfig {
    /// Google Cloud project that owns the Firestore database.
    ///
    /// Can be provided via:
    /// - CLI: `--project-id <ID>` or `-p <ID>`
    /// - Environment: `LABORDASH_PROJECT_ID`
    /// - Config file: `project_id = "..."`
    #[ortho_config(cli_short = 'p')]
    pub project_id: Option<String>,

    /// Web API key sent with every Firestore request.
    #[ortho_config(cli_short = 'k')]
    pub api_key: Option<String>,

    /// Firestore collection to list. Defaults to `dados`.
    #[ortho_config()]
    pub collection: String,

    /// Firestore REST base URL.
    #[ortho_config()]
    pub base_url: String,

    /// Documents requested per Firestore page.
    #[ortho_config()]
    pub page_size: u32,

    /// HTTP timeout per request, in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// JSON file to read records from instead of Firestore.
    ///
    /// Can be provided via:
    /// - CLI: `--input <PATH>` or `-i <PATH>`
    /// - Environment: `LABORDASH_INPUT`
    /// - Config file: `input = "..."`
    #[ortho_config(cli_short = 'i')]
    pub input: Option<String>,

    /// Spreadsheet written by the export action.
    #[ortho_config(cli_short = 'o')]
    pub export_path: Option<String>,

    /// Value comparison policy: `normalised` (default) or `strict`.
    #[ortho_config(cli_short = 'm')]
    pub match_policy: Option<String>,

    /// Initial filters, e.g. `uf=Bahia,Ceará;ano=2023`.
    #[ortho_config(cli_short = 'f')]
    pub filters: Option<String>,

    /// Exports the filtered records and exits without the dashboard.
    ///
    /// Can be provided via:
    /// - CLI: `--export-only` / `-x`
    /// - Config file: `export_only = true`
    #[ortho_config(cli_short = 'x')]
    pub export_only: bool,

    /// File receiving log output while the dashboard runs.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// `tracing` filter directive, e.g. `labordash=debug`.
    #[ortho_config()]
    pub log_filter: Option<String>,
}

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

impl Default for LabordashConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            collection: firestore::DEFAULT_COLLECTION.to_owned(),
            base_url: firestore::DEFAULT_BASE_URL.to_owned(),
            page_size: firestore::DEFAULT_PAGE_SIZE,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            input: None,
            export_path: None,
            match_policy: None,
            filters: None,
            export_only: false,
            log_file: None,
            log_filter: None,
        }
    }
}

impl LabordashConfig {
    /// Determines the operation mode.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.export_only {
            OperationMode::ExportOnly
        } else {
            OperationMode::Dashboard
        }
    }

    /// Resolves the record source: `input` wins over Firestore.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] when neither an input file
    /// nor a project id is configured.
    pub fn source_selection(&self) -> Result<SourceSelection, DashboardError> {
        if let Some(input) = &self.input {
            return Ok(SourceSelection::JsonFile(Utf8PathBuf::from(input)));
        }

        let project_id = self
            .project_id
            .as_deref()
            .ok_or_else(|| DashboardError::Configuration {
                message: "a Firestore project id (--project-id) or an input file (--input) is required"
                    .to_owned(),
            })?;

        Ok(SourceSelection::Firestore(FirestoreSettings {
            base_url: self.base_url.clone(),
            project_id: project_id.to_owned(),
            collection: self.collection.clone(),
            api_key: self.api_key.clone(),
            page_size: self.page_size,
            timeout: Duration::from_secs(self.timeout_seconds),
        }))
    }

    /// Parses the configured match policy, defaulting to normalised.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] for an unknown policy name.
    pub fn match_policy(&self) -> Result<MatchPolicy, DashboardError> {
        self.match_policy
            .as_deref()
            .map_or(Ok(MatchPolicy::default()), str::parse)
    }

    /// Parses the configured initial filters.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidFilter`] when the expression is
    /// malformed.
    pub fn filter_state(&self) -> Result<FilterState, DashboardError> {
        self.filters
            .as_deref()
            .map_or_else(|| Ok(FilterState::new()), FilterState::parse)
    }

    /// Spreadsheet path for exports.
    #[must_use]
    pub fn export_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(
            self.export_path
                .as_deref()
                .unwrap_or(DEFAULT_EXPORT_FILE),
        )
    }
}

#[cfg(test)]
mod tests;
