//! `tracing` subscriber installation.
//!
//! The dashboard owns the terminal, so its logs go to a file when one is
//! configured and are otherwise discarded. Export mode logs to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LabordashConfig, OperationMode};
use crate::error::DashboardError;

const DEFAULT_DIRECTIVE: &str = "info";

/// Builds the level filter from `log_filter`, `RUST_LOG`, or `info`.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when `directive` cannot be
/// parsed.
pub fn build_filter(directive: Option<&str>) -> Result<EnvFilter, DashboardError> {
    match directive {
        Some(raw) => EnvFilter::try_new(raw).map_err(|error| DashboardError::Configuration {
            message: format!("invalid log filter '{raw}': {error}"),
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))),
    }
}

/// Installs the global subscriber for `config`.
///
/// Does nothing in dashboard mode without a `log_file`.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] for an invalid filter or when a
/// subscriber is already installed, and [`DashboardError::Io`] when the log
/// file cannot be opened.
pub fn init_logging(config: &LabordashConfig) -> Result<(), DashboardError> {
    let writer = match (config.operation_mode(), config.log_file.as_deref()) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|error| {
                    DashboardError::io(&format!("failed to open log file '{path}'"), &error)
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        (OperationMode::ExportOnly, None) => BoxMakeWriter::new(std::io::stderr),
        (OperationMode::Dashboard, None) => return Ok(()),
    };

    let filter = build_filter(config.log_filter.as_deref())?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|error| DashboardError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain_level("debug")]
    #[case::per_target("labordash=trace,reqwest=warn")]
    fn accepts_valid_directives(#[case] directive: &str) {
        assert!(build_filter(Some(directive)).is_ok());
    }

    #[test]
    fn rejects_invalid_directive() {
        assert!(matches!(
            build_filter(Some("labordash=loud")),
            Err(DashboardError::Configuration { .. })
        ));
    }

    #[test]
    fn dashboard_without_log_file_installs_nothing() {
        assert_eq!(init_logging(&LabordashConfig::default()), Ok(()));
    }
}
