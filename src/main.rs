//! labordash CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use labordash::logging::init_logging;
use labordash::{DashboardError, LabordashConfig, OperationMode};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&mut io::stderr().lock(), &error),
    }
}

/// Writes `error` to `writer` and returns the failing exit code.
///
/// A write failure is ignored; the exit code already reports the error.
fn report_failure<W: Write>(writer: &mut W, error: &DashboardError) -> ExitCode {
    drop(writeln!(writer, "{error}"));
    ExitCode::FAILURE
}

async fn run() -> Result<(), DashboardError> {
    let config = load_config()?;
    init_logging(&config)?;

    match config.operation_mode() {
        OperationMode::Dashboard => cli::dashboard::run(&config).await,
        OperationMode::ExportOnly => cli::export_only::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<LabordashConfig, DashboardError> {
    LabordashConfig::load().map_err(|error| DashboardError::Configuration {
        message: error.to_string(),
    })
}
