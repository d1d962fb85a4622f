//! Dashboard mode.

use std::io::{self, Write};

use bubbletea_rs::Program;

use labordash::tui::{DashboardApp, DashboardContext, set_dashboard_context};
use labordash::{DashboardError, LabordashConfig};

/// Runs the interactive dashboard.
///
/// The record load starts once the program is running, so the first frame
/// shows the loading state.
///
/// # Errors
///
/// Returns an error if the configuration is incomplete or the terminal
/// program fails.
pub async fn run(config: &LabordashConfig) -> Result<(), DashboardError> {
    let source = config.source_selection()?.into_source()?;
    tracing::info!(source = %source.describe(), "starting dashboard");

    // A second call in the same process keeps the first context.
    let _ = set_dashboard_context(DashboardContext {
        source,
        policy: config.match_policy()?,
        export_path: config.export_path(),
        initial_filters: config.filter_state()?,
    });

    run_tui().await.map_err(|error| DashboardError::Tui {
        message: error.to_string(),
    })
}

async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
