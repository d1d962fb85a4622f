//! Export-only mode.

use std::io::{self, Write};

use labordash::export::ExportSummary;
use labordash::{DashboardError, LabordashConfig, export_filtered};

/// Loads, filters, and exports without starting the dashboard, then prints
/// a one-line summary.
///
/// # Errors
///
/// Returns an error for incomplete configuration, malformed filters, or a
/// failed spreadsheet write.
pub async fn run(config: &LabordashConfig) -> Result<(), DashboardError> {
    let source = config.source_selection()?.into_source()?;
    let filters = config.filter_state()?;
    let policy = config.match_policy()?;

    let summary = export_filtered(source.as_ref(), &filters, policy, &config.export_path()).await?;

    let mut stdout = io::stdout().lock();
    write_summary_to(&mut stdout, &summary)
}

fn write_summary_to<W: Write>(
    writer: &mut W,
    summary: &ExportSummary,
) -> Result<(), DashboardError> {
    writeln!(writer, "{summary}")
        .map_err(|error| DashboardError::io("failed to write summary", &error))
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    #[test]
    fn summary_is_one_line() {
        let summary = ExportSummary {
            loaded: 10,
            exported: 4,
            path: Utf8PathBuf::from("dados_filtrados.xlsx"),
        };
        let mut buffer = Vec::new();

        write_summary_to(&mut buffer, &summary).expect("write should succeed");

        assert_eq!(
            String::from_utf8(buffer).expect("utf-8 output"),
            "Exported 4 of 10 records to dados_filtrados.xlsx\n"
        );
    }
}
