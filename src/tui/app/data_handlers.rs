//! Load completion and export handlers.

use bubbletea_rs::Cmd;

use crate::export::export_records;
use crate::record::Record;

use super::DashboardApp;

impl DashboardApp {
    /// Installs the loaded records and clears the loading flag.
    ///
    /// A failed load arrives as an empty set and leaves an empty table.
    pub(super) fn handle_records_loaded(&mut self, records: &[Record]) -> Option<Cmd> {
        self.replace_records(records.to_vec());
        self.loading = false;
        if self.records.is_empty() {
            self.status = Some("Nenhum registro carregado".to_owned());
        }
        None
    }

    /// Writes the filtered records to the configured spreadsheet.
    pub(super) fn handle_export(&mut self) -> Option<Cmd> {
        if self.loading {
            self.status = Some("Aguarde o carregamento dos dados".to_owned());
            return None;
        }

        let rows = self.filtered_records();
        let outcome = match export_records(&self.export_path, &rows) {
            Ok(count) => format!("{count} linhas exportadas para {}", self.export_path),
            Err(error) => {
                tracing::error!(%error, path = %self.export_path, "export failed");
                format!("Falha na exportação: {error}")
            }
        };
        self.status = Some(outcome);
        None
    }
}
