//! `.xlsx` writer for exported rows.

use camino::Utf8Path;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::DashboardError;
use crate::record::Record;

use super::model::{Cell, EXPORT_HEADERS, ExportRow};

/// Worksheet holding the exported rows.
pub const SHEET_NAME: &str = "Dados";
/// File name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "dados_filtrados.xlsx";

fn build_workbook(rows: &[ExportRow]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (column, header) in (0_u16..).zip(EXPORT_HEADERS) {
        worksheet.write_string(0, column, header)?;
    }

    for (row_number, row) in (1_u32..).zip(rows) {
        for (column, cell) in (0_u16..).zip(row.cells()) {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_number, column, text)?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row_number, column, *number)?;
                }
                Cell::Blank => {}
            }
        }
    }

    Ok(workbook)
}

fn export_error(error: &XlsxError) -> DashboardError {
    DashboardError::Export {
        message: error.to_string(),
    }
}

/// Serialises `rows` into an in-memory `.xlsx` document.
///
/// # Errors
///
/// Returns [`DashboardError::Export`] when the workbook cannot be assembled.
pub fn workbook_bytes(rows: &[ExportRow]) -> Result<Vec<u8>, DashboardError> {
    let mut workbook = build_workbook(rows).map_err(|error| export_error(&error))?;
    workbook
        .save_to_buffer()
        .map_err(|error| export_error(&error))
}

/// Writes `rows` to `path` as an `.xlsx` workbook.
///
/// # Errors
///
/// Returns [`DashboardError::Export`] when the workbook cannot be assembled
/// or saved.
pub fn write_workbook(path: &Utf8Path, rows: &[ExportRow]) -> Result<(), DashboardError> {
    let mut workbook = build_workbook(rows).map_err(|error| export_error(&error))?;
    workbook
        .save(path.as_std_path())
        .map_err(|error| DashboardError::Export {
            message: format!("failed to save '{path}': {error}"),
        })
}

/// Exports `records` to `path` and returns the number of rows written.
///
/// # Errors
///
/// Propagates [`write_workbook`] failures.
pub fn export_records(path: &Utf8Path, records: &[&Record]) -> Result<usize, DashboardError> {
    let rows: Vec<ExportRow> = records.iter().map(|record| ExportRow::from(*record)).collect();
    write_workbook(path, &rows)?;
    tracing::info!(%path, rows = rows.len(), "exported filtered records");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};

    use super::*;

    fn read_back(bytes: Vec<u8>) -> Vec<Vec<Data>> {
        let mut workbook: Xlsx<_> =
            open_workbook_from_rs(Cursor::new(bytes)).expect("workbook should open");
        let range = workbook
            .worksheet_range(SHEET_NAME)
            .expect("sheet should exist");
        range.rows().map(<[Data]>::to_vec).collect()
    }

    #[test]
    fn workbook_has_headers_and_rows() {
        let records = [
            Record::new()
                .with("categoria", "Sexo")
                .with("admissoes", 10_i64)
                .with("desligamentos", 2_i64)
                .with("saldo", 8_i64),
            Record::new().with("categoria", "Raça/Cor").with("saldo", -1_i64),
        ];
        let rows: Vec<ExportRow> = records.iter().map(ExportRow::from).collect();

        let sheet = read_back(workbook_bytes(&rows).expect("should serialise"));

        assert_eq!(sheet.len(), 3);
        assert_eq!(
            sheet[0],
            vec![
                Data::String("Categoria".to_owned()),
                Data::String("Admissoes".to_owned()),
                Data::String("Desligamentos".to_owned()),
                Data::String("Saldo".to_owned()),
            ]
        );
        assert_eq!(sheet[1][0], Data::String("Sexo".to_owned()));
        assert_eq!(sheet[1][1], Data::Float(10.0));
        assert_eq!(sheet[1][3], Data::Float(8.0));
        assert_eq!(sheet[2][1], Data::Empty);
        assert_eq!(sheet[2][3], Data::Float(-1.0));
    }

    #[test]
    fn empty_export_has_only_headers() {
        let sheet = read_back(workbook_bytes(&[]).expect("should serialise"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn export_records_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join(DEFAULT_EXPORT_FILE))
            .expect("utf-8 path");
        let record = Record::new().with("categoria", "Ano").with("saldo", 3_i64);

        let written = export_records(&path, &[&record]).expect("should export");

        assert_eq!(written, 1);
        let bytes = std::fs::read(&path).expect("file should exist");
        assert_eq!(read_back(bytes)[1][0], Data::String("Ano".to_owned()));
    }
}
