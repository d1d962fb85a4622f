//! End-to-end load, filter, and export through a JSON file source.

use std::io::Write;

use calamine::{Data, Reader, Xlsx, open_workbook};
use camino::{Utf8Path, Utf8PathBuf};
use labordash::export::SHEET_NAME;
use labordash::{
    FieldCatalog, FilterState, JsonFileSource, MatchPolicy, RecordSource, export_filtered,
    load_records,
};
use rstest::{fixture, rstest};
use tempfile::{NamedTempFile, TempDir};

const DATASET: &str = r#"[
    {"categoria": "Sexo", "sexo": "Mulher", "uf": "Bahia", "ano": 2023,
     "admissoes": 120, "desligamentos": 80, "saldo": 40},
    {"categoria": "Sexo", "sexo": "Homem", "uf": "São Paulo", "ano": 2023,
     "admissoes": 300, "desligamentos": 310, "saldo": -10},
    {"categoria": "Raça/Cor", "sexo": "Mulher", "uf": "Ceará", "ano": 2022,
     "admissoes": 50, "desligamentos": 50, "saldo": 0},
    {"categoria": "Raça/Cor", "sexo": null, "uf": "", "ano": 2022,
     "admissoes": 5, "desligamentos": 1, "saldo": 4}
]"#;

#[fixture]
fn dataset() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(DATASET.as_bytes()).expect("write dataset");
    file
}

fn source_for(file: &NamedTempFile) -> JsonFileSource {
    JsonFileSource::new(Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf-8 path"))
}

fn output_path(dir: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("dados_filtrados.xlsx")).expect("utf-8 path")
}

fn read_sheet(path: &Utf8Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook should open");
    let range = workbook
        .worksheet_range(SHEET_NAME)
        .expect("sheet should exist");
    range.rows().map(<[Data]>::to_vec).collect()
}

#[rstest]
#[tokio::test]
async fn catalog_skips_blank_values(dataset: NamedTempFile) {
    let records = load_records(&source_for(&dataset)).await;
    let catalog = FieldCatalog::build(&records);

    assert_eq!(records.len(), 4);
    assert_eq!(catalog.options("uf"), ["Bahia", "São Paulo", "Ceará"]);
    assert_eq!(catalog.options("sexo"), ["Mulher", "Homem"]);
    assert_eq!(catalog.options("ano"), ["2023", "2022"]);
}

#[rstest]
#[case::single_state("uf=Bahia", vec!["Sexo"])]
#[case::accent_insensitive("uf=sao paulo", vec!["Sexo"])]
#[case::two_fields("sexo=Mulher;ano=2022", vec!["Raça/Cor"])]
#[case::unconstrained("", vec!["Sexo", "Sexo", "Raça/Cor", "Raça/Cor"])]
#[case::every_state(
    "uf=Bahia,São Paulo,Ceará",
    vec!["Sexo", "Sexo", "Raça/Cor", "Raça/Cor"]
)]
#[tokio::test]
async fn exports_matching_rows_in_order(
    dataset: NamedTempFile,
    #[case] filters: &str,
    #[case] expected_categories: Vec<&str>,
) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = output_path(&dir);
    let filters = FilterState::parse(filters).expect("valid filters");

    let summary = export_filtered(&source_for(&dataset), &filters, MatchPolicy::Normalised, &path)
        .await
        .expect("export should succeed");

    assert_eq!(summary.loaded, 4);
    assert_eq!(summary.exported, expected_categories.len());
    let sheet = read_sheet(&path);
    let categories: Vec<String> = sheet
        .iter()
        .skip(1)
        .filter_map(|row| row.first())
        .map(ToString::to_string)
        .collect();
    assert_eq!(categories, expected_categories);
}

#[rstest]
#[tokio::test]
async fn exported_cells_keep_numbers_numeric(dataset: NamedTempFile) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = output_path(&dir);
    let filters = FilterState::parse("uf=São Paulo").expect("valid filters");

    export_filtered(&source_for(&dataset), &filters, MatchPolicy::Strict, &path)
        .await
        .expect("export should succeed");

    let sheet = read_sheet(&path);
    assert_eq!(
        sheet[0],
        vec![
            Data::String("Categoria".to_owned()),
            Data::String("Admissoes".to_owned()),
            Data::String("Desligamentos".to_owned()),
            Data::String("Saldo".to_owned()),
        ]
    );
    assert_eq!(
        sheet[1],
        vec![
            Data::String("Sexo".to_owned()),
            Data::Float(300.0),
            Data::Float(310.0),
            Data::Float(-10.0),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn strict_policy_requires_exact_text(dataset: NamedTempFile) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = output_path(&dir);
    let filters = FilterState::parse("uf=sao paulo").expect("valid filters");

    let summary = export_filtered(&source_for(&dataset), &filters, MatchPolicy::Strict, &path)
        .await
        .expect("export should succeed");

    assert_eq!(summary.exported, 0);
    assert_eq!(read_sheet(&path).len(), 1);
}

#[tokio::test]
async fn missing_input_exports_empty_sheet() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = output_path(&dir);
    let source = JsonFileSource::new("/nonexistent/labordash/dados.json");

    assert!(source.fetch_all().await.is_err());

    let summary = export_filtered(&source, &FilterState::new(), MatchPolicy::Normalised, &path)
        .await
        .expect("export should succeed");

    assert_eq!(summary.loaded, 0);
    assert_eq!(read_sheet(&path).len(), 1);
}
