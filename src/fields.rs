//! Filter fields known to the dashboard.
//!
//! The dataset is keyed by camel-case Portuguese field names. The known
//! fields below get a fixed panel position and a display label; any other
//! catalogued field except the measures gets a control after them.

use crate::catalog::FieldCatalog;
use crate::selection::MultiSelect;

/// A statically known filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownField {
    /// Record key.
    pub key: &'static str,
    /// Label shown in the filter panel.
    pub label: &'static str,
}

/// Known filter fields, in panel order.
pub const KNOWN_FIELDS: &[KnownField] = &[
    KnownField::new("bolsaFamilia", "Bolsa Família"),
    KnownField::new("situacaoPobreza", "Situação de Pobreza"),
    KnownField::new("setorEconomico", "Setor Econômico"),
    KnownField::new("sexo", "Sexo"),
    KnownField::new("racaCor", "Raça/Cor"),
    KnownField::new("grauInstrucao", "Grau de Instrução"),
    KnownField::new("faixaEtaria", "Faixa Etária"),
    KnownField::new("cadUnico", "CadÚnico"),
    KnownField::new("uf", "UF"),
    KnownField::new("ano", "Ano"),
];

/// Numeric measure fields, never offered as filters.
pub const MEASURE_FIELDS: &[&str] = &["admissoes", "desligamentos", "saldo"];

/// Record key for the category column.
pub const CATEGORY: &str = "categoria";
/// Record key for the state column.
pub const STATE: &str = "uf";
/// Record key for admissions.
pub const ADMISSIONS: &str = "admissoes";
/// Record key for terminations.
pub const TERMINATIONS: &str = "desligamentos";
/// Record key for the net balance.
pub const BALANCE: &str = "saldo";

impl KnownField {
    const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

fn is_known(field: &str) -> bool {
    KNOWN_FIELDS.iter().any(|known| known.key == field)
}

/// Catalogued fields that are neither known nor measures, in catalog order.
pub fn extra_fields(catalog: &FieldCatalog) -> impl Iterator<Item = &str> {
    catalog
        .fields()
        .filter(|field| !is_known(field) && !MEASURE_FIELDS.contains(field))
}

/// Every field a reset must clear: the known ones plus the catalogue's.
#[must_use]
pub fn resettable_fields(catalog: &FieldCatalog) -> Vec<&str> {
    let mut fields: Vec<&str> = KNOWN_FIELDS.iter().map(|known| known.key).collect();
    fields.extend(catalog.fields().filter(|field| !is_known(field)));
    fields
}

/// Builds one picker per field that has at least one option.
#[must_use]
pub fn build_pickers(catalog: &FieldCatalog) -> Vec<MultiSelect> {
    let known = KNOWN_FIELDS.iter().map(|known| (known.key, known.label));
    let extra = extra_fields(catalog).map(|field| (field, field));

    known
        .chain(extra)
        .filter(|(field, _)| !catalog.options(field).is_empty())
        .map(|(field, label)| MultiSelect::new(field, label, catalog.options(field).to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::record::Record;

    #[fixture]
    fn catalog() -> FieldCatalog {
        FieldCatalog::build(&[
            Record::new()
                .with("uf", "Bahia")
                .with("sexo", "Mulher")
                .with("categoria", "Sexo")
                .with("estado", "BA")
                .with("racaCor", "")
                .with("admissoes", 3_i64)
                .with("saldo", 1_i64),
            Record::new().with("uf", "Acre").with("sexo", "Homem"),
        ])
    }

    #[rstest]
    fn pickers_follow_known_order_then_extras(catalog: FieldCatalog) {
        let pickers = build_pickers(&catalog);
        let fields: Vec<&str> = pickers.iter().map(MultiSelect::field).collect();

        assert_eq!(fields, vec!["sexo", "uf", "categoria", "estado"]);
    }

    #[rstest]
    fn known_pickers_use_display_labels(catalog: FieldCatalog) {
        let pickers = build_pickers(&catalog);
        let labels: Vec<&str> = pickers.iter().map(MultiSelect::label).collect();

        assert_eq!(labels, vec!["Sexo", "UF", "categoria", "estado"]);
    }

    #[test]
    fn empty_catalog_builds_no_pickers() {
        assert!(build_pickers(&FieldCatalog::default()).is_empty());
    }

    #[rstest]
    fn resettable_fields_cover_known_and_discovered(catalog: FieldCatalog) {
        let fields = resettable_fields(&catalog);

        assert!(fields.contains(&"bolsaFamilia"));
        assert!(fields.contains(&"estado"));
        assert!(fields.contains(&"saldo"));
        assert_eq!(fields.iter().filter(|field| **field == "uf").count(), 1);
    }
}
