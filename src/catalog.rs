//! Selectable option enumeration for the filter panel.
//!
//! The catalog is derived once per data load. Its field set comes from the
//! first loaded record; its values come from every record.

use std::collections::{BTreeMap, HashSet};

use crate::record::Record;

/// Mapping from field name to the distinct values observed for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCatalog {
    entries: BTreeMap<String, Vec<String>>,
}

impl FieldCatalog {
    /// Builds the catalog for a loaded record set.
    ///
    /// For every field present on the first record, collects the display
    /// values of that field across all records in first-seen order. Blank,
    /// null, and absent values are dropped. An empty record set yields an
    /// empty catalog.
    #[must_use]
    pub fn build(records: &[Record]) -> Self {
        let Some(first) = records.first() else {
            return Self::default();
        };

        let entries = first
            .keys()
            .map(|field| (field.to_owned(), distinct_values(records, field)))
            .collect();

        Self { entries }
    }

    /// Returns the options for `field`, or an empty slice when unknown.
    #[must_use]
    pub fn options(&self, field: &str) -> &[String] {
        self.entries.get(field).map_or(&[], Vec::as_slice)
    }

    /// Iterates over the catalogued field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns true when the catalogue holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn distinct_values(records: &[Record], field: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| record.display_value(field))
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::record::FieldValue;

    #[test]
    fn empty_record_set_builds_empty_catalog() {
        let catalog = FieldCatalog::build(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.options("uf").is_empty());
    }

    #[test]
    fn blank_null_and_absent_values_are_excluded() {
        let records = vec![
            Record::new().with("uf", "Bahia"),
            Record::new().with("uf", ""),
            Record::new().with("uf", FieldValue::Null),
            Record::new(),
        ];

        let catalog = FieldCatalog::build(&records);

        assert_eq!(catalog.options("uf"), ["Bahia".to_owned()]);
    }

    #[test]
    fn values_keep_first_seen_order_without_duplicates() {
        let records = vec![
            Record::new().with("uf", "Pará"),
            Record::new().with("uf", "Acre"),
            Record::new().with("uf", "Pará"),
            Record::new().with("uf", "Bahia"),
        ];

        let catalog = FieldCatalog::build(&records);

        assert_eq!(catalog.options("uf"), ["Pará", "Acre", "Bahia"]);
    }

    #[test]
    fn field_set_comes_from_first_record() {
        let records = vec![
            Record::new().with("uf", "Acre"),
            Record::new().with("uf", "Bahia").with("sexo", "Mulher"),
        ];

        let catalog = FieldCatalog::build(&records);

        assert_eq!(catalog.fields().collect::<Vec<_>>(), vec!["uf"]);
        assert!(catalog.options("sexo").is_empty());
    }

    #[test]
    fn field_blank_everywhere_yields_empty_list() {
        let records = vec![
            Record::new().with("categoria", "").with("uf", "Acre"),
            Record::new().with("uf", "Bahia"),
        ];

        let catalog = FieldCatalog::build(&records);

        assert_eq!(catalog.fields().collect::<Vec<_>>(), vec!["categoria", "uf"]);
        assert!(catalog.options("categoria").is_empty());
    }

    #[rstest]
    #[case::integers(vec![2021_i64, 2022, 2021], vec!["2021", "2022"])]
    #[case::zero_is_kept(vec![0_i64, 5], vec!["0", "5"])]
    fn numeric_values_are_catalogued_as_text(
        #[case] values: Vec<i64>,
        #[case] expected: Vec<&str>,
    ) {
        let records: Vec<Record> = values
            .into_iter()
            .map(|value| Record::new().with("ano", value))
            .collect();

        let catalog = FieldCatalog::build(&records);

        assert_eq!(catalog.options("ano"), expected.as_slice());
    }
}
