//! Selected values per field.
//!
//! The state is created empty for every session and only changes through
//! the discrete mutations below. Each mutation is one state transition and
//! bumps [`FilterState::revision`], so a view can tell how many transitions
//! happened between two renders.

use std::collections::BTreeMap;

use crate::error::DashboardError;

use super::is_constraining;

/// Mapping from field name to the values currently chosen for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selections: BTreeMap<String, Vec<String>>,
    revision: u64,
}

impl FilterState {
    /// Creates an empty, unconstrained state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the values chosen for `field` (empty when none).
    #[must_use]
    pub fn selection(&self, field: &str) -> &[String] {
        self.selections.get(field).map_or(&[], Vec::as_slice)
    }

    /// Replaces the selection for `field`.
    pub fn set(&mut self, field: &str, values: Vec<String>) {
        self.selections.insert(field.to_owned(), values);
        self.bump();
    }

    /// Adds `value` to the selection for `field` if not already present.
    pub fn add(&mut self, field: &str, value: &str) {
        let entry = self.selections.entry(field.to_owned()).or_default();
        if !entry.iter().any(|existing| existing == value) {
            entry.push(value.to_owned());
        }
        self.bump();
    }

    /// Removes `value` from the selection for `field`.
    pub fn remove(&mut self, field: &str, value: &str) {
        if let Some(entry) = self.selections.get_mut(field) {
            entry.retain(|existing| existing != value);
        }
        self.bump();
    }

    /// Clears the selection for a single field.
    pub fn clear(&mut self, field: &str) {
        self.set(field, Vec::new());
    }

    /// Sets every field in `fields` to an empty selection at once.
    ///
    /// Fields not listed are dropped as well, so the result is fully
    /// unconstrained. This is a single transition.
    pub fn reset<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.selections = fields
            .into_iter()
            .map(|field| (field.to_owned(), Vec::new()))
            .collect();
        self.bump();
    }

    /// Iterates over every (field, selection) pair, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.selections
            .iter()
            .map(|(field, values)| (field.as_str(), values.as_slice()))
    }

    /// Iterates over the fields whose selection narrows the record set.
    pub fn active_fields(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, values)| is_constraining(values))
            .map(|(field, _)| field)
    }

    /// Returns true when no field constrains the record set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.active_fields().next().is_none()
    }

    /// Number of transitions applied since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Parses a command-line filter expression.
    ///
    /// The syntax is `field=value,value;field=value`. Whitespace around
    /// fields and values is ignored and empty clauses are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidFilter`] when a clause has no `=` or
    /// names an empty field.
    pub fn parse(expression: &str) -> Result<Self, DashboardError> {
        let mut state = Self::new();
        for clause in expression.split(';').map(str::trim) {
            if clause.is_empty() {
                continue;
            }
            let (field, values) =
                clause
                    .split_once('=')
                    .ok_or_else(|| DashboardError::InvalidFilter {
                        expression: clause.to_owned(),
                        message: "expected field=value[,value...]".to_owned(),
                    })?;
            let field_name = field.trim();
            if field_name.is_empty() {
                return Err(DashboardError::InvalidFilter {
                    expression: clause.to_owned(),
                    message: "field name is empty".to_owned(),
                });
            }
            for value in values.split(',').map(str::trim).filter(|v| !v.is_empty()) {
                state.add(field_name, value);
            }
        }
        Ok(state)
    }

    const fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
