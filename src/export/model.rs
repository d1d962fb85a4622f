//! Export row model.

use crate::fields::{ADMISSIONS, BALANCE, CATEGORY, TERMINATIONS};
use crate::record::{FieldValue, Record};

/// Column headers, in output order.
pub const EXPORT_HEADERS: [&str; 4] = ["Categoria", "Admissoes", "Desligamentos", "Saldo"];

/// One exported cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
    /// Nothing written.
    Blank,
}

impl From<Option<&FieldValue>> for Cell {
    fn from(value: Option<&FieldValue>) -> Self {
        match value {
            Some(FieldValue::Text(text)) if !text.trim().is_empty() => Self::Text(text.clone()),
            Some(number @ (FieldValue::Integer(_) | FieldValue::Float(_))) => {
                number.as_f64().map_or(Self::Blank, Self::Number)
            }
            Some(FieldValue::Text(_) | FieldValue::Null) | None => Self::Blank,
        }
    }
}

/// A record reduced to the exported columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    /// `categoria`.
    pub category: Cell,
    /// `admissoes`.
    pub admissions: Cell,
    /// `desligamentos`.
    pub terminations: Cell,
    /// `saldo`.
    pub balance: Cell,
}

impl ExportRow {
    /// Cells in header order.
    #[must_use]
    pub fn cells(&self) -> [&Cell; 4] {
        [
            &self.category,
            &self.admissions,
            &self.terminations,
            &self.balance,
        ]
    }
}

impl From<&Record> for ExportRow {
    fn from(record: &Record) -> Self {
        Self {
            category: record.get(CATEGORY).into(),
            admissions: record.get(ADMISSIONS).into(),
            terminations: record.get(TERMINATIONS).into(),
            balance: record.get(BALANCE).into(),
        }
    }
}
