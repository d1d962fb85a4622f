//! Flat labour-market records as loaded from the document store.
//!
//! A [`Record`] maps field names to a closed set of scalar [`FieldValue`]s.
//! Records carry no identity beyond their position in the loaded set and
//! are never mutated after loading.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// Scalar value stored under a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text, such as a state name or an age band.
    Text(String),
    /// Whole number, such as a year or an admissions count.
    Integer(i64),
    /// Fractional number.
    Float(f64),
    /// Explicit null written by the store.
    Null,
}

impl FieldValue {
    /// Converts a JSON scalar into a field value.
    ///
    /// Booleans become text so they can be offered as filter options.
    /// Arrays and objects are not flat values and yield `None`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Float)),
            Value::Bool(flag) => Some(Self::Text(flag.to_string())),
            Value::Null => Some(Self::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns true for nulls and text that is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Null => true,
            Self::Integer(_) | Self::Float(_) => false,
        }
    }

    /// Returns the numeric value, if this is a number.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "labour-market counts are far below 2^53"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            Self::Text(_) | Self::Null => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{number}"),
            Self::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One flat data row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `field` set to `value`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Builds a record from a JSON object, skipping nested values.
    #[must_use]
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        object
            .iter()
            .filter_map(|(field, value)| {
                let converted = FieldValue::from_json(value);
                if converted.is_none() {
                    tracing::debug!("skipping non-scalar field '{field}'");
                }
                converted.map(|scalar| (field.clone(), scalar))
            })
            .collect()
    }

    /// Returns the value stored under `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Returns the display form of `field`, or `None` when it is absent or
    /// blank.
    #[must_use]
    pub fn display_value(&self, field: &str) -> Option<String> {
        self.get(field)
            .filter(|value| !value.is_blank())
            .map(ToString::to_string)
    }

    /// Iterates over the field names in this record.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::text(json!("Bahia"), Some(FieldValue::Text("Bahia".to_owned())))]
    #[case::integer(json!(2023), Some(FieldValue::Integer(2023)))]
    #[case::float(json!(1.5), Some(FieldValue::Float(1.5)))]
    #[case::boolean(json!(true), Some(FieldValue::Text("true".to_owned())))]
    #[case::null(json!(null), Some(FieldValue::Null))]
    #[case::array(json!([1, 2]), None)]
    #[case::object(json!({"a": 1}), None)]
    fn from_json_maps_scalars(#[case] input: Value, #[case] expected: Option<FieldValue>) {
        assert_eq!(FieldValue::from_json(&input), expected);
    }

    #[rstest]
    #[case::whole_float(FieldValue::Float(8.0), "8")]
    #[case::fraction(FieldValue::Float(2.5), "2.5")]
    #[case::negative(FieldValue::Integer(-3), "-3")]
    #[case::null(FieldValue::Null, "")]
    fn display_uses_shortest_form(#[case] value: FieldValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn blank_values_are_not_displayed() {
        let record = Record::new()
            .with("uf", "  ")
            .with("ano", FieldValue::Null)
            .with("saldo", 0_i64);

        assert_eq!(record.display_value("uf"), None);
        assert_eq!(record.display_value("ano"), None);
        assert_eq!(record.display_value("missing"), None);
        assert_eq!(record.display_value("saldo").as_deref(), Some("0"));
    }

    #[test]
    fn from_json_object_skips_nested_values() {
        let object = json!({"uf": "Ceará", "tags": ["a"], "saldo": 4});
        let Value::Object(map) = object else {
            panic!("fixture should be an object");
        };

        let record = Record::from_json_object(&map);

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["saldo", "uf"]);
        assert_eq!(record.get("saldo"), Some(&FieldValue::Integer(4)));
    }
}
