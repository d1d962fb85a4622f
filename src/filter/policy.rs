//! Value comparison policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::DashboardError;

/// How a record value is compared with a selected value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Accent-stripped, trimmed, upper-cased comparison.
    ///
    /// `"São Paulo"` and `" Sao paulo"` compare equal.
    #[default]
    Normalised,
    /// Exact comparison of display forms.
    Strict,
}

impl MatchPolicy {
    /// Returns the comparison key for `value` under this policy.
    #[must_use]
    pub fn key(self, value: &str) -> String {
        match self {
            Self::Normalised => normalise(value),
            Self::Strict => value.to_owned(),
        }
    }

    /// Returns true when `left` and `right` are equal under this policy.
    #[must_use]
    pub fn equivalent(self, left: &str, right: &str) -> bool {
        match self {
            Self::Normalised => normalise(left) == normalise(right),
            Self::Strict => left == right,
        }
    }
}

/// Strips diacritics, trims surrounding whitespace, and upper-cases.
#[must_use]
pub fn normalise(value: &str) -> String {
    value
        .nfd()
        .filter(|character| !is_combining_mark(*character))
        .collect::<String>()
        .trim()
        .to_uppercase()
}

impl FromStr for MatchPolicy {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normalised" | "normalized" | "loose" => Ok(Self::Normalised),
            "strict" | "exact" => Ok(Self::Strict),
            _ => Err(DashboardError::Configuration {
                message: format!(
                    "unsupported match policy '{s}': valid options are 'normalised' or 'strict'"
                ),
            }),
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normalised => write!(f, "normalised"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::accents_and_case("São Paulo", "Sao paulo", true)]
    #[case::surrounding_space("  Ceará ", "CEARA", true)]
    #[case::different_words("Pará", "Paraná", false)]
    fn normalised_policy_ignores_accents_case_and_padding(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(MatchPolicy::Normalised.equivalent(left, right), expected);
    }

    #[test]
    fn strict_policy_compares_exactly() {
        assert!(MatchPolicy::Strict.equivalent("São Paulo", "São Paulo"));
        assert!(!MatchPolicy::Strict.equivalent("São Paulo", "Sao paulo"));
    }

    #[test]
    fn normalise_produces_upper_ascii_for_portuguese_labels() {
        assert_eq!(normalise("Pós-graduação completa"), "POS-GRADUACAO COMPLETA");
        assert_eq!(normalise("Indígena"), "INDIGENA");
    }

    #[rstest]
    #[case("normalised", MatchPolicy::Normalised)]
    #[case("Normalized", MatchPolicy::Normalised)]
    #[case("strict", MatchPolicy::Strict)]
    fn parses_policy_names(#[case] input: &str, #[case] expected: MatchPolicy) {
        assert_eq!(input.parse::<MatchPolicy>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(matches!(
            "fuzzy".parse::<MatchPolicy>(),
            Err(DashboardError::Configuration { .. })
        ));
    }
}
