//! Multi-valued record filtering.
//!
//! - [`FilterState`] holds the values chosen for each field.
//! - [`MatchPolicy`] decides how a record value is compared with a choice.
//! - [`evaluate`] computes the visible subset from records and state.
//!
//! An empty selection, one containing [`ALL_SENTINEL`], or one accepting
//! every value the records hold for its field imposes no constraint.

mod evaluate;
mod policy;
mod state;

pub use evaluate::{evaluate, matching_indices};
pub use policy::MatchPolicy;
pub use state::FilterState;

/// Selectable value meaning "impose no constraint on this field".
pub const ALL_SENTINEL: &str = "Todos";

/// Returns true when `selected` narrows its field.
#[must_use]
pub fn is_constraining(selected: &[String]) -> bool {
    !selected.is_empty() && !selected.iter().any(|value| value == ALL_SENTINEL)
}
