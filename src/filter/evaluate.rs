//! Pure evaluation of a filter state against a record set.

use std::collections::HashSet;

use crate::record::Record;

use super::{FilterState, MatchPolicy, is_constraining};

/// A constraining field with its pre-computed comparison keys.
struct Constraint<'s> {
    field: &'s str,
    accepted: HashSet<String>,
}

impl Constraint<'_> {
    fn admits(&self, record: &Record, policy: MatchPolicy) -> bool {
        record_key(record, self.field, policy)
            .is_some_and(|key| self.accepted.contains(&key))
    }

    /// True when every value observed for the field is accepted.
    fn covers_all(&self, records: &[Record], policy: MatchPolicy) -> bool {
        let mut observed = records
            .iter()
            .filter_map(|record| record_key(record, self.field, policy))
            .peekable();
        observed.peek().is_some() && observed.all(|key| self.accepted.contains(&key))
    }
}

/// Comparison key of a record's value, or `None` when it is missing or blank.
fn record_key(record: &Record, field: &str, policy: MatchPolicy) -> Option<String> {
    let value = record.display_value(field)?;
    if value.trim().is_empty() {
        return None;
    }
    Some(policy.key(&value)).filter(|key| !key.is_empty())
}

fn constraints<'s>(
    records: &[Record],
    state: &'s FilterState,
    policy: MatchPolicy,
) -> Vec<Constraint<'s>> {
    state
        .iter()
        .filter(|(_, selected)| is_constraining(selected))
        .map(|(field, selected)| Constraint {
            field,
            accepted: selected.iter().map(|value| policy.key(value)).collect(),
        })
        .filter(|constraint| !constraint.covers_all(records, policy))
        .collect()
}

/// Returns the positions of the records that satisfy `state`, in order.
#[must_use]
pub fn matching_indices(
    records: &[Record],
    state: &FilterState,
    policy: MatchPolicy,
) -> Vec<usize> {
    let active = constraints(records, state, policy);
    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| active.iter().all(|c| c.admits(record, policy)))
        .map(|(index, _)| index)
        .collect();

    tracing::debug!(
        active_fields = ?active.iter().map(|c| c.field).collect::<Vec<_>>(),
        before = records.len(),
        after = indices.len(),
        "filters applied"
    );
    indices
}

/// Returns the records that satisfy `state`, preserving their order.
///
/// A field imposes no constraint when its selection is empty, contains the
/// "all" sentinel, or accepts every value observed for it in `records`.
/// Otherwise a record with a missing or blank value for the field is
/// excluded.
#[must_use]
pub fn evaluate<'a>(
    records: &'a [Record],
    state: &FilterState,
    policy: MatchPolicy,
) -> Vec<&'a Record> {
    matching_indices(records, state, policy)
        .into_iter()
        .filter_map(|index| records.get(index))
        .collect()
}
