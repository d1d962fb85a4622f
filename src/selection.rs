//! Multi-value picker model.
//!
//! A picker offers the [`ALL_SENTINEL`] entry followed by a field's catalog
//! options. It never owns the selection: every operation takes the current
//! selection from the [`FilterState`](crate::filter::FilterState) and
//! returns the new one, which the caller writes back.
//!
//! Selecting "all" stores the expanded option list, not the sentinel. A
//! selection that holds only the sentinel (for example one parsed from the
//! command line) is still recognised, and both forms display as a single
//! collapsed badge.

use std::collections::HashSet;

use crate::filter::ALL_SENTINEL;

/// One selectable row of a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEntry {
    /// The "all values" sentinel.
    All,
    /// A concrete option.
    Value(String),
}

impl PickerEntry {
    /// Text shown for this entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Value(value) => value,
        }
    }
}

/// What a collapsed picker shows for its current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDisplay {
    /// Nothing chosen; show the picker's placeholder text.
    Placeholder(String),
    /// Everything chosen; show one "all" badge.
    All,
    /// Show one badge per chosen value.
    Badges(Vec<String>),
}

/// Returns true when `selected` holds exactly the full option set.
#[must_use]
pub fn is_full_selection(options: &[String], selected: &[String]) -> bool {
    if options.is_empty() || selected.len() != options.len() {
        return false;
    }
    let chosen: HashSet<&str> = selected.iter().map(String::as_str).collect();
    options.iter().all(|option| chosen.contains(option.as_str()))
}

/// Returns true when `selected` is exactly the sentinel.
#[must_use]
pub fn is_sentinel_only(selected: &[String]) -> bool {
    matches!(selected, [only] if only == ALL_SENTINEL)
}

/// Applies a toggle of `entry` to `selected`.
#[must_use]
pub fn toggle(options: &[String], selected: &[String], entry: &PickerEntry) -> Vec<String> {
    match entry {
        PickerEntry::All => toggle_all(options, selected),
        PickerEntry::Value(value) => toggle_value(selected, value),
    }
}

/// Toggles the "all" sentinel.
///
/// Clears the selection when it is already full or sentinel-only, and
/// otherwise selects every option.
#[must_use]
pub fn toggle_all(options: &[String], selected: &[String]) -> Vec<String> {
    if is_full_selection(options, selected) || is_sentinel_only(selected) {
        Vec::new()
    } else {
        options.to_vec()
    }
}

/// Removes `value` when chosen, appends it otherwise.
#[must_use]
pub fn toggle_value(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|chosen| chosen == value) {
        dismiss(selected, value)
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_owned());
        next
    }
}

/// Removes only `value` from `selected`.
#[must_use]
pub fn dismiss(selected: &[String], value: &str) -> Vec<String> {
    selected
        .iter()
        .filter(|chosen| chosen.as_str() != value)
        .cloned()
        .collect()
}

/// Computes the collapsed display for `selected`.
#[must_use]
pub fn display(placeholder: &str, options: &[String], selected: &[String]) -> SelectionDisplay {
    if selected.is_empty() {
        SelectionDisplay::Placeholder(placeholder.to_owned())
    } else if is_full_selection(options, selected) || is_sentinel_only(selected) {
        SelectionDisplay::All
    } else {
        SelectionDisplay::Badges(selected.to_vec())
    }
}

/// Picker for one filter field, with a highlighted-row cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelect {
    field: String,
    label: String,
    options: Vec<String>,
    highlighted: usize,
}

impl MultiSelect {
    /// Creates a picker for `field` offering `options`.
    #[must_use]
    pub fn new(field: impl Into<String>, label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            options,
            highlighted: 0,
        }
    }

    /// Field this picker writes to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Placeholder and heading text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Concrete options, sentinel excluded.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of rows, sentinel included.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.options.len().saturating_add(1)
    }

    /// Returns the entry at `index`; row 0 is the sentinel.
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<PickerEntry> {
        match index.checked_sub(1) {
            None => Some(PickerEntry::All),
            Some(option_index) => self.options.get(option_index).cloned().map(PickerEntry::Value),
        }
    }

    /// Index of the highlighted row.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The highlighted entry.
    #[must_use]
    pub fn highlighted_entry(&self) -> Option<PickerEntry> {
        self.entry_at(self.highlighted)
    }

    /// Moves the highlight down one row, stopping at the last.
    pub fn highlight_next(&mut self) {
        if self.highlighted.saturating_add(1) < self.entry_count() {
            self.highlighted = self.highlighted.saturating_add(1);
        }
    }

    /// Moves the highlight up one row, stopping at the sentinel.
    pub const fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Toggles the highlighted entry and returns the new selection.
    #[must_use]
    pub fn toggle_highlighted(&self, selected: &[String]) -> Vec<String> {
        self.highlighted_entry().map_or_else(
            || selected.to_vec(),
            |entry| toggle(&self.options, selected, &entry),
        )
    }

    /// Toggles the sentinel and returns the new selection.
    #[must_use]
    pub fn toggle_all(&self, selected: &[String]) -> Vec<String> {
        toggle_all(&self.options, selected)
    }

    /// Dismisses the highlighted value if it is chosen.
    ///
    /// Returns `None` when the highlight is on the sentinel or on a value
    /// that is not part of the selection.
    #[must_use]
    pub fn dismiss_highlighted(&self, selected: &[String]) -> Option<Vec<String>> {
        match self.highlighted_entry()? {
            PickerEntry::Value(value) if selected.contains(&value) => {
                Some(dismiss(selected, &value))
            }
            PickerEntry::All | PickerEntry::Value(_) => None,
        }
    }

    /// Returns true when `entry` is shown as chosen.
    #[must_use]
    pub fn is_checked(&self, entry: &PickerEntry, selected: &[String]) -> bool {
        match entry {
            PickerEntry::All => {
                is_full_selection(&self.options, selected) || is_sentinel_only(selected)
            }
            PickerEntry::Value(value) => selected.contains(value),
        }
    }

    /// Collapsed display for `selected`.
    #[must_use]
    pub fn display(&self, selected: &[String]) -> SelectionDisplay {
        display(&self.label, &self.options, selected)
    }
}
