//! Filter panel component.
//!
//! One line per picker showing its collapsed selection. When the panel has
//! focus, the active picker is expanded beneath its line with one checkbox
//! row per entry.

use crate::filter::FilterState;
use crate::selection::{MultiSelect, SelectionDisplay};

const NO_FILTERS_TEXT: &str = "Nenhum filtro disponível";

/// Context for rendering the filter panel.
#[derive(Debug, Clone)]
pub struct FilterPanelViewContext<'a> {
    /// Pickers in panel order.
    pub pickers: &'a [MultiSelect],
    /// Current selections.
    pub filter_state: &'a FilterState,
    /// Index of the active picker.
    pub active_picker: usize,
    /// Whether the panel has keyboard focus.
    pub focused: bool,
    /// Maximum expanded entry rows.
    pub max_entries: usize,
}

/// Component rendering the filter panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPanelComponent;

impl FilterPanelComponent {
    /// Renders the panel.
    #[must_use]
    pub fn view(ctx: &FilterPanelViewContext<'_>) -> String {
        if ctx.pickers.is_empty() {
            return format!("  {NO_FILTERS_TEXT}\n");
        }

        let mut output = String::new();
        for (index, picker) in ctx.pickers.iter().enumerate() {
            let active = index == ctx.active_picker;
            let marker = if active { ">" } else { " " };
            let selected = ctx.filter_state.selection(picker.field());
            output.push_str(&format!("{marker} {}\n", summary(picker, selected)));

            if active && ctx.focused {
                output.push_str(&Self::expanded(picker, selected, ctx.max_entries));
            }
        }
        output
    }

    /// Number of lines [`Self::view`] produces for `ctx`.
    #[must_use]
    pub fn height(ctx: &FilterPanelViewContext<'_>) -> usize {
        let expanded = ctx
            .pickers
            .get(ctx.active_picker)
            .filter(|_| ctx.focused)
            .map_or(0, |picker| picker.entry_count().min(ctx.max_entries.max(1)));
        ctx.pickers.len().max(1).saturating_add(expanded)
    }

    fn expanded(picker: &MultiSelect, selected: &[String], max_entries: usize) -> String {
        let window = max_entries.max(1);
        let start = picker
            .highlighted()
            .saturating_add(1)
            .saturating_sub(window);

        let mut output = String::new();
        for index in (start..picker.entry_count()).take(window) {
            let Some(entry) = picker.entry_at(index) else {
                continue;
            };
            let cursor = if index == picker.highlighted() { ">" } else { " " };
            let check = if picker.is_checked(&entry, selected) { "x" } else { " " };
            output.push_str(&format!("    {cursor} [{check}] {}\n", entry.label()));
        }
        output
    }
}

fn summary(picker: &MultiSelect, selected: &[String]) -> String {
    match picker.display(selected) {
        SelectionDisplay::Placeholder(placeholder) => placeholder,
        SelectionDisplay::All => format!("{}: [{}]", picker.label(), crate::filter::ALL_SENTINEL),
        SelectionDisplay::Badges(values) => {
            let badges: Vec<String> = values.iter().map(|value| format!("[{value}]")).collect();
            format!("{}: {}", picker.label(), badges.join(" "))
        }
    }
}
