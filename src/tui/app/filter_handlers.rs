//! Filter mutation handlers.
//!
//! Pickers compute the next selection from the current one; the handlers
//! write it back through `apply_filter_change` so the view is recomputed.
//! Picker edits only apply while the filter panel has focus; reset applies
//! from either pane.

use bubbletea_rs::Cmd;

use crate::fields::resettable_fields;

use super::{DashboardApp, Focus};

impl DashboardApp {
    fn write_active_selection<F>(&mut self, next_selection: F) -> Option<Cmd>
    where
        F: FnOnce(&crate::selection::MultiSelect, &[String]) -> Option<Vec<String>>,
    {
        if self.focus != Focus::Filters {
            return None;
        }
        let picker = self.pickers.get(self.active_picker)?;
        let field = picker.field().to_owned();
        let next = next_selection(picker, self.filter_state.selection(&field))?;

        tracing::debug!(field = %field, values = next.len(), "selection changed");
        self.apply_filter_change(|state| state.set(&field, next));
        self.status = None;
        None
    }

    pub(super) fn handle_toggle_highlighted(&mut self) -> Option<Cmd> {
        self.write_active_selection(|picker, selected| {
            Some(picker.toggle_highlighted(selected))
        })
    }

    pub(super) fn handle_toggle_all(&mut self) -> Option<Cmd> {
        self.write_active_selection(|picker, selected| Some(picker.toggle_all(selected)))
    }

    pub(super) fn handle_dismiss_highlighted(&mut self) -> Option<Cmd> {
        self.write_active_selection(|picker, selected| picker.dismiss_highlighted(selected))
    }

    /// Clears every known and discovered field in one transition.
    pub(super) fn handle_reset(&mut self) -> Option<Cmd> {
        let fields: Vec<String> = resettable_fields(&self.catalog)
            .into_iter()
            .map(str::to_owned)
            .collect();
        self.apply_filter_change(|state| state.reset(fields.iter().map(String::as_str)));
        self.status = Some("Filtros limpos".to_owned());
        tracing::info!(revision = self.filter_state.revision(), "filters reset");
        None
    }
}
