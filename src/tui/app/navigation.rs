//! Focus, picker, and cursor movement.
//!
//! Up and down move the picker highlight while the filter panel has focus
//! and the table cursor otherwise. Scrolling follows the cursor.

use bubbletea_rs::Cmd;

use super::{DashboardApp, Focus};

/// Lines used by everything except the table rows: header, blank line,
/// table heading, rule, and status bar.
const CHROME_HEIGHT: usize = 5;

impl DashboardApp {
    /// Number of table rows that fit under the filter panel.
    pub(super) fn table_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(self.filter_panel_height())
            .max(1)
    }

    pub(super) fn clamp_cursor(&mut self) {
        let max_index = self.filtered_count().saturating_sub(1);
        self.cursor_position = self.cursor_position.min(max_index);
        self.ensure_cursor_visible();
    }

    pub(super) fn ensure_cursor_visible(&mut self) {
        let visible_height = self.table_height();

        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }

    pub(super) fn handle_move_up(&mut self) -> Option<Cmd> {
        match self.focus {
            Focus::Filters => {
                if let Some(picker) = self.pickers.get_mut(self.active_picker) {
                    picker.highlight_previous();
                }
            }
            Focus::Table => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                self.ensure_cursor_visible();
            }
        }
        None
    }

    pub(super) fn handle_move_down(&mut self) -> Option<Cmd> {
        match self.focus {
            Focus::Filters => {
                if let Some(picker) = self.pickers.get_mut(self.active_picker) {
                    picker.highlight_next();
                }
            }
            Focus::Table => {
                self.cursor_position = self.cursor_position.saturating_add(1);
                self.clamp_cursor();
            }
        }
        None
    }

    pub(super) fn handle_previous_picker(&mut self) -> Option<Cmd> {
        self.active_picker = self.active_picker.saturating_sub(1);
        self.ensure_cursor_visible();
        None
    }

    pub(super) fn handle_next_picker(&mut self) -> Option<Cmd> {
        if self.active_picker.saturating_add(1) < self.pickers.len() {
            self.active_picker = self.active_picker.saturating_add(1);
        }
        self.ensure_cursor_visible();
        None
    }

    pub(super) fn handle_switch_focus(&mut self) -> Option<Cmd> {
        self.focus = match self.focus {
            Focus::Filters => Focus::Table,
            Focus::Table => Focus::Filters,
        };
        self.ensure_cursor_visible();
        None
    }
}
