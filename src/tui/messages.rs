//! Message types for the dashboard update loop.

use crate::record::Record;

/// Messages handled by [`DashboardApp`](super::DashboardApp).
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    // Navigation
    /// Move the picker highlight or the table cursor up.
    MoveUp,
    /// Move the picker highlight or the table cursor down.
    MoveDown,
    /// Focus the previous picker.
    PreviousPicker,
    /// Focus the next picker.
    NextPicker,
    /// Switch focus between the filter panel and the table.
    SwitchFocus,

    // Filter changes
    /// Toggle the highlighted picker entry.
    ToggleHighlighted,
    /// Toggle the "all" entry of the focused picker.
    ToggleAll,
    /// Remove the highlighted value from the focused picker's selection.
    DismissHighlighted,
    /// Clear every filter.
    Reset,

    // Data
    /// The one-off load finished; failures arrive as an empty set.
    RecordsLoaded(Vec<Record>),
    /// Write the filtered records to the spreadsheet.
    Export,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor and focus movement.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::MoveUp
                | Self::MoveDown
                | Self::PreviousPicker
                | Self::NextPicker
                | Self::SwitchFocus
        )
    }

    /// Returns true for messages that change the filter state.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::ToggleHighlighted | Self::ToggleAll | Self::DismissHighlighted | Self::Reset
        )
    }

    /// Returns true for loading and export messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::RecordsLoaded(_) | Self::Export)
    }
}
