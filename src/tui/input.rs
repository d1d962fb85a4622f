//! Key-to-message mapping for the dashboard.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised keys, which are ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Tab => Some(AppMsg::SwitchFocus),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::MoveUp),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PreviousPicker),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextPicker),
        KeyCode::Char(' ') | KeyCode::Enter => Some(AppMsg::ToggleHighlighted),
        KeyCode::Char('a') => Some(AppMsg::ToggleAll),
        KeyCode::Char('d') | KeyCode::Backspace => Some(AppMsg::DismissHighlighted),
        KeyCode::Char('R') => Some(AppMsg::Reset),
        KeyCode::Char('x') => Some(AppMsg::Export),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
