//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('f') | KeyCode::Tab => Some(AppMsg::CycleFilter),
        KeyCode::Esc => Some(AppMsg::ClearFilter),
        KeyCode::Char('v') => Some(AppMsg::RevealAll),
        KeyCode::Char('a') => Some(AppMsg::ToggleAnomalies),
        KeyCode::Char('e') => Some(AppMsg::ExportRequested),
        KeyCode::Char('r') => Some(AppMsg::PollTick),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}
