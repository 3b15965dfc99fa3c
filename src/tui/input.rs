//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. While the auth modal is open it owns
//! the keyboard, so printable keys become field input instead of commands.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, modal_open: bool) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.key == KeyCode::Char('c') {
        return Some(AppMsg::Quit);
    }
    if modal_open {
        map_modal_key(key.key)
    } else {
        map_list_key(key.key)
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_list_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('a') => Some(AppMsg::OpenAuth),
        KeyCode::Char('o') => Some(AppMsg::LogoutRequested),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_modal_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Esc => Some(AppMsg::CloseAuth),
        KeyCode::Enter => Some(AppMsg::AuthSubmit),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::AuthFocusNext),
        KeyCode::F(2) => Some(AppMsg::AuthToggleMode),
        KeyCode::Backspace => Some(AppMsg::AuthBackspace),
        KeyCode::Char(character) => Some(AppMsg::AuthInput(character)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::map_key_to_message;
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), "Quit")]
    #[case::down(KeyCode::Char('j'), "CursorDown")]
    #[case::up(KeyCode::Char('k'), "CursorUp")]
    #[case::refresh(KeyCode::Char('r'), "RefreshRequested")]
    #[case::open_auth(KeyCode::Char('a'), "OpenAuth")]
    #[case::logout(KeyCode::Char('o'), "LogoutRequested")]
    fn list_keys_map_to_commands(#[case] code: KeyCode, #[case] expected: &str) {
        let message = map_key_to_message(&key(code), false).expect("key is mapped");
        assert_eq!(format!("{message:?}"), expected);
    }

    #[test]
    fn printable_keys_are_field_input_while_modal_is_open() {
        let message = map_key_to_message(&key(KeyCode::Char('q')), true);
        assert!(matches!(message, Some(AppMsg::AuthInput('q'))));
    }

    #[rstest]
    #[case::escape(KeyCode::Esc, "CloseAuth")]
    #[case::enter(KeyCode::Enter, "AuthSubmit")]
    #[case::tab(KeyCode::Tab, "AuthFocusNext")]
    #[case::toggle(KeyCode::F(2), "AuthToggleMode")]
    #[case::backspace(KeyCode::Backspace, "AuthBackspace")]
    fn modal_keys_drive_the_form(#[case] code: KeyCode, #[case] expected: &str) {
        let message = map_key_to_message(&key(code), true).expect("key is mapped");
        assert_eq!(format!("{message:?}"), expected);
    }

    #[rstest]
    #[case::list(false)]
    #[case::modal(true)]
    fn ctrl_c_always_quits(#[case] modal_open: bool) {
        let ctrl_c = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(matches!(
            map_key_to_message(&ctrl_c, modal_open),
            Some(AppMsg::Quit)
        ));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert!(map_key_to_message(&key(KeyCode::Char('z')), false).is_none());
    }
}
