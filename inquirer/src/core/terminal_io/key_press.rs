// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The discrete key presses that the selection widgets understand. Everything else that
/// the terminal reports (mouse, focus, resize, paste, key release, keys with CTRL or ALT
/// held) is not a [`KeyPress`] and is skipped by
/// [`crate::InputDevice::next_key_press()`].
///
/// ```text
/// ╔════════════════════╦══════════════════════════════╗
/// ║ User action        ║ Result                       ║
/// ╠════════════════════╬══════════════════════════════╣
/// ║ Type "x"           ║ KeyPress::Char('x')          ║
/// ║ Type "X" (Shift+x) ║ KeyPress::Char('X')          ║
/// ║ Type " "           ║ KeyPress::Space              ║
/// ║ Press ↑ / ↓        ║ KeyPress::Up / KeyPress::Down║
/// ╚════════════════════╩══════════════════════════════╝
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPress {
    Up,
    Down,
    Enter,
    Space,
    Backspace,
    Char(char),
}

impl KeyPress {
    /// The characters that the autocomplete widget appends to its query. Everything
    /// else is ignored, including upper case letters.
    #[must_use]
    pub fn as_query_char(&self) -> Option<char> {
        match self {
            KeyPress::Space => Some(' '),
            KeyPress::Char(ch) if ch.is_ascii_lowercase() || ch.is_ascii_digit() => {
                Some(*ch)
            }
            _ => None,
        }
    }
}

pub mod convert_key_event {
    use super::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyPress};

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        /// Only [`KeyEventKind::Press`] is converted. For character keys the SHIFT
        /// modifier is ignored, any other modifier means this is not a [`KeyPress`].
        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            if key_event.kind != KeyEventKind::Press {
                return Err(());
            }

            let is_plain = matches!(
                key_event.modifiers,
                KeyModifiers::NONE | KeyModifiers::SHIFT
            );
            if !is_plain {
                return Err(());
            }

            match key_event.code {
                KeyCode::Up => Ok(KeyPress::Up),
                KeyCode::Down => Ok(KeyPress::Down),
                KeyCode::Enter => Ok(KeyPress::Enter),
                KeyCode::Backspace => Ok(KeyPress::Backspace),
                KeyCode::Char(' ') => Ok(KeyPress::Space),
                KeyCode::Char(character) => Ok(KeyPress::Char(character)),
                _ => Err(()),
            }
        }
    }

    impl TryFrom<Event> for KeyPress {
        type Error = ();

        fn try_from(event: Event) -> Result<Self, Self::Error> {
            match event {
                Event::Key(key_event) => key_event.try_into(),
                _ => Err(()),
            }
        }
    }

    /// Used by the test fixtures to synthesize terminal input.
    impl From<KeyPress> for Event {
        fn from(key_press: KeyPress) -> Self {
            let code = match key_press {
                KeyPress::Up => KeyCode::Up,
                KeyPress::Down => KeyCode::Down,
                KeyPress::Enter => KeyCode::Enter,
                KeyPress::Space => KeyCode::Char(' '),
                KeyPress::Backspace => KeyCode::Backspace,
                KeyPress::Char(character) => KeyCode::Char(character),
            };
            Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test_case(KeyCode::Up, KeyPress::Up)]
    #[test_case(KeyCode::Down, KeyPress::Down)]
    #[test_case(KeyCode::Enter, KeyPress::Enter)]
    #[test_case(KeyCode::Backspace, KeyPress::Backspace)]
    #[test_case(KeyCode::Char(' '), KeyPress::Space)]
    #[test_case(KeyCode::Char('q'), KeyPress::Char('q'))]
    fn test_named_keys(code: KeyCode, expected: KeyPress) {
        let actual = KeyPress::try_from(key_event(code, KeyModifiers::NONE));
        assert_eq!(actual, Ok(expected));
    }

    #[test]
    fn test_shift_is_ignored_for_characters() {
        let actual = KeyPress::try_from(key_event(KeyCode::Char('X'), KeyModifiers::SHIFT));
        assert_eq!(actual, Ok(KeyPress::Char('X')));
    }

    #[test]
    fn test_ctrl_and_release_are_not_key_presses() {
        let ctrl_c = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyPress::try_from(ctrl_c), Err(()));

        let release = KeyEvent::new_with_kind(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(KeyPress::try_from(release), Err(()));
    }

    #[test]
    fn test_non_key_events_are_skipped() {
        assert_eq!(KeyPress::try_from(Event::Resize(80, 24)), Err(()));
        assert_eq!(KeyPress::try_from(Event::FocusGained), Err(()));
    }

    #[test]
    fn test_event_round_trip_for_fixtures() {
        let event: Event = KeyPress::Char('z').into();
        assert_eq!(KeyPress::try_from(event), Ok(KeyPress::Char('z')));
    }

    #[test]
    fn test_query_alphabet() {
        assert_eq!(KeyPress::Char('a').as_query_char(), Some('a'));
        assert_eq!(KeyPress::Char('7').as_query_char(), Some('7'));
        assert_eq!(KeyPress::Space.as_query_char(), Some(' '));
        assert_eq!(KeyPress::Char('A').as_query_char(), None);
        assert_eq!(KeyPress::Char('-').as_query_char(), None);
        assert_eq!(KeyPress::Char('é').as_query_char(), None);
        assert_eq!(KeyPress::Enter.as_query_char(), None);
    }
}
