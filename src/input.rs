//! Terminal input mapping
//!
//! Translates crossterm events into game actions. Only key presses count;
//! release and repeat events are dropped so terminals that report them do
//! not double-fire a flap.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// A player intent decoded from a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start the run, or flap mid-run
    Flap,
    /// Reset to the ready state
    Restart,
}

/// Map a key event to an action, if any.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Action::Flap),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        _ => None,
    }
}

/// Map a mouse event to an action, if any. Any button press flaps.
pub fn action_for_mouse(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(_) => Some(Action::Flap),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    #[test]
    fn test_space_up_and_enter_all_flap() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(action_for_key(key), Some(Action::Flap));
        }
    }

    #[test]
    fn test_r_restarts_in_either_case() {
        for code in [KeyCode::Char('r'), KeyCode::Char('R')] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(action_for_key(key), Some(Action::Restart));
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let key = KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(action_for_key(key), None);
    }

    #[test]
    fn test_unmapped_keys_do_nothing() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(action_for_key(key), None);
    }

    #[test]
    fn test_any_mouse_button_press_flaps() {
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            let mouse = MouseEvent {
                kind: MouseEventKind::Down(button),
                column: 10,
                row: 5,
                modifiers: KeyModifiers::NONE,
            };
            assert_eq!(action_for_mouse(mouse), Some(Action::Flap));
        }
    }

    #[test]
    fn test_mouse_movement_does_nothing() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(action_for_mouse(mouse), None);
    }
}
