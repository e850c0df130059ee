//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Quit,
}

/// Input handler for processing keyboard events
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Releases are only reported by some terminals; never act on them
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            // Ctrl+Q / Alt+Q are different keys; Shift is how 'Q' arrives
            KeyCode::Char('q') | KeyCode::Char('Q')
                if key.kind == KeyEventKind::Press
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::Quit)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(handler.handle_key(key(KeyCode::Down)), Some(Action::MoveDown));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(handler.handle_key(key(KeyCode::Char('Q'))), Some(Action::Quit));
    }

    #[test]
    fn test_shifted_q_quits() {
        let handler = InputHandler::new();
        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key(shifted), Some(Action::Quit));
    }

    #[test]
    fn test_modified_q_does_not_quit() {
        let handler = InputHandler::new();
        for modifiers in [
            KeyModifiers::CONTROL,
            KeyModifiers::ALT,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ] {
            for code in [KeyCode::Char('q'), KeyCode::Char('Q')] {
                let key = KeyEvent::new(code, modifiers);
                assert_eq!(handler.handle_key(key), None, "{:?}+{:?}", modifiers, code);
            }
        }
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Esc,
            KeyCode::Enter,
            KeyCode::Left,
            KeyCode::Char('j'),
            KeyCode::Char('k'),
            KeyCode::F(5),
        ] {
            assert_eq!(handler.handle_key(key(code)), None, "{:?}", code);
        }
    }

    #[test]
    fn test_release_events_are_ignored() {
        let handler = InputHandler::new();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(handler.handle_key(release), None);
    }

    #[test]
    fn test_repeat_navigates_but_does_not_quit() {
        let handler = InputHandler::new();
        let repeat = |code| {
            KeyEvent::new_with_kind_and_state(
                code,
                KeyModifiers::NONE,
                KeyEventKind::Repeat,
                KeyEventState::NONE,
            )
        };
        assert_eq!(handler.handle_key(repeat(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(handler.handle_key(repeat(KeyCode::Char('q'))), None);
    }
}
