//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use crate::error::PomoError;
use crate::tui::app::{Action, App};

/// Upper bound on how long one loop iteration waits for input.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Wait up to [`POLL_INTERVAL`] for one terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, PomoError> {
    if !event::poll(POLL_INTERVAL)
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    match event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(decode_key(app, key)),
        _ => Ok(None),
    }
}

/// Map a keypress to an action.
///
/// While help is showing, the key only dismisses it.
pub fn decode_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    trace!(code = ?key.code, "key");

    // Raw mode delivers Ctrl+C as a key
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.show_help {
        app.show_help = false;
        return None;
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('p') => Some(Action::TogglePause),
        KeyCode::Char('s') => Some(Action::Skip),
        KeyCode::Char('a') => Some(Action::NextArt),
        KeyCode::Char('A') => Some(Action::PreviousArt),
        KeyCode::Char('h') => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_bindings() {
        let mut app = App::new("bunny");
        assert_eq!(decode_key(&mut app, key('q')), Some(Action::Quit));
        assert_eq!(decode_key(&mut app, key('p')), Some(Action::TogglePause));
        assert_eq!(decode_key(&mut app, key('s')), Some(Action::Skip));
        assert_eq!(decode_key(&mut app, key('a')), Some(Action::NextArt));
        assert_eq!(
            decode_key(&mut app, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::PreviousArt)
        );
        assert_eq!(decode_key(&mut app, key('h')), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut app = App::new("bunny");
        assert_eq!(decode_key(&mut app, key('x')), None);
        assert_eq!(decode_key(&mut app, key('Q')), None);
        assert_eq!(
            decode_key(&mut app, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new("bunny");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode_key(&mut app, ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = App::new("bunny");
        app.show_help = true;

        // Even quit is swallowed while help is open
        assert_eq!(decode_key(&mut app, key('q')), None);
        assert!(!app.show_help);

        assert_eq!(decode_key(&mut app, key('q')), Some(Action::Quit));
    }
}
