use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Session-level key events.
///
/// The snake steers itself, so gameplay keys are limited to flow control.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionInput {
    /// Leave the game immediately.
    Quit,
    /// Toggle the simulation pause.
    Pause,
    /// Start the session or dismiss a banner.
    Confirm,
}

/// Polls for one pending session input without blocking.
pub fn poll_input() -> io::Result<Option<SessionInput>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
        _ => Ok(None),
    }
}

fn map_key(key: KeyEvent) -> Option<SessionInput> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionInput::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(SessionInput::Quit),
        KeyCode::Char('p') => Some(SessionInput::Pause),
        KeyCode::Enter | KeyCode::Char(' ') => Some(SessionInput::Confirm),
        _ => None,
    }
}
