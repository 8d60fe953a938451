//! Keyboard event mapping (key -> Action).

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Mode};

/// Maps a key press to an action for the current mode.
pub fn action_for(mode: Mode, key: KeyCode) -> Option<Action> {
    match mode {
        Mode::Browse => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::OpenForm),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            _ => None,
        },
        Mode::Insert => match key {
            KeyCode::Esc => Some(Action::CloseForm),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Tab | KeyCode::Right => Some(Action::CycleSlotForward),
            KeyCode::BackTab | KeyCode::Left => Some(Action::CycleSlotBack),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// Dispatches a key press. Returns true when the app should quit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match action_for(app.mode, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
