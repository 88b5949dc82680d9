use crossterm::event::{KeyCode, KeyEventKind};
use tracing::trace;

use crate::game::Game;
use crate::input::action::Action;

pub fn map_key(key_code: KeyCode, kind: KeyEventKind) -> Option<Action> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => match key_code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
            KeyCode::Up | KeyCode::Char('r') | KeyCode::Char('x') => Some(Action::RotateRight),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SoftDrop),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        KeyEventKind::Release => None,
    }
}

/// Maps a key event and applies it to the game, returning the action taken.
pub fn handle_input(game: &mut Game, key_code: KeyCode, kind: KeyEventKind) -> Option<Action> {
    let action = map_key(key_code, kind)?;
    trace!(?action, "input");
    action.apply(game);
    Some(action)
}
