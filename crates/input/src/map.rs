//! Key mapping from terminal events to game commands.

use crate::types::{HostCommand, InputEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal event asks the game loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermCommand {
    /// Player input, fed to `GameState::apply_input`.
    Input(InputEvent),
    /// The terminal acting as host: focus loss pauses, `r` resets.
    Host(HostCommand),
    Quit,
}

/// Map keyboard input to game commands.
pub fn map_key(key: KeyEvent) -> Option<TermCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(TermCommand::Quit);
    }

    let input = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            InputEvent::MoveLeft
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            InputEvent::MoveRight
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            InputEvent::SoftDrop
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => InputEvent::RotateCw,

        // Pause
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => InputEvent::TogglePause,

        // Reset
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(TermCommand::Host(HostCommand::Reset)),

        _ => return None,
    };
    Some(TermCommand::Input(input))
}

/// Map any terminal event. Losing focus pauses the game.
pub fn map_event(event: &Event) -> Option<TermCommand> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::FocusLost => Some(TermCommand::Host(HostCommand::Pause)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
