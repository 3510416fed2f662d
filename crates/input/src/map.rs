//! Key mapping from terminal events to player intents.
//!
//! Intents are one level above engine actions: pause, restart and quit never
//! reach the engine, while the rest translate directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridfall_types::{Action, Axis, CELL_HEIGHT, CELL_WIDTH};

/// What the player asked for with a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
    Pause,
    Restart,
}

impl Intent {
    /// The engine action this intent folds into, if any. Pause and restart
    /// are handled entirely in the event loop.
    pub fn engine_action(self) -> Option<Action> {
        match self {
            Intent::MoveLeft => Some(Action::Move {
                axis: Axis::X,
                offset: -CELL_WIDTH,
            }),
            Intent::MoveRight => Some(Action::Move {
                axis: Axis::X,
                offset: CELL_WIDTH,
            }),
            Intent::SoftDrop => Some(Action::Move {
                axis: Axis::Y,
                offset: CELL_HEIGHT,
            }),
            Intent::Rotate => Some(Action::Rotate),
            Intent::HardDrop => Some(Action::Drop),
            Intent::Hold => Some(Action::Hold),
            Intent::Pause | Intent::Restart => None,
        }
    }
}

/// Map a key event to a player intent.
pub fn intent_for(key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::SoftDrop),
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::Rotate),
        KeyCode::Char(' ') => Some(Intent::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Intent::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        _ => None,
    }
}

/// Check whether a key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
