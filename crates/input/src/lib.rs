//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into player intents and provides a DAS/ARR
//! repeat handler suitable for terminal environments, including terminals
//! that never emit key-release events.

pub mod handler;
pub mod map;

pub use handler::InputHandler;
pub use map::{intent_for, should_quit, Intent};
