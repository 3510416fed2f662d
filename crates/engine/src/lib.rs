//! Engine module - pure game logic, no I/O
//!
//! The whole crate is a deterministic state machine: every transition is
//! `(State, Action) -> State` and never mutates a shared structure. Rejected
//! operations are no-ops, not errors; the only terminal condition is the
//! `game_end` flag on the snapshot.

pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod state;

pub use piece::{spawn, Cell, Piece};
pub use rng::{hash, scale};
pub use state::State;
