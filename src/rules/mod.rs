//! Game trait and session wrapper.
//!
//! Games implement `Game` to define:
//! - The starting position
//! - Terminal and winning conditions
//! - Parsing of raw move text
//!
//! `Session` holds a game and its live position for a caller driving play.

pub mod engine;
pub mod session;

pub use engine::{Game, GameResult, MoveOf};
pub use session::Session;
