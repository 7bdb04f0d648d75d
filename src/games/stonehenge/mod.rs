//! Stonehenge: a ley-line capture game on a hex grid.
//!
//! - On your turn, claim any unclaimed cell
//! - Holding at least half the cells of a ley line captures it for good
//! - Capturing at least half of all ley lines wins
//!
//! Board sizes 1-5 are supported.

pub mod board;
mod game;

pub use board::{LeyKind, MAX_BOARD_SIZE};
pub use game::{Stonehenge, StonehengeState};
