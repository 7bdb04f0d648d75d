//! Sample games implementing the `Game` and `GameState` contracts.
//!
//! - `subtract_square`: subtract square numbers from a running total
//! - `stonehenge`: claim cells of a hex grid to capture ley lines

pub mod stonehenge;
pub mod subtract_square;
