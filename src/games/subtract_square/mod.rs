//! Subtract Square.
//!
//! A running total starts at some positive number:
//! - On your turn, subtract a positive square no larger than the total
//! - Whoever brings the total to exactly 0 wins
//!
//! Small enough to search exhaustively, with plenty of transpositions.

mod game;

pub use game::{is_positive_square, SubtractSquare, SubtractSquareState};
