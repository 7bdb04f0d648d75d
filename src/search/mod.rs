//! Move-selection strategies.
//!
//! ## Overview
//!
//! Four interchangeable strategies over any `Game`:
//!
//! - **RecursiveMinimax**: exhaustive negamax on the call stack
//! - **IterativeMinimax**: the same search on an explicit work-stack
//! - **MemoizedMinimax**: negamax that reuses scores of transposed states
//! - **RoughOutcome**: one ply of lookahead over the game's heuristic
//!
//! The three exhaustive strategies agree on the value of the chosen move.
//! Ties go to the first move in `possible_moves` order.
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::games::subtract_square::SubtractSquare;
//! use rust_minimax::rules::Game;
//! use rust_minimax::search::{SearchConfig, StrategyKind, Strategy};
//!
//! let game = SubtractSquare::new(true, 4);
//! let mut strategy = SearchConfig::default()
//!     .with_strategy(StrategyKind::Memoized)
//!     .build::<SubtractSquare>();
//!
//! // Taking all four wins immediately.
//! let mv = strategy.choose_move(&game, &game.initial_state()).unwrap();
//! assert_eq!(mv, 4);
//! ```

pub mod config;
pub mod heuristic;
pub mod iterative;
pub mod memo;
pub mod negamax;
pub mod node;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{SearchConfig, StrategyKind};
pub use heuristic::RoughOutcome;
pub use iterative::IterativeMinimax;
pub use memo::MemoTable;
pub use negamax::{negamax_value, terminal_score, MemoizedMinimax, RecursiveMinimax};
pub use node::{Node, NodeId};
pub use stats::SearchStats;
pub use tree::SearchTree;

use crate::error::Result;
use crate::rules::{Game, MoveOf};

/// A move-selection strategy.
///
/// Strategies read the position they are given and never modify it.
pub trait Strategy<G: Game> {
    /// Choose a move for the player to act in `state`.
    ///
    /// Fails with `NoMovesAvailable` if `state` has no legal moves.
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<MoveOf<G>>;

    /// Statistics from the most recent `choose_move` call.
    fn stats(&self) -> &SearchStats;
}
