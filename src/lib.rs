//! # rust-minimax
//!
//! Move-selection strategies for two-player, zero-sum, perfect-information,
//! alternating-turn games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Search only talks to the `GameState` and `Game`
//!    traits. Concrete games live behind them.
//!
//! 2. **Explicit State**: Strategies receive the position they search and
//!    never write back into a caller's session.
//!
//! 3. **Deterministic**: Ties between equally good moves go to the first
//!    move in `possible_moves` order.
//!
//! ## Architecture
//!
//! - **Negamax**: Every exhaustive strategy scores a position from the
//!   perspective of the player to move and negates child scores.
//!
//! - **Explicit Stack**: `IterativeMinimax` walks the tree with a LIFO work
//!   stack instead of recursion and is the default strategy.
//!
//! - **Structural Memo Keys**: `MemoizedMinimax` keys its per-call table by
//!   `GameState::key`, not by a printed representation.
//!
//! ## Modules
//!
//! - `core`: Players and the game-state contract
//! - `rules`: Game trait, results, and the session wrapper
//! - `search`: Strategies, configuration, statistics
//! - `stack`: LIFO stack backing the iterative strategy
//! - `games`: Subtract Square and Stonehenge
//! - `error`: Crate-wide error type

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{GameState, Player, DRAW, LOSE, WIN};

pub use crate::error::{Error, Result};

pub use crate::rules::{Game, GameResult, MoveOf, Session};

pub use crate::search::{
    negamax_value, IterativeMinimax, MemoizedMinimax, RecursiveMinimax, RoughOutcome,
    SearchConfig, SearchStats, Strategy, StrategyKind,
};

pub use crate::stack::Stack;
