//! The game-state contract every concrete game implements.
//!
//! A `GameState` is an immutable snapshot of a position. Search never
//! mutates a state in place: `make_move` returns a fresh state with the
//! active player flipped, so the caller's position is never disturbed.
//!
//! ## Memoization keys
//!
//! `key()` returns a structural value used to recognise transpositions.
//! Two states with equal keys must have the same legal moves, the same
//! terminal status and the same winner. The key must include the active
//! player.

use std::fmt::Debug;
use std::hash::Hash;

use super::player::Player;
use crate::error::Result;

/// Heuristic value of a position the mover is certain to win.
pub const WIN: f64 = 1.0;

/// Heuristic value of a position the mover is certain to lose.
pub const LOSE: f64 = -1.0;

/// Heuristic value of a neutral or undecided position.
pub const DRAW: f64 = 0.0;

/// Snapshot of a two-player, alternating-turn position.
///
/// ## Implementation Notes
///
/// - `possible_moves`: empty iff the state is terminal; order must be
///   stable for a given state (strategies break ties by first move)
/// - `make_move`: must not mutate `self`; fails with `InvalidMove`
///   when `mv` is not legal here
/// - `rough_outcome`: at most one or two plies of lookahead, result in
///   `[LOSE, WIN]`
pub trait GameState: Clone + Debug {
    /// A move accepted by `make_move`.
    type Move: Clone + Debug + PartialEq;

    /// Canonical key used for memoization.
    type Key: Clone + Debug + Eq + Hash;

    /// All moves legal for the player to act.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// The state that results from applying `mv`.
    fn make_move(&self, mv: &Self::Move) -> Result<Self>;

    /// The player whose turn this state represents.
    fn current_player(&self) -> Player;

    /// Cheap estimate of the outcome for the player to act.
    ///
    /// Returns exactly `WIN` when a single move forces a win, exactly
    /// `LOSE` when every move hands the opponent a forced win.
    fn rough_outcome(&self) -> f64;

    /// Canonical structural key for this state.
    fn key(&self) -> Self::Key;

    /// Check whether `mv` is currently legal.
    fn is_legal(&self, mv: &Self::Move) -> bool {
        self.possible_moves().contains(mv)
    }
}
