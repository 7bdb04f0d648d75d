//! Subtract Square game implementation.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player, DRAW, LOSE, WIN};
use crate::error::{Error, Result};
use crate::rules::Game;

const INSTRUCTIONS: &str = "Players take turns subtracting square numbers from \
the starting number. The winner is the person who subtracts to 0.";

/// Check whether `n` is a positive perfect square.
///
/// ```
/// use rust_minimax::games::subtract_square::is_positive_square;
///
/// assert!(is_positive_square(9));
/// assert!(!is_positive_square(5));
/// assert!(!is_positive_square(0));
/// ```
#[must_use]
pub fn is_positive_square(n: u32) -> bool {
    if n == 0 {
        return false;
    }
    let root = f64::from(n).sqrt().round() as u64;
    root * root == u64::from(n)
}

/// Position in a game of Subtract Square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractSquareState {
    /// Player to move.
    active: Player,
    /// Remaining total.
    total: u32,
}

impl SubtractSquareState {
    /// Create a state with `total` remaining.
    #[must_use]
    pub fn new(p1_turn: bool, total: u32) -> Self {
        Self {
            active: Player::from_p1_turn(p1_turn),
            total,
        }
    }

    /// Remaining total.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Check if the total has reached 0.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.total == 0
    }

    /// Check if `player` has won: the game is over and they made the last move.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.is_over() && self.active != player
    }

    fn squares(&self) -> impl Iterator<Item = u32> + '_ {
        // Stops at 65536, whose square no longer fits in a u32.
        (1u32..)
            .map_while(|i| i.checked_mul(i))
            .take_while(move |&sq| sq <= self.total)
    }
}

impl GameState for SubtractSquareState {
    type Move = u32;
    type Key = Self;

    fn possible_moves(&self) -> Vec<u32> {
        self.squares().collect()
    }

    fn make_move(&self, mv: &u32) -> Result<Self> {
        if !is_positive_square(*mv) || *mv > self.total {
            return Err(Error::invalid_move(mv));
        }

        Ok(Self {
            active: self.active.opponent(),
            total: self.total - mv,
        })
    }

    fn current_player(&self) -> Player {
        self.active
    }

    fn rough_outcome(&self) -> f64 {
        if is_positive_square(self.total) {
            return WIN;
        }

        // Every move hands the opponent a square to take.
        let all_replies_lose = self
            .squares()
            .filter(|&sq| sq < self.total)
            .all(|sq| is_positive_square(self.total - sq));

        if all_replies_lose {
            LOSE
        } else {
            DRAW
        }
    }

    fn key(&self) -> Self {
        *self
    }
}

/// Subtract Square game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtractSquare {
    p1_starts: bool,
    start_total: u32,
}

impl SubtractSquare {
    /// Create a game starting from `start_total`.
    #[must_use]
    pub fn new(p1_starts: bool, start_total: u32) -> Self {
        Self {
            p1_starts,
            start_total,
        }
    }
}

impl Game for SubtractSquare {
    type State = SubtractSquareState;

    fn initial_state(&self) -> SubtractSquareState {
        SubtractSquareState::new(self.p1_starts, self.start_total)
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn str_to_move(&self, input: &str) -> Option<u32> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        trimmed.parse().ok()
    }

    fn is_over(&self, state: &SubtractSquareState) -> bool {
        state.is_over()
    }

    fn is_winner(&self, state: &SubtractSquareState, player: Player) -> bool {
        state.is_winner(player)
    }
}
