//! Game trait for concrete game implementations.
//!
//! Games implement `Game` to define:
//! - The starting position
//! - Terminal and winning conditions
//! - How raw text maps to moves
//!
//! Search calls into `Game` only for the terminal test and the winner;
//! everything else goes through the state's own `GameState` impl.

use crate::core::{GameState, Player};

/// Move type of a game's states.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Game ended with no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// Terminal score from `player`'s perspective: +1 win, -1 loss, 0 draw.
    #[must_use]
    pub fn score_for(&self, player: Player) -> i32 {
        match self {
            GameResult::Winner(p) if *p == player => 1,
            GameResult::Winner(_) => -1,
            GameResult::Draw => 0,
        }
    }
}

/// Game trait.
///
/// ## Implementation Notes
///
/// - `is_over`: a pure function of `state`
/// - `is_winner`: false while `state` is not over
/// - `str_to_move`: `None` is the invalid-move sentinel; it never
///   collides with a legal move
pub trait Game {
    /// Position type of this game.
    type State: GameState;

    /// Position the game starts from.
    fn initial_state(&self) -> Self::State;

    /// Human-readable rules.
    fn instructions(&self) -> &'static str;

    /// Parse raw user text into a move, or `None` if it names no move.
    fn str_to_move(&self, input: &str) -> Option<MoveOf<Self>>;

    /// Check if `state` is terminal.
    fn is_over(&self, state: &Self::State) -> bool;

    /// Check if `player` has won in `state`.
    fn is_winner(&self, state: &Self::State, player: Player) -> bool;

    // === Convenience Methods ===

    /// Outcome of `state`, or `None` if play continues.
    fn result(&self, state: &Self::State) -> Option<GameResult> {
        if !self.is_over(state) {
            return None;
        }

        Player::ALL
            .into_iter()
            .find(|&p| self.is_winner(state, p))
            .map(GameResult::Winner)
            .or(Some(GameResult::Draw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Two);
        assert!(!result.is_winner(Player::One));
        assert!(result.is_winner(Player::Two));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::One));
        assert!(!draw.is_winner(Player::Two));
    }

    #[test]
    fn test_game_result_score_for() {
        let result = GameResult::Winner(Player::One);
        assert_eq!(result.score_for(Player::One), 1);
        assert_eq!(result.score_for(Player::Two), -1);
        assert_eq!(GameResult::Draw.score_for(Player::One), 0);
    }
}
