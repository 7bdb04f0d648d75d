//! One-ply lookahead over the games' own `rough_outcome` estimate.
//!
//! Picks the move whose resulting state looks worst for the opponent.
//! Costs one `rough_outcome` call per legal move; much weaker than the
//! exhaustive strategies but bounded regardless of game length.

use std::time::Instant;

use tracing::debug;

use super::negamax::first_best;
use super::stats::SearchStats;
use super::Strategy;
use crate::core::GameState;
use crate::error::{Error, Result};
use crate::rules::{Game, MoveOf};

/// Heuristic one-ply strategy.
#[derive(Clone, Debug, Default)]
pub struct RoughOutcome {
    stats: SearchStats,
}

impl RoughOutcome {
    /// Create a new heuristic strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every legal move paired with its negated opponent estimate.
    pub fn rank_moves<S: GameState>(&mut self, state: &S) -> Result<Vec<(S::Move, f64)>> {
        let moves = state.possible_moves();
        let mut ranked = Vec::with_capacity(moves.len());

        for mv in moves {
            let child = state.make_move(&mv)?;
            self.stats.visit(1);
            ranked.push((mv, -child.rough_outcome()));
        }

        Ok(ranked)
    }
}

impl<G: Game> Strategy<G> for RoughOutcome {
    fn choose_move(&mut self, _game: &G, state: &G::State) -> Result<MoveOf<G>> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.visit(0);

        let ranked = self.rank_moves(state)?;
        let (mv, value) = first_best(ranked).ok_or(Error::NoMovesAvailable)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(strategy = "rough_outcome", mv = ?mv, value, "chose move");
        Ok(mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LOSE, WIN};
    use crate::games::subtract_square::{SubtractSquare, SubtractSquareState};

    #[test]
    fn test_takes_square_when_available() {
        let game = SubtractSquare::new(true, 4);
        let mut strategy = RoughOutcome::new();

        // 4 - 4 = 0 leaves the opponent lost.
        assert_eq!(strategy.choose_move(&game, &game.initial_state()), Ok(4));
    }

    #[test]
    fn test_forced_loss_ranks_negative() {
        let mut strategy = RoughOutcome::new();
        let ranked = strategy.rank_moves(&SubtractSquareState::new(true, 2)).unwrap();

        // Only move leaves 1, a square the opponent takes to win.
        assert_eq!(ranked, vec![(1, -WIN)]);
    }

    #[test]
    fn test_avoids_handing_over_a_square() {
        let game = SubtractSquare::new(true, 6);
        let mut strategy = RoughOutcome::new();

        // 6 - 1 = 5: every reply leaves a square, so 5 is LOSE for the opponent.
        let ranked = strategy.rank_moves(&game.initial_state()).unwrap();
        assert_eq!(ranked[0], (1, -LOSE));
        assert_eq!(strategy.choose_move(&game, &game.initial_state()), Ok(1));
    }

    #[test]
    fn test_no_moves_available() {
        let game = SubtractSquare::new(true, 0);
        let mut strategy = RoughOutcome::new();

        assert_eq!(
            strategy.choose_move(&game, &game.initial_state()),
            Err(Error::NoMovesAvailable)
        );
    }
}
