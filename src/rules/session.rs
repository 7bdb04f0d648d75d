//! A live game session: a game plus its current position.
//!
//! Strategies take the position explicitly and never write back into
//! the session, so asking for a move leaves `current_state` untouched.
//! Only `apply` advances the session.

use tracing::debug;

use super::engine::{Game, GameResult, MoveOf};
use crate::core::{GameState, Player};
use crate::error::{Error, Result};
use crate::search::Strategy;

/// Mutable session wrapper around a game.
#[derive(Clone, Debug)]
pub struct Session<G: Game> {
    game: G,
    current_state: G::State,
}

impl<G: Game> Session<G> {
    /// Start a session at the game's initial position.
    pub fn new(game: G) -> Self {
        let current_state = game.initial_state();
        Self { game, current_state }
    }

    /// Start a session at an arbitrary position.
    pub fn from_state(game: G, state: G::State) -> Self {
        Self {
            game,
            current_state: state,
        }
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// The live position.
    #[must_use]
    pub fn current_state(&self) -> &G::State {
        &self.current_state
    }

    /// Check if the live position is terminal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.is_over(&self.current_state)
    }

    /// Check if `player` has won at the live position.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.game.is_winner(&self.current_state, player)
    }

    /// Outcome of the live position, if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game.result(&self.current_state)
    }

    /// Apply a move to the live position.
    ///
    /// The move is checked against `possible_moves()` first; an illegal
    /// move leaves the session unchanged.
    pub fn apply(&mut self, mv: &MoveOf<G>) -> Result<()> {
        if !self.current_state.is_legal(mv) {
            return Err(Error::invalid_move(mv));
        }

        let player = self.current_state.current_player();
        self.current_state = self.current_state.make_move(mv)?;
        debug!(%player, mv = ?mv, "applied move");
        Ok(())
    }

    /// Ask a strategy for a move at the live position.
    pub fn choose_move<S>(&self, strategy: &mut S) -> Result<MoveOf<G>>
    where
        S: Strategy<G> + ?Sized,
    {
        strategy.choose_move(&self.game, &self.current_state)
    }

    /// Alternate two strategies until the game is over.
    ///
    /// `p1` moves whenever player one is to act, `p2` otherwise.
    pub fn play_out(
        &mut self,
        p1: &mut dyn Strategy<G>,
        p2: &mut dyn Strategy<G>,
    ) -> Result<GameResult> {
        loop {
            if let Some(result) = self.result() {
                debug!(?result, "game over");
                return Ok(result);
            }

            let mv = match self.current_state.current_player() {
                Player::One => self.choose_move(&mut *p1)?,
                Player::Two => self.choose_move(&mut *p2)?,
            };
            self.apply(&mv)?;
        }
    }
}
