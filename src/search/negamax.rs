//! Exhaustive negamax on the call stack.
//!
//! `score(state)` is taken from the perspective of the player to move:
//! a terminal state scores +1 if that player has won, -1 if the opponent
//! has, 0 otherwise; a non-terminal state scores the maximum over its
//! moves of the negated child score.
//!
//! Recursion depth equals the remaining game length. For deep games use
//! `IterativeMinimax`, or set `SearchConfig::max_depth` as a guard.

use std::time::Instant;

use tracing::debug;

use super::config::SearchConfig;
use super::memo::MemoTable;
use super::stats::SearchStats;
use super::Strategy;
use crate::core::GameState;
use crate::error::{Error, Result};
use crate::rules::{Game, MoveOf};

/// Score of a terminal state for the player to move there.
pub fn terminal_score<G: Game>(game: &G, state: &G::State) -> i32 {
    let player = state.current_player();
    if game.is_winner(state, player) {
        1
    } else if game.is_winner(state, player.opponent()) {
        -1
    } else {
        0
    }
}

/// Negamax value of `state` for the player to move, searched exhaustively.
pub fn negamax_value<G: Game>(game: &G, state: &G::State) -> Result<i32> {
    RecursiveMinimax::default().score(game, state, 0)
}

/// Pick the first item with the strictly greatest value.
pub(crate) fn first_best<T, V: PartialOrd>(
    scored: impl IntoIterator<Item = (T, V)>,
) -> Option<(T, V)> {
    let mut best: Option<(T, V)> = None;
    for (item, value) in scored {
        if best.as_ref().map_or(true, |(_, b)| value > *b) {
            best = Some((item, value));
        }
    }
    best
}

/// Score every root move with `eval` and return the best one.
///
/// `eval` receives the child state and returns the child's score from
/// the child mover's perspective; it is negated here.
pub(crate) fn select_root<S, F>(state: &S, mut eval: F) -> Result<(S::Move, i32)>
where
    S: GameState,
    F: FnMut(&S) -> Result<i32>,
{
    let moves = state.possible_moves();
    if moves.is_empty() {
        return Err(Error::NoMovesAvailable);
    }

    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let child = state.make_move(&mv)?;
        let value = -eval(&child)?;
        scored.push((mv, value));
    }

    first_best(scored).ok_or(Error::NoMovesAvailable)
}

// =============================================================================
// Recursive
// =============================================================================

/// Naive recursive negamax with no caching.
#[derive(Clone, Debug, Default)]
pub struct RecursiveMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl RecursiveMinimax {
    /// Create a new recursive strategy.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    fn score<G: Game>(&mut self, game: &G, state: &G::State, depth: u32) -> Result<i32> {
        if self.config.exceeds_depth(depth) {
            return Err(Error::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.stats.visit(depth);

        if game.is_over(state) {
            self.stats.terminal_nodes += 1;
            return Ok(terminal_score(game, state));
        }

        let mut best: Option<i32> = None;
        for mv in state.possible_moves() {
            let child = state.make_move(&mv)?;
            let value = -self.score(game, &child, depth + 1)?;
            best = Some(best.map_or(value, |b| b.max(value)));
        }

        // A non-terminal state with no moves breaks the GameState contract.
        best.ok_or(Error::NoMovesAvailable)
    }
}

impl<G: Game> Strategy<G> for RecursiveMinimax {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<MoveOf<G>> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.visit(0);

        let (mv, value) = select_root(state, |child| self.score(game, child, 1))?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            strategy = "recursive",
            mv = ?mv,
            value,
            nodes = self.stats.nodes_visited,
            time_us = self.stats.time_us,
            "chose move"
        );
        Ok(mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

// =============================================================================
// Memoized
// =============================================================================

/// Recursive negamax that reuses scores of transposed positions.
///
/// The memo is keyed by `GameState::key` and lives for one
/// `choose_move` call.
#[derive(Clone, Debug, Default)]
pub struct MemoizedMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl MemoizedMinimax {
    /// Create a new memoized strategy.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    fn score<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        memo: &mut MemoTable<G::State>,
        depth: u32,
    ) -> Result<i32> {
        if self.config.exceeds_depth(depth) {
            return Err(Error::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.stats.visit(depth);

        if game.is_over(state) {
            self.stats.terminal_nodes += 1;
            return Ok(terminal_score(game, state));
        }

        let mut best: Option<i32> = None;
        for mv in state.possible_moves() {
            let child = state.make_move(&mv)?;
            let value = -self.lookup(game, &child, memo, depth + 1)?;
            best = Some(best.map_or(value, |b| b.max(value)));
        }

        best.ok_or(Error::NoMovesAvailable)
    }

    /// Score of `state`, from the memo when it has been seen before.
    ///
    /// Stores the un-negated score of `state` itself.
    fn lookup<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        memo: &mut MemoTable<G::State>,
        depth: u32,
    ) -> Result<i32> {
        let key = state.key();
        if let Some(score) = memo.get(&key) {
            self.stats.memo_hits += 1;
            return Ok(score);
        }

        self.stats.memo_misses += 1;
        let score = self.score(game, state, memo, depth)?;
        memo.insert(key, score);
        Ok(score)
    }
}

impl<G: Game> Strategy<G> for MemoizedMinimax {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<MoveOf<G>> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.visit(0);

        let mut memo = MemoTable::with_capacity(self.config.memo_capacity);
        let (mv, value) = select_root(state, |child| self.lookup(game, child, &mut memo, 1))?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            strategy = "memoized",
            mv = ?mv,
            value,
            nodes = self.stats.nodes_visited,
            memo_entries = memo.len(),
            memo_hits = self.stats.memo_hits,
            time_us = self.stats.time_us,
            "chose move"
        );
        Ok(mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::subtract_square::{SubtractSquare, SubtractSquareState};

    #[test]
    fn test_first_best_prefers_first_on_ties() {
        let best = first_best(vec![('a', 0), ('b', 1), ('c', 1), ('d', -1)]);
        assert_eq!(best, Some(('b', 1)));

        let empty: Vec<(char, i32)> = Vec::new();
        assert_eq!(first_best(empty), None);
    }

    #[test]
    fn test_terminal_score() {
        let game = SubtractSquare::new(true, 0);

        // At total 0 the player to move has lost.
        let state = SubtractSquareState::new(true, 0);
        assert_eq!(terminal_score(&game, &state), -1);
    }

    #[test]
    fn test_negamax_value_small_totals() {
        let game = SubtractSquare::new(true, 0);
        let expected = [(0, -1), (1, 1), (2, -1), (3, 1), (4, 1), (5, -1), (6, 1), (7, -1)];

        for (total, value) in expected {
            let state = SubtractSquareState::new(true, total);
            assert_eq!(negamax_value(&game, &state).unwrap(), value, "total {}", total);
        }
    }

    #[test]
    fn test_recursive_picks_immediate_win() {
        let game = SubtractSquare::new(true, 4);
        let mut strategy = RecursiveMinimax::default();

        let mv = strategy.choose_move(&game, &game.initial_state()).unwrap();
        assert_eq!(mv, 4);
        assert!(Strategy::<SubtractSquare>::stats(&strategy).nodes_visited > 1);
    }

    #[test]
    fn test_depth_guard() {
        let game = SubtractSquare::new(true, 10);
        let mut strategy = RecursiveMinimax::new(SearchConfig::default().with_max_depth(2));

        let err = strategy.choose_move(&game, &game.initial_state()).unwrap_err();
        assert_eq!(err, Error::DepthLimitExceeded { limit: 2 });
    }

    #[test]
    fn test_memoized_hits_transpositions() {
        let game = SubtractSquare::new(true, 20);
        let mut memoized = MemoizedMinimax::default();
        let mut recursive = RecursiveMinimax::default();

        let state = game.initial_state();
        let a = memoized.choose_move(&game, &state).unwrap();
        let b = recursive.choose_move(&game, &state).unwrap();

        assert_eq!(a, b);
        let memo_stats = Strategy::<SubtractSquare>::stats(&memoized);
        let plain_stats = Strategy::<SubtractSquare>::stats(&recursive);
        assert!(memo_stats.memo_hits > 0);
        assert!(memo_stats.nodes_visited < plain_stats.nodes_visited);
    }

    #[test]
    fn test_no_moves_available() {
        let game = SubtractSquare::new(true, 0);
        let state = game.initial_state();

        assert_eq!(
            RecursiveMinimax::default().choose_move(&game, &state),
            Err(Error::NoMovesAvailable)
        );
        assert_eq!(
            MemoizedMinimax::default().choose_move(&game, &state),
            Err(Error::NoMovesAvailable)
        );
    }
}
