//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use super::heuristic::RoughOutcome;
use super::iterative::IterativeMinimax;
use super::negamax::{MemoizedMinimax, RecursiveMinimax};
use super::Strategy;
use crate::rules::Game;

/// Which move-selection strategy to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Exhaustive negamax on the call stack, no caching.
    Recursive,
    /// Exhaustive negamax on an explicit work-stack.
    #[default]
    Iterative,
    /// Exhaustive negamax with a per-call transposition memo.
    Memoized,
    /// One-ply lookahead over `rough_outcome`.
    RoughOutcome,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Strategy built by `SearchConfig::build`.
    /// Iterative by default since it does not grow the call stack.
    pub strategy: StrategyKind,

    /// Maximum search depth in plies (0 = unlimited).
    /// Exhaustive strategies fail with `DepthLimitExceeded` past it.
    pub max_depth: u32,

    /// Initial capacity of the memo table.
    pub memo_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            max_depth: 0,
            memo_capacity: 1024,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a different strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with a custom depth guard.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with a custom memo capacity.
    pub fn with_memo_capacity(mut self, capacity: usize) -> Self {
        self.memo_capacity = capacity;
        self
    }

    /// Check whether `depth` plies below the root breaks the depth guard.
    #[inline]
    #[must_use]
    pub fn exceeds_depth(&self, depth: u32) -> bool {
        self.max_depth > 0 && depth > self.max_depth
    }

    /// Build the configured strategy for game `G`.
    pub fn build<G: Game + 'static>(&self) -> Box<dyn Strategy<G>> {
        match self.strategy {
            StrategyKind::Recursive => Box::new(RecursiveMinimax::new(self.clone())),
            StrategyKind::Iterative => Box::new(IterativeMinimax::new(self.clone())),
            StrategyKind::Memoized => Box::new(MemoizedMinimax::new(self.clone())),
            StrategyKind::RoughOutcome => Box::new(RoughOutcome::new()),
        }
    }
}
