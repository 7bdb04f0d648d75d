//! Negamax on an explicit work-stack.
//!
//! Produces the same value as `RecursiveMinimax` without growing the
//! call stack. Each node is popped up to three times:
//!
//! 1. Terminal: scored and dropped.
//! 2. Unexpanded: children built, the node pushed back, then every child
//!    pushed above it.
//! 3. Expanded: every child has been resolved (LIFO order finishes a
//!    node's whole subtree before reaching anything pushed earlier), so
//!    the node folds their negated scores into its own and its subtree
//!    is released from the arena.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::debug;

use super::config::SearchConfig;
use super::negamax::{first_best, terminal_score};
use super::node::{Node, NodeId};
use super::stats::SearchStats;
use super::tree::SearchTree;
use super::Strategy;
use crate::core::GameState;
use crate::error::{Error, Result};
use crate::rules::{Game, MoveOf};
use crate::stack::Stack;

/// Stack-based negamax.
#[derive(Clone, Debug, Default)]
pub struct IterativeMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl IterativeMinimax {
    /// Create a new iterative strategy.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Build and fully resolve the tree below `state`.
    fn solve<G: Game>(&mut self, game: &G, state: &G::State) -> Result<SearchTree<G::State>> {
        let mut tree = SearchTree::new(state.clone());
        let mut stack = Stack::new();
        stack.push(tree.root());

        while !stack.is_empty() {
            let top = stack.pop()?;
            let node = tree.get(top);

            if game.is_over(&node.state) {
                self.stats.visit(node.depth);
                self.stats.terminal_nodes += 1;
                let score = terminal_score(game, &node.state);
                tree.get_mut(top).score = Some(score);
            } else if !node.expanded {
                self.stats.visit(node.depth);
                let depth = node.depth + 1;
                if self.config.exceeds_depth(depth) {
                    return Err(Error::DepthLimitExceeded {
                        limit: self.config.max_depth,
                    });
                }
                let moves = node.state.possible_moves();
                if moves.is_empty() {
                    return Err(Error::NoMovesAvailable);
                }

                let mut children = Vec::with_capacity(moves.len());
                for mv in moves {
                    let child = node.state.make_move(&mv)?;
                    children.push(Node::child(child, mv, depth));
                }

                let ids: SmallVec<[NodeId; 8]> =
                    children.into_iter().map(|child| tree.alloc(child)).collect();

                stack.push(top);
                stack.extend(ids.iter().copied());

                let node = tree.get_mut(top);
                node.children = ids;
                node.expanded = true;
            } else {
                let scored = node
                    .children
                    .iter()
                    .map(|&id| tree.get(id).score.map(|s| (id, -s)))
                    .collect::<Option<Vec<_>>>()
                    .ok_or(Error::NoMovesAvailable)?;

                let (best, score) = first_best(scored).ok_or(Error::NoMovesAvailable)?;
                let best_move = tree.get(best).mv.clone();
                let first = node.children.first().copied().ok_or(Error::NoMovesAvailable)?;

                let node = tree.get_mut(top);
                node.score = Some(score);
                node.best_move = best_move;
                node.children.clear();
                tree.release_from(first);
            }
        }

        Ok(tree)
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax {
    fn choose_move(&mut self, game: &G, state: &G::State) -> Result<MoveOf<G>> {
        let start = Instant::now();
        self.stats.reset();

        if state.possible_moves().is_empty() {
            return Err(Error::NoMovesAvailable);
        }

        let tree = self.solve(game, state)?;
        let root = tree.root_node();
        let mv = root.best_move.clone().ok_or(Error::NoMovesAvailable)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            strategy = "iterative",
            mv = ?mv,
            value = ?root.score,
            nodes = self.stats.nodes_visited,
            peak_nodes = tree.peak_len(),
            time_us = self.stats.time_us,
            "chose move"
        );
        Ok(mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
