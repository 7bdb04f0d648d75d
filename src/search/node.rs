//! Search node structures for the iterative strategy.
//!
//! Uses arena-based allocation with index references (NodeId), so a
//! node can name its children without owning pointers into the tree.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameState;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A cell of the iterative search tree.
///
/// Lifecycle: created when first pushed, expanded once (children built
/// from `possible_moves`), then revisited once to fold its children's
/// scores into its own. The children are released by that fold.
#[derive(Clone, Debug)]
pub struct Node<S: GameState> {
    /// Position this node represents.
    pub state: S,

    /// Move that produced `state` from the parent (None for the root).
    pub mv: Option<S::Move>,

    /// Plies below the root.
    pub depth: u32,

    /// Children in move order. Empty until expanded.
    /// SmallVec optimizes for typical branching factor < 8.
    pub children: SmallVec<[NodeId; 8]>,

    /// Has `children` been populated?
    pub expanded: bool,

    /// Negamax score for the player to move at `state`, once resolved.
    pub score: Option<i32>,

    /// Move to the child that achieved `score` (first in move order on ties).
    pub best_move: Option<S::Move>,
}

impl<S: GameState> Node<S> {
    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, None, 0)
    }

    /// Create a child node reached by `mv`.
    pub fn child(state: S, mv: S::Move, depth: u32) -> Self {
        Self::new(state, Some(mv), depth)
    }

    fn new(state: S, mv: Option<S::Move>, depth: u32) -> Self {
        Self {
            state,
            mv,
            depth,
            children: SmallVec::new(),
            expanded: false,
            score: None,
            best_move: None,
        }
    }

    /// Check if this node's score has been set.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.score.is_some()
    }
}
