//! Arena-based search tree.
//!
//! Uses a flat `Vec<Node>` with index-based references. The tree lives
//! for one `choose_move` call and is dropped afterwards.
//!
//! Nodes are allocated in depth-first order, so everything allocated
//! after a node's first child belongs to that node's subtree. Once the
//! node is resolved, `release_from` drops the whole subtree by truncating
//! the arena, keeping live nodes bounded by depth times branching.

use super::node::{Node, NodeId};
use crate::core::GameState;

/// Arena of search nodes.
#[derive(Clone, Debug)]
pub struct SearchTree<S: GameState> {
    /// All nodes in the tree.
    nodes: Vec<Node<S>>,

    /// The root node ID (always 0).
    root: NodeId,

    /// Most nodes alive at once.
    peak: usize,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree rooted at `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
            peak: 1,
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: Node<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        self.peak = self.peak.max(self.nodes.len());
        id
    }

    /// Drop `first` and every node allocated after it.
    ///
    /// The root is never released.
    pub fn release_from(&mut self, first: NodeId) {
        self.nodes.truncate((first.0 as usize).max(1));
    }

    /// Most nodes alive at any point.
    #[must_use]
    pub fn peak_len(&self) -> usize {
        self.peak
    }

    /// Number of live nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &Node<S> {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::subtract_square::SubtractSquareState;

    #[test]
    fn test_new_tree() {
        let tree = SearchTree::new(SubtractSquareState::new(true, 5));

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert_eq!(tree.root_node().state.total(), 5);
    }

    #[test]
    fn test_alloc_and_link() {
        let root_state = SubtractSquareState::new(true, 5);
        let mut tree = SearchTree::new(root_state.clone());
        let root = tree.root();

        let child_state = root_state.make_move(&4).unwrap();
        let child = tree.alloc(Node::child(child_state, 4, 1));
        tree.get_mut(root).children.push(child);

        assert_eq!(child, NodeId::new(1));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root_node().children.as_slice(), &[child]);
        assert_eq!(tree.get(child).state.total(), 1);
    }

    #[test]
    fn test_release_from_keeps_peak() {
        let mut tree = SearchTree::new(SubtractSquareState::new(true, 5));
        let first = tree.alloc(Node::child(SubtractSquareState::new(false, 4), 1, 1));
        tree.alloc(Node::child(SubtractSquareState::new(false, 1), 4, 1));
        tree.alloc(Node::child(SubtractSquareState::new(true, 0), 4, 2));

        tree.release_from(first);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.peak_len(), 4);
        assert_eq!(tree.root_node().state.total(), 5);

        // The root survives even when asked to release it.
        tree.release_from(tree.root());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_iter() {
        let mut tree = SearchTree::with_capacity(SubtractSquareState::new(true, 2), 4);
        tree.alloc(Node::child(SubtractSquareState::new(false, 1), 1, 1));

        let ids: Vec<_> = tree.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![NodeId::new(0), NodeId::new(1)]);
    }
}
