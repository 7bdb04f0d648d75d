//! Transposition memo for the memoized strategy.
//!
//! Maps a state's structural key to its negamax score from the
//! perspective of the player to move in that state. A table is owned
//! by exactly one `choose_move` call.

use rustc_hash::FxHashMap;

use crate::core::GameState;

/// Per-search memo of resolved scores.
#[derive(Clone, Debug)]
pub struct MemoTable<S: GameState> {
    scores: FxHashMap<S::Key, i32>,
}

impl<S: GameState> MemoTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Score previously stored for `key`.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &S::Key) -> Option<i32> {
        self.scores.get(key).copied()
    }

    /// Store the score of the state with `key`.
    #[inline]
    pub fn insert(&mut self, key: S::Key, score: i32) {
        self.scores.insert(key, score);
    }

    /// Number of stored states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: GameState> Default for MemoTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::subtract_square::SubtractSquareState;

    #[test]
    fn test_insert_and_get() {
        let mut memo: MemoTable<SubtractSquareState> = MemoTable::with_capacity(8);
        let state = SubtractSquareState::new(true, 2);

        assert!(memo.is_empty());
        assert_eq!(memo.get(&state.key()), None);

        memo.insert(state.key(), -1);
        assert_eq!(memo.get(&state.key()), Some(-1));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_key_includes_active_player() {
        let mut memo: MemoTable<SubtractSquareState> = MemoTable::new();
        memo.insert(SubtractSquareState::new(true, 3).key(), 1);

        assert_eq!(memo.get(&SubtractSquareState::new(false, 3).key()), None);
    }
}
