//! Last-in, first-out stack.
//!
//! Backs the explicit work-stack of the iterative minimax strategy:
//! a node pushed after its parent is always popped, and its whole
//! subtree resolved, before the parent is seen again.
//!
//! ## Example Usage
//!
//! ```
//! use rust_minimax::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(5);
//! stack.push(7);
//!
//! assert_eq!(stack.pop().unwrap(), 7);
//! assert_eq!(stack.pop().unwrap(), 5);
//! assert!(stack.is_empty());
//! assert!(stack.pop().is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// LIFO container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Add an item to the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    ///
    /// Fails with `EmptyStack` if there is nothing to pop.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// Look at the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_empty() {
        let stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut stack: Stack<&str> = Stack::with_capacity(4);
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
    }

    #[test]
    fn test_extend_pushes_in_order() {
        let mut stack = Stack::new();
        stack.extend(vec!['a', 'b', 'c']);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Ok('c'));
    }

    #[test]
    fn test_equality() {
        let mut s1 = Stack::new();
        let mut s2 = Stack::new();
        assert_eq!(s1, s2);

        s2.push(5);
        assert_ne!(s1, s2);

        s1.push(5);
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_serialization() {
        let mut stack = Stack::new();
        stack.push(10u32);
        stack.push(20u32);

        let json = serde_json::to_string(&stack).unwrap();
        let deserialized: Stack<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(stack, deserialized);
    }
}
