//! Path stack for the traversal
//!
//! A Vec-backed LIFO of [`Cell`] copies. During the search it is the live
//! frontier: index 0 is the start cell and the top is the solver's current
//! position, so the stack is always a prefix of the actual walk. Once the
//! finish is reached, [`PathStack::drain_reversed`] converts the natural
//! finish-to-start order into the forward order expected by output.

use thiserror::Error;

use super::cell::Cell;

/// Raised when `peek` is called on an empty stack.
///
/// Only reachable through misuse: the traversal checks for an exhausted
/// stack before every peek, so a correct solve never produces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Peeked an empty path stack")]
pub struct EmptyStackError;

/// LIFO sequence of cells recording the live path
#[derive(Debug, Default)]
pub struct PathStack {
    entries: Vec<Cell>,
}

impl PathStack {
    /// Creates an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a cell onto the top of the stack
    pub fn push(&mut self, cell: Cell) {
        self.entries.push(cell);
    }

    /// Returns the top entry without removing it
    pub fn peek(&self) -> Result<Cell, EmptyStackError> {
        self.entries.last().copied().ok_or(EmptyStackError)
    }

    /// Removes and returns the top entry.
    ///
    /// Popping an empty stack is a recoverable misuse, not a fatal one: it
    /// leaves the stack untouched and returns `None`.
    pub fn pop(&mut self) -> Option<Cell> {
        self.entries.pop()
    }

    /// Returns true if the stack holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consumes the stack and returns its cells in forward order.
    ///
    /// The stack's natural pop order runs finish→start; this pops every
    /// entry into a fresh stack and drains that one, yielding start→finish.
    /// Call only once the solution is final — the original stack is gone
    /// afterwards.
    pub fn drain_reversed(mut self) -> Vec<Cell> {
        let mut mirrored = PathStack::new();
        while let Some(cell) = self.pop() {
            mirrored.push(cell);
        }

        let mut forward = Vec::with_capacity(mirrored.len());
        while let Some(cell) = mirrored.pop() {
            forward.push(cell);
        }
        forward
    }
}
