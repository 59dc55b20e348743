//! Per-position cell state

use std::fmt;

use serde::Serialize;

/// Resolved state of one grid position.
///
/// Every cell starts `Unvisited` and is latched exactly once, on first
/// discovery, to the state its grid symbol resolves to. The only transition
/// allowed after that is sealing an exhausted cell to `DeadEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    /// Not yet discovered by the traversal
    Unvisited,
    /// Open path
    Open,
    /// Wall
    Wall,
    /// The start position
    Start,
    /// The finish position
    Finish,
    /// Sealed: every direction out of this cell was exhausted
    DeadEnd,
}

impl CellStatus {
    /// The printable grid symbol for this status, in the input alphabet.
    ///
    /// Dead ends render as walls, which is exactly how the traversal treats
    /// them. `Unvisited` has no symbol of its own; renderers fall back to
    /// the raw grid symbol for undiscovered cells.
    pub fn symbol(self) -> Option<char> {
        match self {
            CellStatus::Unvisited => None,
            CellStatus::Open => Some('0'),
            CellStatus::Wall | CellStatus::DeadEnd => Some('8'),
            CellStatus::Start => Some('1'),
            CellStatus::Finish => Some('9'),
        }
    }
}

/// One grid position and its discovered state.
///
/// Plain data; all mutation happens inside the engine. Two cells are equal
/// when they name the same position, regardless of status.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub status: CellStatus,
}

impl Cell {
    /// Creates an undiscovered cell at the given position
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            status: CellStatus::Unvisited,
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
