//! Core solver domain
//!
//! The traversal engine and its data types, free of any I/O concerns.

mod cell;
mod engine;
mod grid;
mod stack;

pub use cell::{Cell, CellStatus};
pub use engine::{InvalidSymbolError, MazeEngine, SolveError};
pub use grid::{Grid, GridError};
pub use stack::{EmptyStackError, PathStack};
