//! Maze CLI - a depth-first solver for text-based grid mazes
//!
//! A maze is a rectangular grid of symbols (`0` open, `1` start, `8` wall,
//! `9` finish). The solver walks it depth-first using only locally-visible
//! information, backtracking out of dead ends, and returns the discovered
//! path in start-to-finish order.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Cell, CellStatus, Grid, GridError, MazeEngine, PathStack, SolveError};
