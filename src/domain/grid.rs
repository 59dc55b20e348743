//! Grid snapshot parsed from text rows
//!
//! The grid is an arena: all symbols live in one flat buffer addressed by
//! `row * cols + col`, and positions are handed around as indices rather
//! than references. Once parsed, the symbol buffer never changes — the
//! engine keeps its own discovered state per cell and derives printable
//! symbols from that, so there is no second mutable copy to drift out of
//! sync.

use thiserror::Error;

/// Grid symbol for an open path cell
pub const OPEN: char = '0';
/// Grid symbol for the start cell
pub const START: char = '1';
/// Grid symbol for a wall cell
pub const WALL: char = '8';
/// Grid symbol for the finish cell
pub const FINISH: char = '9';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid is empty")]
    Empty,

    #[error("Row {row} has {len} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Grid is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    WrongDimensions {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
}

/// Immutable rows×cols snapshot of raw maze symbols
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    symbols: Vec<char>,
}

impl Grid {
    /// Parses text rows into a grid.
    ///
    /// Every row must have the same length as the first; a ragged or empty
    /// grid is rejected. Individual symbols are not validated here — an
    /// unrecognized character is a per-cell concern that surfaces when the
    /// traversal first probes that cell.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        let cols = rows[0].as_ref().chars().count();
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut symbols = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            let len = line.as_ref().chars().count();
            if len != cols {
                return Err(GridError::RaggedRow {
                    row,
                    len,
                    expected: cols,
                });
            }
            symbols.extend(line.as_ref().chars());
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            symbols,
        })
    }

    /// Parses text rows and additionally requires exact dimensions
    pub fn parse_with_dimensions<S: AsRef<str>>(
        rows: &[S],
        expected_rows: usize,
        expected_cols: usize,
    ) -> Result<Self, GridError> {
        let grid = Self::parse(rows)?;
        if grid.rows != expected_rows || grid.cols != expected_cols {
            return Err(GridError::WrongDimensions {
                rows: grid.rows,
                cols: grid.cols,
                expected_rows,
                expected_cols,
            });
        }
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Arena index of a position
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Raw symbol at a position
    pub fn symbol(&self, row: usize, col: usize) -> char {
        self.symbols[self.index(row, col)]
    }

    /// Raw symbol at an arena index
    pub fn symbol_at(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Row-major scan for the start symbol
    pub fn find_start(&self) -> Option<(usize, usize)> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.symbol(row, col) == START {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Renders the raw snapshot, one line per row
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(self.symbol(row, col));
            }
            out.push('\n');
        }
        out
    }
}
