//! Depth-first traversal engine with explicit backtracking
//!
//! The engine owns a parsed [`Grid`] plus one [`Cell`] record per position
//! and walks the maze using only locally-visible information: a cell's
//! symbol is resolved the first time the search probes it as a neighbor,
//! never earlier. The live path is a [`PathStack`]; when every direction
//! out of the current cell is exhausted, the cell is sealed as a dead end
//! and the search pops back one step. The loop ends when the current cell
//! is the finish (the stack then holds the solution) or when the stack
//! drains empty (no path exists).

use thiserror::Error;

use super::cell::{Cell, CellStatus};
use super::grid::{self, Grid};
use super::stack::PathStack;

/// Fatal solve errors, all detected before any traversal step runs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("Grid has no start symbol ('{}')", grid::START)]
    NoStart,
}

/// An unrecognized symbol encountered during traversal.
///
/// Non-fatal: recorded once per cell, and the cell is latched as a wall so
/// the search routes around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid symbol '{symbol}' at ({row}, {col}), treating cell as a wall")]
pub struct InvalidSymbolError {
    pub row: usize,
    pub col: usize,
    pub symbol: char,
}

/// Neighbor probe order. North is tried first and South last; the first
/// enterable neighbor wins (first-match, not best-match), so this order
/// decides which of several valid paths the solver returns.
const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::East,
    Direction::South,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    West,
    East,
    South,
}

impl Direction {
    /// The position one step away, or `None` at the grid edge
    fn step(self, row: usize, col: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        match self {
            Direction::North => row.checked_sub(1).map(|r| (r, col)),
            Direction::West => col.checked_sub(1).map(|c| (row, c)),
            Direction::East => (col + 1 < cols).then_some((row, col + 1)),
            Direction::South => (row + 1 < rows).then_some((row + 1, col)),
        }
    }
}

/// The maze solver.
///
/// Exclusively owns its grid and cell state for the duration of a solve;
/// every call to [`MazeEngine::solve`] starts from freshly materialized
/// cells, so repeated solves of the same grid are independent and
/// deterministic.
#[derive(Debug)]
pub struct MazeEngine {
    grid: Grid,
    cells: Vec<Cell>,
    on_path: Vec<bool>,
    invalid: Vec<InvalidSymbolError>,
}

impl MazeEngine {
    /// Creates an engine over a finalized grid
    pub fn new(grid: Grid) -> Self {
        let cells = Self::materialize_cells(&grid);
        let on_path = vec![false; cells.len()];
        Self {
            grid,
            cells,
            on_path,
            invalid: Vec::new(),
        }
    }

    /// One `Unvisited` cell per grid position, row-major
    fn materialize_cells(grid: &Grid) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                cells.push(Cell::new(row, col));
            }
        }
        cells
    }

    /// The grid this engine solves
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cell record at a position
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.grid.index(row, col)]
    }

    /// Invalid symbols met during the last solve, in encounter order
    pub fn invalid_symbols(&self) -> &[InvalidSymbolError] {
        &self.invalid
    }

    /// Locates the start cell (row-major scan) and latches its status
    pub fn find_start(&mut self) -> Result<Cell, SolveError> {
        let (row, col) = self.grid.find_start().ok_or(SolveError::NoStart)?;
        let index = self.grid.index(row, col);
        self.cells[index].status = CellStatus::Start;
        Ok(self.cells[index])
    }

    /// Runs the traversal and returns the path in forward order.
    ///
    /// An empty result means the search exhausted every reachable cell
    /// without finding the finish; that is a normal outcome, not an error.
    pub fn solve(&mut self) -> Result<Vec<Cell>, SolveError> {
        self.reset();

        let start = self.find_start()?;
        let start_index = self.grid.index(start.row, start.col);

        let mut path = PathStack::new();
        path.push(start);
        self.on_path[start_index] = true;

        let mut current = start_index;
        loop {
            if self.cells[current].status == CellStatus::Finish {
                return Ok(path.drain_reversed());
            }

            match self.next_move(current) {
                Some(next) => {
                    self.on_path[next] = true;
                    path.push(self.cells[next]);
                    current = next;
                }
                None => {
                    // Dead end: seal the cell and retreat one step. The
                    // start cell is never sealed; running out of moves
                    // there just ends the search.
                    if self.cells[current].status != CellStatus::Start {
                        self.cells[current].status = CellStatus::DeadEnd;
                    }
                    self.on_path[current] = false;
                    path.pop();
                    match path.peek() {
                        Ok(top) => current = self.grid.index(top.row, top.col),
                        Err(_) => return Ok(Vec::new()),
                    }
                }
            }
        }
    }

    /// Fresh cell and path state; every solve starts from scratch
    fn reset(&mut self) {
        self.cells = Self::materialize_cells(&self.grid);
        self.on_path = vec![false; self.cells.len()];
        self.invalid.clear();
    }

    /// First enterable neighbor of the current cell, in priority order.
    ///
    /// Every probed cell gets its status latched on first discovery, even
    /// when it turns out not to be enterable.
    fn next_move(&mut self, current: usize) -> Option<usize> {
        let Cell { row, col, .. } = self.cells[current];
        for direction in DIRECTIONS {
            let Some((r, c)) = direction.step(row, col, self.grid.rows(), self.grid.cols()) else {
                continue;
            };
            let index = self.grid.index(r, c);
            if self.enterable(index) {
                return Some(index);
            }
        }
        None
    }

    /// Whether the search may move onto a candidate cell.
    ///
    /// Walls, sealed dead ends, the start cell, and cells already on the
    /// live path are never enterable.
    fn enterable(&mut self, index: usize) -> bool {
        self.discover(index);
        if self.on_path[index] {
            return false;
        }
        matches!(
            self.cells[index].status,
            CellStatus::Open | CellStatus::Finish
        )
    }

    /// First-discovery latch: a cell's status is resolved from its raw
    /// grid symbol at most once per solve.
    fn discover(&mut self, index: usize) {
        if self.cells[index].status != CellStatus::Unvisited {
            return;
        }

        let status = match self.grid.symbol_at(index) {
            grid::OPEN => CellStatus::Open,
            grid::WALL => CellStatus::Wall,
            grid::FINISH => CellStatus::Finish,
            grid::START => CellStatus::Start,
            other => {
                let cell = self.cells[index];
                self.invalid.push(InvalidSymbolError {
                    row: cell.row,
                    col: cell.col,
                    symbol: other,
                });
                CellStatus::Wall
            }
        };
        self.cells[index].status = status;
    }

    /// Renders the engine's view of the grid: discovered cells show their
    /// resolved status, undiscovered cells fall back to the raw symbol.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.grid.rows() * (self.grid.cols() + 1));
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let index = self.grid.index(row, col);
                let symbol = self.cells[index]
                    .status
                    .symbol()
                    .unwrap_or_else(|| self.grid.symbol_at(index));
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}
