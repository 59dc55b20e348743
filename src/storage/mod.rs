//! Storage layer
//!
//! File-backed collaborators of the solver: the grid source (text rows read
//! from a maze file) and the solution sink (the output file holding the
//! forward-order path). All filesystem errors carry the offending path via
//! `anyhow` context.

mod sink;
mod source;

pub use sink::{render_solution, write_solution, SOLUTION_HEADER};
pub use source::read_rows;
