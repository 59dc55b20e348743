//! Writing solution paths to text files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::Cell;

/// Header line of a solution file
pub const SOLUTION_HEADER: &str = "The path through the maze is as follows:";

/// Renders a solution as the header line followed by `(row, col) ` tokens
/// in forward order. An empty solution renders as the header alone.
pub fn render_solution(solution: &[Cell]) -> String {
    let mut out = String::from(SOLUTION_HEADER);
    out.push('\n');
    for cell in solution {
        out.push_str(&format!("{} ", cell));
    }
    out
}

/// Writes a rendered solution to a file
pub fn write_solution(path: &Path, solution: &[Cell]) -> Result<()> {
    fs::write(path, render_solution(solution))
        .with_context(|| format!("Failed to write solution file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use tempfile::TempDir;

    #[test]
    fn renders_forward_order_tokens() {
        let solution = vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)];
        assert_eq!(
            render_solution(&solution),
            "The path through the maze is as follows:\n(0, 0) (1, 0) (1, 1) "
        );
    }

    #[test]
    fn empty_solution_renders_header_only() {
        assert_eq!(
            render_solution(&[]),
            "The path through the maze is as follows:\n"
        );
    }

    #[test]
    fn writes_solution_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("maze_output.txt");
        write_solution(&path, &[Cell::new(2, 3)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "The path through the maze is as follows:\n(2, 3) "
        );
    }
}
