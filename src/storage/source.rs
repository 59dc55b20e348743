//! Reading maze grids from text files

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads the rows of a maze file.
///
/// One attempt only: a missing or unreadable file is reported as an error
/// rather than prompting for another path. Trailing blank lines are
/// dropped; interior blank lines are kept so grid validation can flag them.
pub fn read_rows(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read maze file: {}", path.display()))?;

    let mut rows: Vec<String> = content
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_rows_and_drops_trailing_blanks() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "100\r\n080\n089\n\n").unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows, vec!["100", "080", "089"]);
    }

    #[test]
    fn keeps_interior_blank_lines_for_validation() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "100\n\n089\n").unwrap();

        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows, vec!["100", "", "089"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_rows(Path::new("/nonexistent/maze.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read maze file"));
    }
}
