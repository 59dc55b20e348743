//! `maze solve` command

use std::path::Path;

use anyhow::{bail, Context, Result};

use super::output::Output;
use crate::domain::{Grid, MazeEngine};
use crate::storage;

pub fn run(
    output: &Output,
    input: &Path,
    out_file: Option<&Path>,
    expect: Option<&str>,
) -> Result<()> {
    let rows = storage::read_rows(input)?;
    let grid = match expect {
        Some(spec) => {
            let (expected_rows, expected_cols) = parse_dimensions(spec)?;
            Grid::parse_with_dimensions(&rows, expected_rows, expected_cols)?
        }
        None => Grid::parse(&rows)?,
    };
    output.verbose_ctx(
        "solve",
        &format!(
            "Loaded {}x{} grid from {}",
            grid.rows(),
            grid.cols(),
            input.display()
        ),
    );

    // Snapshot render before solving, for diagnostic display.
    if output.is_text() {
        print!("{}", grid.render());
        println!();
    }

    let mut engine = MazeEngine::new(grid);
    let solution = engine.solve()?;

    for invalid in engine.invalid_symbols() {
        output.warn(&invalid.to_string());
    }
    output.verbose_ctx(
        "solve",
        &format!("Traversal finished, path length {}", solution.len()),
    );
    output.verbose_ctx("solve", &format!("Final grid state:\n{}", engine.render()));

    if let Some(path) = out_file {
        storage::write_solution(path, &solution)?;
        output.verbose_ctx("solve", &format!("Wrote solution to {}", path.display()));
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "solved": !solution.is_empty(),
            "path": solution,
        }));
    } else {
        println!("{}", storage::render_solution(&solution));
        if solution.is_empty() {
            println!("No path from start to finish.");
        }
    }

    Ok(())
}

/// Parses a dimension spec like "8x8" into (rows, cols)
fn parse_dimensions(spec: &str) -> Result<(usize, usize)> {
    let Some((rows, cols)) = spec.split_once(['x', 'X']) else {
        bail!(
            "Invalid dimension spec '{}', expected ROWSxCOLS (e.g. 8x8)",
            spec
        );
    };

    let rows = rows
        .trim()
        .parse()
        .with_context(|| format!("Invalid row count in dimension spec '{}'", spec))?;
    let cols = cols
        .trim()
        .parse()
        .with_context(|| format!("Invalid column count in dimension spec '{}'", spec))?;

    Ok((rows, cols))
}
