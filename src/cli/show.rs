//! `maze show` command

use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::Grid;
use crate::storage;

pub fn run(output: &Output, input: &Path) -> Result<()> {
    let rows = storage::read_rows(input)?;
    let grid = Grid::parse(&rows)?;
    output.verbose_ctx(
        "show",
        &format!(
            "Loaded {}x{} grid from {}",
            grid.rows(),
            grid.cols(),
            input.display()
        ),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "rows": grid.rows(),
            "cols": grid.cols(),
            "grid": rows,
        }));
    } else {
        print!("{}", grid.render());
    }

    Ok(())
}
