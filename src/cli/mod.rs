//! Command-line interface
//!
//! User-facing commands and output formatting.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `solve` | Run the solver, print the path, optionally write the solution file |
//! | `show`  | Render a maze file without solving it |
//!
//! All commands support `--format text|json` and `--verbose`. Call
//! [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod show;
mod solve;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
