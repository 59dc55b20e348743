//! Maze CLI - depth-first solver for text-based grid mazes

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = maze_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
