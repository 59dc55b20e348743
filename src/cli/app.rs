//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{show, solve};

#[derive(Parser)]
#[command(name = "maze")]
#[command(author, version, about = "Depth-first solver for text-based grid mazes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve a maze and print the path from start to finish
    Solve {
        /// Path to the maze file (one row per line, 0=open 1=start 8=wall 9=finish)
        input: PathBuf,

        /// Write the solution to this file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Require the grid to have exactly these dimensions (e.g. "8x8")
        #[arg(long)]
        expect: Option<String>,
    },

    /// Print a maze file as the solver sees it
    Show {
        /// Path to the maze file
        input: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Maze CLI starting");

    match cli.command {
        Commands::Solve {
            input,
            output: out_file,
            expect,
        } => solve::run(&output, &input, out_file.as_deref(), expect.as_deref())?,

        Commands::Show { input } => show::run(&output, &input)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
