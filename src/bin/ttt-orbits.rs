//! ttt-orbits CLI - symmetry-reduced Tic-Tac-Toe state-space toolkit
//!
//! This CLI provides a unified interface for:
//! - Enumerating the reachable state space up to board symmetry
//! - Reporting per-depth and total equivalence-class counts
//! - Exporting the class DAG for external analysis and visualization

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-orbits")]
#[command(version, about = "Symmetry-reduced Tic-Tac-Toe state-space toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the state space and report complexity per depth
    Explore(ttt_orbits::cli::commands::explore::ExploreArgs),

    /// Export the class DAG in various formats
    Export(ttt_orbits::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Explore(args) => ttt_orbits::cli::commands::explore::execute(args),
        Commands::Export(args) => ttt_orbits::cli::commands::export::execute(args),
    }
}
