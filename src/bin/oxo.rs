//! oxo CLI - perfect-play tic-tac-toe engine
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games against the engine
//! - Analyzing positions and their minimax move values
//! - Verifying that the engine never loses

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play tic-tac-toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Analyze a position and its move values
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Exhaustively verify the engine never loses
    Verify(oxo::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Verify(args) => oxo::cli::commands::verify::execute(args),
    }
}
