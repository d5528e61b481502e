//! Analyze command - position classification and move values

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    board::{Board, GameOutcome, Side},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position")]
pub struct AnalyzeArgs {
    /// Board as 9 cell characters ('X', 'O', '.'), row-major
    #[arg(long)]
    pub state: Option<Board>,

    /// Side to search for (inferred from piece counts when omitted)
    #[arg(long)]
    pub side: Option<Side>,

    /// Write the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mut positions = Vec::new();

    if let Some(board) = args.state {
        let side = match args.side {
            Some(side) => side,
            None => board.to_move()?,
        };
        positions.push(analyze_position(board, side, "Requested position")?);
    } else {
        println!("Showing engine evaluations for key openings:");
        for (state, label) in [
            (".........", "Empty board"),
            ("....X....", "Center taken by X"),
            ("X........", "Corner taken by X"),
        ] {
            let board: Board = state.parse()?;
            let side = board.to_move()?;
            positions.push(analyze_position(board, side, label)?);
        }
    }

    if let Some(path) = &args.export {
        let export = AnalysisExport {
            description: "Exhaustive minimax analysis",
            positions,
        };
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

#[derive(Serialize)]
struct AnalysisExport {
    description: &'static str,
    positions: Vec<PositionReport>,
}

#[derive(Serialize)]
struct PositionReport {
    label: String,
    board: String,
    to_move: Side,
    outcome: GameOutcome,
    values: Vec<MoveValue>,
    best_move: Option<usize>,
}

#[derive(Serialize)]
struct MoveValue {
    position: usize,
    value: i32,
}

/// Analyze a single position, printing as it goes
fn analyze_position(board: Board, side: Side, label: &str) -> Result<PositionReport> {
    println!("\n{label}:");
    println!("{board}");

    let outcome = board.outcome();
    let mut scratch = board;
    let values = search::move_values(&mut scratch, side);

    let best_move = if outcome.is_terminal() {
        println!("(position is terminal: {outcome})");
        None
    } else {
        let best = search::best_move(&mut scratch, side)?;
        println!("{side} to move; values from {side}'s point of view:");
        for (position, value) in &values {
            println!("  position {position}: {value}");
        }
        println!(
            "Optimal move: position {best} (row {}, col {})",
            best / 3,
            best % 3
        );
        Some(best)
    };

    Ok(PositionReport {
        label: label.to_string(),
        board: board.encode(),
        to_move: side,
        outcome,
        values: values
            .into_iter()
            .map(|(position, value)| MoveValue { position, value })
            .collect(),
        best_move,
    })
}
