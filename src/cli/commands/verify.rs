//! Verify command - prove the engine never loses

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{Board, GameOutcome, Side},
    cli::output,
    search::{self, SweepOutcomes},
    strategy::{Blocker, Perfect, Random, Strategy, play_match},
};

#[derive(Parser, Debug)]
#[command(about = "Exhaustively verify the engine never loses")]
pub struct VerifyArgs {
    /// Sampled games per baseline opponent
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for the sampled games
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let mut losses = 0;

    output::print_section("Exhaustive sweep");
    println!("Every opponent line is explored while the engine answers optimally.");

    for engine in [Side::O, Side::X] {
        let totals = sweep_all_lines(engine)?;
        report(&format!("engine as {engine}"), &totals);
        losses += totals.losses;
    }

    output::print_section("Sampled games");
    println!("The engine alternates sides against each baseline opponent.");

    let mut random: Box<dyn Strategy> = Box::new(Random::with_seed(args.seed));
    losses += sampled_matches(random.as_mut(), args.games)?.losses;

    let mut blocker: Box<dyn Strategy> = Box::new(Blocker::with_seed(args.seed));
    losses += sampled_matches(blocker.as_mut(), args.games)?.losses;

    if losses > 0 {
        anyhow::bail!("engine lost {losses} game(s)");
    }
    println!("\nNo losses.");
    Ok(())
}

/// Sweep every opponent line with the engine on the given side.
///
/// X always opens: with the engine as O the sweep branches over all nine
/// openings, with the engine as X it opens itself and the sweep branches
/// over the opponent replies.
fn sweep_all_lines(engine: Side) -> Result<SweepOutcomes> {
    let mut board = Board::new();
    let mut totals = SweepOutcomes::default();

    if engine == Side::X {
        let opening = search::best_move(&mut board, Side::X)?;
        board.apply_move(opening, Side::X)?;

        let replies = board.legal_moves();
        let pb = output::create_sweep_progress(replies.len() as u64);
        for reply in replies {
            board.apply_move(reply, Side::O)?;
            totals.merge(search::sweep(&mut board, engine, Side::X)?);
            board.undo_move(reply);
            pb.inc(1);
        }
        pb.finish_and_clear();
        board.undo_move(opening);
    } else {
        let openings = board.legal_moves();
        let pb = output::create_sweep_progress(openings.len() as u64);
        for opening in openings {
            board.apply_move(opening, Side::X)?;
            totals.merge(search::sweep(&mut board, engine, Side::O)?);
            board.undo_move(opening);
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    Ok(totals)
}

/// Play seeded games against one opponent, the engine alternating sides
fn sampled_matches(opponent: &mut dyn Strategy, games: usize) -> Result<SweepOutcomes> {
    let mut engine = Perfect;
    let mut totals = SweepOutcomes::default();

    let pb = output::create_match_progress(games as u64, opponent.name());
    for round in 0..games {
        let engine_side = if round.is_multiple_of(2) {
            Side::X
        } else {
            Side::O
        };
        let outcome = match engine_side {
            Side::X => play_match(&mut engine, opponent)?,
            Side::O => play_match(opponent, &mut engine)?,
        };
        match outcome {
            GameOutcome::Win(side) if side == engine_side => totals.wins += 1,
            GameOutcome::Win(_) => totals.losses += 1,
            GameOutcome::Draw => totals.draws += 1,
            GameOutcome::Ongoing => {}
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    report(&format!("vs {}", opponent.name()), &totals);
    Ok(totals)
}

fn report(label: &str, totals: &SweepOutcomes) {
    output::print_kv(
        label,
        &format!(
            "{} games: {} wins, {} draws, {} losses",
            totals.games(),
            totals.wins,
            totals.draws,
            totals.losses
        ),
    );
}
