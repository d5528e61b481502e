//! Play command - interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{GameOutcome, Side},
    cli::output,
    game::{Game, ScoreTally},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine")]
pub struct PlayArgs {
    /// Side you play (`x` or `o`)
    #[arg(long, short = 's', default_value = "x")]
    pub side: Side,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = args.side;
    let engine = human.opponent();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut tally = ScoreTally::new();

    println!("You play {human} and the engine plays {engine}.");
    println!("Enter a position (0-8), or 'q' to quit.");

    loop {
        let Some(outcome) = play_one_game(&mut input, human, engine)? else {
            break;
        };
        tally.record(outcome);

        match outcome {
            GameOutcome::Win(side) if side == human => println!("You win!"),
            GameOutcome::Win(_) => println!("The engine wins."),
            _ => println!("A draw."),
        }
        println!("Score: {tally}");

        if !prompt_replay(&mut input)? {
            break;
        }
    }

    if tally.games() > 0 {
        println!("\nFinal score: {tally}");
    }
    Ok(())
}

/// Run one game; `None` means the player quit before the end.
fn play_one_game(
    input: &mut impl BufRead,
    human: Side,
    engine: Side,
) -> Result<Option<GameOutcome>> {
    let mut game = Game::new();

    loop {
        if game.to_move() == engine {
            engine_turn(&mut game, engine)?;
        } else {
            println!("\n{}", output::render_with_positions(game.board()));
            let Some(position) = read_position(input)? else {
                return Ok(None);
            };
            if let Err(err) = game.play(position) {
                println!("{err}, try again.");
                continue;
            }
        }

        if game.outcome().is_terminal() {
            println!("\n{}", output::render_with_positions(game.board()));
            return Ok(Some(game.outcome()));
        }
    }
}

fn engine_turn(game: &mut Game, engine: Side) -> Result<()> {
    let mut scratch = *game.board();
    let position = search::best_move(&mut scratch, engine)?;
    game.play(position)?;
    println!("Engine plays {position}.");
    Ok(())
}

/// Prompt until a number arrives; `None` on quit or end of input.
fn read_position(input: &mut impl BufRead) -> Result<Option<usize>> {
    loop {
        print!("Your move: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(position) => return Ok(Some(position)),
            Err(_) => println!("Enter a number between 0 and 8, or 'q' to quit."),
        }
    }
}

fn prompt_replay(input: &mut impl BufRead) -> Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let trimmed = line.trim();
    Ok(trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes"))
}
