//! The engine must never lose, from either side, against any line of play.

mod common;

use oxo::{
    Board, GameOutcome, Side,
    search::{self, SweepOutcomes},
    strategy::{Blocker, Perfect, Random, Strategy, play_match},
};

#[test]
fn engine_as_o_never_loses_any_line() {
    let mut board = Board::new();
    let mut totals = SweepOutcomes::default();

    for opening in 0..9 {
        board.apply_move(opening, Side::X).unwrap();
        totals.merge(search::sweep(&mut board, Side::O, Side::O).unwrap());
        board.undo_move(opening);
    }

    assert!(totals.games() > 0);
    assert_eq!(
        totals.losses, 0,
        "engine as O lost {} line(s)",
        totals.losses
    );
    assert_eq!(board, Board::new(), "sweep should restore the board");
}

#[test]
fn engine_as_x_never_loses_any_line() {
    let mut board = Board::new();
    let totals = search::sweep(&mut board, Side::X, Side::X).unwrap();

    assert!(totals.games() > 0);
    assert_eq!(
        totals.losses, 0,
        "engine as X lost {} line(s)",
        totals.losses
    );
}

#[test]
fn engine_holds_the_classic_center_defense() {
    // X took the center, O answered with a corner; every X continuation
    // from here must still fail to win.
    let mut board = common::board("O...X....");
    let totals = search::sweep(&mut board, Side::O, Side::X).unwrap();

    assert_eq!(totals.losses, 0);
    assert_eq!(board, common::board("O...X...."));
}

#[test]
fn engine_never_loses_sampled_games() {
    let opponents: Vec<(&str, Box<dyn Strategy>)> = vec![
        ("random", Box::new(Random::with_seed(0xDECAF))),
        ("blocker", Box::new(Blocker::with_seed(0xDECAF))),
    ];

    for (name, mut opponent) in opponents {
        let mut engine = Perfect;
        for round in 0..24 {
            let engine_side = if round % 2 == 0 { Side::X } else { Side::O };
            let outcome = match engine_side {
                Side::X => play_match(&mut engine, opponent.as_mut()).unwrap(),
                Side::O => play_match(opponent.as_mut(), &mut engine).unwrap(),
            };
            assert_ne!(
                outcome,
                GameOutcome::Win(engine_side.opponent()),
                "{name} beat the engine as {engine_side} in round {round}"
            );
        }
    }
}
