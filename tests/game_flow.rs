//! Drive whole games through the turn controller with scripted players
use std::collections::VecDeque;

use oxo::{
    board::{Board, Coord},
    core::{GameEndStatus, Player, PlayerMark},
    game::run_game,
    player::HeuristicAi,
};

/// A player that plays a fixed script, ignoring the board.
struct Scripted {
    moves: VecDeque<Coord>,
}

impl Scripted {
    fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().map(|&(r, c)| Coord::new(r, c)).collect(),
        }
    }
}

impl Player for Scripted {
    fn play(&mut self, _b: &Board) -> Coord {
        self.moves.pop_front().expect("the script ran out of moves")
    }
}

#[test]
fn crosses_move_first_and_win_on_the_top_row() {
    let p_x = Scripted::new(&[(0, 0), (0, 1), (0, 2)]);
    let p_o = Scripted::new(&[(1, 0), (1, 1)]);
    let outcome = run_game(Box::new(p_x), Box::new(p_o));
    assert_eq!(outcome, GameEndStatus::Won(PlayerMark::Cross));
}

#[test]
fn a_rejected_move_does_not_cost_the_turn() {
    // X replays an occupied square and then an off-board one; both are
    // rejected and X is asked again, with O's position unchanged.
    let p_x = Scripted::new(&[(0, 0), (0, 0), (5, 5), (0, 1), (0, 2)]);
    let p_o = Scripted::new(&[(1, 0), (1, 1)]);
    let outcome = run_game(Box::new(p_x), Box::new(p_o));
    assert_eq!(outcome, GameEndStatus::Won(PlayerMark::Cross));
}

#[test]
fn a_full_board_without_a_line_ends_in_a_draw() {
    // Final position: x o x / x o o / o x x
    let p_x = Scripted::new(&[(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)]);
    let p_o = Scripted::new(&[(0, 1), (1, 1), (1, 2), (2, 0)]);
    let outcome = run_game(Box::new(p_x), Box::new(p_o));
    assert_eq!(outcome, GameEndStatus::Draw);
}

#[test]
fn the_heuristic_finishes_a_game_against_itself() {
    // Deterministic play: X fills from the top left, O blocks the down
    // diagonal, and X completes the up diagonal.
    let p_x = HeuristicAi::new(PlayerMark::Cross);
    let p_o = HeuristicAi::new(PlayerMark::Naught);
    let outcome = run_game(Box::new(p_x), Box::new(p_o));
    assert_eq!(outcome, GameEndStatus::Won(PlayerMark::Cross));
}
