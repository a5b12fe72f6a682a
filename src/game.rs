//! The turn controller: alternate the players, validate and apply their moves,
//! and stop as soon as the board is terminal.

use log::debug;

use crate::board::{is_valid, Board};
use crate::core::{GameEndStatus, GameStatus, Player, PlayerMark};

/// Run one game to completion. Crosses move first.
///
/// Every proposed move goes through the validity check, whoever proposed it.
/// A rejected move does not advance the turn: the same player is asked again
/// and the board is untouched. The board is printed at game start and after
/// every applied move.
pub fn run_game(mut p_x: Box<dyn Player>, mut p_o: Box<dyn Player>) -> GameEndStatus {
    let mut board = Board::default();
    let mut current = PlayerMark::Cross;
    println!("{board}");
    while !board.game_is_over() {
        let coord = match current {
            PlayerMark::Cross => p_x.play(&board),
            PlayerMark::Naught => p_o.play(&board),
        };
        if !is_valid(&board, coord) {
            println!("{coord} is not a valid move, please try again! The square must be on the board and empty.");
            continue;
        }
        debug!("Player {current} placed a marker at {coord}");
        board.place_mark(coord, current);
        println!("{board}");
        current = current.other();
    }
    debug!("Game over after {} moves", board.n_moves_made());
    match board.game_status() {
        GameStatus::Draw => GameEndStatus::Draw,
        GameStatus::Won(p) => GameEndStatus::Won(p),
        GameStatus::Undecided => unreachable!(),
    }
}
