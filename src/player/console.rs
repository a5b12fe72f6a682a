use std::io::BufRead;

use crate::board::{is_valid, Board, Coord};
use crate::core::{Player, PlayerMark};

pub struct ConsolePlayer {
    pub name: String,
}

impl ConsolePlayer {
    pub fn new(mark: PlayerMark) -> Self {
        ConsolePlayer {
            name: match mark {
                PlayerMark::Cross => "X".into(),
                PlayerMark::Naught => "O".into(),
            },
        }
    }
}

impl Player for ConsolePlayer {
    fn play(&mut self, b: &Board) -> Coord {
        println!("Time for {} to make a move", self.name);
        println!("Pick a square with a column letter and a row number, like A1 or b3");
        loop {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .expect("Could not read line. Fatal error! Exiting...");
            let input = line.trim();
            let coord = match input.parse::<Coord>() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("'{input}' is not a valid move: {e}");
                    continue;
                }
            };
            if !is_valid(b, coord) {
                eprintln!("'{input}' is not a valid move, please try again! The square must be on the board and empty.");
                continue;
            }
            println!("Got {coord}");
            return coord;
        }
    }
}
