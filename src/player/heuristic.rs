//! A fixed-priority opponent: complete an own line, else block the other
//! player's line, else take the first free square.

use itertools::Itertools as _;
use log::debug;

use crate::board::{Board, Coord, LINES};
use crate::core::{Player, PlayerMark};

/// A greedy one-ply player. It looks for an immediate win, then for an
/// immediate loss to block, and otherwise fills the board from the top left.
/// A skilled human can beat it; that is its intended strength, so do not
/// swap in a search here.
///
/// Stateless between calls: every decision is made from the board it is handed.
pub struct HeuristicAi {
    my_marker: PlayerMark,
}

impl HeuristicAi {
    pub fn new(mark: PlayerMark) -> Self {
        Self { my_marker: mark }
    }

    /// The first line in scan order with two cells of `mark` and the third
    /// cell empty, if any. Several lines can qualify at once; the `LINES`
    /// order is the tie-break.
    fn completing_move(&self, b: &Board, mark: PlayerMark) -> Option<Coord> {
        LINES.iter().find_map(|line| {
            let n_marked = line.iter().filter(|&&i| b.cell(i) == Some(mark)).count();
            if n_marked != 2 {
                return None;
            }
            line.iter()
                .filter(|&&i| b.cell(i).is_none())
                .exactly_one()
                .ok()
                .map(|&i| Coord::from_index(i))
        })
    }
}

impl Player for HeuristicAi {
    fn play(&mut self, b: &Board) -> Coord {
        if let Some(c) = self.completing_move(b, self.my_marker) {
            debug!("Heuristic AI {} completes a line at {c}", self.my_marker);
            return c;
        }
        if let Some(c) = self.completing_move(b, self.my_marker.other()) {
            debug!("Heuristic AI {} blocks a line at {c}", self.my_marker);
            return c;
        }
        *b.valid_moves()
            .first()
            .expect("the heuristic AI was asked to move on a full board")
    }
}
