//! The 3x3 board, its coordinate system, and the rules for wins, draws and legal moves.

use std::str::FromStr;

use anyhow::{bail, ensure};

use crate::core::{GameStatus, PlayerMark};

/// The 8 lines that decide the game, as indices into the flat board array:
/// 3 rows (top to bottom), 3 columns (left to right), the down diagonal,
/// and the up diagonal.
///
/// The scan order is observable behavior. The win detector and the rule-based
/// opponent both walk this table front to back, so when several lines qualify
/// at once, the earliest entry wins the tie.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A square on the board. Row 0 is the top row, column 0 the leftmost column.
///
/// Coordinates parsed from user input may lie outside the board; [`is_valid`]
/// is the gate that rejects those, so a `Coord` on its own carries no
/// in-range guarantee.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub(crate) fn from_index(i: usize) -> Self {
        Self {
            row: i / 3,
            col: i % 3,
        }
    }

    fn index(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.row < 3 && self.col < 3 {
            write!(f, "{}{}", char::from(b'A' + self.col as u8), self.row + 1)
        } else {
            write!(f, "row {} col {}", self.row, self.col)
        }
    }
}

impl FromStr for Coord {
    type Err = anyhow::Error;

    /// Parse a move like "A1" or "b3": a column letter followed by a row digit,
    /// case-insensitive. Letters past C and digits outside 1-3 parse into
    /// out-of-range coordinates; [`is_valid`] rejects those the same way it
    /// rejects an occupied square, so there is no separate error path for them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("a move is two characters, like A1 or b3");
        };
        ensure!(
            letter.is_ascii_lowercase(),
            "the first character must be a column letter"
        );
        ensure!(
            digit.is_ascii_digit(),
            "the second character must be a row digit"
        );
        let col = letter as usize - 'a' as usize;
        // a '0' digit wraps to a huge row number and fails the range check
        let row = (digit as usize - '0' as usize).wrapping_sub(1);
        Ok(Self { row, col })
    }
}

/// The board cells from the top left, row by row, to the bottom right.
/// An unmarked cell is `None`; a marked cell never changes for the rest of the game.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Board([Option<PlayerMark>; 9]);

impl Default for Board {
    fn default() -> Self {
        Self([None; 9])
    }
}

impl Board {
    pub(crate) fn cell(&self, index: usize) -> Option<PlayerMark> {
        self.0[index]
    }

    pub fn get(&self, c: Coord) -> Option<PlayerMark> {
        self.0[c.index()]
    }

    /// All cells, top left to bottom right.
    pub fn cells(&self) -> impl Iterator<Item = Option<PlayerMark>> + '_ {
        self.0.iter().copied()
    }

    /// The coordinates where a marker may be placed this turn, in row-major order.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &mark)| mark.is_none().then(|| Coord::from_index(i)))
            .collect()
    }

    /// Place a marker. The caller must have run the move through [`is_valid`]
    /// first; placing on an occupied or off-board square is a bug in the caller.
    pub fn place_mark(&mut self, c: Coord, marker: PlayerMark) {
        if c.row > 2 || c.col > 2 {
            panic!("the coordinate {c} is off the board! Invalid move just played!")
        }
        if self.0[c.index()].is_some() {
            panic!("there is already a marker at {c}! Invalid move just played!")
        }
        self.0[c.index()] = Some(marker);
    }

    /// Is there a winner?
    pub fn winner(&self) -> Option<PlayerMark> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|i| self.0[i]);
            if a.is_some() && a == b && b == c {
                a
            } else {
                None
            }
        })
    }

    /// No winner and no empty cell left.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.cells().all(|mark| mark.is_some())
    }

    /// The win check runs before the full-board check, so a full board with a
    /// completed line reports the win.
    pub fn game_status(&self) -> GameStatus {
        if let Some(p) = self.winner() {
            GameStatus::Won(p)
        } else if self.cells().all(|mark| mark.is_some()) {
            GameStatus::Draw
        } else {
            GameStatus::Undecided
        }
    }

    pub fn game_is_over(&self) -> bool {
        !matches!(self.game_status(), GameStatus::Undecided)
    }

    pub fn n_moves_made(&self) -> usize {
        self.cells().filter(|mark| mark.is_some()).count()
    }
}

/// The sole gate for accepting a move: the square must be on the board and unoccupied.
pub fn is_valid(b: &Board, c: Coord) -> bool {
    c.row <= 2 && c.col <= 2 && b.get(c).is_none()
}

impl FromStr for Board {
    type Err = anyhow::Error;

    /// Parse a 9 character board string, row-major: 'x', 'o' or ' ' per cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ensure!(s.chars().count() == 9, "a board string is exactly 9 characters");
        let mut b = Self::default();
        for (i, ch) in s.chars().enumerate() {
            match ch {
                'x' => b.0[i] = Some(PlayerMark::Cross),
                'o' => b.0[i] = Some(PlayerMark::Naught),
                ' ' => {}
                _ => bail!("board strings may only contain 'x', 'o' or ' '"),
            }
        }
        Ok(b)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |mark| match mark {
            None => ' ',
            Some(PlayerMark::Cross) => 'X',
            Some(PlayerMark::Naught) => 'O',
        };
        writeln!(f, "    A   B   C")?;
        writeln!(f, "  +---+---+---+")?;
        for row in 0..3 {
            write!(f, "{} |", row + 1)?;
            for col in 0..3 {
                write!(f, " {} |", m(self.0[row * 3 + col]))?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+")?;
        }
        Ok(())
    }
}
