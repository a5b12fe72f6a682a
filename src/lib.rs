//! A 3x3 tic-tac-toe game for the command line, with a simple rule-based opponent.

pub mod board;
pub mod core;
pub mod game;
pub mod player;
