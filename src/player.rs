pub mod console;
pub mod heuristic;

pub use console::ConsolePlayer;
pub use heuristic::HeuristicAi;
