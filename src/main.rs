use clap::Parser;
use oxo::{
    core::{Player, PlayerMark},
    game::run_game,
    player::{ConsolePlayer, HeuristicAi},
};

/// Classic 3x3 tic-tac-toe for the command line.
///
/// X always plays from the keyboard and moves first. O is a second keyboard
/// player unless --ai hands it to the computer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Let the computer play O
    #[arg(long)]
    ai: bool,
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;
    let args = Args::parse();
    let p_x: Box<dyn Player> = Box::new(ConsolePlayer::new(PlayerMark::Cross));
    let p_o: Box<dyn Player> = if args.ai {
        Box::new(HeuristicAi::new(PlayerMark::Naught))
    } else {
        Box::new(ConsolePlayer::new(PlayerMark::Naught))
    };
    let outcome = run_game(p_x, p_o);
    println!("{outcome}");
    Ok(())
}
