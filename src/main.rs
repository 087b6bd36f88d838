//! Othello-Rules command line.
//!
//! ## Usage
//!
//! - `othello-rules` - Show a demo
//! - `othello-rules demo` - Play the opening and a random game
//! - `othello-rules selfplay --seed 1 --games 10` - Random self-play summary
//! - `othello-rules protocol` - Start the text protocol on stdin/stdout

use anyhow::Result;
use clap::{Parser, Subcommand};

use othello_rules::board::Board;
use othello_rules::coord::str_coord;
use othello_rules::piece::Color;
use othello_rules::protocol::Engine;
use othello_rules::selfplay::random_game;

/// Othello-Rules: an Othello/Reversi rules engine
#[derive(Parser)]
#[command(name = "othello-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short demo of the rules engine
    Demo,
    /// Play random games and report the results
    Selfplay {
        /// Seed for the random number generator
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
    /// Start the text protocol server for use by other programs
    Protocol,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay { seed, games }) => run_selfplay(seed, games),
        Some(Commands::Protocol) => {
            let mut engine = Engine::new();
            engine.run()?;
            Ok(())
        }
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("Othello-Rules: Othello/Reversi rules engine\n");

    println!("=== Opening ===");
    let mut board = Board::new();
    println!("{board}");
    let moves: Vec<String> = board
        .valid_moves(Color::Black)
        .into_iter()
        .map(str_coord)
        .collect();
    println!("Black can play: {}", moves.join(" "));

    board.place_piece((2, 3), Color::Black)?;
    println!("\nBlack plays d3:");
    println!("{board}");

    println!("=== Random Game ===");
    let game = random_game(&mut fastrand::Rng::with_seed(1));
    println!("{game}");
    Ok(())
}

fn run_selfplay(seed: u64, games: usize) -> Result<()> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let (mut black_wins, mut white_wins, mut draws) = (0, 0, 0);

    for i in 0..games {
        let game = random_game(&mut rng);
        let (black, white) = game.score();
        match game.winner() {
            Some(Color::Black) => black_wins += 1,
            Some(Color::White) => white_wins += 1,
            None => draws += 1,
        }
        let record: Vec<String> = game.history().iter().map(|(_, mv)| mv.to_string()).collect();
        println!("game {}: black {black} white {white}: {}", i + 1, record.join(" "));
    }

    eprintln!("{games} games: black {black_wins}, white {white_wins}, draws {draws}");
    Ok(())
}
