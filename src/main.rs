#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battlegrid::{init_logging, run_session, GameEngine, DEFAULT_MESSAGE_WINDOW};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};

/// Play a game of battleship against the computer in the terminal.
#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_MESSAGE_WINDOW, help = "Number of recent messages to show")]
    messages: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut engine = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            GameEngine::from_seed(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            GameEngine::new(SmallRng::from_rng(&mut seed_rng))
        }
    };

    println!("Type `help` for commands.");
    let stdin = std::io::stdin();
    run_session(&mut engine, stdin.lock(), std::io::stdout(), cli.messages)
}
