//! ntoe - n x n tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use ntoe::{Cli, ComputerPlayer, Console, Settings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?.with_overrides(cli.size, cli.seed);
    initialize_tracing(settings.log_filter());

    let seed = settings.seed().unwrap_or_else(rand::random);
    info!(seed, "Seeding computer opponent");
    let mut computer = ComputerPlayer::new(ChaCha8Rng::seed_from_u64(seed));
    let mut console = Console::stdio();

    match ntoe::run(&settings, &mut console, &mut computer) {
        Ok(summary) => {
            info!(games = summary.games(), "Goodbye");
            Ok(())
        }
        Err(e) if input_closed(&e) => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::UnexpectedEof)
}
