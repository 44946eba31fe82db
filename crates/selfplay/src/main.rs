//! Self-play CLI
//!
//! Plays random games through the rules engine and reports how they ended.

use random_player::RandomPlayer;
use selfplay::{GameRunner, SelfPlayConfig};
use std::env;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--games N] [--max-plies N] [--seed N] [--output FILE] [--quiet]");
    println!();
    println!("Options:");
    println!("  --config FILE     TOML file with the same keys; flags override it");
    println!("  -g, --games N     Number of games (default 10)");
    println!("  -p, --max-plies N Plies before a game is recorded as unfinished (default 400)");
    println!("  -s, --seed N      Seed both players for a reproducible run");
    println!("  -o, --output FILE Write game records as JSON");
    println!("  -q, --quiet       Log finished games at debug level only");
    println!();
    println!("Logging follows RUST_LOG, e.g. RUST_LOG=chess_core=debug.");
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let config = match SelfPlayConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let (mut white, mut black) = match config.seed {
        Some(seed) => (
            RandomPlayer::seeded(seed),
            RandomPlayer::seeded(seed.wrapping_add(1)),
        ),
        None => (RandomPlayer::new(), RandomPlayer::new()),
    };

    info!(games = config.games, max_plies = config.max_plies, seed = ?config.seed, "starting self-play");
    let runner = GameRunner::new(config);
    let results = runner.run(&mut white, &mut black);

    println!();
    println!("{}", results.summary.report());

    if let Some(path) = &runner.config().output {
        if let Err(e) = results.save(path) {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), "results written");
    }

    ExitCode::SUCCESS
}
