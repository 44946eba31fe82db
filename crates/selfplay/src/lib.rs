//! Self-play runner for the rules engine
//!
//! This crate provides infrastructure for:
//! - Playing complete games between two [`chess_core::Player`]s
//! - Tallying checkmates and draws by reason
//! - Writing game records to JSON for later inspection
//!
//! # Usage
//!
//! ```bash
//! # Fifty random games with a fixed seed, records written to disk
//! cargo run -p selfplay -- --games 50 --seed 7 --output games.json
//!
//! # Settings from a file, with a command-line override
//! cargo run -p selfplay -- --config selfplay.toml --max-plies 400
//! ```

mod config;
mod record;
mod runner;

pub use config::*;
pub use record::*;
pub use runner::*;
