//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Roughly 100 ticks per second.
pub const DEFAULT_TICK_MS: u64 = 10;

/// Upper bound on `--seed-cells`. Seeding runs before the loop polls input,
/// so it has to finish quickly.
pub const MAX_SEED_CELLS: u64 = 1_000_000;

/// Conway's Game of Life in the terminal.
///
/// Click cells to toggle them, press space to pause and resume, q to quit.
#[derive(Debug, Clone, Parser)]
#[command(name = "term-life", version, about)]
pub struct Config {
    /// Milliseconds to sleep at the end of every tick.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub tick_ms: u64,
    /// Number of random cells to bring to life at startup. Picks may repeat.
    #[arg(
        long = "seed-cells",
        value_name = "COUNT",
        default_value_t = 0,
        value_parser = clap::value_parser!(u64).range(0..=MAX_SEED_CELLS)
    )]
    pub seed_cells: u64,
    /// Seed for the random starting pattern; drawn from entropy when omitted.
    #[arg(long = "rng-seed", value_name = "SEED")]
    pub rng_seed: Option<u64>,
    /// Write logs to this file. Filtered by RUST_LOG, `info` by default.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Number of random picks to make at startup.
    pub fn seed_count(&self) -> usize {
        usize::try_from(self.seed_cells).unwrap_or(usize::MAX)
    }
}
