//! Terminal Game of Life runner.
//!
//! # Controls
//!
//! * Mouse click: toggle the clicked cell
//! * Space: pause/resume the simulation
//! * q or Ctrl-C: quit

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use term_life::config::Config;
use term_life::term::{self, TerminalSurface};
use term_life::Session;

fn init_logging(config: &Config) -> Result<()> {
    // Logging to stderr would draw over the raw-mode screen.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    term::install_panic_hook();

    let surface = TerminalSurface::enter()?;
    let mut session = Session::new(surface, config.tick_interval())?;

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    session.grid_mut().seed_random(config.seed_count(), &mut rng);
    info!("seeded {} random picks", config.seed_cells);

    // Dropping the session restores the terminal.
    let stats = session.run()?;
    drop(session);

    println!(
        "{} generations, {} births, {} deaths, {} cells alive",
        stats.generation, stats.births, stats.deaths, stats.population
    );
    Ok(())
}
