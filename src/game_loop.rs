//! The fixed-tick game loop and the state it owns.
//!
//! Each tick runs the same four steps in order: poll at most one input and
//! apply it, advance one generation unless paused, repaint the whole grid,
//! then sleep for the tick interval.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use crate::controller;
use crate::grid::Grid;
use crate::rules::{self, Outcome};
use crate::surface::{ColorPair, Surface};

const ALIVE_GLYPH: char = 'X';
const DEAD_GLYPH: char = ' ';

/// Shown over the top of the grid while the simulation is paused.
pub const PAUSED_BANNER: [&str; 8] = [
    r#"                                                     ,,"#,
    r#"`7MM"""Mq.                                         `7MM"#,
    r#"  MM   `MM.                                          MM"#,
    r#"  MM   ,M9 ,6"Yb.`7MM  `7MM  ,pP"Ybd  .gP"Ya    ,M""bMM"#,
    r#"  MMmmdM9 8)   MM  MM    MM  8I   `" ,M'   Yb ,AP    MM"#,
    r#"  MM       ,pm9MM  MM    MM  `YMMMa. 8M"""""" 8MI    MM"#,
    r#"  MM      8M   MM  MM    MM  L.   I8 YM.    , `Mb    MM"#,
    r#".JMML.    `Moo9^Yo.`Mbod"YML.M9mmmP'  `Mbmmd'  `Wbmd"MML."#,
];

/// Distance from the screen's center column to the banner's first column.
const BANNER_HALF_WIDTH: usize = 29;
const BANNER_COLORS: usize = 6;

/// Where the loop stands, derived from [`SimulationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    Terminated,
}

/// Run and pause flags, changed only by the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationState {
    /// Cleared once quit is requested; the loop ends after the current tick
    pub running: bool,
    /// Generation advance is suspended while set
    pub paused: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        SimulationState {
            running: true,
            paused: false,
        }
    }
}

impl SimulationState {
    /// Maps the two flags onto the loop's state machine; quit wins over pause.
    pub fn phase(&self) -> Phase {
        match (self.running, self.paused) {
            (false, _) => Phase::Terminated,
            (true, true) => Phase::Paused,
            (true, false) => Phase::Running,
        }
    }

    /// Switches between running and paused.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Requests termination at the end of the current tick.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Counters accumulated over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Generations advanced so far
    pub generation: u64,
    /// Cells born by the rules (manual toggles excluded)
    pub births: u64,
    /// Cells killed by the rules (manual toggles excluded)
    pub deaths: u64,
    /// Live cells as of the last tick
    pub population: u64,
}

impl Stats {
    fn record(&mut self, outcome: Outcome) {
        self.generation += 1;
        self.births += outcome.births;
        self.deaths += outcome.deaths;
    }
}

/// One interactive run: the grid, its state flags and the surface it is drawn on.
pub struct Session<S: Surface> {
    surface: S,
    grid: Grid,
    state: SimulationState,
    stats: Stats,
    tick_interval: Duration,
}

impl<S: Surface> Session<S> {
    /// Creates a session whose grid fills the surface as it measures right now.
    pub fn new(surface: S, tick_interval: Duration) -> Result<Self> {
        let (rows, cols) = surface.dimensions()?;
        let grid = Grid::new(rows, cols).context("failed to size grid to the terminal")?;
        Ok(Self::with_grid(surface, grid, tick_interval))
    }

    /// Creates a session over an existing grid.
    pub fn with_grid(surface: S, grid: Grid, tick_interval: Duration) -> Self {
        let stats = Stats {
            population: grid.population(),
            ..Stats::default()
        };
        Session {
            surface,
            grid,
            state: SimulationState::default(),
            stats,
            tick_interval,
        }
    }

    /// The grid being simulated.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid, e.g. for seeding before [`Session::run`].
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Current run and pause flags.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// The surface frames are drawn on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Runs ticks until quit is requested and returns the session's statistics.
    pub fn run(&mut self) -> Result<Stats> {
        self.stats.population = self.grid.population();
        info!(
            "session started on a {}x{} grid with {} live cells",
            self.grid.rows(),
            self.grid.cols(),
            self.stats.population
        );

        while self.tick()? != Phase::Terminated {}

        info!(
            "session ended after {} generations: {} births, {} deaths, {} alive",
            self.stats.generation, self.stats.births, self.stats.deaths, self.stats.population
        );
        Ok(self.stats)
    }

    /// Runs a single tick and returns the phase the loop is in afterwards.
    ///
    /// The frame is always rendered, including on the tick that handles quit.
    pub fn tick(&mut self) -> Result<Phase> {
        if let Some(input) = self.surface.poll_event()? {
            controller::handle_input(input, &mut self.state, &mut self.grid);
        }

        if self.state.phase() == Phase::Running {
            let outcome = rules::advance(&mut self.grid)?;
            self.stats.record(outcome);
        }
        self.stats.population = self.grid.population();

        self.render()?;

        let phase = self.state.phase();
        if phase != Phase::Terminated && !self.tick_interval.is_zero() {
            thread::sleep(self.tick_interval);
        }
        Ok(phase)
    }

    fn render(&mut self) -> Result<()> {
        for (row, col, alive) in self.grid.iter_cells() {
            if alive {
                self.surface.draw_cell(row, col, ALIVE_GLYPH, ColorPair::Alive);
            } else {
                self.surface.draw_cell(row, col, DEAD_GLYPH, ColorPair::Dead);
            }
        }

        if self.state.paused {
            self.draw_paused_banner();
        }

        self.surface.flush()
    }

    /// Draws [`PAUSED_BANNER`] centered along the top rows, one color per character.
    fn draw_paused_banner(&mut self) {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let left = (cols / 2).saturating_sub(BANNER_HALF_WIDTH);
        let mut buf = [0u8; 4];

        for (y, line) in PAUSED_BANNER.iter().enumerate().take(rows) {
            for (x, ch) in (left..cols).zip(line.chars()) {
                let color = ((x % BANNER_COLORS + y) % BANNER_COLORS) as u8;
                self.surface
                    .draw_overlay_text(y, x, ch.encode_utf8(&mut buf), ColorPair::Banner(color));
            }
        }
    }
}
