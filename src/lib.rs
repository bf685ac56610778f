//! # Game of Life
//!
//! An interactive, terminal-based implementation of Conway's Game of Life
//! using `crossterm` for input and terminal control and `ratatui` for drawing.
//!
//! ## Features
//!
//! * Double-buffered generation advance under the standard B3/S23 rule
//! * Hard grid edges (no wraparound), sized to the terminal at startup
//! * Mouse clicks toggle cells, space pauses and resumes, q quits
//! * Rainbow "Paused" banner while the simulation is suspended

pub mod config;
pub mod controller;
pub mod game_loop;
pub mod grid;
pub mod input;
pub mod rules;
pub mod surface;
pub mod term;

pub use game_loop::{Phase, Session, SimulationState, Stats};
pub use grid::{Grid, GridError};
pub use input::Input;
pub use surface::{ColorPair, Surface};
