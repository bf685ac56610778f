//! Turns decoded input into grid edits and run/pause/quit transitions.

use crossterm::event::KeyCode;
use log::{debug, info};

use crate::game_loop::SimulationState;
use crate::grid::Grid;
use crate::input::Input;

pub const PAUSE_KEY: KeyCode = KeyCode::Char(' ');

/// Keys that end the session.
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Applies one input to the simulation.
///
/// Clicks outside the grid and unrecognized keys are no-ops.
pub fn handle_input(input: Input, state: &mut SimulationState, grid: &mut Grid) {
    match input {
        Input::Key(code) if is_quit_key(code) => state.quit(),
        Input::Interrupt => state.quit(),
        Input::Key(code) if code == PAUSE_KEY => {
            state.toggle_pause();
            info!("simulation {}", if state.paused { "paused" } else { "resumed" });
        }
        Input::Key(_) => {}
        Input::PointerClick { row, col } => match grid.toggle(row, col) {
            Ok(alive) => debug!(
                "toggled ({row}, {col}) to {}",
                if alive { "alive" } else { "dead" }
            ),
            Err(err) => debug!("ignoring click: {err}"),
        },
    }
}
