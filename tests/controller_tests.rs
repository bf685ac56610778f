//! Interaction controller tests - key and click handling

use crossterm::event::KeyCode;
use term_life::controller::{handle_input, is_quit_key};
use term_life::{Grid, Input, Phase, SimulationState};

fn setup() -> (SimulationState, Grid) {
    (SimulationState::default(), Grid::new(4, 4).unwrap())
}

#[test]
fn test_initial_state_is_running() {
    let state = SimulationState::default();
    assert!(state.running);
    assert!(!state.paused);
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn test_quit_keys() {
    assert!(is_quit_key(KeyCode::Char('q')));
    assert!(is_quit_key(KeyCode::Char('Q')));
    assert!(!is_quit_key(KeyCode::Char(' ')));
    assert!(!is_quit_key(KeyCode::Esc));

    let (mut state, mut grid) = setup();
    handle_input(Input::Key(KeyCode::Char('q')), &mut state, &mut grid);
    assert!(!state.running);
    assert_eq!(state.phase(), Phase::Terminated);
}

#[test]
fn test_pause_key_flips_paused() {
    let (mut state, mut grid) = setup();

    handle_input(Input::Key(KeyCode::Char(' ')), &mut state, &mut grid);
    assert_eq!(state.phase(), Phase::Paused);

    handle_input(Input::Key(KeyCode::Char(' ')), &mut state, &mut grid);
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn test_quit_while_paused_terminates() {
    let (mut state, mut grid) = setup();
    handle_input(Input::Key(KeyCode::Char(' ')), &mut state, &mut grid);
    handle_input(Input::Interrupt, &mut state, &mut grid);
    assert!(state.paused);
    assert_eq!(state.phase(), Phase::Terminated);
}

#[test]
fn test_click_toggles_cell() {
    let (mut state, mut grid) = setup();

    handle_input(Input::PointerClick { row: 1, col: 3 }, &mut state, &mut grid);
    assert_eq!(grid.get(1, 3), Ok(true));

    handle_input(Input::PointerClick { row: 1, col: 3 }, &mut state, &mut grid);
    assert_eq!(grid.get(1, 3), Ok(false));
    assert_eq!(state, SimulationState::default());
}

#[test]
fn test_click_outside_grid_is_ignored() {
    let (mut state, mut grid) = setup();

    handle_input(Input::PointerClick { row: 4, col: 0 }, &mut state, &mut grid);
    handle_input(Input::PointerClick { row: 0, col: 40 }, &mut state, &mut grid);
    assert_eq!(grid.population(), 0);
    assert_eq!(state, SimulationState::default());
}

#[test]
fn test_unrecognized_keys_are_noops() {
    let (mut state, mut grid) = setup();

    for code in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Esc, KeyCode::Up] {
        handle_input(Input::Key(code), &mut state, &mut grid);
    }
    assert_eq!(state, SimulationState::default());
    assert_eq!(grid.population(), 0);
}
