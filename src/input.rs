//! Decoding of raw terminal events into [`Input`].

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// A user input the game reacts to, decoded once at the terminal boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key press
    Key(KeyCode),
    /// A mouse button press on the terminal cell at `(row, col)`
    PointerClick { row: usize, col: usize },
    /// Ctrl-C, which raw mode delivers as a key instead of a signal
    Interrupt,
}

/// Maps a crossterm event to an [`Input`], or `None` for events the game ignores.
pub fn decode(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(Input::PointerClick {
                row: usize::from(mouse.row),
                col: usize::from(mouse.column),
            }),
            _ => None,
        },
        _ => None,
    }
}

fn decode_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Input::Interrupt);
    }
    Some(Input::Key(key.code))
}
