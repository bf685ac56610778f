//! The drawing and input boundary the game loop talks to.

use anyhow::Result;

use crate::input::Input;

/// Colors available to the game, resolved to concrete styles by each surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPair {
    /// Live cell: green on green
    Alive,
    /// Dead cell: white on black
    Dead,
    /// One of the six pause-banner colors, indexed `0..6`:
    /// yellow, green, cyan, blue, magenta, red
    Banner(u8),
}

/// A character-cell display plus the input source attached to it.
pub trait Surface {
    /// Visible size as `(rows, cols)`.
    fn dimensions(&self) -> Result<(usize, usize)>;

    /// Returns the next pending input without waiting, if there is one.
    fn poll_event(&mut self) -> Result<Option<Input>>;

    /// Draws one grid cell.
    fn draw_cell(&mut self, row: usize, col: usize, glyph: char, color: ColorPair);

    /// Draws text over the grid, starting at `(row, col)`.
    fn draw_overlay_text(&mut self, row: usize, col: usize, text: &str, color: ColorPair);

    /// Presents everything drawn since the last flush.
    fn flush(&mut self) -> Result<()>;
}
