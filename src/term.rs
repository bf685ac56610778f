//! Terminal-backed [`Surface`] built on crossterm and ratatui.
//!
//! Cells are drawn into an off-screen ratatui [`Buffer`]; [`Surface::flush`]
//! hands that buffer to the [`Terminal`], which writes only what changed
//! since the previous frame.

use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    Terminal,
};

use signal_hook::consts::TERM_SIGNALS;

use crate::input::{self, Input};
use crate::surface::{ColorPair, Surface};

/// Hangup is not in `TERM_SIGNALS` but also ends the session.
#[cfg(unix)]
const EXTRA_SIGNALS: &[i32] = &[signal_hook::consts::SIGHUP];
#[cfg(not(unix))]
const EXTRA_SIGNALS: &[i32] = &[];

/// Banner colors, in the order [`ColorPair::Banner`] indexes them.
const BANNER_PALETTE: [Color; 6] = [
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::Red,
];

fn style_for(color: ColorPair) -> Style {
    match color {
        ColorPair::Alive => Style::default().fg(Color::Green).bg(Color::Green),
        ColorPair::Dead => Style::default().fg(Color::White).bg(Color::Black),
        ColorPair::Banner(idx) => Style::default()
            .fg(BANNER_PALETTE[usize::from(idx) % BANNER_PALETTE.len()])
            .bg(Color::Black),
    }
}

/// Puts the terminal back into cooked mode on the main screen.
///
/// Every step is attempted even if an earlier one fails.
pub fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    )
    .context("failed to leave alternate screen");
    raw.and(screen)
}

/// Restores the terminal before the default panic message is printed, so a
/// panic inside the loop does not leave the shell in raw mode.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Off-screen cell buffer the game draws into between flushes.
///
/// Grid coordinates map one to one onto buffer coordinates; anything drawn
/// outside the buffer is dropped.
pub struct FrameCanvas {
    buffer: Buffer,
}

impl FrameCanvas {
    /// Creates a blank canvas covering `area`.
    pub fn new(area: Rect) -> Self {
        FrameCanvas {
            buffer: Buffer::empty(area),
        }
    }

    /// The region this canvas covers.
    pub fn area(&self) -> Rect {
        self.buffer.area
    }

    fn position(&self, row: usize, col: usize) -> Option<(u16, u16)> {
        let x = u16::try_from(col).ok()?;
        let y = u16::try_from(row).ok()?;
        let area = self.buffer.area;
        let inside = x >= area.left() && x < area.right() && y >= area.top() && y < area.bottom();
        inside.then_some((x, y))
    }

    /// Sets one cell's glyph and colors.
    pub fn draw_cell(&mut self, row: usize, col: usize, glyph: char, color: ColorPair) {
        if let Some((x, y)) = self.position(row, col) {
            self.buffer
                .get_mut(x, y)
                .set_char(glyph)
                .set_style(style_for(color));
        }
    }

    /// Writes `text` starting at `(row, col)`, cut off at the right edge.
    pub fn draw_text(&mut self, row: usize, col: usize, text: &str, color: ColorPair) {
        if let Some((x, y)) = self.position(row, col) {
            self.buffer.set_string(x, y, text, style_for(color));
        }
    }

    /// Copies the overlap of this canvas and `target` into `target`.
    pub fn copy_into(&self, target: &mut Buffer) {
        let area = target.area.intersection(self.buffer.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                *target.get_mut(x, y) = self.buffer.get(x, y).clone();
            }
        }
    }
}

/// Turns a raised termination flag into the same input as Ctrl-C.
fn signalled_input(terminate: &AtomicBool) -> Option<Input> {
    terminate.load(Ordering::Relaxed).then_some(Input::Interrupt)
}

/// A raw-mode, alternate-screen terminal session with mouse capture.
///
/// The terminal is restored when the value is dropped, whichever way the
/// caller leaves its scope. SIGTERM, SIGINT, SIGQUIT and SIGHUP are turned
/// into [`Input::Interrupt`] on the next poll, so the loop ends normally and
/// the drop runs.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    canvas: FrameCanvas,
    terminate: Arc<AtomicBool>,
}

impl TerminalSurface {
    /// Registers the termination signals, then switches the terminal into
    /// raw mode on the alternate screen and sizes the canvas to it.
    pub fn enter() -> Result<Self> {
        let terminate = Arc::new(AtomicBool::new(false));
        for &signal in TERM_SIGNALS.iter().chain(EXTRA_SIGNALS) {
            signal_hook::flag::register(signal, Arc::clone(&terminate))
                .with_context(|| format!("failed to register handler for signal {signal}"))?;
        }

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide) {
            let _ = restore_terminal();
            return Err(err).context("failed to enter alternate screen");
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = restore_terminal();
                return Err(err).context("failed to build terminal backend");
            }
        };
        let mut surface = TerminalSurface {
            terminal,
            canvas: FrameCanvas::new(Rect::default()),
            terminate,
        };
        let area = surface
            .terminal
            .size()
            .context("failed to query terminal size")?;
        surface.canvas = FrameCanvas::new(area);
        Ok(surface)
    }
}

impl Surface for TerminalSurface {
    fn dimensions(&self) -> Result<(usize, usize)> {
        let area = self.canvas.area();
        Ok((usize::from(area.height), usize::from(area.width)))
    }

    fn poll_event(&mut self) -> Result<Option<Input>> {
        if let Some(input) = signalled_input(&self.terminate) {
            return Ok(Some(input));
        }
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        Ok(input::decode(event::read()?))
    }

    fn draw_cell(&mut self, row: usize, col: usize, glyph: char, color: ColorPair) {
        self.canvas.draw_cell(row, col, glyph, color);
    }

    fn draw_overlay_text(&mut self, row: usize, col: usize, text: &str, color: ColorPair) {
        self.canvas.draw_text(row, col, text, color);
    }

    fn flush(&mut self) -> Result<()> {
        let canvas = &self.canvas;
        self.terminal.draw(|f| canvas.copy_into(f.buffer_mut()))?;
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            error!("failed to restore terminal: {err:#}");
        }
    }
}
