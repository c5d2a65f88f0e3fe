use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use termsweep_core::SessionSnapshot;

use crate::input::{Input, classify_event};
use crate::render::{board_lines, board_origin, cursor_position, glyph};

/// Raw-mode alternate screen, restored when dropped.
pub(crate) struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub(crate) fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Could not enable raw mode")?;
        // from here on, dropping the guard undoes raw mode
        let mut terminal = Self { out: io::stdout() };
        execute!(terminal.out, EnterAlternateScreen, Hide)
            .context("Could not set up the screen")?;
        Ok(terminal)
    }

    pub(crate) fn draw(&mut self, snapshot: &SessionSnapshot, status: &str) -> Result<()> {
        let screen = terminal::size().context("Could not read terminal size")?;
        let origin = board_origin(screen, snapshot.size());

        queue!(
            self.out,
            Clear(ClearType::All),
            SetForegroundColor(Color::Green),
            SetBackgroundColor(Color::Black)
        )?;

        let lines = board_lines(snapshot);
        for (row, line) in (0u16..).zip(&lines) {
            queue!(self.out, MoveTo(origin.0, origin.1 + row), Print(line))?;
        }

        // highlight cursor
        let (x, y) = cursor_position(origin, snapshot.cursor);
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(Color::Black),
            SetBackgroundColor(Color::Green),
            Print(glyph(snapshot.cell_at(snapshot.cursor))),
            SetForegroundColor(Color::Green),
            SetBackgroundColor(Color::Black),
        )?;

        let status_x = (screen.0 / 2).saturating_sub(status.chars().count() as u16 / 2);
        let status_y = origin.1 + lines.len() as u16 + 1;
        queue!(self.out, MoveTo(status_x, status_y), Print(status), ResetColor)?;

        self.out.flush().context("Could not draw the board")
    }

    /// Blocks until the next key press or resize.
    pub(crate) fn next_input(&mut self) -> Result<Input> {
        loop {
            let event = event::read().context("Could not read terminal event")?;
            if let Some(input) = classify_event(event) {
                return Ok(input);
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, ResetColor, Show, LeaveAlternateScreen) {
            log::error!("Could not restore the screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Could not disable raw mode: {}", err);
        }
    }
}
