//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Full redraw per frame; the board is small enough that diffing would not
//! pay for itself here.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::game_view::{Frame, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Queue a full redraw of `frame` and flush it to stdout.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;

        let mut current_fg: Option<Rgb> = None;
        for y in 0..frame.height() {
            self.buf.queue(cursor::MoveTo(0, y))?;
            for x in 0..frame.width() {
                let cell = frame.get(x, y);
                if cell.fg != current_fg {
                    match cell.fg {
                        Some(rgb) => {
                            self.buf.queue(SetForegroundColor(Color::Rgb {
                                r: rgb.r,
                                g: rgb.g,
                                b: rgb.b,
                            }))?;
                        }
                        None => {
                            self.buf.queue(ResetColor)?;
                        }
                    }
                    current_fg = cell.fg;
                }
                self.buf.queue(Print(cell.ch))?;
            }
        }

        self.buf.queue(ResetColor)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
