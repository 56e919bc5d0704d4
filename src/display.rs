//! Rendering layer: all terminal I/O lives here.
//!
//! `TerminalSurface` rasterises field-pixel primitives onto the terminal's
//! character grid.  No game logic is performed; it only translates shapes
//! into terminal commands.  The last terminal row is reserved for the
//! controls hint.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

use alien_wave::entities::Rect;
use alien_wave::render::{Sprite, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_ALIEN: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "← → : Move  SPACE : Fire  A D W : Buttons  R : Restart  Q : Quit";

/// Text at or above this nominal size is drawn bold.
const LARGE_TEXT: u16 = 40;

pub struct TerminalSurface<W: Write> {
    out: W,
    field_width: i32,
    field_height: i32,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, field_width: i32, field_height: i32) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            field_width,
            field_height,
            cols,
            rows,
        })
    }

    /// Rows available to the field (everything above the hint line).
    fn play_rows(&self) -> i32 {
        (self.rows as i32 - 1).max(1)
    }

    fn to_col(&self, x: i32) -> i32 {
        x * self.cols as i32 / self.field_width
    }

    fn to_row(&self, y: i32) -> i32 {
        y * self.play_rows() / self.field_height
    }

    /// Cell-space rectangle covering `rect`; never narrower than one cell.
    fn to_cells(&self, rect: Rect) -> (i32, i32, usize, usize) {
        let c0 = self.to_col(rect.x);
        let r0 = self.to_row(rect.y);
        let w = (self.to_col(rect.right()) - c0).max(1) as usize;
        let h = (self.to_row(rect.bottom()) - r0).max(1) as usize;
        (c0, r0, w, h)
    }

    /// Print `text` at a cell, dropping whatever falls outside the play area.
    fn put(&mut self, col: i32, row: i32, text: &str) -> std::io::Result<()> {
        if row < 0 || row >= self.play_rows() {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let start = col.max(0);
        let room = (self.cols as i32 - start).max(0) as usize;
        let visible: String = text.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(start as u16, row as u16))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    /// Draw the controls hint on the reserved row and flush the frame.
    pub fn flush_frame(&mut self) -> std::io::Result<()> {
        let last = self.rows.saturating_sub(1);
        self.out.queue(cursor::MoveTo(0, last))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        let hint: String = HINT.chars().take(self.cols as usize).collect();
        self.out.queue(Print(hint))?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, last))?;
        self.out.flush()
    }
}

// ── Sprite art ────────────────────────────────────────────────────────────────

fn ship_art(w: usize, h: usize) -> Vec<String> {
    (0..h)
        .map(|r| {
            if r == 0 && h > 1 {
                format!("{:^w$}", "▲", w = w)
            } else if w >= 3 {
                format!("/{}\\", "█".repeat(w - 2))
            } else {
                "█".repeat(w)
            }
        })
        .collect()
}

fn alien_art(w: usize, h: usize) -> Vec<String> {
    (0..h)
        .map(|r| {
            if w < 3 {
                "▼".repeat(w)
            } else if r % 2 == 0 {
                format!("<{}>", "▼".repeat(w - 2))
            } else {
                format!("[{}]", "_".repeat(w - 2))
            }
        })
        .collect()
}

// ── Surface ───────────────────────────────────────────────────────────────────

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        // Pick up terminal resizes between frames.
        if let Ok((cols, rows)) = terminal::size() {
            self.cols = cols;
            self.rows = rows;
        }
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> std::io::Result<()> {
        let (col, row, w, h) = self.to_cells(rect);
        self.out.queue(style::SetForegroundColor(color))?;
        let line = "█".repeat(w);
        for dy in 0..h as i32 {
            self.put(col, row + dy, &line)?;
        }
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) -> std::io::Result<()> {
        let (col, row, w, h) = self.to_cells(rect);
        let (color, art) = match sprite {
            Sprite::Ship => (C_PLAYER, ship_art(w, h)),
            Sprite::Alien => (C_ALIEN, alien_art(w, h)),
        };
        self.out.queue(style::SetForegroundColor(color))?;
        for (dy, line) in art.iter().enumerate() {
            self.put(col, row + dy as i32, line)?;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        size: u16,
        color: Color,
    ) -> std::io::Result<()> {
        let col = self.to_col(x);
        // y is a baseline; the glyphs sit on the row just above it.
        let row = (self.to_row(y) - 1).max(0);
        self.out.queue(style::SetForegroundColor(color))?;
        if size >= LARGE_TEXT {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        self.put(col, row, text)?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}
