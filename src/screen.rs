//! Off-screen cell grid.
//!
//! Each frame is composed into the grid first; `flush` then writes only the
//! cells that differ from what the terminal already shows.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, queue, style};

use crate::color::Color;
use crate::graphics::Canvas;
use crate::layout::Rect;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '\u{2580}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub reverse: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
            bold: false,
            reverse: false,
        }
    }
}

/// Text attributes for `Screen::put_str`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub fn new(fg: Color, bg: Color) -> Self {
        TextStyle {
            fg,
            bg,
            bold: false,
            reverse: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }
}

pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    /// What the terminal currently shows; `None` forces a full repaint
    flushed: Option<Vec<Cell>>,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Screen {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
            flushed: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); width as usize * height as usize];
        self.flushed = None;
    }

    /// Forgets what the terminal shows so the next flush repaints everything
    pub fn invalidate(&mut self) {
        self.flushed = None;
    }

    #[cfg(test)]
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            self.cells
                .get_mut(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Fills `rect` with blanks on `bg`
    pub fn fill(&mut self, rect: &Rect, bg: Color) {
        for y in rect.y..rect.y.saturating_add(rect.height) {
            for x in rect.x..rect.x.saturating_add(rect.width) {
                if let Some(cell) = self.cell_mut(x, y) {
                    *cell = Cell {
                        bg,
                        ..Cell::default()
                    };
                }
            }
        }
    }

    /// Writes `text` starting at (x, y), clipped at the right edge.
    /// Returns the number of cells written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, text_style: TextStyle) -> u16 {
        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let Some(cell) = self.cell_mut(x.saturating_add(i as u16), y) else {
                break;
            };
            *cell = Cell {
                ch,
                fg: text_style.fg,
                bg: text_style.bg,
                bold: text_style.bold,
                reverse: text_style.reverse,
            };
            written += 1;
        }
        written
    }

    /// Copies a pixel canvas into `rect`, two pixels per cell
    pub fn blit(&mut self, canvas: &Canvas, rect: &Rect) {
        for row in 0..rect.height {
            for col in 0..rect.width {
                let px = col as usize;
                let py = row as usize * 2;
                let top = canvas.pixel(px, py).unwrap_or(Color::BLACK);
                let bottom = canvas.pixel(px, py + 1).unwrap_or(Color::BLACK);
                if let Some(cell) = self.cell_mut(rect.x + col, rect.y + row) {
                    *cell = Cell {
                        ch: HALF_BLOCK,
                        fg: top,
                        bg: bottom,
                        bold: false,
                        reverse: false,
                    };
                }
            }
        }
    }

    /// Writes changed cells to `out`. Returns how many cells were emitted.
    pub fn flush<W: Write>(&mut self, out: &mut W) -> Result<usize> {
        let mut emitted = 0;
        let mut last: Option<(u16, u16)> = None;

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y as usize * self.width as usize + x as usize;
                let cell = self.cells[idx];
                if let Some(prev) = &self.flushed {
                    if prev[idx] == cell {
                        continue;
                    }
                }

                // Skip the cursor move when we are already in place.
                if last != Some((x.wrapping_sub(1), y)) || x == 0 {
                    queue!(out, cursor::MoveTo(x, y))?;
                }
                queue!(
                    out,
                    style::SetAttribute(style::Attribute::Reset),
                    style::SetColors(style::Colors::new(cell.fg.into(), cell.bg.into())),
                )?;
                if cell.bold {
                    queue!(out, style::SetAttribute(style::Attribute::Bold))?;
                }
                if cell.reverse {
                    queue!(out, style::SetAttribute(style::Attribute::Reverse))?;
                }
                queue!(out, style::Print(cell.ch))?;

                last = Some((x, y));
                emitted += 1;
            }
        }

        queue!(out, style::SetAttribute(style::Attribute::Reset))?;
        out.flush()?;
        self.flushed = Some(self.cells.clone());
        Ok(emitted)
    }
}
