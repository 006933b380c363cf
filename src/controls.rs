//! The row of three dropdowns below the canvas.

use crossterm::event::{KeyCode, KeyEvent};

use crate::color::Color;
use crate::layout::Rect;
use crate::screen::{Screen, TextStyle};
use crate::selection::{CircleColor, CircleSize, Selection, Target};

const BUTTON_BG: Color = Color::rgb8(0x67, 0x50, 0xA4);
const BUTTON_FOCUS_BG: Color = Color::rgb8(0x8E, 0x7C, 0xC3);
const MENU_BG: Color = Color::rgb8(0xF3, 0xED, 0xF7);
const AREA_BG: Color = Color::BLACK;
/// Blank columns between buttons
const BUTTON_GAP: u16 = 2;

const DROPDOWNS: [Dropdown; 3] = [Dropdown::Circle, Dropdown::Color, Dropdown::Size];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Circle,
    Color,
    Size,
}

impl Dropdown {
    fn options(self) -> Vec<&'static str> {
        match self {
            Dropdown::Circle => Target::ALL.iter().map(|t| t.label()).collect(),
            Dropdown::Color => CircleColor::ALL.iter().map(|c| c.label()).collect(),
            Dropdown::Size => CircleSize::ALL.iter().map(|s| s.label()).collect(),
        }
    }
}

/// What a control interaction asks of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Not for us; the host may handle it
    Ignored,
    Redraw,
    /// A dropdown value was picked; carries the whole new selection
    Selected(Selection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenMenu {
    dropdown: usize,
    highlight: usize,
}

pub struct Controls {
    target: Target,
    color: CircleColor,
    size: CircleSize,
    focus: usize,
    open: Option<OpenMenu>,
}

impl Controls {
    pub fn new(selection: Selection) -> Self {
        Controls {
            target: selection.target,
            color: selection.color,
            size: selection.size,
            focus: 0,
            open: None,
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            target: self.target,
            color: self.color,
            size: self.size,
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn button_label(&self, dropdown: Dropdown) -> String {
        match dropdown {
            Dropdown::Circle => self.target.label().to_string(),
            Dropdown::Color => self.color.label().to_string(),
            Dropdown::Size => format!("Size: {}", self.size.label()),
        }
    }

    fn current_index(&self, dropdown: Dropdown) -> usize {
        match dropdown {
            Dropdown::Circle => Target::ALL.iter().position(|&t| t == self.target),
            Dropdown::Color => CircleColor::ALL.iter().position(|&c| c == self.color),
            Dropdown::Size => CircleSize::ALL.iter().position(|&s| s == self.size),
        }
        .unwrap_or(0)
    }

    fn open_menu(&mut self, index: usize) {
        self.focus = index;
        self.open = Some(OpenMenu {
            dropdown: index,
            highlight: self.current_index(DROPDOWNS[index]),
        });
    }

    fn choose(&mut self, index: usize, option: usize) -> ControlEvent {
        match DROPDOWNS[index] {
            Dropdown::Circle => self.target = Target::ALL[option],
            Dropdown::Color => self.color = CircleColor::ALL[option],
            Dropdown::Size => self.size = CircleSize::ALL[option],
        }
        self.open = None;
        ControlEvent::Selected(self.selection())
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> ControlEvent {
        if let Some(menu) = self.open {
            let count = DROPDOWNS[menu.dropdown].options().len();
            return match key.code {
                KeyCode::Up => {
                    self.open = Some(OpenMenu {
                        highlight: (menu.highlight + count - 1) % count,
                        ..menu
                    });
                    ControlEvent::Redraw
                }
                KeyCode::Down => {
                    self.open = Some(OpenMenu {
                        highlight: (menu.highlight + 1) % count,
                        ..menu
                    });
                    ControlEvent::Redraw
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.choose(menu.dropdown, menu.highlight),
                KeyCode::Esc => {
                    self.open = None;
                    ControlEvent::Redraw
                }
                _ => ControlEvent::Ignored,
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.focus = (self.focus + DROPDOWNS.len() - 1) % DROPDOWNS.len();
                ControlEvent::Redraw
            }
            KeyCode::Right | KeyCode::Tab => {
                self.focus = (self.focus + 1) % DROPDOWNS.len();
                ControlEvent::Redraw
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                self.open_menu(self.focus);
                ControlEvent::Redraw
            }
            _ => ControlEvent::Ignored,
        }
    }

    /// Handles a left click at (col, row) given the controls area
    pub fn handle_click(&mut self, col: u16, row: u16, area: &Rect) -> ControlEvent {
        if let Some(menu) = self.open {
            let rect = self.menu_rect(area, menu.dropdown);
            if rect.contains(col, row) {
                return self.choose(menu.dropdown, (row - rect.y) as usize);
            }
            // Clicking outside an open menu only dismisses it.
            self.open = None;
            return ControlEvent::Redraw;
        }

        for (i, rect) in self.button_rects(area).iter().enumerate() {
            if rect.contains(col, row) {
                self.open_menu(i);
                return ControlEvent::Redraw;
            }
        }
        ControlEvent::Ignored
    }

    fn button_rects(&self, area: &Rect) -> [Rect; 3] {
        let widths = DROPDOWNS.map(|d| self.button_label(d).chars().count() as u16 + 2);
        let total = widths.iter().sum::<u16>() + BUTTON_GAP * (widths.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let y = area.y + area.height / 2;

        let mut rects = [Rect::default(); 3];
        for (rect, width) in rects.iter_mut().zip(widths) {
            *rect = Rect {
                x,
                y,
                width,
                height: 1,
            };
            x = x.saturating_add(width + BUTTON_GAP);
        }
        rects
    }

    /// Rows below the button when they fit, otherwise above it
    fn menu_rect(&self, area: &Rect, index: usize) -> Rect {
        let button = self.button_rects(area)[index];
        let options = DROPDOWNS[index].options();
        let height = options.len() as u16;
        let width = options.iter().map(|o| o.chars().count() as u16).max().unwrap_or(0) + 4;

        let below = button.y + 1;
        let y = if below + height <= area.y + area.height || button.y < height {
            below
        } else {
            button.y - height
        };
        Rect {
            x: button.x,
            y,
            width,
            height,
        }
    }

    pub fn render(&self, screen: &mut Screen, area: &Rect) {
        if area.is_empty() {
            return;
        }
        screen.fill(area, AREA_BG);

        for (i, rect) in self.button_rects(area).iter().enumerate() {
            let bg = if i == self.focus {
                BUTTON_FOCUS_BG
            } else {
                BUTTON_BG
            };
            let mut text_style = TextStyle::new(Color::WHITE, bg);
            if i == self.focus {
                text_style = text_style.bold();
            }
            let label = format!(" {} ", self.button_label(DROPDOWNS[i]));
            screen.put_str(rect.x, rect.y, &label, text_style);
        }

        if let Some(menu) = self.open {
            let rect = self.menu_rect(area, menu.dropdown);
            for (i, option) in DROPDOWNS[menu.dropdown].options().iter().enumerate() {
                let mut text_style = TextStyle::new(Color::BLACK, MENU_BG);
                if i == menu.highlight {
                    text_style = text_style.reverse();
                }
                let line = format!("  {:<width$}", option, width = rect.width as usize - 2);
                screen.put_str(rect.x, rect.y + i as u16, &line, text_style);
            }
        }
    }
}
