use clap::ValueEnum;

/// Which part of the screen to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Canvas on top, controls below
    #[default]
    Full,
    /// Only the animated canvas
    Canvas,
    /// Only the dropdown row
    Controls,
}

/// Share of rows given to the canvas area in the full view, in percent.
const CANVAS_SHARE: u16 = 70;
const MIN_CONTROLS_ROWS: u16 = 3;

/// Canvas aspect ratio, width:height.
const ASPECT_W: f64 = 9.0;
const ASPECT_H: f64 = 16.0;

/// A rectangle of terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.width && row >= self.y && row < self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Light gray area surrounding the canvas
    pub canvas_area: Rect,
    /// Black 9:16 canvas; each row holds two pixels
    pub canvas: Rect,
    pub controls: Rect,
}

impl Layout {
    pub fn compute(term_width: u16, term_height: u16, view: View) -> Self {
        let (canvas_rows, controls_rows) = match view {
            View::Full => {
                let share = (term_height as u32 * CANVAS_SHARE as u32 / 100) as u16;
                let controls = (term_height - share)
                    .max(MIN_CONTROLS_ROWS)
                    .min(term_height);
                (term_height - controls, controls)
            }
            View::Canvas => (term_height, 0),
            View::Controls => (0, term_height),
        };

        let canvas_area = Rect {
            x: 0,
            y: 0,
            width: term_width,
            height: canvas_rows,
        };
        let controls = Rect {
            x: 0,
            y: canvas_rows,
            width: term_width,
            height: controls_rows,
        };

        Layout {
            canvas_area,
            canvas: fit_canvas(&canvas_area),
            controls,
        }
    }

    /// Canvas size in pixels
    pub fn canvas_pixels(&self) -> (usize, usize) {
        (
            self.canvas.width as usize,
            self.canvas.height as usize * 2,
        )
    }
}

/// Largest 9:16 rectangle (in half-cell pixels) centered in `area`
fn fit_canvas(area: &Rect) -> Rect {
    if area.is_empty() {
        return Rect {
            x: area.x,
            y: area.y,
            width: 0,
            height: 0,
        };
    }

    let cols_for_full_height = (area.height as f64 * 2.0 * ASPECT_W / ASPECT_H).round() as u16;
    let (width, height) = if cols_for_full_height <= area.width {
        (cols_for_full_height, area.height)
    } else {
        let rows = (area.width as f64 * ASPECT_H / ASPECT_W / 2.0).floor() as u16;
        (area.width, rows.min(area.height))
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_view_splits_seventy_thirty() {
        let layout = Layout::compute(120, 40, View::Full);
        assert_eq!(layout.canvas_area.height, 28);
        assert_eq!(layout.controls.y, 28);
        assert_eq!(layout.controls.height, 12);
    }

    #[test]
    fn controls_keep_a_minimum_height() {
        let layout = Layout::compute(80, 6, View::Full);
        assert_eq!(layout.controls.height, 3);
        assert_eq!(layout.canvas_area.height, 3);
    }

    #[test]
    fn canvas_is_tall_and_centered_in_a_wide_terminal() {
        let layout = Layout::compute(200, 40, View::Canvas);
        assert_eq!(layout.canvas.height, 40);
        assert_eq!(layout.canvas.width, 45);
        assert_eq!(layout.canvas.x, (200 - 45) / 2);
        assert_eq!(layout.canvas_pixels(), (45, 80));
    }

    #[test]
    fn canvas_is_width_bound_in_a_narrow_terminal() {
        let layout = Layout::compute(18, 60, View::Canvas);
        assert_eq!(layout.canvas.width, 18);
        assert_eq!(layout.canvas.height, 16);
        assert_eq!(layout.canvas.y, (60 - 16) / 2);
    }

    #[test]
    fn controls_view_has_no_canvas() {
        let layout = Layout::compute(80, 24, View::Controls);
        assert!(layout.canvas.is_empty());
        assert_eq!(layout.controls.height, 24);
        assert_eq!(layout.canvas_pixels().1, 0);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect {
            x: 2,
            y: 3,
            width: 4,
            height: 1,
        };
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 3));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 4));
    }
}
