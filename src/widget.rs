use std::sync::mpsc::Receiver;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::clock::{Ticker, TICK_INTERVAL};
use crate::color::Color;
use crate::controls::{ControlEvent, Controls};
use crate::graphics::Canvas;
use crate::layout::Layout;
use crate::renderer::{describe_frame, draw_frame, Viewport};
use crate::screen::{Screen, TextStyle};
use crate::selection::Selection;
use crate::state::AppState;

/// What the host loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Animated orbits widget with its dropdown row
pub struct OrbitWidget {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
    layout: Layout,
    canvas: Canvas,
    screen: Screen,
    controls: Controls,
    ticker: Ticker,
    /// Selection changes published by the app state
    updates: Receiver<Selection>,
    needs_paint: bool,
}

impl OrbitWidget {
    pub fn new(data: &mut AppState, width: u16, height: u16) -> Self {
        let layout = Layout::compute(width, height, data.view);
        let (cw, ch) = layout.canvas_pixels();
        OrbitWidget {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
            layout,
            canvas: Canvas::new(cw, ch, Color::BLACK),
            screen: Screen::new(width, height),
            controls: Controls::new(data.selection.get()),
            ticker: Ticker::new(TICK_INTERVAL),
            updates: data.selection.subscribe(),
            needs_paint: true,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Starts the animation unless the user paused it
    pub fn activate(&mut self, now: Instant, data: &AppState) {
        if !data.paused {
            self.ticker.start(now);
        }
    }

    pub fn deactivate(&mut self) {
        self.ticker.stop();
    }

    /// Advances the clock if a tick is due
    pub fn tick(&mut self, now: Instant, data: &mut AppState) {
        if self.ticker.fire(now) {
            data.clock.tick();
            self.needs_paint = true;
        }
    }

    /// Drains pending selection notifications
    pub fn sync_selection(&mut self) {
        while self.updates.try_recv().is_ok() {
            self.needs_paint = true;
        }
    }

    pub fn needs_paint(&self) -> bool {
        self.needs_paint
    }

    /// Handle events for the widget
    pub fn event(&mut self, event: &Event, data: &mut AppState) -> Action {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.key(key, data),
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && !self.layout.controls.is_empty()
                {
                    let area = self.layout.controls;
                    let result = self.controls.handle_click(mouse.column, mouse.row, &area);
                    self.apply(result, data);
                }
                Action::Continue
            }
            Event::Resize(width, height) => {
                self.resize(*width, *height, data);
                Action::Continue
            }
            Event::FocusLost => {
                self.deactivate();
                Action::Continue
            }
            Event::FocusGained => {
                self.activate(Instant::now(), data);
                self.screen.invalidate();
                self.needs_paint = true;
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    fn key(&mut self, key: &KeyEvent, data: &mut AppState) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if !self.layout.controls.is_empty() {
            let result = self.controls.handle_key(key);
            if result != ControlEvent::Ignored {
                self.apply(result, data);
                return Action::Continue;
            }
        }

        match key.code {
            KeyCode::Char('d') | KeyCode::Char('D') => {
                data.debug = !data.debug;
                self.needs_paint = true;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                data.paused = !data.paused;
                if data.paused {
                    self.deactivate();
                } else {
                    self.activate(Instant::now(), data);
                }
                log::info!("paused={}", data.paused);
                self.needs_paint = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Action::Quit,
            _ => {}
        }
        Action::Continue
    }

    fn apply(&mut self, result: ControlEvent, data: &mut AppState) {
        match result {
            ControlEvent::Ignored => {}
            ControlEvent::Redraw => self.needs_paint = true,
            ControlEvent::Selected(selection) => {
                // Real changes repaint through the subscription; an
                // unchanged pick still has to redraw the closed menu.
                if !data.selection.set_selection(selection) {
                    self.needs_paint = true;
                }
            }
        }
    }

    pub fn resize(&mut self, width: u16, height: u16, data: &AppState) {
        self.layout = Layout::compute(width, height, data.view);
        self.screen.resize(width, height);
        let (cw, ch) = self.layout.canvas_pixels();
        self.canvas.resize(cw, ch, Color::BLACK);
        log::debug!(
            "resized to {}x{}, canvas {}x{} px",
            self.screen.width(),
            self.screen.height(),
            self.canvas.width(),
            self.canvas.height()
        );
        self.needs_paint = true;
    }

    /// Composes the current frame into the off-screen grid
    pub fn paint(&mut self, data: &AppState) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let (width, height) = self.layout.canvas_pixels();
        let viewport = Viewport {
            width: width as f64,
            height: height as f64,
            density: data.density_for(height),
        };

        self.screen.fill(&self.layout.canvas_area, Color::LIGHT_GRAY);
        self.canvas.clear(Color::BLACK);
        let circles = describe_frame(
            data.clock.fast,
            data.clock.slow,
            &data.selection.get(),
            &viewport,
        );
        draw_frame(&circles, &mut self.canvas);
        self.screen.blit(&self.canvas, &self.layout.canvas);

        self.controls.render(&mut self.screen, &self.layout.controls);

        if data.debug {
            let lines = [
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                format!("Fast: {:.4}, Slow: {:.4}", data.clock.fast, data.clock.slow),
                format!("Selection: {}", data.selection.get()),
                format!("Density: {:.3}", viewport.density),
                format!("FPS: {:.2}", self.fps),
            ];
            let text_style = TextStyle::new(Color::WHITE, Color::DARK_GRAY);
            for (i, line) in lines.iter().enumerate() {
                self.screen.put_str(1, i as u16, line, text_style);
            }
        }

        // Display 'Paused' if the animation is paused
        if data.paused {
            let text = " Paused ";
            // Without a canvas the banner takes the top row, clear of the buttons.
            let (area, y) = if self.layout.canvas_area.is_empty() {
                (self.layout.controls, self.layout.controls.y)
            } else {
                let area = self.layout.canvas_area;
                (area, area.y + area.height / 2)
            };
            let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
            let text_style = TextStyle::new(Color::WHITE, Color::BLACK).bold();
            self.screen.put_str(x, y, text, text_style);
        }

        self.needs_paint = false;
    }

    /// Writes the composed frame to the terminal
    pub fn present<W: std::io::Write>(&mut self, out: &mut W) -> Result<()> {
        self.screen.flush(out)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }
}
