use crate::clock::AnimationClock;
use crate::layout::View;
use crate::selection::SelectionState;

/// Application state
pub struct AppState {
    /// Which circle is customized, and how
    pub selection: SelectionState,
    /// Phase angles of the two orbits
    pub clock: AnimationClock,
    /// Fixed density scale; `None` derives it from the canvas size
    pub density: Option<f64>,
    /// Part of the screen being shown
    pub view: View,
    /// Enable debug mode
    pub debug: bool,
    /// Animation paused by the user
    pub paused: bool,
}

/// Canvas height, in density-independent units, used when no density is given
const REFERENCE_HEIGHT_DP: f64 = 640.0;

impl AppState {
    /// Density scale for a canvas `height` pixels tall
    pub fn density_for(&self, height: usize) -> f64 {
        self.density
            .unwrap_or_else(|| height as f64 / REFERENCE_HEIGHT_DP)
    }
}
