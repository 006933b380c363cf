use crate::color::Color;

/// Resolved draw parameters for one circle in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDescriptor {
    pub center: [f64; 2],
    pub radius: f64,
    /// `None` means the circle is hidden this frame
    pub color: Option<Color>,
}
