use crossterm::style;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);
    pub const GRAY: Color = Color::rgb8(0x88, 0x88, 0x88);
    pub const LIGHT_GRAY: Color = Color::rgb8(0xCC, 0xCC, 0xCC);
    pub const DARK_GRAY: Color = Color::rgb8(0x44, 0x44, 0x44);
    pub const RED: Color = Color::rgb8(255, 0, 0);
    pub const GREEN: Color = Color::rgb8(0, 255, 0);
    pub const BLUE: Color = Color::rgb8(0, 0, 255);
    pub const YELLOW: Color = Color::rgb8(255, 255, 0);
    pub const CYAN: Color = Color::rgb8(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb8(255, 0, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl From<Color> for style::Color {
    fn from(c: Color) -> Self {
        style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}
