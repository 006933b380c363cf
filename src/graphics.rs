use crate::color::Color;

/// Anything that can paint a filled circle
pub trait DrawTarget {
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color);
}

/// RGB pixel buffer the frame is rasterized into
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resizes the buffer, discarding its contents
    pub fn resize(&mut self, width: usize, height: usize, background: Color) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, background);
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
}

impl DrawTarget for Canvas {
    /// Fills every pixel whose center lies inside the circle
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
        if self.width == 0 || self.height == 0 || radius <= 0.0 {
            return;
        }

        // Bounding box of the circle, clipped to the buffer
        let min_x = (center[0] - radius).floor().max(0.0);
        let max_x = (center[0] + radius).ceil().min(self.width as f64 - 1.0);
        let min_y = (center[1] - radius).floor().max(0.0);
        let max_y = (center[1] + radius).ceil().min(self.height as f64 - 1.0);
        if min_x > max_x || min_y > max_y {
            return;
        }

        let r2 = radius * radius;
        for y in min_y as usize..=max_y as usize {
            let dy = y as f64 + 0.5 - center[1];
            for x in min_x as usize..=max_x as usize {
                let dx = x as f64 + 0.5 - center[0];
                if dx * dx + dy * dy <= r2 {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }
    }
}
