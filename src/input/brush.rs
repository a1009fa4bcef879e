//! Brush state: stroke size plus the brush color model.

use crate::draw::{BrushColor, Color, color::INK_BLUE};

/// Size, hue and opacity used by every draw operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    size: u32,
    max_size: u32,
    pub color: BrushColor,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            size: 1,
            max_size: 100,
            color: BrushColor::new(INK_BLUE, 1.0),
        }
    }
}

impl Brush {
    /// Creates a brush. `size` is clamped to `1..=max_size`.
    pub fn new(size: u32, max_size: u32, color: BrushColor) -> Self {
        let max_size = max_size.max(1);
        Self {
            size: size.clamp(1, max_size),
            max_size,
            color,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Sets the stroke size. Zero is rejected; sizes above the maximum are clamped.
    pub fn set_size(&mut self, size: u32) -> bool {
        if size == 0 {
            log::warn!("Ignoring brush size 0, keeping {}", self.size);
            return false;
        }
        self.size = size.min(self.max_size);
        true
    }

    /// Stroke width in pixels.
    pub fn width(&self) -> f64 {
        self.size as f64
    }

    /// Render color for strokes and fills.
    pub fn paint_color(&self) -> Color {
        self.color.effective()
    }
}
