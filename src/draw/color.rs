//! RGBA color type, hex parsing and the brush color model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). This is the
/// render-ready value handed to the raster surface; it is recomposed on demand
/// from a [`BrushColor`] and never parsed back.
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// An 8-bit RGB triple as entered through a hex color input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `#RGB` (the `#` is optional, case-insensitive).
    ///
    /// Returns `None` for anything else, including surrounding garbage.
    pub fn from_hex(input: &str) -> Option<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                // #abc expands to #aabbcc
                let expand = |c: &str| u8::from_str_radix(c, 16).ok().map(|v| v * 17);
                Some(Self {
                    r: expand(&digits[0..1])?,
                    g: expand(&digits[1..2])?,
                    b: expand(&digits[2..3])?,
                })
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form, as a color input would report it.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to a render color with the given alpha.
    pub fn to_color(self, alpha: f64) -> Color {
        Color {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
            a: alpha,
        }
    }
}

/// Brush color: a base hue plus an independent opacity.
///
/// Opacity changes never touch `base`, so setting the opacity any number of
/// times yields the selected hue at the latest alpha.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushColor {
    base: Rgb,
    opacity: f64,
}

impl BrushColor {
    pub fn new(base: Rgb, opacity: f64) -> Self {
        Self {
            base,
            opacity: sanitize_opacity(opacity).unwrap_or(1.0),
        }
    }

    pub fn base(&self) -> Rgb {
        self.base
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_base(&mut self, base: Rgb) {
        self.base = base;
    }

    /// Applies a hex color input. Malformed input keeps the last good color.
    ///
    /// Returns `true` when the color changed to the parsed value.
    pub fn set_hex(&mut self, input: &str) -> bool {
        match Rgb::from_hex(input) {
            Some(rgb) => {
                self.base = rgb;
                true
            }
            None => {
                log::warn!(
                    "Ignoring malformed color '{}', keeping {}",
                    input,
                    self.base.to_hex()
                );
                false
            }
        }
    }

    /// Sets the opacity, clamped to [0, 1]. Non-finite values are rejected.
    pub fn set_opacity(&mut self, opacity: f64) -> bool {
        match sanitize_opacity(opacity) {
            Some(value) => {
                self.opacity = value;
                true
            }
            None => {
                log::warn!("Ignoring non-finite opacity {}", opacity);
                false
            }
        }
    }

    /// The render-ready RGBA value.
    pub fn effective(&self) -> Color {
        self.base.to_color(self.opacity)
    }
}

fn sanitize_opacity(opacity: f64) -> Option<f64> {
    opacity.is_finite().then(|| opacity.clamp(0.0, 1.0))
}

// ============================================================================
// Predefined Colors
// ============================================================================

pub const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);
pub const GREEN: Rgb = Rgb::new(0x00, 0x80, 0x00);
pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xff);
pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);
pub const ORANGE: Rgb = Rgb::new(0xff, 0xa5, 0x00);
pub const PINK: Rgb = Rgb::new(0xff, 0xc0, 0xcb);
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Default brush hue of a fresh canvas.
pub const INK_BLUE: Rgb = Rgb::new(0x08, 0x1a, 0xbd);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::from_hex("#FF0000"), Some(RED));
        assert_eq!(Rgb::from_hex("081abd"), Some(INK_BLUE));
        assert_eq!(Rgb::from_hex("#fff"), Some(WHITE));
        assert_eq!(Rgb::from_hex("  #0000ff "), Some(BLUE));
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["", "#", "#12", "#12345", "#gggggg", "rgba(1,2,3,0.5)", "#1234567"] {
            assert_eq!(Rgb::from_hex(input), None, "{input:?} should not parse");
        }
    }

    #[test]
    fn hex_output_is_lowercase() {
        assert_eq!(INK_BLUE.to_hex(), "#081abd");
    }

    #[test]
    fn opacity_changes_preserve_hue() {
        let mut brush = BrushColor::new(INK_BLUE, 1.0);
        assert!(brush.set_hex("#FF0000"));
        assert!(brush.set_opacity(0.5));
        assert!(brush.set_opacity(0.8));
        assert_eq!(brush.effective(), Color::new(1.0, 0.0, 0.0, 0.8));

        // Many round trips through low alpha never drift the base
        for _ in 0..100 {
            brush.set_opacity(0.01);
            brush.set_opacity(0.8);
        }
        assert_eq!(brush.effective(), Color::new(1.0, 0.0, 0.0, 0.8));
    }

    #[test]
    fn malformed_color_keeps_last_good_value() {
        let mut brush = BrushColor::new(BLUE, 0.4);
        assert!(!brush.set_hex("not-a-color"));
        assert_eq!(brush.base(), BLUE);
        assert_eq!(brush.opacity(), 0.4);
    }

    #[test]
    fn opacity_is_clamped_and_nan_rejected() {
        let mut brush = BrushColor::new(BLACK, 1.0);
        assert!(brush.set_opacity(1.7));
        assert_eq!(brush.opacity(), 1.0);
        assert!(brush.set_opacity(-3.0));
        assert_eq!(brush.opacity(), 0.0);
        assert!(!brush.set_opacity(f64::NAN));
        assert_eq!(brush.opacity(), 0.0);
    }
}
