//! Configuration enum types.

use crate::draw::Rgb;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a hex string or color name, or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color
/// default_color = "#081abd"
///
/// # Named color
/// background_color = "white"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#RRGGBB`, `#RGB`, or a name: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, falling back to `fallback` with a warning
    /// when the string is neither a hex color nor a known name.
    pub fn to_rgb_or(&self, fallback: Rgb) -> Rgb {
        match self {
            ColorSpec::Name(name) => Rgb::from_hex(name)
                .or_else(|| crate::util::name_to_color(name))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using {}", name, fallback.to_hex());
                    fallback
                }),
            ColorSpec::Rgb([r, g, b]) => Rgb::new(*r, *g, *b),
        }
    }
}
