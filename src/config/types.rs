//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the brush the session starts with and the canvas background.
/// Users can change brush values at runtime through the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default brush color - a hex string like "#081abd", a named color
    /// (red, green, blue, yellow, orange, pink, white, black) or an RGB array
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels (valid range: 1 - max_size)
    #[serde(default = "default_size")]
    pub default_size: u32,

    /// Largest brush size the size control accepts (valid range: 1 - 500)
    #[serde(default = "default_max_size")]
    pub max_size: u32,

    /// Default brush opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_opacity")]
    pub default_opacity: f64,

    /// Canvas background; also the color the eraser paints
    #[serde(default = "default_background")]
    pub background_color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_size: default_size(),
            max_size: default_max_size(),
            default_opacity: default_opacity(),
            background_color: default_background(),
        }
    }
}

/// Text tool settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Font family name for text rendering (e.g., "Sans", "Monospace", "Arial")
    /// Falls back to a system font if the family is not available
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in pixels (valid range: 6.0 - 200.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Distance from the click point down to the text baseline, in pixels
    #[serde(default = "default_baseline_offset")]
    pub baseline_offset: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
            baseline_offset: default_baseline_offset(),
        }
    }
}

/// Canvas dimensions and growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Initial width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Rows added by each "expand" action
    #[serde(default = "default_expand_step")]
    pub expand_step: u32,

    /// Expansion stops at this height
    #[serde(default = "default_max_height")]
    pub max_height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            expand_step: default_expand_step(),
            max_height: default_max_height(),
        }
    }
}

/// Where "save" writes images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportSettings {
    /// Output directory; `~/` is expanded. Empty means the pictures directory.
    #[serde(default)]
    pub directory: String,

    /// File name without extension; chrono format specifiers are expanded
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: String::new(),
            filename_template: default_filename_template(),
        }
    }
}

/// Speech-to-text settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VoiceConfig {
    /// Show the voice button when a recognizer is available
    #[serde(default = "default_voice_enabled")]
    pub enabled: bool,

    /// BCP 47 language tag passed to the recognizer
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: default_voice_enabled(),
            language: default_language(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#081abd".to_string())
}

fn default_size() -> u32 {
    1
}

fn default_max_size() -> u32 {
    100
}

fn default_opacity() -> f64 {
    1.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    20.0
}

fn default_baseline_offset() -> f64 {
    25.0
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_expand_step() -> u32 {
    600
}

fn default_max_height() -> u32 {
    32_000
}

fn default_filename_template() -> String {
    "paint".to_string()
}

fn default_voice_enabled() -> bool {
    true
}

fn default_language() -> String {
    "en-US".to_string()
}
