//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include brush defaults, text
//! appearance, canvas dimensions, export naming and voice input.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportSettings, TextConfig, VoiceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::color::{INK_BLUE, WHITE};
use crate::draw::{BrushColor, Color, FontDescriptor, TextStyle};
use crate::export::ExportConfig;
use crate::input::{Brush, SessionSettings};

/// Largest brush size accepted for `max_size`
const MAX_BRUSH_SIZE: u32 = 500;
/// Smallest canvas edge
const MIN_CANVAS_EDGE: u32 = 16;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#081abd"
/// default_size = 4
/// default_opacity = 0.8
///
/// [text]
/// font_family = "Sans"
/// font_size = 20.0
///
/// [canvas]
/// width = 1024
/// height = 768
///
/// [export]
/// directory = "~/Pictures/Sketchpad"
/// filename_template = "paint_%Y-%m-%d_%H%M%S"
///
/// [voice]
/// language = "en-GB"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults and canvas background
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Text tool font and placement
    #[serde(default)]
    pub text: TextConfig,

    /// Canvas size and expansion
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Image export location and naming
    #[serde(default)]
    pub export: ExportSettings,

    /// Speech-to-text input
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `max_size`: 1 - 500
    /// - `default_size`: 1 - `max_size`
    /// - `default_opacity`: 0.0 - 1.0
    /// - `font_size`: 6.0 - 200.0
    /// - `baseline_offset`: 0.0 - 500.0
    /// - canvas edges: at least 16, `height` at most `max_height`
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_BRUSH_SIZE).contains(&self.drawing.max_size) {
            log::warn!(
                "Invalid max_size {}, clamping to 1-{} range",
                self.drawing.max_size,
                MAX_BRUSH_SIZE
            );
            self.drawing.max_size = self.drawing.max_size.clamp(1, MAX_BRUSH_SIZE);
        }

        if !(1..=self.drawing.max_size).contains(&self.drawing.default_size) {
            log::warn!(
                "Invalid default_size {}, clamping to 1-{} range",
                self.drawing.default_size,
                self.drawing.max_size
            );
            self.drawing.default_size = self.drawing.default_size.clamp(1, self.drawing.max_size);
        }

        if self.drawing.default_opacity.is_nan() {
            log::warn!("Invalid default_opacity NaN, using 1.0");
            self.drawing.default_opacity = 1.0;
        } else if !(0.0..=1.0).contains(&self.drawing.default_opacity) {
            log::warn!(
                "Invalid default_opacity {:.2}, clamping to 0.0-1.0 range",
                self.drawing.default_opacity
            );
            self.drawing.default_opacity = self.drawing.default_opacity.clamp(0.0, 1.0);
        }

        if !(6.0..=200.0).contains(&self.text.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 6.0-200.0 range",
                self.text.font_size
            );
            self.text.font_size = if self.text.font_size.is_nan() {
                20.0
            } else {
                self.text.font_size.clamp(6.0, 200.0)
            };
        }

        if !(0.0..=500.0).contains(&self.text.baseline_offset) {
            log::warn!(
                "Invalid baseline_offset {:.1}, clamping to 0.0-500.0 range",
                self.text.baseline_offset
            );
            self.text.baseline_offset = if self.text.baseline_offset.is_nan() {
                25.0
            } else {
                self.text.baseline_offset.clamp(0.0, 500.0)
            };
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }

        if self.canvas.max_height < MIN_CANVAS_EDGE {
            log::warn!(
                "Invalid max_height {}, raising to {}",
                self.canvas.max_height,
                MIN_CANVAS_EDGE
            );
            self.canvas.max_height = MIN_CANVAS_EDGE;
        }

        if self.canvas.width < MIN_CANVAS_EDGE {
            log::warn!(
                "Invalid canvas width {}, raising to {}",
                self.canvas.width,
                MIN_CANVAS_EDGE
            );
            self.canvas.width = MIN_CANVAS_EDGE;
        }

        if !(MIN_CANVAS_EDGE..=self.canvas.max_height).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to {}-{} range",
                self.canvas.height,
                MIN_CANVAS_EDGE,
                self.canvas.max_height
            );
            self.canvas.height = self.canvas.height.clamp(MIN_CANVAS_EDGE, self.canvas.max_height);
        }

        if self.canvas.expand_step == 0 {
            log::warn!("Invalid expand_step 0, using 600");
            self.canvas.expand_step = 600;
        }

        if self.voice.language.trim().is_empty() {
            log::warn!("Empty voice language, falling back to 'en-US'");
            self.voice.language = "en-US".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Serializes the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Canvas background as a render color.
    pub fn background(&self) -> Color {
        self.drawing.background_color.to_rgb_or(WHITE).to_color(1.0)
    }

    /// Initial session state derived from the drawing, text and canvas sections.
    pub fn session_settings(&self) -> SessionSettings {
        let base = self.drawing.default_color.to_rgb_or(INK_BLUE);
        let color = BrushColor::new(base, self.drawing.default_opacity);

        SessionSettings {
            brush: Brush::new(self.drawing.default_size, self.drawing.max_size, color),
            text_style: TextStyle {
                font: FontDescriptor::new(
                    self.text.font_family.clone(),
                    self.text.font_weight.clone(),
                    self.text.font_style.clone(),
                ),
                size: self.text.font_size,
                baseline_offset: self.text.baseline_offset,
            },
            expand_step: self.canvas.expand_step,
            max_height: self.canvas.max_height,
        }
    }

    /// Export location with `~` expanded; empty means the platform default.
    pub fn export_config(&self) -> ExportConfig {
        let mut export = ExportConfig {
            filename_template: self.export.filename_template.clone(),
            ..ExportConfig::default()
        };
        if !self.export.directory.trim().is_empty() {
            export.directory = crate::util::expand_tilde(self.export.directory.trim());
        }
        export
    }
}
