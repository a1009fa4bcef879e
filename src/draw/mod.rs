//! Raster drawing: colors, fonts, the canvas surface and snapshots (Cairo-based).
//!
//! This module defines the core drawing types used by the paint session:
//! - [`Color`], [`Rgb`] and [`BrushColor`]: render colors and the brush color model
//! - [`RasterSurface`]: the drawing surface boundary, with [`CairoCanvas`] as implementation
//! - [`PixelBuffer`] and [`Snapshot`]: raw and compressed raster copies
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod font;
pub mod render;
pub mod snapshot;

// Re-export commonly used types at module level
pub use canvas::{CairoCanvas, CanvasError, LineCap, PaintMode, RasterSurface};
pub use color::{BrushColor, Color, Rgb};
pub use font::{FontDescriptor, TextStyle};
pub use snapshot::{PixelBuffer, Snapshot};
