//! The raster surface the drawing session paints on.
//!
//! [`RasterSurface`] is the boundary between the session controller and the
//! pixels. [`CairoCanvas`] implements it on top of a Cairo image surface.

use super::color::Color;
use super::font::FontDescriptor;
use super::render;
use super::snapshot::PixelBuffer;
use crate::util::Point;
use thiserror::Error;

/// Errors raised by raster surface operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are already borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

/// Whether a closed shape is outlined or filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Stroke,
    Fill,
}

/// End-cap style of stroked segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

/// An opaque raster the session draws into.
///
/// Implementations own their pixels. `capture`/`restore` must round-trip
/// exactly: restoring a captured buffer reproduces the surface bit for bit.
pub trait RasterSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Colour used for blank pixels and by the eraser.
    fn background(&self) -> Color;

    /// Resets every pixel to the background colour.
    fn clear(&mut self) -> Result<(), CanvasError>;

    fn draw_segment(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
        cap: LineCap,
    ) -> Result<(), CanvasError>;

    fn draw_rect(
        &mut self,
        origin: Point,
        size: (f64, f64),
        mode: PaintMode,
        color: Color,
        line_width: f64,
    ) -> Result<(), CanvasError>;

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        mode: PaintMode,
        color: Color,
        line_width: f64,
    ) -> Result<(), CanvasError>;

    /// Draws `text` with its first baseline starting at `origin`.
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &FontDescriptor,
        size: f64,
        color: Color,
    ) -> Result<(), CanvasError>;

    /// Copies the current pixels.
    fn capture(&mut self) -> Result<PixelBuffer, CanvasError>;

    /// Replaces the surface content with `pixels`, anchored at the origin.
    ///
    /// A buffer smaller than the surface leaves the rest at the background colour.
    fn restore(&mut self, pixels: &PixelBuffer) -> Result<(), CanvasError>;

    /// Encodes the current pixels as PNG.
    fn export_png(&mut self) -> Result<Vec<u8>, CanvasError>;

    /// Grows the surface to `new_height`, keeping existing pixels in place.
    ///
    /// Heights at or below the current height are ignored.
    fn resize(&mut self, new_height: u32) -> Result<(), CanvasError>;
}

/// [`RasterSurface`] backed by a Cairo ARGB32 image surface.
pub struct CairoCanvas {
    surface: cairo::ImageSurface,
    background: Color,
}

impl std::fmt::Debug for CairoCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CairoCanvas")
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("background", &self.background)
            .finish()
    }
}

impl CairoCanvas {
    /// Creates a blank canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, CanvasError> {
        let surface = create_surface(width, height)?;
        let mut canvas = Self {
            surface,
            background,
        };
        canvas.clear()?;
        Ok(canvas)
    }

    /// Returns the premultiplied `[r, g, b, a]` value at (x, y).
    ///
    /// Intended for inspection; use [`RasterSurface::capture`] for bulk reads.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.capture().ok()?.pixel(x, y)
    }

    fn context(&self) -> Result<cairo::Context, CanvasError> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    fn blit(&mut self, pixels: &PixelBuffer) -> Result<(), CanvasError> {
        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let rows = pixels.height.min(self.height()) as usize;
        let row_bytes = pixels.width.min(self.width()) as usize * 4;

        let mut data = self.surface.data()?;
        for y in 0..rows {
            let src = &pixels.data[y * pixels.stride..y * pixels.stride + row_bytes];
            data[y * stride..y * stride + row_bytes].copy_from_slice(src);
        }
        // Dropping `data` marks the surface dirty
        Ok(())
    }
}

fn create_surface(width: u32, height: u32) -> Result<cairo::ImageSurface, CanvasError> {
    let invalid = CanvasError::InvalidSize { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(invalid);
    };
    Ok(cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?)
}

impl RasterSurface for CairoCanvas {
    fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    fn background(&self) -> Color {
        self.background
    }

    fn clear(&mut self) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_background(&ctx, self.background)?;
        Ok(())
    }

    fn draw_segment(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
        cap: LineCap,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_segment(&ctx, from, to, color, width, cap)?;
        Ok(())
    }

    fn draw_rect(
        &mut self,
        origin: Point,
        size: (f64, f64),
        mode: PaintMode,
        color: Color,
        line_width: f64,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_rect(&ctx, origin, size, mode, color, line_width)?;
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        mode: PaintMode,
        color: Color,
        line_width: f64,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_circle(&ctx, center, radius, mode, color, line_width)?;
        Ok(())
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        font: &FontDescriptor,
        size: f64,
        color: Color,
    ) -> Result<(), CanvasError> {
        let ctx = self.context()?;
        render::render_text(&ctx, origin, text, color, size, font)?;
        Ok(())
    }

    fn capture(&mut self) -> Result<PixelBuffer, CanvasError> {
        self.surface.flush();
        let width = self.width();
        let height = self.height();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data()?.to_vec();
        Ok(PixelBuffer {
            width,
            height,
            stride,
            data,
        })
    }

    fn restore(&mut self, pixels: &PixelBuffer) -> Result<(), CanvasError> {
        if pixels.width < self.width() || pixels.height < self.height() {
            self.clear()?;
        }
        self.blit(pixels)
    }

    fn export_png(&mut self) -> Result<Vec<u8>, CanvasError> {
        let mut png = Vec::new();
        self.surface.write_to_png(&mut png)?;
        Ok(png)
    }

    fn resize(&mut self, new_height: u32) -> Result<(), CanvasError> {
        if new_height <= self.height() {
            return Ok(());
        }

        let previous = self.capture()?;
        self.surface = create_surface(self.width(), new_height)?;
        self.restore(&previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    #[test]
    fn new_canvas_is_filled_with_background() {
        let mut canvas = CairoCanvas::new(8, 4, WHITE).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(7, 3), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(8, 0), None);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            CairoCanvas::new(0, 10, WHITE),
            Err(CanvasError::InvalidSize { .. })
        ));
    }

    #[test]
    fn capture_restore_round_trips() {
        let mut canvas = CairoCanvas::new(32, 32, WHITE).unwrap();
        let blank = canvas.capture().unwrap();
        canvas
            .draw_circle(
                Point::new(16.0, 16.0),
                9.0,
                PaintMode::Fill,
                Color::new(0.2, 0.4, 0.6, 0.5),
                1.0,
            )
            .unwrap();
        let painted = canvas.capture().unwrap();
        assert_ne!(blank, painted);

        canvas.restore(&blank).unwrap();
        assert_eq!(canvas.capture().unwrap(), blank);
        canvas.restore(&painted).unwrap();
        assert_eq!(canvas.capture().unwrap(), painted);
    }

    #[test]
    fn resize_never_shrinks() {
        let mut canvas = CairoCanvas::new(10, 20, WHITE).unwrap();
        canvas.resize(5).unwrap();
        assert_eq!(canvas.height(), 20);
        canvas.resize(30).unwrap();
        assert_eq!(canvas.height(), 30);
    }

    #[test]
    fn export_produces_png_signature() {
        let mut canvas = CairoCanvas::new(4, 4, WHITE).unwrap();
        let png = canvas.export_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
