use crate::draw::{CanvasError, RasterSurface};
use crate::util::Point;

use super::{DrawingState, PaintSession};

impl<S: RasterSurface> PaintSession<S> {
    /// Wipes the canvas to the background colour and records a checkpoint.
    pub fn clear(&mut self) -> Result<(), CanvasError> {
        if self.is_drawing() {
            self.state = DrawingState::Idle;
        }
        self.canvas.clear()?;
        self.commit()?;
        log::info!("Canvas cleared");
        Ok(())
    }

    /// Grows the canvas by the configured step, keeping every drawn pixel.
    ///
    /// Returns the resulting height. At the maximum height this is a no-op.
    pub fn expand(&mut self) -> Result<u32, CanvasError> {
        let height = self.canvas.height();
        let target = height.saturating_add(self.expand_step).min(self.max_height);
        if target <= height {
            log::warn!(
                "Canvas already at maximum height {}px; not expanding",
                self.max_height
            );
            return Ok(height);
        }

        self.canvas.resize(target)?;
        self.needs_redraw = true;
        log::info!("Canvas expanded from {}px to {}px", height, target);
        Ok(target)
    }

    /// Encodes the current raster as PNG.
    pub fn export_png(&mut self) -> Result<Vec<u8>, CanvasError> {
        self.canvas.export_png()
    }

    // ------------------------------------------------------------------
    // Text prompt
    // ------------------------------------------------------------------

    /// Opens the text prompt at `anchor`, as a click with the text tool does.
    pub fn open_text_prompt(&mut self, anchor: Point) {
        if self.is_drawing() {
            return;
        }
        self.state = DrawingState::TextInput { anchor };
        self.needs_redraw = true;
    }

    /// Where the text prompt is anchored, if it is open.
    pub fn text_prompt(&self) -> Option<Point> {
        match self.state {
            DrawingState::TextInput { anchor } => Some(anchor),
            _ => None,
        }
    }

    /// Current value of the prompt's input field.
    pub fn text_field(&self) -> &str {
        &self.text_field
    }

    /// Replaces the input field value (typing, or a voice transcript).
    pub fn set_text_field(&mut self, text: impl Into<String>) {
        self.text_field = text.into();
    }

    pub fn clear_text_field(&mut self) {
        self.text_field.clear();
    }

    /// Commits the input field as text at the prompt anchor.
    ///
    /// The glyph run starts at the anchor shifted down by the baseline offset
    /// and uses the brush colour. Blank input is ignored. The prompt closes
    /// either way. Returns whether text was drawn.
    pub fn submit_text(&mut self) -> Result<bool, CanvasError> {
        let DrawingState::TextInput { anchor } = self.state else {
            return Ok(false);
        };
        self.state = DrawingState::Idle;
        self.needs_redraw = true;

        if self.text_field.trim().is_empty() {
            log::debug!("Ignoring empty text submission");
            self.text_field.clear();
            return Ok(false);
        }

        let text = std::mem::take(&mut self.text_field);
        let origin = Point::new(anchor.x, anchor.y + self.text_style.baseline_offset);
        self.canvas.draw_text(
            origin,
            &text,
            &self.text_style.font,
            self.text_style.size,
            self.brush.paint_color(),
        )?;
        self.commit()?;
        log::debug!("Placed text {:?} at {:?}", text, origin);
        Ok(true)
    }

    /// Closes the prompt without drawing anything.
    pub fn cancel_text(&mut self) {
        if matches!(self.state, DrawingState::TextInput { .. }) {
            self.state = DrawingState::Idle;
            self.text_field.clear();
            self.needs_redraw = true;
        }
    }
}
