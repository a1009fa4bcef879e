use crate::draw::{CanvasError, LineCap, RasterSurface};
use crate::input::{events::PointerEvent, tool::Tool};
use crate::util::{self, Point};

use super::{DrawingState, PaintSession};

impl<S: RasterSurface> PaintSession<S> {
    /// Routes a pointer or touch event to the press/motion/release handlers.
    ///
    /// Touch positions are translated from client to canvas coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::MouseDown { x, y } => self.on_pointer_down(Point::new(x, y)),
            PointerEvent::MouseMove { x, y } => self.on_pointer_move(Point::new(x, y)),
            PointerEvent::MouseUp | PointerEvent::MouseOut | PointerEvent::TouchEnd => {
                self.on_pointer_up()
            }
            PointerEvent::TouchStart { client_x, client_y } => {
                let point = Point::new(client_x, client_y).relative_to(self.canvas_origin);
                self.on_pointer_down(point);
            }
            PointerEvent::TouchMove { client_x, client_y } => {
                let point = Point::new(client_x, client_y).relative_to(self.canvas_origin);
                self.on_pointer_move(point);
            }
        }
    }

    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Text tool: opens (or moves) the text prompt at `point`
    /// - Other tools while idle: starts a stroke session; shape tools first
    ///   capture the raster so previews can be redrawn over it
    /// - Press during an active stroke: ignored
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.is_drawing() {
            log::debug!("Ignoring nested pointer press at {:?}", point);
            return;
        }

        // A requested undo/redo lands before new ink goes on top of it
        if let Err(e) = self.flush_restore() {
            log::error!("Failed to apply pending restore: {}", e);
        }

        if self.tool == Tool::Text {
            self.state = DrawingState::TextInput { anchor: point };
            self.needs_redraw = true;
            return;
        }

        if !matches!(self.state, DrawingState::Idle) {
            return;
        }

        let backdrop = if self.tool.is_shape() {
            match self.canvas.capture() {
                Ok(pixels) => Some(pixels),
                Err(e) => {
                    log::error!("Failed to capture canvas before {:?}: {}", self.tool, e);
                    return;
                }
            }
        } else {
            None
        };

        self.state = DrawingState::Drawing {
            tool: self.tool,
            start: point,
            last: point,
            backdrop,
        };
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Freehand/eraser: appends a segment from the last point
    /// - Line tools: appends a segment constrained to the start row/column
    /// - Shape tools: restores the backdrop, then draws the shape to `point`
    /// - No active stroke: ignored
    pub fn on_pointer_move(&mut self, point: Point) {
        let DrawingState::Drawing {
            tool,
            start,
            last,
            backdrop,
        } = &mut self.state
        else {
            return;
        };

        let width = self.brush.width();
        let color = self.brush.paint_color();
        let canvas = &mut self.canvas;

        let result: Result<(), CanvasError> = match *tool {
            Tool::Freehand | Tool::Eraser => {
                let color = if *tool == Tool::Eraser {
                    canvas.background()
                } else {
                    color
                };
                let from = *last;
                *last = point;
                canvas.draw_segment(from, point, width, color, LineCap::Round)
            }
            Tool::HorizontalLine | Tool::VerticalLine => {
                let target = if *tool == Tool::HorizontalLine {
                    util::constrain_to_row(*start, point)
                } else {
                    util::constrain_to_column(*start, point)
                };
                let from = *last;
                *last = target;
                canvas.draw_segment(from, target, width, color, LineCap::Round)
            }
            Tool::Rectangle | Tool::FilledRectangle | Tool::Circle | Tool::FilledCircle => {
                // Shape tools always start with a backdrop
                let Some(pixels) = backdrop.as_ref() else {
                    return;
                };
                let Some(mode) = tool.paint_mode() else {
                    return;
                };
                *last = point;
                canvas.restore(pixels).and_then(|()| {
                    if matches!(*tool, Tool::Rectangle | Tool::FilledRectangle) {
                        let size = (point.x - start.x, point.y - start.y);
                        canvas.draw_rect(*start, size, mode, color, width)
                    } else {
                        let radius = util::circle_radius(*start, point);
                        canvas.draw_circle(*start, radius, mode, color, width)
                    }
                })
            }
            Tool::Text => Ok(()),
        };

        if let Err(e) = result {
            log::error!("Failed to draw preview: {}", e);
        }
        self.needs_redraw = true;
    }

    /// Processes a pointer release (or the pointer leaving the canvas).
    ///
    /// Ends the active stroke session and commits it as a history checkpoint.
    /// A press released without any motion leaves a degenerate mark: a dot
    /// for freehand, eraser and line tools, a zero-size shape otherwise.
    /// Does nothing when no stroke is active.
    pub fn on_pointer_up(&mut self) {
        let DrawingState::Drawing {
            tool, start, last, ..
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };

        if last == start {
            if let Err(e) = self.draw_click(tool, start) {
                log::error!("Failed to draw {:?} click: {}", tool, e);
            }
        }

        if let Err(e) = self.commit() {
            log::error!("Failed to record stroke in history: {}", e);
        }
    }

    fn draw_click(&mut self, tool: Tool, point: Point) -> Result<(), CanvasError> {
        let width = self.brush.width();
        let color = self.brush.paint_color();
        match tool {
            Tool::Freehand | Tool::HorizontalLine | Tool::VerticalLine => {
                self.canvas
                    .draw_segment(point, point, width, color, LineCap::Round)
            }
            Tool::Eraser => {
                let background = self.canvas.background();
                self.canvas
                    .draw_segment(point, point, width, background, LineCap::Round)
            }
            Tool::Rectangle | Tool::FilledRectangle | Tool::Circle | Tool::FilledCircle => {
                let Some(mode) = tool.paint_mode() else {
                    return Ok(());
                };
                if matches!(tool, Tool::Rectangle | Tool::FilledRectangle) {
                    self.canvas.draw_rect(point, (0.0, 0.0), mode, color, width)
                } else {
                    self.canvas.draw_circle(point, 0.0, mode, color, width)
                }
            }
            Tool::Text => Ok(()),
        }
    }
}
