//! Drawing state machine and session state management.

use crate::draw::{CanvasError, PixelBuffer, RasterSurface, Snapshot, TextStyle};
use crate::history::{History, RestoreSlot, RestoreTicket};
use crate::input::{brush::Brush, tool::Tool};
use crate::util::Point;

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle, in the middle of a stroke, or has the
/// text prompt open. State transitions occur on pointer events and actions.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// A stroke session (pointer held down)
    Drawing {
        /// Tool captured at pointer-down; later tool switches don't affect it
        tool: Tool,
        /// Where the pointer went down
        start: Point,
        /// Last point a segment was drawn to (freehand, eraser, lines)
        last: Point,
        /// Pre-stroke pixels, restored before every shape preview
        backdrop: Option<PixelBuffer>,
    },
    /// Text prompt open, anchored where the canvas was clicked
    TextInput {
        /// Click point; the glyph run is placed below it by the baseline offset
        anchor: Point,
    },
}

/// Construction parameters for a [`PaintSession`].
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub brush: Brush,
    pub text_style: TextStyle,
    /// Height added by each canvas expansion
    pub expand_step: u32,
    /// Expansion never grows the canvas beyond this height
    pub max_height: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            brush: Brush::default(),
            text_style: TextStyle::default(),
            expand_step: 600,
            max_height: 32_000,
        }
    }
}

/// The drawing session controller.
///
/// Owns the canvas, the active tool, brush state, the stroke state machine and
/// the undo/redo history. Pointer and UI events go in; raster mutations and
/// history checkpoints come out.
pub struct PaintSession<S: RasterSurface> {
    pub(super) canvas: S,
    /// Current brush size and color
    pub brush: Brush,
    /// Active tool (exactly one)
    pub(super) tool: Tool,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Font, size and placement of text annotations
    pub text_style: TextStyle,
    /// Value of the text prompt's input field
    pub(super) text_field: String,
    pub(super) history: History,
    pub(super) restore_slot: RestoreSlot,
    pub(super) pending_restores: Vec<RestoreTicket>,
    /// Client-space position of the canvas' top-left corner (for touch input)
    pub(super) canvas_origin: Point,
    pub(super) expand_step: u32,
    pub(super) max_height: u32,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl<S: RasterSurface> PaintSession<S> {
    /// Creates a session over `canvas`, recording its current content as the
    /// initial history entry.
    pub fn new(mut canvas: S, settings: SessionSettings) -> Result<Self, CanvasError> {
        let initial = Snapshot::encode(&canvas.capture()?)?;
        log::debug!(
            "Session started on {}x{} canvas",
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            canvas,
            brush: settings.brush,
            tool: Tool::Freehand,
            state: DrawingState::Idle,
            text_style: settings.text_style,
            text_field: String::new(),
            history: History::new(initial),
            restore_slot: RestoreSlot::new(),
            pending_restores: Vec::new(),
            canvas_origin: Point::default(),
            expand_step: settings.expand_step,
            max_height: settings.max_height,
            needs_redraw: true,
        })
    }

    pub fn canvas(&self) -> &S {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut S {
        &mut self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Makes `tool` the active tool.
    ///
    /// Closes the text prompt (without committing) unless the new tool is the
    /// text tool. A stroke in progress keeps the tool it started with. Never
    /// touches the raster.
    pub fn select_tool(&mut self, tool: Tool) {
        if tool != Tool::Text && matches!(self.state, DrawingState::TextInput { .. }) {
            log::debug!("Leaving text mode for {:?}", tool);
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }

        if self.tool != tool {
            log::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
            self.tool = tool;
        }
    }

    /// Whether a stroke session is active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Tells the session where the canvas sits in client coordinates.
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.canvas_origin = origin;
    }

    /// Records the current raster as a new history checkpoint.
    ///
    /// Discards the redo stack and any restore still waiting to land.
    pub fn commit(&mut self) -> Result<(), CanvasError> {
        let snapshot = Snapshot::encode(&self.canvas.capture()?)?;
        self.restore_slot.cancel();
        self.pending_restores.clear();
        self.history.push(snapshot);
        self.needs_redraw = true;
        log::debug!(
            "Committed checkpoint ({} undo / {} redo)",
            self.history.undo_len(),
            self.history.redo_len()
        );
        Ok(())
    }

    /// Steps back one checkpoint. Returns `false` when there is nothing to undo.
    ///
    /// The raster changes once the requested restore completes; see
    /// [`Self::pump_restores`].
    pub fn undo(&mut self) -> bool {
        if self.is_drawing() {
            log::debug!("Ignoring undo during an active stroke");
            return false;
        }
        match self.history.undo() {
            Some(snapshot) => {
                let ticket = self.restore_slot.request(snapshot);
                self.pending_restores.push(ticket);
                true
            }
            None => false,
        }
    }

    /// Steps forward one checkpoint. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if self.is_drawing() {
            log::debug!("Ignoring redo during an active stroke");
            return false;
        }
        match self.history.redo() {
            Some(snapshot) => {
                let ticket = self.restore_slot.request(snapshot);
                self.pending_restores.push(ticket);
                true
            }
            None => false,
        }
    }

    /// Hands out restores requested since the last call, oldest first.
    pub fn take_pending_restores(&mut self) -> Vec<RestoreTicket> {
        std::mem::take(&mut self.pending_restores)
    }

    /// Decodes and applies a restore if it is still the latest request.
    ///
    /// Returns `Ok(false)` for superseded or cancelled tickets; those never
    /// touch the raster.
    pub fn complete_restore(&mut self, ticket: &RestoreTicket) -> Result<bool, CanvasError> {
        if !self.restore_slot.is_current(ticket) {
            log::debug!("Discarding stale restore #{}", ticket.generation());
            return Ok(false);
        }

        // A snapshot that fails to decode still closes the slot
        let decoded = ticket.snapshot().decode();
        self.restore_slot.finish(ticket);
        self.canvas.restore(&decoded?)?;
        self.needs_redraw = true;
        Ok(true)
    }

    /// Completes every pending restore in request order.
    ///
    /// Only the newest one is applied. Failures are logged; the canvas keeps
    /// its last valid state.
    pub fn pump_restores(&mut self) {
        for ticket in self.take_pending_restores() {
            if let Err(e) = self.complete_restore(&ticket) {
                log::error!("Failed to restore snapshot: {}", e);
            }
        }
    }

    /// Applies the latest requested restore right away.
    ///
    /// Tickets already handed out become stale. A no-op when nothing is
    /// pending.
    pub fn flush_restore(&mut self) -> Result<(), CanvasError> {
        if !self.restore_slot.is_pending() {
            return Ok(());
        }
        self.restore_slot.cancel();
        self.pending_restores.clear();

        let Some(snapshot) = self.history.current().cloned() else {
            return Ok(());
        };
        self.canvas.restore(&snapshot.decode()?)?;
        self.needs_redraw = true;
        log::debug!("Flushed pending restore before drawing");
        Ok(())
    }

    /// Whether a restore has been requested but not applied yet.
    pub fn restore_pending(&self) -> bool {
        self.restore_slot.is_pending()
    }
}
