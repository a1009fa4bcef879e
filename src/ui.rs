//! UI surface: tool palette, control-input parsing, status line.

use crate::draw::RasterSurface;
use crate::input::{DrawingState, PaintSession, Tool};

// ============================================================================
// Tool palette
// ============================================================================

/// Maps palette button ids to tools.
const PALETTE: [(&str, Tool); 9] = [
    ("brush", Tool::Freehand),
    ("eraser", Tool::Eraser),
    ("horizontalLine", Tool::HorizontalLine),
    ("verticalLine", Tool::VerticalLine),
    ("rectangle", Tool::Rectangle),
    ("filledRectangle", Tool::FilledRectangle),
    ("circle", Tool::Circle),
    ("filledCircle", Tool::FilledCircle),
    ("text", Tool::Text),
];

/// Ordered tool buttons with exactly one highlighted.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPalette {
    active: usize,
}

impl Default for ToolPalette {
    fn default() -> Self {
        Self { active: 0 }
    }
}

impl ToolPalette {
    /// Looks up the tool behind a button id.
    pub fn tool_for_id(id: &str) -> Option<Tool> {
        PALETTE.iter().find(|(key, _)| *key == id).map(|(_, tool)| *tool)
    }

    pub fn id_for_tool(tool: Tool) -> &'static str {
        PALETTE
            .iter()
            .find(|(_, t)| *t == tool)
            .map(|(key, _)| *key)
            .unwrap_or("brush")
    }

    /// Highlights the button for `id`. Unknown ids are ignored.
    pub fn activate(&mut self, id: &str) -> Option<Tool> {
        match PALETTE.iter().position(|(key, _)| *key == id) {
            Some(index) => {
                self.active = index;
                Some(PALETTE[index].1)
            }
            None => {
                log::warn!("Unknown tool button '{}'", id);
                None
            }
        }
    }

    pub fn active_tool(&self) -> Tool {
        PALETTE[self.active].1
    }

    pub fn active_id(&self) -> &'static str {
        PALETTE[self.active].0
    }

    /// Button ids with their highlight state, in display order.
    pub fn buttons(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        PALETTE
            .iter()
            .enumerate()
            .map(move |(i, (id, _))| (*id, i == self.active))
    }
}

// ============================================================================
// Control inputs
// ============================================================================

/// Parses the brush size field. Non-numeric or zero input yields `None`.
pub fn parse_size(input: &str) -> Option<u32> {
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(size) => Some(size),
    }
}

/// Parses the opacity slider value, clamped to `[0, 1]`. Non-finite values are rejected.
pub fn parse_opacity(input: &str) -> Option<f64> {
    let value = input.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(0.0, 1.0))
}

// ============================================================================
// Status line
// ============================================================================

/// One-line summary of the tool, brush and history.
pub fn status_text<S: RasterSurface>(session: &PaintSession<S>) -> String {
    let tool = match &session.state {
        DrawingState::TextInput { .. } => Tool::Text,
        DrawingState::Drawing { tool, .. } => *tool,
        DrawingState::Idle => session.tool(),
    };

    let history = session.history();
    format!(
        "{} | {}px | {} @ {:.0}% | {}x{} | undo {} / redo {}",
        tool.label(),
        session.brush.size(),
        session.brush.color.base().to_hex(),
        session.brush.color.opacity() * 100.0,
        session.canvas().width(),
        session.canvas().height(),
        history.undo_len().saturating_sub(1),
        history.redo_len()
    )
}
