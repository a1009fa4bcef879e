//! Pointer and touch events delivered to the drawing session.

use serde::Deserialize;

/// A pointer or touch event on the canvas element.
///
/// Mouse coordinates are already relative to the canvas (offset coordinates).
/// Touch coordinates are client coordinates; the session subtracts the canvas
/// origin before use. Touch end carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp,
    /// Pointer left the canvas; ends a stroke like a release
    MouseOut,
    TouchStart { client_x: f64, client_y: f64 },
    TouchMove { client_x: f64, client_y: f64 },
    TouchEnd,
}
