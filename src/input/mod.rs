//! Input handling and tool state machine.
//!
//! This module translates pointer and touch events into drawing operations.
//! It maintains the active tool, the brush (size, color, opacity) and the
//! state machine for the drawing modes (idle, stroke in progress, text prompt).

pub mod brush;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use brush::Brush;
pub use events::PointerEvent;
pub use state::{DrawingState, PaintSession, SessionSettings};
pub use tool::Tool;
