mod actions;
mod core;
mod pointer;

pub use core::{DrawingState, PaintSession, SessionSettings};
