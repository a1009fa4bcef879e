//! Library exports for the sketchpad paint canvas.
//!
//! Exposes the drawing session, history, configuration and page shell so the
//! binary, the schema dumper and integration tests share one implementation.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;
pub mod voice;

pub use app::{AppEvent, PaintApp};
pub use config::Config;
