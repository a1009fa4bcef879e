//! Event scripts: a recorded sequence of page interactions in JSON.
//!
//! A script is either a bare array of events or an object with an `events`
//! array:
//!
//! ```json
//! [
//!   {"type": "select_tool", "id": "filledRectangle"},
//!   {"type": "set_color", "value": "#0000ff"},
//!   {"type": "pointer", "event": {"type": "mouse_down", "x": 10, "y": 10}},
//!   {"type": "pointer", "event": {"type": "mouse_move", "x": 50, "y": 40}},
//!   {"type": "pointer", "event": {"type": "mouse_up"}}
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::app::{AppEvent, PaintApp};
use crate::draw::RasterSurface;

#[derive(Deserialize)]
#[serde(untagged)]
enum ScriptFile {
    Events(Vec<AppEvent>),
    Wrapped { events: Vec<AppEvent> },
}

/// Parses script JSON into events.
pub fn parse_script(json: &str) -> Result<Vec<AppEvent>> {
    let file: ScriptFile = serde_json::from_str(json).context("Invalid event script")?;
    Ok(match file {
        ScriptFile::Events(events) | ScriptFile::Wrapped { events } => events,
    })
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<AppEvent>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let events =
        parse_script(&json).with_context(|| format!("Failed to parse script {}", path.display()))?;
    log::info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Replays `events` against `app`, returning the notices raised on the way.
pub fn run_script<S: RasterSurface>(app: &mut PaintApp<S>, events: Vec<AppEvent>) -> Vec<String> {
    let mut notices = Vec::new();
    for event in events {
        app.dispatch(event);
        while let Some(notice) = app.take_notice() {
            log::warn!("Notice: {}", notice);
            notices.push(notice);
        }
    }
    notices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_wrapped_arrays() {
        let bare = parse_script(r#"[{"type":"undo"},{"type":"redo"}]"#).unwrap();
        assert_eq!(bare, vec![AppEvent::Undo, AppEvent::Redo]);

        let wrapped = parse_script(r#"{"events":[{"type":"expand"}]}"#).unwrap();
        assert_eq!(wrapped, vec![AppEvent::Expand]);
    }

    #[test]
    fn rejects_unknown_event_types() {
        assert!(parse_script(r#"[{"type":"teleport"}]"#).is_err());
    }

    #[test]
    fn load_script_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_script(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read script"));
    }
}
