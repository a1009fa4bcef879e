//! Application shell: routes UI events into the drawing session.
//!
//! [`PaintApp`] plays the part of the page around the canvas. It owns the
//! tool palette, the voice button and the export target, turns raw control
//! values into session calls, and completes pending history restores after
//! every event the way the host event loop would.

use serde::Deserialize;
use std::collections::VecDeque;
use std::path::PathBuf;

use crate::draw::{CairoCanvas, RasterSurface};
use crate::export::{self, ExportConfig};
use crate::input::{PaintSession, PointerEvent};
use crate::ui::{self, ToolPalette};
use crate::util::Point;
use crate::voice::{RecognitionEvent, VoiceInput};

/// A user interaction with the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// Tool button clicked, by button id (e.g. "filledRectangle")
    SelectTool { id: String },
    /// Color input changed
    SetColor { value: String },
    /// Size input changed
    SetSize { value: String },
    /// Opacity slider moved
    SetOpacity { value: String },
    /// Pointer or touch event on the canvas
    Pointer { event: PointerEvent },
    /// Canvas moved within the page (client coordinates of its corner)
    SetCanvasOrigin { x: f64, y: f64 },
    Clear,
    Save,
    Undo,
    Redo,
    Expand,
    /// Text prompt input changed
    SetText { value: String },
    SubmitText,
    CancelText,
    VoiceStart,
    VoiceStop,
    VoiceTranscript { text: String },
    VoiceFailure { reason: String },
    ClearText,
}

/// The paint page: session plus the controls around it.
pub struct PaintApp<S: RasterSurface = CairoCanvas> {
    session: PaintSession<S>,
    palette: ToolPalette,
    voice: VoiceInput,
    export: ExportConfig,
    notices: VecDeque<String>,
    saved: Vec<PathBuf>,
}

impl<S: RasterSurface> PaintApp<S> {
    pub fn new(session: PaintSession<S>, voice: VoiceInput, export: ExportConfig) -> Self {
        let mut palette = ToolPalette::default();
        palette.activate(ToolPalette::id_for_tool(session.tool()));
        Self {
            session,
            palette,
            voice,
            export,
            notices: VecDeque::new(),
            saved: Vec::new(),
        }
    }

    pub fn session(&self) -> &PaintSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PaintSession<S> {
        &mut self.session
    }

    pub fn palette(&self) -> &ToolPalette {
        &self.palette
    }

    pub fn voice(&self) -> &VoiceInput {
        &self.voice
    }

    /// Files written by "save" events, oldest first.
    pub fn saved_files(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Pops the oldest user-facing notice (alerts), if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notices.pop_front()
    }

    /// Handles one event, then lets pending restores land.
    pub fn dispatch(&mut self, event: AppEvent) {
        log::trace!("Dispatching {:?}", event);
        match event {
            AppEvent::SelectTool { id } => {
                if let Some(tool) = self.palette.activate(&id) {
                    self.session.select_tool(tool);
                }
            }
            AppEvent::SetColor { value } => {
                if self.session.brush.color.set_hex(&value) {
                    log::debug!("Brush color set to {}", self.session.brush.color.base().to_hex());
                }
            }
            AppEvent::SetSize { value } => match ui::parse_size(&value) {
                Some(size) => {
                    self.session.brush.set_size(size);
                }
                None => log::warn!(
                    "Ignoring brush size '{}', keeping {}",
                    value,
                    self.session.brush.size()
                ),
            },
            AppEvent::SetOpacity { value } => match ui::parse_opacity(&value) {
                Some(opacity) => {
                    self.session.brush.color.set_opacity(opacity);
                }
                None => log::warn!("Ignoring opacity '{}'", value),
            },
            AppEvent::Pointer { event } => self.session.handle_pointer(event),
            AppEvent::SetCanvasOrigin { x, y } => self.session.set_canvas_origin(Point::new(x, y)),
            AppEvent::Clear => {
                if let Err(e) = self.session.clear() {
                    log::error!("Failed to clear canvas: {}", e);
                }
            }
            AppEvent::Save => self.save(),
            AppEvent::Undo => {
                if !self.session.undo() {
                    log::debug!("Nothing to undo");
                }
            }
            AppEvent::Redo => {
                if !self.session.redo() {
                    log::debug!("Nothing to redo");
                }
            }
            AppEvent::Expand => {
                if let Err(e) = self.session.expand() {
                    log::error!("Failed to expand canvas: {}", e);
                }
            }
            AppEvent::SetText { value } => self.session.set_text_field(value),
            AppEvent::SubmitText => {
                if let Err(e) = self.session.submit_text() {
                    log::error!("Failed to draw text: {}", e);
                }
            }
            AppEvent::CancelText => self.session.cancel_text(),
            AppEvent::VoiceStart => {
                if let Some(notice) = self.voice.start() {
                    self.notices.push_back(notice.to_string());
                }
            }
            AppEvent::VoiceStop => self.voice.stop(),
            AppEvent::VoiceTranscript { text } => {
                self.recognition(RecognitionEvent::Transcript(text))
            }
            AppEvent::VoiceFailure { reason } => self.recognition(RecognitionEvent::Failure(reason)),
            AppEvent::ClearText => self.session.clear_text_field(),
        }

        self.session.pump_restores();
    }

    /// Status line shown under the toolbar.
    pub fn status_text(&self) -> String {
        let mut status = ui::status_text(&self.session);
        if self.voice.is_available() && self.voice.is_listening() {
            status.push_str(" | ");
            status.push_str(self.voice.label());
        }
        status
    }

    /// Exports the canvas to an explicit path.
    pub fn save_to(&mut self, path: &std::path::Path) -> Result<(), export::ExportError> {
        let png = self.session.export_png()?;
        export::write_png(&png, path)
    }

    /// Exports the canvas into the configured directory.
    pub fn save_to_export_dir(&mut self) -> Result<PathBuf, export::ExportError> {
        let png = self.session.export_png()?;
        export::save_png(&png, &self.export)
    }

    fn save(&mut self) {
        match self.save_to_export_dir() {
            Ok(path) => self.saved.push(path),
            Err(e) => {
                log::error!("Failed to save canvas: {}", e);
                self.notices.push_back(format!("Could not save image: {}", e));
            }
        }
    }

    fn recognition(&mut self, event: RecognitionEvent) {
        match self.voice.handle_event(event) {
            Some(Ok(text)) => self.session.set_text_field(text),
            Some(Err(notice)) => self.notices.push_back(notice.to_string()),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};
    use crate::input::{SessionSettings, Tool};
    use crate::voice::{ExternalRecognizer, FAILURE_NOTICE};

    fn create_app(voice: VoiceInput) -> (PaintApp, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let canvas = CairoCanvas::new(120, 120, WHITE.to_color(1.0)).unwrap();
        let session = PaintSession::new(canvas, SessionSettings::default()).unwrap();
        let export = ExportConfig {
            directory: dir.path().to_path_buf(),
            filename_template: "paint".to_string(),
        };
        (PaintApp::new(session, voice, export), dir)
    }

    fn events(json: &str) -> Vec<AppEvent> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn control_inputs_update_brush() {
        let (mut app, _dir) = create_app(VoiceInput::unsupported());
        for event in events(
            r##"[
                {"type":"set_color","value":"#ff0000"},
                {"type":"set_opacity","value":"0.5"},
                {"type":"set_opacity","value":"0.8"},
                {"type":"set_size","value":"7"}
            ]"##,
        ) {
            app.dispatch(event);
        }
        let brush = &app.session().brush;
        assert_eq!(brush.color.base(), RED);
        assert_eq!(brush.size(), 7);
        assert_eq!(brush.paint_color(), RED.to_color(0.8));
    }

    #[test]
    fn bad_control_values_keep_previous_state() {
        let (mut app, _dir) = create_app(VoiceInput::unsupported());
        app.dispatch(AppEvent::SetColor {
            value: "#ff0000".into(),
        });
        app.dispatch(AppEvent::SetColor {
            value: "not-a-color".into(),
        });
        app.dispatch(AppEvent::SetSize { value: "0".into() });
        assert_eq!(app.session().brush.color.base(), RED);
        assert_eq!(app.session().brush.size(), 1);
    }

    #[test]
    fn tool_buttons_drive_session_tool() {
        let (mut app, _dir) = create_app(VoiceInput::unsupported());
        app.dispatch(AppEvent::SelectTool {
            id: "verticalLine".into(),
        });
        assert_eq!(app.session().tool(), Tool::VerticalLine);
        assert_eq!(app.palette().active_id(), "verticalLine");

        app.dispatch(AppEvent::SelectTool { id: "spray".into() });
        assert_eq!(app.session().tool(), Tool::VerticalLine);
    }

    #[test]
    fn undo_lands_within_dispatch() {
        let (mut app, _dir) = create_app(VoiceInput::unsupported());
        for event in events(
            r#"[
                {"type":"pointer","event":{"type":"mouse_down","x":10,"y":10}},
                {"type":"pointer","event":{"type":"mouse_move","x":100,"y":100}},
                {"type":"pointer","event":{"type":"mouse_up"}},
                {"type":"undo"}
            ]"#,
        ) {
            app.dispatch(event);
        }
        assert!(!app.session().restore_pending());
        assert!(app.status_text().contains("undo 0 / redo 1"));
    }

    #[test]
    fn voice_transcript_fills_text_field() {
        let voice = VoiceInput::new(Some(Box::new(ExternalRecognizer::default())), "en-US");
        let (mut app, _dir) = create_app(voice);
        app.dispatch(AppEvent::SelectTool { id: "text".into() });
        app.dispatch(AppEvent::VoiceStart);
        assert!(app.status_text().ends_with("🎙 Listening..."));

        app.dispatch(AppEvent::VoiceTranscript {
            text: "hello".into(),
        });
        assert_eq!(app.session().text_field(), "hello");
        assert!(!app.voice().is_listening());

        app.dispatch(AppEvent::ClearText);
        assert_eq!(app.session().text_field(), "");
    }

    #[test]
    fn voice_failure_raises_notice() {
        let voice = VoiceInput::new(Some(Box::new(ExternalRecognizer::default())), "en-US");
        let (mut app, _dir) = create_app(voice);
        app.dispatch(AppEvent::VoiceStart);
        app.dispatch(AppEvent::VoiceFailure {
            reason: "no-speech".into(),
        });
        assert_eq!(app.take_notice().as_deref(), Some(FAILURE_NOTICE));
        assert_eq!(app.take_notice(), None);
    }

    #[test]
    fn voice_events_without_recognizer_are_silent() {
        let (mut app, _dir) = create_app(VoiceInput::unsupported());
        app.dispatch(AppEvent::SetText {
            value: "typed".into(),
        });
        app.dispatch(AppEvent::VoiceTranscript {
            text: "spoken".into(),
        });
        app.dispatch(AppEvent::VoiceFailure {
            reason: "not-allowed".into(),
        });
        assert_eq!(app.take_notice(), None);
        assert_eq!(app.session().text_field(), "typed");
    }

    #[test]
    fn switching_tools_keeps_voice_listening() {
        let voice = VoiceInput::new(Some(Box::new(ExternalRecognizer::default())), "en-US");
        let (mut app, _dir) = create_app(voice);
        app.dispatch(AppEvent::SelectTool { id: "text".into() });
        app.dispatch(AppEvent::VoiceStart);
        app.dispatch(AppEvent::SelectTool { id: "brush".into() });
        assert!(app.voice().is_listening());
    }

    #[test]
    fn save_writes_png_to_export_directory() {
        let (mut app, dir) = create_app(VoiceInput::unsupported());
        app.dispatch(AppEvent::Save);
        assert_eq!(app.saved_files().len(), 1);
        let bytes = std::fs::read(&app.saved_files()[0]).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
        assert!(app.saved_files()[0].starts_with(dir.path().canonicalize().unwrap()));
    }
}
