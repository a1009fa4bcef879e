//! Speech-to-text input for the text prompt.
//!
//! The recogniser itself is a collaborator behind [`SpeechRecognizer`]; this
//! module owns the button label, the listening flag and the failure notice.

use thiserror::Error;

/// Button label while idle.
pub const IDLE_LABEL: &str = "🎤 Voice";
/// Button label while a recognition session is running.
pub const LISTENING_LABEL: &str = "🎙 Listening...";
/// Notice raised when recognition fails.
pub const FAILURE_NOTICE: &str = "Speech recognition error! Try again.";

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("recognizer failed: {0}")]
    Recognizer(String),
}

/// A speech-to-text engine.
///
/// Results arrive later as [`RecognitionEvent`]s delivered by the host.
pub trait SpeechRecognizer {
    fn start(&mut self, language: &str) -> Result<(), VoiceError>;
    fn stop(&mut self);
}

/// Outcome of a recognition session.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    Transcript(String),
    Failure(String),
}

/// Recogniser driven entirely by host events (scripts, tests).
///
/// Starting and stopping only log; transcripts and failures are fed back
/// through [`VoiceInput::handle_event`].
#[derive(Debug, Default)]
pub struct ExternalRecognizer {
    active: bool,
}

impl ExternalRecognizer {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl SpeechRecognizer for ExternalRecognizer {
    fn start(&mut self, language: &str) -> Result<(), VoiceError> {
        log::debug!("External recognizer listening ({})", language);
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.active = false;
    }
}

/// Voice affordance state: hidden when no recogniser is available.
pub struct VoiceInput {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    language: String,
    listening: bool,
}

impl VoiceInput {
    pub fn new(recognizer: Option<Box<dyn SpeechRecognizer>>, language: impl Into<String>) -> Self {
        let voice = Self {
            recognizer,
            language: language.into(),
            listening: false,
        };
        if !voice.is_available() {
            log::info!("Speech recognition unavailable; voice input hidden");
        }
        voice
    }

    /// Voice input without a recogniser.
    pub fn unsupported() -> Self {
        Self::new(None, "en-US")
    }

    /// Whether the voice button is shown at all.
    pub fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn label(&self) -> &'static str {
        if self.listening {
            LISTENING_LABEL
        } else {
            IDLE_LABEL
        }
    }

    /// Starts listening. A no-op when unsupported or already listening.
    ///
    /// Returns a notice to show the user if the recogniser refused to start.
    pub fn start(&mut self) -> Option<&'static str> {
        let Some(recognizer) = self.recognizer.as_mut() else {
            return None;
        };
        if self.listening {
            return None;
        }
        match recognizer.start(&self.language) {
            Ok(()) => {
                self.listening = true;
                log::debug!("Voice input listening");
                None
            }
            Err(e) => {
                log::warn!("Failed to start speech recognition: {}", e);
                Some(FAILURE_NOTICE)
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.stop();
        }
        self.listening = false;
    }

    /// Applies a recognition result.
    ///
    /// A transcript is returned for the caller to put in the text field; a
    /// failure yields the notice text instead. Either way the session ends.
    /// Without a recogniser the event is dropped silently and `None` is returned.
    pub fn handle_event(
        &mut self,
        event: RecognitionEvent,
    ) -> Option<Result<String, &'static str>> {
        if !self.is_available() {
            log::debug!("Ignoring recognition event without a recognizer");
            return None;
        }
        self.stop();
        Some(match event {
            RecognitionEvent::Transcript(text) => {
                log::debug!("Voice transcript: {:?}", text);
                Ok(text)
            }
            RecognitionEvent::Failure(reason) => {
                log::warn!("Speech recognition failed: {}", reason);
                Err(FAILURE_NOTICE)
            }
        })
    }
}

impl std::fmt::Debug for VoiceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceInput")
            .field("available", &self.is_available())
            .field("language", &self.language)
            .field("listening", &self.listening)
            .finish()
    }
}
