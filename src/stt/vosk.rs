//! Vosk-based recognition engine.
//!
//! This module provides a Vosk implementation of the SpeechEngine trait
//! using the vosk crate.
//!
//! # Feature Gate
//!
//! This module requires the `vosk` feature to be enabled and libvosk to be
//! available at link time. To build with Vosk support:
//!
//! ```bash
//! cargo build --features vosk
//! ```

use crate::error::{Result, WavscribeError};
use crate::stt::engine::{RecognitionResult, Recognizer, SpeechEngine};
use std::path::Path;

#[cfg(feature = "vosk")]
use vosk::{CompleteResult, DecodingState, LogLevel, Model};

/// Vosk-backed speech engine.
///
/// # Feature Gate
///
/// The real implementation is only available when the `vosk` feature is
/// enabled; without it, construction fails with `EngineUnavailable` so the
/// condition surfaces as a structured result instead of a compile hurdle
/// for downstream users.
#[derive(Debug)]
pub struct VoskEngine {
    _private: (),
}

#[cfg(feature = "vosk")]
impl VoskEngine {
    /// Create a new Vosk engine.
    ///
    /// Silences libvosk's internal Kaldi logging; the JSON record on stdout
    /// is the only output contract of a transcription run.
    pub fn new() -> Result<Self> {
        vosk::set_log_level(LogLevel::Error);
        Ok(Self { _private: () })
    }
}

#[cfg(not(feature = "vosk"))]
impl VoskEngine {
    /// Create a new Vosk engine (stub implementation).
    ///
    /// Always fails: this build carries no recognition backend.
    pub fn new() -> Result<Self> {
        Err(WavscribeError::EngineUnavailable {
            message: "built without the `vosk` feature; rebuild with --features vosk".to_string(),
        })
    }
}

#[cfg(feature = "vosk")]
impl SpeechEngine for VoskEngine {
    type Model = Model;
    type Recognizer = VoskRecognizer;

    fn load_model(&self, path: &Path) -> Result<Model> {
        Model::new(path.to_string_lossy()).ok_or_else(|| WavscribeError::EngineUnavailable {
            message: format!("failed to load model from {}", path.display()),
        })
    }

    fn recognizer(&self, model: &Model, sample_rate: u32) -> Result<VoskRecognizer> {
        let inner = vosk::Recognizer::new(model, sample_rate as f32).ok_or_else(|| {
            WavscribeError::EngineUnavailable {
                message: format!("failed to create recognizer at {} Hz", sample_rate),
            }
        })?;
        Ok(VoskRecognizer { inner })
    }
}

/// Stateful Vosk recognizer for one stream.
#[cfg(feature = "vosk")]
pub struct VoskRecognizer {
    inner: vosk::Recognizer,
}

#[cfg(feature = "vosk")]
fn text_of(result: CompleteResult) -> RecognitionResult {
    match result {
        CompleteResult::Single(single) => RecognitionResult::from_text(single.text),
        CompleteResult::Multiple(multiple) => RecognitionResult::from_text(
            multiple
                .alternatives
                .first()
                .map(|alt| alt.text)
                .unwrap_or_default(),
        ),
    }
}

#[cfg(feature = "vosk")]
impl Recognizer for VoskRecognizer {
    fn accept_frame(&mut self, frame: &[i16]) -> Result<bool> {
        match self.inner.accept_waveform(frame) {
            Ok(DecodingState::Finalized) => Ok(true),
            Ok(DecodingState::Failed) => Err(WavscribeError::EngineUnavailable {
                message: "recognizer failed to decode frame".to_string(),
            }),
            Ok(_) => Ok(false),
            Err(e) => Err(WavscribeError::EngineUnavailable {
                message: format!("recognizer rejected frame: {}", e),
            }),
        }
    }

    fn partial_result(&mut self) -> RecognitionResult {
        text_of(self.inner.result())
    }

    fn final_result(&mut self) -> RecognitionResult {
        text_of(self.inner.final_result())
    }
}

/// Placeholder model handle (without the vosk feature).
#[cfg(not(feature = "vosk"))]
#[derive(Debug)]
pub struct VoskModel {
    _private: (),
}

/// Placeholder recognizer (without the vosk feature).
#[cfg(not(feature = "vosk"))]
#[derive(Debug)]
pub struct VoskRecognizer {
    _private: (),
}

// The stub engine cannot be constructed, so these impls exist only to keep
// VoskEngine a valid SpeechEngine in every build.
#[cfg(not(feature = "vosk"))]
impl SpeechEngine for VoskEngine {
    type Model = VoskModel;
    type Recognizer = VoskRecognizer;

    fn load_model(&self, _path: &Path) -> Result<VoskModel> {
        Err(unavailable())
    }

    fn recognizer(&self, _model: &VoskModel, _sample_rate: u32) -> Result<VoskRecognizer> {
        Err(unavailable())
    }
}

#[cfg(not(feature = "vosk"))]
impl Recognizer for VoskRecognizer {
    fn accept_frame(&mut self, _frame: &[i16]) -> Result<bool> {
        Err(unavailable())
    }

    fn partial_result(&mut self) -> RecognitionResult {
        RecognitionResult::default()
    }

    fn final_result(&mut self) -> RecognitionResult {
        RecognitionResult::default()
    }
}

#[cfg(not(feature = "vosk"))]
fn unavailable() -> WavscribeError {
    WavscribeError::EngineUnavailable {
        message: "built without the `vosk` feature; rebuild with --features vosk".to_string(),
    }
}
