//! wavscribe - Streaming speech-to-text for WAV files
//!
//! Feeds fixed-size PCM frames from a WAV file through a stateful speech
//! recognizer, collects the partial results it emits along the way plus one
//! final result, and reports a single aggregated transcript as a JSON record.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod aggregate;
pub mod audio;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod outcome;
pub mod stt;
pub mod transcribe;

// Core traits (source → recognizer → transcript)
pub use audio::source::WaveformSource;
pub use audio::wav::WavFileSource;
pub use stt::engine::{RecognitionResult, Recognizer, SpeechEngine};

// Engines
pub use stt::engine::MockEngine;
pub use stt::vosk::VoskEngine;

// Pipeline
pub use transcribe::Transcriber;

// Error handling
pub use error::{Result, WavscribeError};

// Reported record
pub use outcome::{Outcome, Transcript};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.1+abc1234"` when git hash is available, `"0.1.1"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
