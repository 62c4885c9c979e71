//! The single structured record reported for one transcription run.

use crate::error::WavscribeError;
use serde::Serialize;

/// A successful transcription.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    /// Space-joined text of every partial result followed by the final one.
    pub text: String,
    /// Fixed placeholder score, see `defaults::CONFIDENCE`.
    pub confidence: f32,
}

/// What one invocation reports: a transcript or a classified failure.
///
/// Serializes to the wire shape consumers parse:
/// `{"text": ..., "confidence": ...}` or `{"error": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Transcribed(Transcript),
    Failed {
        error: &'static str,
        message: String,
    },
}

impl Outcome {
    /// Build the error arm from a classified failure.
    pub fn failure(err: &WavscribeError) -> Self {
        Outcome::Failed {
            error: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<Transcript> for Outcome {
    fn from(transcript: Transcript) -> Self {
        Outcome::Transcribed(transcript)
    }
}
