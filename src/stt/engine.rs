//! Speech engine abstraction.
//!
//! Models and recognizers are heavyweight external resources; this module
//! keeps them behind opaque handles so the transcriber can be driven by a
//! real backend or a deterministic mock.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One decoding output from a recognizer.
///
/// Backends attach extra fields (word timings, per-word scores); only the
/// text survives aggregation, so everything else is dropped at this
/// boundary. A missing text deserializes to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionResult {
    pub text: String,
}

impl RecognitionResult {
    /// Create a result carrying only text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Factory for recognition resources.
///
/// Construction of the engine value itself establishes that the backing
/// library is usable; `load_model` and `recognizer` then build the per-run
/// resources. Each transcription run owns its recognizer exclusively.
pub trait SpeechEngine {
    type Model;
    type Recognizer: Recognizer;

    /// Load the recognition model from the given location.
    fn load_model(&self, path: &Path) -> Result<Self::Model>;

    /// Build a stateful recognizer for one stream at the given sample rate.
    fn recognizer(&self, model: &Self::Model, sample_rate: u32) -> Result<Self::Recognizer>;
}

/// Stateful streaming decoder.
pub trait Recognizer {
    /// Feed one frame of mono 16-bit PCM samples.
    ///
    /// Returns `true` when the engine has accumulated enough evidence to
    /// close an utterance; the caller should then take the partial result.
    fn accept_frame(&mut self, frame: &[i16]) -> Result<bool>;

    /// Take the result for the utterance closed by the last `accept_frame`.
    fn partial_result(&mut self) -> RecognitionResult;

    /// Take the result for any remaining audio after end of stream.
    ///
    /// Called exactly once per stream, after the last frame.
    fn final_result(&mut self) -> RecognitionResult;
}

/// A scripted utterance boundary for [`MockEngine`].
#[derive(Debug, Clone)]
struct Segment {
    /// Boundary fires when the cumulative fed-frame count reaches this.
    after_frames: usize,
    text: String,
}

/// Deterministic engine for tests.
///
/// Emits utterance boundaries at scripted frame counts and a fixed final
/// text, and counts every frame fed across all recognizers it creates so
/// tests can assert that validation failures never reach the engine.
#[derive(Debug, Clone, Default)]
pub struct MockEngine {
    segments: Vec<Segment>,
    final_text: String,
    frames_fed: Arc<AtomicUsize>,
}

impl MockEngine {
    /// Create a mock that only ever emits an empty final result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an utterance boundary: after the `after_frames`-th fed frame,
    /// `accept_frame` returns true and the partial result carries `text`.
    pub fn with_segment(mut self, after_frames: usize, text: &str) -> Self {
        self.segments.push(Segment {
            after_frames,
            text: text.to_string(),
        });
        self
    }

    /// Set the text of the final result.
    pub fn with_final(mut self, text: &str) -> Self {
        self.final_text = text.to_string();
        self
    }

    /// Total frames fed to recognizers created by this engine.
    pub fn frames_fed(&self) -> usize {
        self.frames_fed.load(Ordering::SeqCst)
    }
}

impl SpeechEngine for MockEngine {
    type Model = ();
    type Recognizer = ScriptedRecognizer;

    fn load_model(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn recognizer(&self, _model: &(), _sample_rate: u32) -> Result<ScriptedRecognizer> {
        Ok(ScriptedRecognizer {
            segments: self.segments.iter().cloned().collect(),
            final_text: self.final_text.clone(),
            frames_fed: Arc::clone(&self.frames_fed),
            fed: 0,
            pending: None,
        })
    }
}

/// Recognizer produced by [`MockEngine`].
#[derive(Debug)]
pub struct ScriptedRecognizer {
    segments: VecDeque<Segment>,
    final_text: String,
    frames_fed: Arc<AtomicUsize>,
    fed: usize,
    pending: Option<String>,
}

impl Recognizer for ScriptedRecognizer {
    fn accept_frame(&mut self, _frame: &[i16]) -> Result<bool> {
        self.fed += 1;
        self.frames_fed.fetch_add(1, Ordering::SeqCst);

        if let Some(segment) = self.segments.front()
            && segment.after_frames == self.fed
        {
            self.pending = self.segments.pop_front().map(|s| s.text);
            return Ok(true);
        }
        Ok(false)
    }

    fn partial_result(&mut self) -> RecognitionResult {
        RecognitionResult::from_text(self.pending.take().unwrap_or_default())
    }

    fn final_result(&mut self) -> RecognitionResult {
        RecognitionResult::from_text(self.final_text.clone())
    }
}
