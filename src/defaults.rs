//! Default configuration constants for wavscribe.
//!
//! This module provides shared constants used across the transcription
//! pipeline to ensure consistency and eliminate duplication.

/// Default audio sample rate in Hz.
///
/// 16kHz is the standard for speech recognition and what most recognition
/// models are trained on. The rate is passed to the recognizer as-is; the
/// source audio is not resampled.
pub const SAMPLE_RATE: u32 = 16000;

/// Number of 16-bit samples read from the source per frame.
///
/// 4000 samples is 250ms of audio at 16kHz, large enough to amortize the
/// per-call decoding cost while keeping partial results prompt. The last
/// frame of a stream may be shorter.
pub const FRAME_SAMPLES: usize = 4000;

/// Confidence value attached to every successful transcript.
///
/// Streaming recognizers generally expose no utterance-level confidence
/// (Vosk reports per-word scores only, and only when configured to), so this
/// is a fixed placeholder rather than a computed value.
pub const CONFIDENCE: f32 = 0.85;
