//! Speech recognition engines.

pub mod engine;
pub mod vosk;

pub use engine::{MockEngine, RecognitionResult, Recognizer, SpeechEngine};
pub use vosk::VoskEngine;
