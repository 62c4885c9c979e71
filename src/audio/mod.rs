//! Audio sources for the transcription pipeline.

pub mod source;
pub mod wav;

pub use source::{MemorySource, WaveformSource};
pub use wav::WavFileSource;
