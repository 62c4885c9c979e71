//! Waveform source abstraction.

use crate::error::Result;

/// A stream of 16-bit PCM audio with a self-describing format.
///
/// This trait allows swapping implementations (real WAV file vs in-memory
/// stub). The format accessors must be callable before any frame is read;
/// the transcriber validates them first and rejects anything that is not
/// mono 16-bit without consuming audio.
pub trait WaveformSource {
    /// Number of interleaved channels in the stream.
    fn channels(&self) -> u16;

    /// Width of one sample in bytes.
    fn sample_width_bytes(&self) -> u16;

    /// Sample rate of the stream in Hz.
    fn sample_rate(&self) -> u32;

    /// Read the next frame of up to `max_samples` samples.
    ///
    /// An empty vector signals end of stream. The final frame of a stream
    /// may be shorter than `max_samples`.
    fn read_frame(&mut self, max_samples: usize) -> Result<Vec<i16>>;
}

/// In-memory waveform source with a settable format.
///
/// Used for deterministic tests; the reported format is independent of the
/// sample data so format-validation paths can be exercised directly.
#[derive(Debug, Clone)]
pub struct MemorySource {
    samples: Vec<i16>,
    position: usize,
    channels: u16,
    sample_width_bytes: u16,
    sample_rate: u32,
}

impl MemorySource {
    /// Create a mono 16-bit source over the given samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            position: 0,
            channels: 1,
            sample_width_bytes: 2,
            sample_rate,
        }
    }

    /// Override the reported format.
    pub fn with_format(mut self, channels: u16, sample_width_bytes: u16) -> Self {
        self.channels = channels;
        self.sample_width_bytes = sample_width_bytes;
        self
    }
}

impl WaveformSource for MemorySource {
    fn channels(&self) -> u16 {
        self.channels
    }

    fn sample_width_bytes(&self) -> u16 {
        self.sample_width_bytes
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn read_frame(&mut self, max_samples: usize) -> Result<Vec<i16>> {
        if self.position >= self.samples.len() {
            return Ok(Vec::new());
        }

        let end = std::cmp::min(self.position + max_samples, self.samples.len());
        let frame = self.samples[self.position..end].to_vec();
        self.position = end;

        Ok(frame)
    }
}
