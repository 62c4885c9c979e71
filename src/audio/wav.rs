//! WAV file waveform source.

use crate::audio::source::WaveformSource;
use crate::error::{Result, WavscribeError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Waveform source backed by a WAV file on disk.
///
/// The container header is parsed on open; samples are decoded lazily as
/// frames are read, so a multi-hour recording never sits in memory at once.
/// No resampling or channel mixing happens here; the stream is handed to
/// the recognizer exactly as stored.
pub struct WavFileSource {
    reader: hound::WavReader<BufReader<File>>,
    spec: hound::WavSpec,
}

impl WavFileSource {
    /// Open a WAV file for reading.
    ///
    /// # Errors
    /// Returns `WavscribeError::AudioOpen` if the file cannot be opened or
    /// its header is not a valid WAV container.
    pub fn open(path: &Path) -> Result<Self> {
        let reader = hound::WavReader::open(path).map_err(|e| WavscribeError::AudioOpen {
            message: format!("{}: {}", path.display(), e),
        })?;
        let spec = reader.spec();

        Ok(Self { reader, spec })
    }
}

impl WaveformSource for WavFileSource {
    fn channels(&self) -> u16 {
        self.spec.channels
    }

    fn sample_width_bytes(&self) -> u16 {
        self.spec.bits_per_sample.div_ceil(8)
    }

    fn sample_rate(&self) -> u32 {
        self.spec.sample_rate
    }

    fn read_frame(&mut self, max_samples: usize) -> Result<Vec<i16>> {
        let mut frame = Vec::with_capacity(max_samples);
        for sample in self.reader.samples::<i16>().take(max_samples) {
            let sample = sample.map_err(|e| WavscribeError::AudioRead {
                message: e.to_string(),
            })?;
            frame.push(sample);
        }
        Ok(frame)
    }
}
