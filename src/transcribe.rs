//! Streaming transcription orchestration.
//!
//! Validates the input, drives the recognizer frame by frame, collects
//! every partial result the engine emits plus the one final result, and
//! merges them into a single transcript.

use crate::aggregate::join_texts;
use crate::audio::source::WaveformSource;
use crate::audio::wav::WavFileSource;
use crate::defaults;
use crate::error::{Result, WavscribeError};
use crate::outcome::Transcript;
use crate::stt::engine::{Recognizer, SpeechEngine};
use std::path::Path;

/// Orchestrates one transcription run over an injected engine.
///
/// Every run owns its model, recognizer, and source exclusively; nothing is
/// pooled or reused across calls. All failures are terminal: a run either
/// completes fully or reports exactly one classified error.
pub struct Transcriber<E: SpeechEngine> {
    engine: E,
    frame_samples: usize,
    verbose: bool,
}

impl<E: SpeechEngine> Transcriber<E> {
    /// Create a transcriber with the default frame size.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            frame_samples: defaults::FRAME_SAMPLES,
            verbose: false,
        }
    }

    /// Override how many samples are read from the source per frame.
    pub fn with_frame_samples(mut self, frame_samples: usize) -> Self {
        self.frame_samples = frame_samples;
        self
    }

    /// Print per-result progress to stderr while streaming.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Transcribe a WAV file on disk.
    ///
    /// The model location is checked before the waveform is touched, so a
    /// missing model never opens the audio file.
    ///
    /// # Errors
    /// `ModelNotFound` if `model_path` does not exist, `AudioOpen` if the
    /// WAV cannot be opened, plus everything `transcribe_stream` returns.
    pub fn transcribe_file(
        &self,
        wav_path: &Path,
        model_path: &Path,
        sample_rate: u32,
    ) -> Result<Transcript> {
        if !model_path.exists() {
            return Err(WavscribeError::ModelNotFound {
                path: model_path.display().to_string(),
            });
        }

        let mut source = WavFileSource::open(wav_path)?;
        self.transcribe_stream(&mut source, model_path, sample_rate)
    }

    /// Transcribe an already-opened waveform source.
    ///
    /// The source format is validated before the model is loaded or any
    /// frame is consumed. The frame loop ends only when a read returns no
    /// samples; after that, exactly one final result is taken from the
    /// recognizer regardless of how many partials were collected.
    pub fn transcribe_stream<S: WaveformSource>(
        &self,
        source: &mut S,
        model_path: &Path,
        sample_rate: u32,
    ) -> Result<Transcript> {
        if source.channels() != 1 || source.sample_width_bytes() != 2 {
            return Err(WavscribeError::InvalidFormat {
                expected: "mono 16-bit PCM".to_string(),
                actual: format!(
                    "{} channel(s), {}-byte samples",
                    source.channels(),
                    source.sample_width_bytes()
                ),
            });
        }

        let model = self.engine.load_model(model_path)?;
        let mut recognizer = self.engine.recognizer(&model, sample_rate)?;

        let mut results = Vec::new();
        loop {
            let frame = source.read_frame(self.frame_samples)?;
            if frame.is_empty() {
                break;
            }
            if recognizer.accept_frame(&frame)? {
                let result = recognizer.partial_result();
                if self.verbose {
                    eprintln!("partial: {}", result.text);
                }
                results.push(result);
            }
        }

        // The remainder of the utterance that never hit a boundary.
        let final_result = recognizer.final_result();
        if self.verbose {
            eprintln!("final: {}", final_result.text);
        }
        results.push(final_result);

        Ok(Transcript {
            text: join_texts(&results),
            confidence: defaults::CONFIDENCE,
        })
    }
}
