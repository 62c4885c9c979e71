//! End-to-end pipeline tests over real WAV files and a scripted engine.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wavscribe::{MockEngine, Outcome, Transcriber, WavscribeError};

/// Write a PCM WAV file into `dir` and return its path.
fn write_wav(dir: &Path, name: &str, channels: u16, bits: u16, samples: &[i16]) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels,
        sample_rate: 16000,
        bits_per_sample: bits,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
    path
}

fn workspace() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn transcribes_partials_and_final_in_production_order() {
    let dir = workspace();
    // 10000 samples → frames of 4000, 4000, 2000
    let wav = write_wav(dir.path(), "take.wav", 1, 16, &vec![0i16; 10000]);
    let engine = MockEngine::new()
        .with_segment(1, "the quick")
        .with_segment(3, "brown fox")
        .with_final("jumps");

    let transcript = Transcriber::new(engine.clone())
        .transcribe_file(&wav, dir.path(), 16000)
        .unwrap();

    assert_eq!(transcript.text, "the quick brown fox jumps");
    assert_eq!(transcript.confidence, 0.85);
    assert_eq!(engine.frames_fed(), 3);
}

#[test]
fn stereo_wav_is_rejected_without_feeding_the_engine() {
    let dir = workspace();
    let wav = write_wav(dir.path(), "stereo.wav", 2, 16, &vec![0i16; 1000]);
    let engine = MockEngine::new();

    let result = Transcriber::new(engine.clone()).transcribe_file(&wav, dir.path(), 16000);

    match result {
        Err(WavscribeError::InvalidFormat { actual, .. }) => {
            assert!(actual.contains("2 channel(s)"), "actual: {}", actual);
        }
        other => panic!("Expected InvalidFormat, got {:?}", other.map(|t| t.text)),
    }
    assert_eq!(engine.frames_fed(), 0);
}

#[test]
fn eight_bit_wav_is_rejected_without_feeding_the_engine() {
    let dir = workspace();
    let path = dir.path().join("narrow.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 8,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for _ in 0..100 {
        writer.write_sample(0i8).unwrap();
    }
    writer.finalize().unwrap();
    let engine = MockEngine::new();

    let result = Transcriber::new(engine.clone()).transcribe_file(&path, dir.path(), 16000);

    assert!(matches!(result, Err(WavscribeError::InvalidFormat { .. })));
    assert_eq!(engine.frames_fed(), 0);
}

#[test]
fn missing_model_reports_the_path_and_skips_the_audio() {
    let engine = MockEngine::new();

    // The WAV path is bogus too; ModelNotFound proves the audio was never
    // opened, since opening it would have failed first otherwise.
    let result = Transcriber::new(engine).transcribe_file(
        Path::new("/nonexistent/take.wav"),
        Path::new("/nonexistent/model-small-en"),
        16000,
    );

    match result {
        Err(WavscribeError::ModelNotFound { path }) => {
            assert!(path.contains("model-small-en"), "path: {}", path);
        }
        other => panic!("Expected ModelNotFound, got {:?}", other.map(|t| t.text)),
    }
}

#[test]
fn missing_wav_with_present_model_is_audio_open_failed() {
    let dir = workspace();
    let engine = MockEngine::new();

    let result = Transcriber::new(engine).transcribe_file(
        Path::new("/nonexistent/take.wav"),
        dir.path(),
        16000,
    );

    assert!(matches!(result, Err(WavscribeError::AudioOpen { .. })));
}

#[test]
fn identical_runs_serialize_byte_identically() {
    let dir = workspace();
    let wav = write_wav(dir.path(), "take.wav", 1, 16, &vec![0i16; 9000]);

    let run = || {
        let engine = MockEngine::new()
            .with_segment(2, "hello")
            .with_final("world");
        let transcript = Transcriber::new(engine)
            .transcribe_file(&wav, dir.path(), 16000)
            .unwrap();
        serde_json::to_string(&Outcome::from(transcript)).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn zero_length_stream_yields_only_the_final_result() {
    let dir = workspace();
    let wav = write_wav(dir.path(), "empty.wav", 1, 16, &[]);
    let engine = MockEngine::new()
        .with_segment(1, "never reached")
        .with_final("");

    let transcript = Transcriber::new(engine.clone())
        .transcribe_file(&wav, dir.path(), 16000)
        .unwrap();

    assert_eq!(engine.frames_fed(), 0);
    assert_eq!(transcript.text, "");
    assert_eq!(transcript.confidence, 0.85);
}

#[test]
fn empty_partial_text_keeps_its_separators() {
    let dir = workspace();
    let wav = write_wav(dir.path(), "take.wav", 1, 16, &vec![0i16; 9000]);
    let engine = MockEngine::new()
        .with_segment(1, "hello")
        .with_segment(2, "")
        .with_final("world");

    let transcript = Transcriber::new(engine)
        .transcribe_file(&wav, dir.path(), 16000)
        .unwrap();

    assert_eq!(transcript.text, "hello  world");
}

#[test]
fn success_record_has_the_wire_shape() {
    let dir = workspace();
    let wav = write_wav(dir.path(), "take.wav", 1, 16, &vec![0i16; 100]);
    let engine = MockEngine::new().with_final("it works");

    let transcript = Transcriber::new(engine)
        .transcribe_file(&wav, dir.path(), 16000)
        .unwrap();
    let record = serde_json::to_string(&Outcome::from(transcript)).unwrap();

    assert_eq!(record, r#"{"text":"it works","confidence":0.85}"#);
}

#[test]
fn failure_record_has_the_wire_shape() {
    let engine = MockEngine::new();
    let err = Transcriber::new(engine)
        .transcribe_file(
            Path::new("/nonexistent/take.wav"),
            Path::new("/nonexistent/model"),
            16000,
        )
        .unwrap_err();
    let record = serde_json::to_string(&Outcome::failure(&err)).unwrap();

    assert_eq!(
        record,
        r#"{"error":"model_not_found","message":"Model not found at /nonexistent/model"}"#
    );
}
