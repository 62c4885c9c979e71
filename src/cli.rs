//! Command-line interface for wavscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Streaming speech-to-text for WAV files
#[derive(Parser, Debug)]
#[command(
    name = "wavscribe",
    version,
    about = "Streaming speech-to-text for WAV files"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// WAV file to transcribe (mono 16-bit PCM)
    #[arg(value_name = "WAV")]
    pub wav: Option<PathBuf>,

    /// Recognition model directory (falls back to configuration)
    #[arg(value_name = "MODEL")]
    pub model: Option<PathBuf>,

    /// Sample rate handed to the recognizer (default: 16000)
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress stderr output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: progress + partial results, -vv: build info)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wav_and_model_positionals() {
        let cli = Cli::try_parse_from(["wavscribe", "take.wav", "/models/small-en"]).unwrap();

        assert_eq!(cli.wav, Some(PathBuf::from("take.wav")));
        assert_eq!(cli.model, Some(PathBuf::from("/models/small-en")));
        assert_eq!(cli.sample_rate, None);
    }

    #[test]
    fn parses_sample_rate_flag() {
        let cli =
            Cli::try_parse_from(["wavscribe", "take.wav", "--sample-rate", "8000"]).unwrap();

        assert_eq!(cli.sample_rate, Some(8000));
    }

    #[test]
    fn positionals_are_optional() {
        let cli = Cli::try_parse_from(["wavscribe"]).unwrap();

        assert_eq!(cli.wav, None);
        assert_eq!(cli.model, None);
    }

    #[test]
    fn rejects_non_numeric_sample_rate() {
        assert!(Cli::try_parse_from(["wavscribe", "take.wav", "--sample-rate", "fast"]).is_err());
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["wavscribe", "-vv", "take.wav"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
