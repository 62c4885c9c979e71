use anyhow::Result;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use wavscribe::cli::{Cli, Commands};
use wavscribe::config::Config;
use wavscribe::outcome::{Outcome, Transcript};
use wavscribe::stt::vosk::VoskEngine;
use wavscribe::transcribe::Transcriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "wavscribe",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    match run(&cli) {
        Ok(transcript) => {
            println!("{}", serde_json::to_string(&Outcome::from(transcript))?);
        }
        Err(err) => {
            // The record on stdout is the contract; stderr is for humans.
            println!("{}", serde_json::to_string(&Outcome::failure(&err))?);
            if !cli.quiet {
                eprintln!("{}", format!("Error: {}", err).red());
            }
            std::process::exit(err.exit_code());
        }
    }

    Ok(())
}

/// Resolve inputs and run one transcription.
fn run(cli: &Cli) -> wavscribe::Result<Transcript> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose > 0 && !cli.quiet;

    let Some(wav_path) = cli.wav.as_deref() else {
        return Err(usage());
    };
    let model_path = match cli.model.clone().or(config.stt.model_path) {
        Some(path) => path,
        None => return Err(usage()),
    };
    let sample_rate = cli.sample_rate.unwrap_or(config.stt.sample_rate);

    if cli.verbose > 1 && !cli.quiet {
        eprintln!("wavscribe {}", wavscribe::version_string());
    }
    if verbose {
        eprintln!(
            "Transcribing {} with model {} at {} Hz",
            wav_path.display(),
            model_path.display(),
            sample_rate
        );
    }

    let engine = VoskEngine::new()?;
    Transcriber::new(engine)
        .with_verbose(verbose)
        .transcribe_file(wav_path, &model_path, sample_rate)
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/wavscribe/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> wavscribe::Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else {
        Config::load_or_default(&Config::default_path())?
    };

    Ok(config.with_env_overrides())
}

fn usage() -> wavscribe::WavscribeError {
    wavscribe::WavscribeError::Usage {
        message: "usage: wavscribe <WAV> <MODEL> [--sample-rate HZ]".to_string(),
    }
}
