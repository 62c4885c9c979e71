//! Error types for wavscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WavscribeError {
    // Engine errors
    #[error("Recognition engine unavailable: {message}")]
    EngineUnavailable { message: String },

    #[error("Model not found at {path}")]
    ModelNotFound { path: String },

    // Audio errors
    #[error("Failed to open audio: {message}")]
    AudioOpen { message: String },

    #[error("Invalid audio format: expected {expected}, got {actual}")]
    InvalidFormat { expected: String, actual: String },

    #[error("Failed to read audio: {message}")]
    AudioRead { message: String },

    // Boundary errors, raised before any resource is touched
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{message}")]
    Usage { message: String },
}

impl WavscribeError {
    /// Stable machine-readable code used in the serialized error record.
    pub fn code(&self) -> &'static str {
        match self {
            WavscribeError::EngineUnavailable { .. } => "engine_unavailable",
            WavscribeError::ModelNotFound { .. } => "model_not_found",
            WavscribeError::AudioOpen { .. } => "audio_open_failed",
            WavscribeError::InvalidFormat { .. } => "invalid_audio_format",
            WavscribeError::AudioRead { .. } => "audio_read_failed",
            WavscribeError::Config { .. } => "config",
            WavscribeError::Usage { .. } => "usage",
        }
    }

    /// Process exit code for this error.
    ///
    /// Usage and configuration problems exit with 2 since they precede any
    /// resource access; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            WavscribeError::Usage { .. } | WavscribeError::Config { .. } => 2,
            _ => 1,
        }
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, WavscribeError>;
