//! Error types for the audio core.

use sonify_spec::{BackendError, SpecError, ValidationError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Unknown instrument preset.
    #[error("unknown instrument '{name}'")]
    UnknownInstrument {
        /// The requested preset name.
        name: String,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: f64,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Input data could not be turned into a series.
    #[error("invalid data: {message}")]
    InvalidData {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid data error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AudioError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidParameter {
            name: err.field,
            message: err.message,
        }
    }
}

impl From<SpecError> for AudioError {
    fn from(err: SpecError) -> Self {
        match err {
            SpecError::UnknownInstrument { name, .. } => Self::UnknownInstrument { name },
            SpecError::Invalid(v) => v.into(),
            SpecError::Json(e) => Self::invalid_param("config", e.to_string()),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::UnknownInstrument { .. } => "AUDIO_001",
            AudioError::InvalidSampleRate { .. } => "AUDIO_002",
            AudioError::InvalidDuration { .. } => "AUDIO_003",
            AudioError::InvalidFrequency { .. } => "AUDIO_004",
            AudioError::InvalidParameter { .. } => "AUDIO_005",
            AudioError::InvalidData { .. } => "AUDIO_006",
            AudioError::Io(_) => "AUDIO_007",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
