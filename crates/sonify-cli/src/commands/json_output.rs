//! JSON output types for the `--json` flag.
//!
//! Each command prints exactly one JSON document on stdout so scripts can
//! parse the result without scraping colored text.

use serde::{Deserialize, Serialize};
use sonify_spec::{Adsr, BackendError};

/// Error codes for failures raised by the CLI itself.
///
/// Library failures pass their own `SPEC_xxx` / `AUDIO_xxx` codes through.
pub mod error_codes {
    /// Input or config file could not be loaded
    pub const INPUT: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g. "CLI_001", "AUDIO_004")
    pub code: String,
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Builds an error from a library error, keeping its code.
    pub fn from_backend<E: BackendError>(err: &E) -> Self {
        Self::new(err.code(), err.message())
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderSummary {
    pub output: String,
    pub instrument: String,
    pub mode: String,
    pub channels: u16,
    pub sample_rate: u32,
    pub num_samples: usize,
    pub duration_seconds: f64,
    pub data_points: usize,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Output of `sonify render --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

impl RenderOutput {
    pub fn success(result: RenderSummary) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    pub fn failure(error: JsonError) -> Self {
        Self {
            success: false,
            result: None,
            errors: vec![error],
        }
    }
}

/// One preset in `sonify presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetInfo {
    pub name: String,
    pub harmonics: Vec<f64>,
    pub vibrato_rate: f64,
    pub vibrato_width: f64,
    pub envelope: Adsr,
}

/// Output of `sonify presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetsOutput {
    pub presets: Vec<PresetInfo>,
}
