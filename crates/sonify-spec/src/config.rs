//! Render configuration.
//!
//! A `RenderConfig` describes how a data set is turned into audio: which
//! instrument plays it, how long the mapped timeline is, whether the data is
//! mapped in 2D or 3D, and where the listener sits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, ValidationError};
use crate::instrument::{resolve_instrument, Instrument};
use crate::note::Position;
use crate::validation::{validate_instrument, validate_positive, validate_position};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// How data dimensions are mapped to note parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SonifyMode {
    /// X -> time, Y -> pitch.
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    /// X -> time and left/right, Y -> pitch and front/back, Z -> brightness and up/down.
    #[serde(rename = "3d")]
    ThreeD,
}

impl SonifyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SonifyMode::TwoD => "2d",
            SonifyMode::ThreeD => "3d",
        }
    }
}

impl FromStr for SonifyMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2d" => Ok(SonifyMode::TwoD),
            "3d" => Ok(SonifyMode::ThreeD),
            other => Err(ValidationError::new(
                "mode",
                format!("expected '2d' or '3d', found '{}'", other),
            )),
        }
    }
}

impl fmt::Display for SonifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output channel layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    /// Single channel, no spatialization.
    Mono,
    /// Left/right pair with distance attenuation and panning.
    #[default]
    Stereo,
}

impl ChannelLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelLayout::Mono => "mono",
            ChannelLayout::Stereo => "stereo",
        }
    }
}

impl FromStr for ChannelLayout {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mono" => Ok(ChannelLayout::Mono),
            "stereo" => Ok(ChannelLayout::Stereo),
            other => Err(ValidationError::new(
                "channels",
                format!("expected 'mono' or 'stereo', found '{}'", other),
            )),
        }
    }
}

/// Column names used when the input is a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ColumnNames {
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<String>,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
            z: None,
        }
    }
}

/// Parameters for a complete data-to-audio render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RenderConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Length of the timeline the data is mapped onto, in seconds.
    pub duration: f64,
    /// Extra buffer after `duration` so late notes can ring out, in seconds.
    pub tail: f64,
    /// Preset name.
    pub instrument: String,
    /// Inline instrument definition; overrides `instrument` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_def: Option<Instrument>,
    pub mode: SonifyMode,
    pub channels: ChannelLayout,
    pub listener: Position,
    pub columns: ColumnNames,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: 5.0,
            tail: 1.0,
            instrument: "piano".to_string(),
            instrument_def: None,
            mode: SonifyMode::default(),
            channels: ChannelLayout::default(),
            listener: Position::ORIGIN,
            columns: ColumnNames::default(),
        }
    }
}

impl RenderConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total buffer length in seconds (`duration + tail`).
    pub fn total_duration(&self) -> f64 {
        self.duration + self.tail
    }

    /// Resolves the instrument: the inline definition if present, else the preset.
    pub fn resolve_instrument(&self) -> Result<&Instrument, SpecError> {
        match &self.instrument_def {
            Some(def) => Ok(def),
            None => resolve_instrument(&self.instrument),
        }
    }

    /// Validates every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), SpecError> {
        let instrument = self.resolve_instrument()?;
        if self.sample_rate == 0 {
            return Err(ValidationError::new("sample_rate", "must be positive").into());
        }
        validate_positive("duration", self.duration)?;
        if !self.tail.is_finite() || self.tail < 0.0 {
            return Err(ValidationError::new(
                "tail",
                format!("must be finite and non-negative, found {}", self.tail),
            )
            .into());
        }
        validate_position("listener", &self.listener)?;
        validate_instrument(instrument).map_err(|e| e.within("instrument"))?;
        Ok(())
    }
}
