//! Note events and spatial positions.

use serde::{Deserialize, Serialize};

/// A point in listener space (meters).
///
/// Convention: `x` is listener-right, `y` is listener-forward, `z` is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// The origin, where the listener sits by default.
    pub const ORIGIN: Position = Position {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector from `other` to `self`.
    pub fn relative_to(&self, other: &Position) -> Position {
        Position {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    /// Euclidean length of the position vector.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns true if all coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

/// A single note to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteEvent {
    /// Fundamental frequency in Hz.
    pub frequency: f64,
    /// Start time in seconds.
    pub start_time: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Low-pass cutoff in Hz. `None` or a non-positive value disables filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<f64>,
    /// Source position. `None` places the note at the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl NoteEvent {
    /// Creates an unfiltered note at the origin.
    pub fn new(frequency: f64, start_time: f64, duration: f64) -> Self {
        Self {
            frequency,
            start_time,
            duration,
            cutoff: None,
            position: None,
        }
    }

    /// Sets the low-pass cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Sets the source position.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// The cutoff to filter with, if filtering applies.
    pub fn effective_cutoff(&self) -> Option<f64> {
        self.cutoff.filter(|&c| c > 0.0)
    }

    /// The source position, defaulting to the origin.
    pub fn position_or_origin(&self) -> Position {
        self.position.unwrap_or(Position::ORIGIN)
    }
}
