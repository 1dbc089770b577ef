//! Instrument definitions and the built-in preset registry.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Adsr {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Adsr {
    /// Creates new ADSR parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }
}

/// An additive-synthesis timbre with vibrato and an amplitude envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Instrument {
    /// Harmonic weights (index 0 = fundamental, index 1 = 2nd harmonic, etc.).
    pub harmonics: Vec<f64>,
    /// Vibrato rate in Hz (0 disables vibrato).
    #[serde(default)]
    pub vibrato_rate: f64,
    /// Vibrato depth.
    #[serde(default)]
    pub vibrato_width: f64,
    /// Amplitude envelope.
    pub envelope: Adsr,
}

impl Instrument {
    /// Creates an instrument without vibrato.
    pub fn new(harmonics: Vec<f64>, envelope: Adsr) -> Self {
        Self {
            harmonics,
            vibrato_rate: 0.0,
            vibrato_width: 0.0,
            envelope,
        }
    }

    /// Sets the vibrato rate (Hz) and width.
    pub fn with_vibrato(mut self, rate: f64, width: f64) -> Self {
        self.vibrato_rate = rate;
        self.vibrato_width = width;
        self
    }

    /// Returns true if vibrato is active.
    pub fn has_vibrato(&self) -> bool {
        self.vibrato_rate > 0.0
    }
}

static PRESETS: OnceLock<BTreeMap<&'static str, Instrument>> = OnceLock::new();

fn presets() -> &'static BTreeMap<&'static str, Instrument> {
    PRESETS.get_or_init(|| {
        let mut map = BTreeMap::new();
        map.insert(
            "piano",
            Instrument::new(vec![1.0, 0.5, 0.2, 0.1], Adsr::new(0.01, 0.1, 0.6, 0.4)),
        );
        map.insert(
            "violin",
            Instrument::new(
                vec![1.0, 0.8, 0.7, 0.6, 0.5, 0.4],
                Adsr::new(0.2, 0.1, 0.8, 0.3),
            )
            .with_vibrato(5.0, 2.0),
        );
        map.insert(
            "cello",
            Instrument::new(vec![1.0, 0.8, 0.5, 0.3], Adsr::new(0.15, 0.1, 0.7, 0.4))
                .with_vibrato(4.5, 3.0),
        );
        // Odd harmonics only
        map.insert(
            "flute",
            Instrument::new(
                vec![1.0, 0.0, 0.5, 0.0, 0.2],
                Adsr::new(0.1, 0.05, 0.9, 0.2),
            )
            .with_vibrato(6.0, 1.5),
        );
        map
    })
}

/// Looks up a built-in instrument preset by name.
pub fn preset(name: &str) -> Option<&'static Instrument> {
    presets().get(name)
}

/// Returns the names of all built-in presets in sorted order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    presets().keys().copied()
}

/// Looks up a preset, failing with [`SpecError::UnknownInstrument`].
pub fn resolve_instrument(name: &str) -> Result<&'static Instrument, SpecError> {
    preset(name).ok_or_else(|| SpecError::UnknownInstrument {
        name: name.to_string(),
        available: preset_names().collect::<Vec<_>>().join(", "),
    })
}
