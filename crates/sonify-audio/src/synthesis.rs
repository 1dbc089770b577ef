//! Additive synthesis with harmonic partials and vibrato.
//!
//! A note is built by summing weighted sine waves at integer multiples of the
//! fundamental. Vibrato is a sinusoidal phase offset, scaled by the harmonic
//! number so every partial bends by the same relative pitch amount.

use std::f64::consts::PI;

use sonify_spec::Instrument;
use tracing::warn;

use crate::render::normalize_peak;

/// Converts a duration in seconds to a sample count (`round(seconds * rate)`).
pub fn sample_count(seconds: f64, sample_rate: f64) -> usize {
    (seconds * sample_rate).round().max(0.0) as usize
}

/// Sinusoidal phase modulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vibrato {
    /// Modulation rate in Hz (must be positive).
    pub rate: f64,
    /// Modulation depth.
    pub width: f64,
}

impl Vibrato {
    /// Phase offset at time `t` (seconds) for the fundamental.
    #[inline]
    pub fn phase(&self, t: f64) -> f64 {
        (self.width / self.rate) * (2.0 * PI * self.rate * t).sin()
    }
}

/// Additive synthesis using harmonic partials.
#[derive(Debug, Clone)]
pub struct HarmonicSynth<'a> {
    /// Base frequency in Hz.
    pub base_freq: f64,
    /// Harmonic weights (index 0 = fundamental, index 1 = 2nd harmonic, etc.).
    pub harmonics: &'a [f64],
    /// Optional vibrato.
    pub vibrato: Option<Vibrato>,
}

impl<'a> HarmonicSynth<'a> {
    /// Creates a synthesizer without vibrato.
    pub fn new(base_freq: f64, harmonics: &'a [f64]) -> Self {
        Self {
            base_freq,
            harmonics,
            vibrato: None,
        }
    }

    /// Creates a synthesizer playing `instrument` at `base_freq`.
    pub fn for_instrument(base_freq: f64, instrument: &'a Instrument) -> Self {
        let vibrato = instrument.has_vibrato().then_some(Vibrato {
            rate: instrument.vibrato_rate,
            width: instrument.vibrato_width,
        });
        Self {
            base_freq,
            harmonics: &instrument.harmonics,
            vibrato,
        }
    }

    /// Sets vibrato.
    pub fn with_vibrato(mut self, vibrato: Vibrato) -> Self {
        self.vibrato = Some(vibrato);
        self
    }

    /// Number of harmonics strictly below Nyquist.
    pub fn audible_harmonics(&self, sample_rate: f64) -> usize {
        let nyquist = sample_rate / 2.0;
        (1..=self.harmonics.len())
            .take_while(|&n| self.base_freq * (n as f64) < nyquist)
            .count()
    }

    /// Generates `num_samples` samples, peak-normalized to 1.0.
    ///
    /// Partials at or above Nyquist are skipped. If nothing survives, the
    /// output is all zeros.
    pub fn synthesize(&self, num_samples: usize, sample_rate: f64) -> Vec<f64> {
        let mut output = vec![0.0; num_samples];
        let nyquist = sample_rate / 2.0;
        let two_pi = 2.0 * PI;

        let phase: Option<Vec<f64>> = self.vibrato.map(|v| {
            (0..num_samples)
                .map(|k| v.phase(k as f64 / sample_rate))
                .collect()
        });

        for (h, &weight) in self.harmonics.iter().enumerate() {
            let multiple = (h + 1) as f64;
            let freq = self.base_freq * multiple;
            if freq >= nyquist {
                continue;
            }
            if weight == 0.0 {
                continue;
            }

            for (k, sample) in output.iter_mut().enumerate() {
                let t = k as f64 / sample_rate;
                let offset = phase.as_ref().map_or(0.0, |p| multiple * p[k]);
                *sample += weight * (two_pi * freq * t + offset).sin();
            }
        }

        normalize_peak(&mut output);
        output
    }
}

/// Synthesizes one note of `instrument` as a raw mono signal.
///
/// The result has `round(sample_rate * duration)` samples and peak 1.0
/// (or is silent when every harmonic lies above Nyquist).
pub fn synthesize_note(
    frequency: f64,
    duration: f64,
    instrument: &Instrument,
    sample_rate: f64,
) -> Vec<f64> {
    let synth = HarmonicSynth::for_instrument(frequency, instrument);
    if synth.audible_harmonics(sample_rate) == 0 {
        warn!(
            frequency,
            sample_rate, "every harmonic is at or above Nyquist, note renders silent"
        );
    }
    synth.synthesize(sample_count(duration, sample_rate), sample_rate)
}
