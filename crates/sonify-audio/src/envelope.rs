//! ADSR amplitude envelope.
//!
//! The envelope is planned for a fixed note length: attack, decay and release
//! segment lengths come from the ADSR times, and the sustain segment fills
//! whatever is left. Notes too short for the full shape keep their attack and
//! split the remainder evenly between decay and release.

use sonify_spec::Adsr;

use crate::synthesis::sample_count;

/// Segment lengths, in samples, of an envelope planned for one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeSegments {
    pub attack: usize,
    pub decay: usize,
    pub sustain: usize,
    pub release: usize,
}

impl EnvelopeSegments {
    /// Plans segment lengths for a note of `num_samples` samples.
    pub fn plan(adsr: &Adsr, num_samples: usize, sample_rate: f64) -> Self {
        let attack = sample_count(adsr.attack, sample_rate);
        let decay = sample_count(adsr.decay, sample_rate);
        let release = sample_count(adsr.release, sample_rate);

        let used = attack
            .checked_add(decay)
            .and_then(|n| n.checked_add(release));
        if let Some(used) = used.filter(|&used| used <= num_samples) {
            return Self {
                attack,
                decay,
                sustain: num_samples - used,
                release,
            };
        }

        // Too short for the full shape (or the times overflow a sample count)
        let remaining = num_samples.saturating_sub(attack);
        let decay = remaining / 2;
        Self {
            attack,
            decay,
            sustain: 0,
            release: remaining - decay,
        }
    }

    /// Sum of all segment lengths. May exceed the note when the attack alone is too long.
    pub fn total(&self) -> usize {
        self.attack
            .saturating_add(self.decay)
            .saturating_add(self.sustain)
            .saturating_add(self.release)
    }
}

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// A single value is just `start`; zero values is empty.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |k| start + step * k as f64)
}

/// Builds the envelope curve for a note of `num_samples` samples.
///
/// Always returns exactly `num_samples` values: a short plan is padded with
/// zeros and an overlong attack is truncated.
pub fn adsr_curve(adsr: &Adsr, num_samples: usize, sample_rate: f64) -> Vec<f64> {
    let seg = EnvelopeSegments::plan(adsr, num_samples, sample_rate);

    let mut envelope: Vec<f64> = linspace(0.0, 1.0, seg.attack)
        .chain(linspace(1.0, adsr.sustain, seg.decay))
        .chain(std::iter::repeat(adsr.sustain).take(seg.sustain))
        .chain(linspace(adsr.sustain, 0.0, seg.release))
        .take(num_samples)
        .collect();

    envelope.resize(num_samples, 0.0);
    envelope
}

/// Multiplies `signal` in place by its ADSR envelope.
pub fn apply_adsr(signal: &mut [f64], adsr: &Adsr, sample_rate: f64) {
    let envelope = adsr_curve(adsr, signal.len(), sample_rate);
    for (sample, gain) in signal.iter_mut().zip(envelope) {
        *sample *= gain;
    }
}
