//! One-pole low-pass filter.
//!
//! `y[k] = y[k-1] + alpha * (x[k] - y[k-1])` with
//! `alpha = dt / (rc + dt)`, `rc = 1 / (2 pi cutoff)`, `dt = 1 / sample_rate`.
//! Each output depends on the previous one, so samples are processed strictly
//! in order.

use std::f64::consts::PI;

/// Smoothing coefficient for a cutoff frequency.
///
/// Tends to 1.0 (identity) as `cutoff` grows and to 0.0 as it approaches zero.
pub fn lowpass_alpha(cutoff: f64, sample_rate: f64) -> f64 {
    let rc = 1.0 / (2.0 * PI * cutoff);
    let dt = 1.0 / sample_rate;
    dt / (rc + dt)
}

/// One-pole IIR low-pass filter state.
#[derive(Debug, Clone)]
pub struct OnePoleLowpass {
    alpha: f64,
    prev: f64,
}

impl OnePoleLowpass {
    /// Creates a filter for `cutoff` Hz. The prior output starts at zero.
    pub fn new(cutoff: f64, sample_rate: f64) -> Self {
        Self {
            alpha: lowpass_alpha(cutoff, sample_rate),
            prev: 0.0,
        }
    }

    /// Returns the smoothing coefficient.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.prev += self.alpha * (input - self.prev);
        self.prev
    }

    /// Processes a buffer in place, in index order.
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Applies a fresh one-pole low-pass to `signal` in place.
pub fn apply_lowpass(signal: &mut [f64], cutoff: f64, sample_rate: f64) {
    OnePoleLowpass::new(cutoff, sample_rate).process_buffer(signal);
}
