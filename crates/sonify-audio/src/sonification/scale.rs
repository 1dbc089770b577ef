//! Range mapping helpers used by the mapper.

/// MIDI note number of A4.
pub const A4_MIDI: f64 = 69.0;

/// Frequency of A4 in Hz.
pub const A4_FREQ: f64 = 440.0;

/// Linearly rescales `data` so its minimum maps to `out_min` and its maximum
/// to `out_max`.
///
/// Computes `out_min + (v - min) * (out_max - out_min) / (max - min)`.
///
/// When every value is equal the range is degenerate and every output is
/// `out_min`.
pub fn scale_data(data: &[f64], out_min: f64, out_max: f64) -> Vec<f64> {
    let (min, max) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;
    if data.is_empty() || span == 0.0 {
        return vec![out_min; data.len()];
    }
    data.iter()
        .map(|&v| out_min + (v - min) * (out_max - out_min) / span)
        .collect()
}

/// Converts a MIDI note number to Hz (equal temperament, A4 = 440 Hz).
pub fn midi_to_freq(note: f64) -> f64 {
    A4_FREQ * 2f64.powf((note - A4_MIDI) / 12.0)
}
