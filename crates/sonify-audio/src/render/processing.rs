//! Buffer-level processing: peak detection, normalization and mixing.

use super::types::AudioBuffer;

/// Largest absolute sample value (0.0 for an empty slice).
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Divides `samples` by their peak so the new peak is 1.0.
///
/// Silent input is left untouched. Returns the peak before scaling.
pub fn normalize_peak(samples: &mut [f64]) -> f64 {
    let current_peak = peak(samples);
    if current_peak > 0.0 {
        for sample in samples.iter_mut() {
            *sample /= current_peak;
        }
    }
    current_peak
}

/// Normalizes a whole buffer by its single global peak.
///
/// For stereo the peak is taken across both channels and both are divided by
/// the same value, so the balance between channels is preserved.
pub fn normalize_buffer(buffer: &mut AudioBuffer) -> f64 {
    match buffer {
        AudioBuffer::Mono(samples) => normalize_peak(samples),
        AudioBuffer::Stereo(stereo) => {
            let current_peak = peak(&stereo.left).max(peak(&stereo.right));
            if current_peak > 0.0 {
                for sample in stereo.left.iter_mut().chain(stereo.right.iter_mut()) {
                    *sample /= current_peak;
                }
            }
            current_peak
        }
    }
}

/// Adds `src * gain` into `dest` starting at `offset`.
///
/// Samples that would land past the end of `dest` are discarded. Returns the
/// number of samples actually mixed.
pub fn mix_into(dest: &mut [f64], src: &[f64], offset: usize, gain: f64) -> usize {
    if offset >= dest.len() {
        return 0;
    }
    let available = dest.len() - offset;
    let count = src.len().min(available);
    for (d, s) in dest[offset..offset + count].iter_mut().zip(&src[..count]) {
        *d += s * gain;
    }
    count
}
