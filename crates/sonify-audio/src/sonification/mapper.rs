//! Data-to-event mapping.
//!
//! `x` sets when a note starts, `y` sets its pitch. In 3D mode `z` also
//! sets the filter cutoff, and all three place the note in space.

use sonify_spec::{NoteEvent, Position};

use super::scale::{midi_to_freq, scale_data};

/// MIDI range for 2D pitch mapping (C3..C6).
pub const PITCH_RANGE_2D: (f64, f64) = (48.0, 84.0);
/// MIDI range for 3D pitch mapping (C3..C5).
pub const PITCH_RANGE_3D: (f64, f64) = (48.0, 72.0);
/// Low-pass cutoff range in Hz driven by `z`.
pub const CUTOFF_RANGE: (f64, f64) = (500.0, 8000.0);
/// Spatial extent along each axis.
pub const SPACE_X: (f64, f64) = (-10.0, 10.0);
pub const SPACE_Y: (f64, f64) = (0.0, 20.0);
pub const SPACE_Z: (f64, f64) = (-5.0, 5.0);

pub const NOTE_DURATION_2D: f64 = 0.2;
pub const NOTE_DURATION_3D: f64 = 0.3;

fn note_times(x: &[f64], duration: f64) -> Vec<f64> {
    scale_data(x, 0.0, duration)
}

/// Pitches snapped down to whole MIDI notes.
fn note_freqs(y: &[f64], (lo, hi): (f64, f64)) -> Vec<f64> {
    scale_data(y, lo, hi)
        .into_iter()
        .map(|midi| midi_to_freq(midi.trunc()))
        .collect()
}

/// Maps points onto `duration` seconds of short notes centered on the
/// listener.
pub fn sonify_2d(x: &[f64], y: &[f64], duration: f64) -> Vec<NoteEvent> {
    let times = note_times(x, duration);
    let freqs = note_freqs(y, PITCH_RANGE_2D);
    times
        .into_iter()
        .zip(freqs)
        .map(|(start, freq)| NoteEvent::new(freq, start, NOTE_DURATION_2D))
        .collect()
}

/// Maps points to spatialized, filtered notes.
///
/// Without `z` every point behaves as `z = 0`, which puts all notes at the
/// lowest cutoff and the back of the `z` range.
pub fn sonify_3d(x: &[f64], y: &[f64], z: Option<&[f64]>, duration: f64) -> Vec<NoteEvent> {
    let zeros;
    let z = match z {
        Some(z) => z,
        None => {
            zeros = vec![0.0; x.len()];
            &zeros
        }
    };

    let times = note_times(x, duration);
    let freqs = note_freqs(y, PITCH_RANGE_3D);
    let cutoffs = scale_data(z, CUTOFF_RANGE.0, CUTOFF_RANGE.1);
    let px = scale_data(x, SPACE_X.0, SPACE_X.1);
    let py = scale_data(y, SPACE_Y.0, SPACE_Y.1);
    let pz = scale_data(z, SPACE_Z.0, SPACE_Z.1);

    (0..times.len().min(freqs.len()).min(cutoffs.len()))
        .map(|i| {
            NoteEvent::new(freqs[i], times[i], NOTE_DURATION_3D)
                .with_cutoff(cutoffs[i])
                .with_position(Position::new(px[i], py[i], pz[i]))
        })
        .collect()
}
