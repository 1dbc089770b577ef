//! Note renderer.

use rayon::prelude::*;
use sonify_spec::validation::{validate_instrument, validate_note_event, validate_position};
use sonify_spec::{ChannelLayout, Instrument, NoteEvent, Position};
use tracing::{debug, trace};

use super::processing::{mix_into, normalize_buffer};
use super::types::AudioBuffer;
use crate::envelope::apply_adsr;
use crate::error::{AudioError, AudioResult};
use crate::filter::apply_lowpass;
use crate::spatial::{spatial_gains, SpatialGains};
use crate::synthesis::{sample_count, synthesize_note};

/// One note, fully processed and ready to be mixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    /// Index of the first sample in the timeline.
    pub start: usize,
    /// Enveloped (and filtered) mono samples.
    pub samples: Vec<f64>,
    /// Left/right gains; `None` when rendering mono.
    pub gains: Option<SpatialGains>,
}

/// Renders note sequences into a single buffer.
///
/// A renderer holds only configuration. Every call to [`Renderer::render`]
/// allocates a fresh buffer and hands it to the caller.
#[derive(Debug, Clone)]
pub struct Renderer {
    sample_rate: f64,
    layout: ChannelLayout,
    listener: Position,
    parallel: bool,
}

impl Renderer {
    /// Creates a stereo renderer with the listener at the origin.
    pub fn new(sample_rate: f64) -> AudioResult<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            layout: ChannelLayout::Stereo,
            listener: Position::ORIGIN,
            parallel: false,
        })
    }

    /// Creates a mono renderer (no spatialization).
    pub fn mono(sample_rate: f64) -> AudioResult<Self> {
        Ok(Self::new(sample_rate)?.with_layout(ChannelLayout::Mono))
    }

    /// Sets the output channel layout.
    pub fn with_layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the listener position used for stereo rendering.
    pub fn with_listener(mut self, listener: Position) -> Self {
        self.listener = listener;
        self
    }

    /// Synthesizes voices on the rayon thread pool.
    ///
    /// Voices are still mixed in input order, so the output is identical to
    /// the sequential path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Returns the channel layout.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Returns the listener position.
    pub fn listener(&self) -> Position {
        self.listener
    }

    /// Synthesizes a note and shapes it: harmonics, then envelope, then the
    /// low-pass when the note carries a positive cutoff.
    pub fn render_note(&self, note: &NoteEvent, instrument: &Instrument) -> Vec<f64> {
        let mut samples =
            synthesize_note(note.frequency, note.duration, instrument, self.sample_rate);
        apply_adsr(&mut samples, &instrument.envelope, self.sample_rate);
        if let Some(cutoff) = note.effective_cutoff() {
            apply_lowpass(&mut samples, cutoff, self.sample_rate);
        }
        samples
    }

    /// Builds the voice for `note`.
    pub fn voice(&self, note: &NoteEvent, instrument: &Instrument) -> Voice {
        let gains = match self.layout {
            ChannelLayout::Mono => None,
            ChannelLayout::Stereo => Some(spatial_gains(&note.position_or_origin(), &self.listener)),
        };
        Voice {
            start: sample_count(note.start_time, self.sample_rate),
            samples: self.render_note(note, instrument),
            gains,
        }
    }

    /// Renders `notes` into a buffer of `round(sample_rate * total_duration)` samples.
    ///
    /// Everything is validated before any synthesis; on error no buffer is
    /// produced. Notes starting at or after the end of the buffer are dropped
    /// and notes running past the end are truncated. The finished mix is
    /// divided by its peak across all channels.
    pub fn render(
        &self,
        notes: &[NoteEvent],
        instrument: &Instrument,
        total_duration: f64,
    ) -> AudioResult<AudioBuffer> {
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: total_duration,
            });
        }
        validate_instrument(instrument).map_err(|e| AudioError::from(e.within("instrument")))?;
        validate_position("listener", &self.listener)?;
        validate_notes(notes)?;

        let num_samples = sample_count(total_duration, self.sample_rate);
        let mut buffer = AudioBuffer::silent(self.layout, num_samples);

        debug!(
            notes = notes.len(),
            num_samples,
            layout = self.layout.as_str(),
            parallel = self.parallel,
            "rendering note sequence"
        );

        let in_range = |index: usize, note: &NoteEvent| {
            let start = sample_count(note.start_time, self.sample_rate);
            if start >= num_samples {
                trace!(index, start, num_samples, "note starts after buffer end, dropped");
                return false;
            }
            true
        };

        let voices: Vec<Voice> = if self.parallel {
            notes
                .par_iter()
                .enumerate()
                .filter(|&(index, note)| in_range(index, note))
                .map(|(_, note)| self.voice(note, instrument))
                .collect()
        } else {
            notes
                .iter()
                .enumerate()
                .filter(|&(index, note)| in_range(index, note))
                .map(|(_, note)| self.voice(note, instrument))
                .collect()
        };

        for voice in &voices {
            mix_voice(&mut buffer, voice);
        }

        let peak = normalize_buffer(&mut buffer);
        debug!(voices = voices.len(), peak, "mix normalized");

        Ok(buffer)
    }
}

/// Adds one voice into the buffer, truncating at the buffer end.
fn mix_voice(buffer: &mut AudioBuffer, voice: &Voice) {
    let mixed = match buffer {
        AudioBuffer::Mono(samples) => mix_into(samples, &voice.samples, voice.start, 1.0),
        AudioBuffer::Stereo(stereo) => {
            let gains = voice.gains.unwrap_or(SpatialGains {
                left: 1.0,
                right: 1.0,
            });
            mix_into(&mut stereo.left, &voice.samples, voice.start, gains.left);
            mix_into(&mut stereo.right, &voice.samples, voice.start, gains.right)
        }
    };
    if mixed < voice.samples.len() {
        debug!(
            start = voice.start,
            kept = mixed,
            len = voice.samples.len(),
            "note truncated at buffer end"
        );
    }
}

/// Validates notes in order, reporting the first invalid one.
fn validate_notes(notes: &[NoteEvent]) -> AudioResult<()> {
    for (index, note) in notes.iter().enumerate() {
        validate_note_event(note).map_err(|err| match err.field.as_str() {
            "frequency" => AudioError::InvalidFrequency {
                freq: note.frequency,
            },
            "duration" => AudioError::InvalidDuration {
                duration: note.duration,
            },
            _ => AudioError::invalid_param(format!("notes[{}].{}", index, err.field), err.message),
        })?;
    }
    Ok(())
}
