//! Parameter validation.
//!
//! The numeric routines downstream (envelope, filter) do not check their
//! inputs, so everything is validated here first. Each function stops at the
//! first invalid field.

use crate::error::ValidationError;
use crate::instrument::{Adsr, Instrument};
use crate::note::{NoteEvent, Position};

/// Requires `value` to be finite and strictly positive.
pub fn validate_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new(
            field,
            format!("must be finite and positive, found {}", value),
        ));
    }
    Ok(())
}

/// Requires `value` to be finite and not negative.
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("must be finite and non-negative, found {}", value),
        ));
    }
    Ok(())
}

/// Requires every coordinate to be finite.
pub fn validate_position(field: &str, position: &Position) -> Result<(), ValidationError> {
    if !position.is_finite() {
        return Err(ValidationError::new(
            field,
            format!(
                "coordinates must be finite, found ({}, {}, {})",
                position.x, position.y, position.z
            ),
        ));
    }
    Ok(())
}

/// Validates ADSR segment durations and the sustain level.
pub fn validate_adsr(adsr: &Adsr) -> Result<(), ValidationError> {
    validate_non_negative("attack", adsr.attack)?;
    validate_non_negative("decay", adsr.decay)?;
    validate_non_negative("release", adsr.release)?;
    if !(0.0..=1.0).contains(&adsr.sustain) {
        return Err(ValidationError::new(
            "sustain",
            format!("must be within [0, 1], found {}", adsr.sustain),
        ));
    }
    Ok(())
}

/// Validates harmonics, vibrato and the envelope of an instrument.
pub fn validate_instrument(instrument: &Instrument) -> Result<(), ValidationError> {
    if instrument.harmonics.is_empty() {
        return Err(ValidationError::new(
            "harmonics",
            "must contain at least one weight",
        ));
    }
    if let Some((i, w)) = instrument
        .harmonics
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite())
    {
        return Err(ValidationError::new(
            format!("harmonics[{}]", i),
            format!("must be finite, found {}", w),
        ));
    }
    validate_non_negative("vibrato_rate", instrument.vibrato_rate)?;
    if !instrument.vibrato_width.is_finite() {
        return Err(ValidationError::new(
            "vibrato_width",
            format!("must be finite, found {}", instrument.vibrato_width),
        ));
    }
    validate_adsr(&instrument.envelope).map_err(|e| e.within("envelope"))
}

/// Validates a single note event.
pub fn validate_note_event(note: &NoteEvent) -> Result<(), ValidationError> {
    validate_positive("frequency", note.frequency)?;
    validate_non_negative("start_time", note.start_time)?;
    validate_positive("duration", note.duration)?;
    if let Some(cutoff) = note.cutoff {
        if cutoff.is_nan() || cutoff.is_infinite() {
            return Err(ValidationError::new(
                "cutoff",
                format!("must be finite, found {}", cutoff),
            ));
        }
    }
    if let Some(position) = &note.position {
        validate_position("position", position)?;
    }
    Ok(())
}
