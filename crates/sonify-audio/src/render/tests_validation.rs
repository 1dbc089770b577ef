//! Tests for input validation before rendering.

use super::*;
use crate::error::AudioError;
use sonify_spec::{preset, Adsr, Instrument, NoteEvent, Position};

fn piano() -> &'static Instrument {
    preset("piano").unwrap()
}

#[test]
fn test_invalid_sample_rate() {
    assert!(matches!(
        Renderer::new(0.0),
        Err(AudioError::InvalidSampleRate { .. })
    ));
    assert!(matches!(
        Renderer::mono(-44100.0),
        Err(AudioError::InvalidSampleRate { .. })
    ));
    assert!(matches!(
        Renderer::new(f64::NAN),
        Err(AudioError::InvalidSampleRate { .. })
    ));
}

#[test]
fn test_invalid_total_duration() {
    let renderer = Renderer::new(8000.0).unwrap();
    for total in [0.0, -1.0, f64::INFINITY] {
        let err = renderer.render(&[], piano(), total).unwrap_err();
        assert!(matches!(err, AudioError::InvalidDuration { .. }), "{}", total);
    }
}

#[test]
fn test_zero_frequency_is_rejected() {
    let notes = [
        NoteEvent::new(440.0, 0.0, 0.1),
        NoteEvent::new(0.0, 0.1, 0.1),
    ];
    let err = Renderer::new(8000.0)
        .unwrap()
        .render(&notes, piano(), 1.0)
        .unwrap_err();
    match err {
        AudioError::InvalidFrequency { freq } => assert_eq!(freq, 0.0),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_non_positive_note_duration_is_rejected() {
    let notes = [NoteEvent::new(440.0, 0.0, 0.0)];
    let err = Renderer::mono(8000.0)
        .unwrap()
        .render(&notes, piano(), 1.0)
        .unwrap_err();
    assert!(matches!(err, AudioError::InvalidDuration { .. }));
}

#[test]
fn test_negative_start_time_names_the_note() {
    let notes = [
        NoteEvent::new(440.0, 0.0, 0.1),
        NoteEvent::new(440.0, 0.0, 0.1),
        NoteEvent::new(440.0, -0.5, 0.1),
    ];
    let err = Renderer::mono(8000.0)
        .unwrap()
        .render(&notes, piano(), 1.0)
        .unwrap_err();
    match err {
        AudioError::InvalidParameter { name, .. } => assert_eq!(name, "notes[2].start_time"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_non_finite_position_is_rejected() {
    let notes = [NoteEvent::new(440.0, 0.0, 0.1).with_position(Position::new(f64::NAN, 0.0, 0.0))];
    let err = Renderer::new(8000.0)
        .unwrap()
        .render(&notes, piano(), 1.0)
        .unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { .. }));
}

#[test]
fn test_bad_listener_is_rejected() {
    let err = Renderer::new(8000.0)
        .unwrap()
        .with_listener(Position::new(0.0, f64::INFINITY, 0.0))
        .render(&[], piano(), 1.0)
        .unwrap_err();
    match err {
        AudioError::InvalidParameter { name, .. } => assert!(name.starts_with("listener")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_bad_instrument_is_rejected() {
    let broken = Instrument::new(vec![1.0, 0.5], Adsr::new(0.01, 0.1, 1.5, 0.2));
    let err = Renderer::new(8000.0)
        .unwrap()
        .render(&[NoteEvent::new(440.0, 0.0, 0.1)], &broken, 1.0)
        .unwrap_err();
    match err {
        AudioError::InvalidParameter { name, .. } => {
            assert_eq!(name, "instrument.envelope.sustain")
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let empty = Instrument::new(vec![], Adsr::new(0.01, 0.1, 0.5, 0.2));
    let err = Renderer::new(8000.0)
        .unwrap()
        .render(&[], &empty, 1.0)
        .unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { .. }));
}

#[test]
fn test_extreme_envelope_times_render_without_panicking() {
    let slow = Instrument::new(vec![1.0], Adsr::new(2e14, 2e14, 0.5, 2e14));
    let notes = [NoteEvent::new(440.0, 0.0, 0.1)];
    let buffer = Renderer::mono(44100.0)
        .unwrap()
        .render(&notes, &slow, 0.5)
        .unwrap();
    assert_eq!(buffer.len(), 22050);
    assert!(buffer.channel(0).unwrap().iter().all(|s| s.is_finite()));
}
