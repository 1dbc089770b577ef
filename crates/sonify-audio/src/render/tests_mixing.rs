//! Tests for timeline placement and additive mixing.

use super::*;
use sonify_spec::{Adsr, Instrument, NoteEvent};

fn sine() -> Instrument {
    Instrument::new(vec![1.0], Adsr::new(0.0, 0.0, 1.0, 0.0))
}

fn mono(sample_rate: f64) -> Renderer {
    Renderer::mono(sample_rate).unwrap()
}

fn as_mono(buffer: AudioBuffer) -> Vec<f64> {
    match buffer {
        AudioBuffer::Mono(samples) => samples,
        AudioBuffer::Stereo(_) => panic!("expected mono buffer"),
    }
}

#[test]
fn test_empty_sequence_is_silent() {
    let buffer = mono(1000.0).render(&[], &sine(), 1.5).unwrap();
    assert_eq!(buffer.len(), 1500);
    let samples = as_mono(buffer);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_buffer_length_rounds() {
    let buffer = mono(44100.0).render(&[], &sine(), 0.123456).unwrap();
    assert_eq!(buffer.len(), (44100.0_f64 * 0.123456).round() as usize);
}

#[test]
fn test_note_at_buffer_end_is_dropped() {
    let notes = [NoteEvent::new(100.0, 1.0, 0.5), NoteEvent::new(100.0, 7.0, 0.5)];
    let samples = as_mono(mono(1000.0).render(&notes, &sine(), 1.0).unwrap());
    assert_eq!(samples.len(), 1000);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_note_past_end_is_truncated_not_dropped() {
    let renderer = mono(1000.0);
    let note = NoteEvent::new(50.0, 0.9, 0.5);
    let samples = as_mono(renderer.render(&[note.clone()], &sine(), 1.0).unwrap());

    assert_eq!(samples.len(), 1000);
    assert!(samples[..900].iter().all(|&s| s == 0.0));
    assert!((peak(&samples[900..]) - 1.0).abs() < 1e-12);

    // The kept part is the head of the full note, rescaled by the mix peak
    let wave = renderer.render_note(&note, &sine());
    assert_eq!(wave.len(), 500);
    let head_peak = peak(&wave[..100]);
    for k in 0..100 {
        assert!((samples[900 + k] - wave[k] / head_peak).abs() < 1e-12);
    }
}

#[test]
fn test_notes_are_added_not_overwritten() {
    let renderer = mono(8000.0);
    let a = NoteEvent::new(220.0, 0.0, 0.25);
    let b = NoteEvent::new(330.0, 0.1, 0.25);

    let mixed = as_mono(renderer.render(&[a.clone(), b.clone()], &sine(), 0.5).unwrap());

    let mut expected = vec![0.0; 4000];
    mix_into(&mut expected, &renderer.render_note(&a, &sine()), 0, 1.0);
    mix_into(&mut expected, &renderer.render_note(&b, &sine()), 800, 1.0);
    normalize_peak(&mut expected);

    for (got, want) in mixed.iter().zip(&expected) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn test_event_order_does_not_matter() {
    let renderer = mono(8000.0);
    let a = NoteEvent::new(220.0, 0.2, 0.25);
    let b = NoteEvent::new(330.0, 0.0, 0.3);
    let ab = renderer.render(&[a.clone(), b.clone()], &sine(), 0.5).unwrap();
    let ba = renderer.render(&[b, a], &sine(), 0.5).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn test_start_index_rounds() {
    let renderer = mono(1000.0);
    // 0.0004 s * 1000 = 0.4 -> index 0; 0.0006 s -> index 1
    let v = renderer.voice(&NoteEvent::new(100.0, 0.0004, 0.01), &sine());
    assert_eq!(v.start, 0);
    let v = renderer.voice(&NoteEvent::new(100.0, 0.0006, 0.01), &sine());
    assert_eq!(v.start, 1);
    assert!(v.gains.is_none());
}

#[test]
fn test_cutoff_applies_filter() {
    let renderer = mono(8000.0);
    let dry = NoteEvent::new(1000.0, 0.0, 0.1);
    let wet = dry.clone().with_cutoff(100.0);
    let dry_wave = renderer.render_note(&dry, &sine());
    let wet_wave = renderer.render_note(&wet, &sine());
    assert_eq!(dry_wave.len(), wet_wave.len());
    assert!(peak(&wet_wave) < 0.5 * peak(&dry_wave));

    // Non-positive cutoff means no filter
    let off = dry.clone().with_cutoff(0.0);
    assert_eq!(renderer.render_note(&off, &sine()), dry_wave);
}

#[test]
fn test_mix_into_bounds() {
    let mut dest = vec![0.0; 4];
    assert_eq!(mix_into(&mut dest, &[1.0, 1.0, 1.0], 2, 0.5), 2);
    assert_eq!(dest, vec![0.0, 0.0, 0.5, 0.5]);
    assert_eq!(mix_into(&mut dest, &[1.0], 4, 1.0), 0);
    assert_eq!(mix_into(&mut dest, &[1.0], 10, 1.0), 0);
}
