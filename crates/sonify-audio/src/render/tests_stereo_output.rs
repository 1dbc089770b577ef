//! Tests for stereo rendering and spatial placement.

use super::*;
use sonify_spec::{ChannelLayout, NoteEvent, Position};

use crate::spatial::spatial_gains;

fn stereo(buffer: AudioBuffer) -> StereoBuffer {
    match buffer {
        AudioBuffer::Stereo(stereo) => stereo,
        AudioBuffer::Mono(_) => panic!("expected stereo buffer"),
    }
}

fn assert_close(a: &[f64], b: &[f64], tolerance: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!((x - y).abs() < tolerance, "sample {}: {} vs {}", i, x, y);
    }
}

#[test]
fn test_default_layout_is_stereo() {
    let renderer = Renderer::new(8000.0).unwrap();
    assert_eq!(renderer.layout(), ChannelLayout::Stereo);
    let buffer = renderer
        .render(&[], sonify_spec::preset("flute").unwrap(), 0.5)
        .unwrap();
    assert!(buffer.is_stereo());
    assert_eq!(buffer.channels(), 2);
    assert_eq!(buffer.len(), 4000);
}

#[test]
fn test_overlapping_notes_at_origin_are_centered() {
    let piano = sonify_spec::preset("piano").unwrap();
    let notes = [
        NoteEvent::new(440.0, 0.0, 0.5).with_position(Position::ORIGIN),
        NoteEvent::new(660.0, 0.25, 0.5).with_position(Position::ORIGIN),
    ];
    let out = stereo(Renderer::new(8000.0).unwrap().render(&notes, piano, 1.0).unwrap());
    assert_eq!(out.len(), 8000);
    assert_close(&out.left, &out.right, 1e-9);

    // Both channels carry the mono mix
    let mono = Renderer::mono(8000.0).unwrap().render(&notes, piano, 1.0).unwrap();
    assert_close(&out.left, mono.channel(0).unwrap(), 1e-9);
}

#[test]
fn test_note_without_position_sits_at_origin() {
    let violin = sonify_spec::preset("violin").unwrap();
    let renderer = Renderer::new(8000.0).unwrap();
    let with = renderer
        .render(
            &[NoteEvent::new(300.0, 0.0, 0.3).with_position(Position::ORIGIN)],
            violin,
            0.5,
        )
        .unwrap();
    let without = renderer
        .render(&[NoteEvent::new(300.0, 0.0, 0.3)], violin, 0.5)
        .unwrap();
    assert_eq!(with, without);

    let v = renderer.voice(&NoteEvent::new(300.0, 0.0, 0.3), violin);
    let gains = v.gains.unwrap();
    assert!((gains.left - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    assert!((gains.right - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
}

#[test]
fn test_source_to_the_right_is_hard_panned() {
    let cello = sonify_spec::preset("cello").unwrap();
    let note = NoteEvent::new(220.0, 0.0, 0.4).with_position(Position::new(10.0, 0.0, 0.0));
    let out = stereo(Renderer::new(8000.0).unwrap().render(&[note], cello, 0.5).unwrap());
    assert!(peak(&out.left) < 1e-9);
    assert!((peak(&out.right) - 1.0).abs() < 1e-12);
}

#[test]
fn test_source_to_the_left_is_hard_panned() {
    let cello = sonify_spec::preset("cello").unwrap();
    let note = NoteEvent::new(220.0, 0.0, 0.4).with_position(Position::new(-3.0, 0.0, 0.0));
    let out = stereo(Renderer::new(8000.0).unwrap().render(&[note], cello, 0.5).unwrap());
    assert!((peak(&out.left) - 1.0).abs() < 1e-12);
    assert!(peak(&out.right) < 1e-9);
}

#[test]
fn test_listener_position_shifts_the_image() {
    let flute = sonify_spec::preset("flute").unwrap();
    let note = NoteEvent::new(500.0, 0.0, 0.3).with_position(Position::new(5.0, 0.0, 0.0));

    let centered = stereo(
        Renderer::new(8000.0)
            .unwrap()
            .with_listener(Position::new(5.0, 0.0, 0.0))
            .render(&[note.clone()], flute, 0.5)
            .unwrap(),
    );
    assert_close(&centered.left, &centered.right, 1e-9);

    let panned = stereo(Renderer::new(8000.0).unwrap().render(&[note], flute, 0.5).unwrap());
    assert!(peak(&panned.left) < 1e-9);
}

#[test]
fn test_distance_affects_relative_level() {
    let flute = sonify_spec::preset("flute").unwrap();
    let renderer = Renderer::new(8000.0).unwrap();
    let near = NoteEvent::new(500.0, 0.0, 0.2).with_position(Position::new(0.0, 2.0, 0.0));
    let far = NoteEvent::new(500.0, 0.5, 0.2).with_position(Position::new(0.0, 18.0, 0.0));

    let out = stereo(renderer.render(&[near.clone(), far.clone()], flute, 1.0).unwrap());
    let near_peak = peak(&out.left[..4000]);
    let far_peak = peak(&out.left[4000..]);

    let g_near = spatial_gains(&near.position.unwrap(), &Position::ORIGIN).left;
    let g_far = spatial_gains(&far.position.unwrap(), &Position::ORIGIN).left;
    assert!((near_peak - 1.0).abs() < 1e-12);
    assert!((far_peak / near_peak - g_far / g_near).abs() < 1e-9);
}

#[test]
fn test_mono_layout_ignores_positions() {
    let piano = sonify_spec::preset("piano").unwrap();
    let renderer = Renderer::new(8000.0)
        .unwrap()
        .with_layout(ChannelLayout::Mono);
    let left = NoteEvent::new(440.0, 0.0, 0.2).with_position(Position::new(-4.0, 0.0, 0.0));
    let right = NoteEvent::new(440.0, 0.0, 0.2).with_position(Position::new(4.0, 0.0, 0.0));
    let a = renderer.render(&[left], piano, 0.3).unwrap();
    let b = renderer.render(&[right], piano, 0.3).unwrap();
    assert!(!a.is_stereo());
    assert_eq!(a, b);
}
