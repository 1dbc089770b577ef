//! Tests for peak detection and normalization.

use super::*;
use sonify_spec::{preset, NoteEvent, Position};

#[test]
fn test_peak() {
    assert_eq!(peak(&[]), 0.0);
    assert_eq!(peak(&[0.1, -0.7, 0.3]), 0.7);
}

#[test]
fn test_normalize_peak_basic() {
    let mut samples = vec![0.5, -0.25, 0.125];
    let before = normalize_peak(&mut samples);
    assert_eq!(before, 0.5);
    assert_eq!(samples, vec![1.0, -0.5, 0.25]);
}

#[test]
fn test_normalize_silent_audio() {
    let mut samples = vec![0.0; 16];
    assert_eq!(normalize_peak(&mut samples), 0.0);
    assert!(samples.iter().all(|&s| s == 0.0 && !s.is_nan()));
}

#[test]
fn test_normalize_stereo_uses_global_peak() {
    let mut buffer = AudioBuffer::Stereo(StereoBuffer {
        left: vec![0.2, -0.4],
        right: vec![0.8, 0.1],
    });
    assert_eq!(normalize_buffer(&mut buffer), 0.8);
    match buffer {
        AudioBuffer::Stereo(stereo) => {
            assert_eq!(stereo.left, vec![0.25, -0.5]);
            assert_eq!(stereo.right, vec![1.0, 0.125]);
        }
        AudioBuffer::Mono(_) => panic!("expected stereo"),
    }
}

#[test]
fn test_rendered_mix_peaks_at_unity() {
    let piano = preset("piano").unwrap();
    let notes = [
        NoteEvent::new(261.63, 0.0, 0.5),
        NoteEvent::new(329.63, 0.1, 0.5),
        NoteEvent::new(392.0, 0.2, 0.5).with_position(Position::new(3.0, 4.0, 0.0)),
    ];
    for renderer in [
        Renderer::mono(22050.0).unwrap(),
        Renderer::new(22050.0).unwrap(),
    ] {
        let buffer = renderer.render(&notes, piano, 1.0).unwrap();
        let global = (0..buffer.channels() as usize)
            .map(|c| peak(buffer.channel(c).unwrap()))
            .fold(0.0_f64, f64::max);
        assert!((global - 1.0).abs() < 1e-12);
    }
}
