//! Tests for the rayon rendering path.

use super::*;
use sonify_spec::{preset, NoteEvent, Position};

fn scattered_notes(count: usize) -> Vec<NoteEvent> {
    (0..count)
        .map(|i| {
            let f = i as f64;
            let mut note = NoteEvent::new(200.0 + 37.0 * f, 0.05 * f, 0.15 + 0.01 * (i % 5) as f64)
                .with_position(Position::new((f - 10.0) * 0.7, f % 7.0, -(f % 3.0)));
            if i % 3 == 0 {
                note = note.with_cutoff(400.0 + 150.0 * f);
            }
            note
        })
        .collect()
}

#[test]
fn test_parallel_matches_sequential_stereo() {
    let notes = scattered_notes(24);
    let violin = preset("violin").unwrap();
    let sequential = Renderer::new(16000.0).unwrap();
    let parallel = sequential.clone().with_parallel(true);

    let a = sequential.render(&notes, violin, 1.5).unwrap();
    let b = parallel.render(&notes, violin, 1.5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parallel_matches_sequential_mono() {
    let notes = scattered_notes(24);
    let piano = preset("piano").unwrap();
    let sequential = Renderer::mono(16000.0).unwrap();
    let parallel = Renderer::mono(16000.0).unwrap().with_parallel(true);

    // 1.0 s drops the late notes and truncates the ones straddling the end
    let a = sequential.render(&notes, piano, 1.0).unwrap();
    let b = parallel.render(&notes, piano, 1.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_repeated_renders_are_independent() {
    let notes = scattered_notes(4);
    let flute = preset("flute").unwrap();
    let renderer = Renderer::new(8000.0).unwrap().with_parallel(true);
    let first = renderer.render(&notes, flute, 0.5).unwrap();
    let second = renderer.render(&notes, flute, 0.5).unwrap();
    assert_eq!(first, second);
}
