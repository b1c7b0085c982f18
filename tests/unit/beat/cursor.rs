use super::*;

fn grid(bpm: f64, beats: &[f64]) -> BeatGrid {
    BeatGrid {
        bpm,
        beats: beats.to_vec(),
    }
}

#[test]
fn track_sanitizes_and_sorts() {
    let t = BeatTrack::from_grid(&grid(0.0, &[1.0, f64::NAN, 0.5, 1.0, 1.5]), 0.0, 2.0);
    assert_eq!(t.beats, vec![0.5, 1.0, 1.5]);
    assert!((t.interval - 0.5).abs() < 1e-12);
}

#[test]
fn empty_grid_is_synthesized_from_tempo() {
    let t = BeatTrack::from_grid(&grid(120.0, &[]), 1.0, 3.0);
    assert_eq!(t.beats, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    assert_eq!(t.interval, 0.5);

    let none = BeatTrack::from_grid(&grid(0.0, &[]), 0.0, 3.0);
    assert!(none.is_empty());
    assert!(none.interval > 0.0);
}

#[test]
fn cursor_is_monotonic_and_counts_crossings() {
    let track = BeatTrack::from_grid(&grid(120.0, &[0.0, 0.5, 1.0, 1.5]), 0.0, 2.0);
    let mut c = BeatCursor::default();
    assert_eq!(c.current(), None);

    let mut last = None;
    let mut crossed = 0;
    for frame in 0..=120 {
        let t = f64::from(frame) / 60.0;
        crossed += c.advance(&track, t);
        assert!(c.current() >= last);
        last = c.current();
    }
    assert_eq!(crossed, 4);
    assert_eq!(c.current(), Some(3));

    assert_eq!(c.advance(&track, 0.0), 0, "never rewinds");
    assert_eq!(c.current(), Some(3));
}

#[test]
fn several_beats_in_one_step() {
    let track = BeatTrack::from_grid(&grid(0.0, &[0.1, 0.2, 0.3]), 0.0, 1.0);
    let mut c = BeatCursor::default();
    assert_eq!(c.advance(&track, 0.25), 2);
    assert_eq!(c.current(), Some(1));
}

#[test]
fn phase_stays_in_unit_range() {
    let track = BeatTrack::from_grid(&grid(120.0, &[0.0, 0.5, 1.0, 1.5]), 0.0, 2.0);
    let mut c = BeatCursor::default();
    for frame in 0..240 {
        let t = f64::from(frame) / 60.0;
        c.advance(&track, t);
        let p = c.phase(&track, t);
        assert!((0.0..1.0).contains(&p), "t={t} p={p}");
    }
    let mut c = BeatCursor::default();
    c.advance(&track, 0.25);
    assert!((c.phase(&track, 0.25) - 0.5).abs() < 1e-12);
}

#[test]
fn phase_at_matches_an_advanced_cursor() {
    let track = BeatTrack::from_grid(&grid(0.0, &[0.2, 0.5, 0.65, 1.3]), 0.0, 2.0);
    let mut c = BeatCursor::default();
    for frame in 0..120 {
        let t = f64::from(frame) / 60.0;
        c.advance(&track, t);
        assert_eq!(track.phase_at(t), c.phase(&track, t), "t={t}");
    }
    // Lookups need not be in order.
    assert_eq!(track.phase_at(0.5), 0.0);
    assert!((track.phase_at(0.35) - 0.5).abs() < 1e-12);
}
