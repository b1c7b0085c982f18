use super::*;
use crate::payload::model::{BeatGrid, LyricLine, WordTiming};

fn three_second_payload() -> Payload {
    Payload {
        lines: vec![
            LyricLine {
                text: "hold on".into(),
                start: 0.0,
                end: 1.5,
            },
            LyricLine {
                text: "let go".into(),
                start: 1.5,
                end: 3.0,
            },
        ],
        words: vec![
            WordTiming {
                word: "hold".into(),
                start: 0.1,
                end: 0.6,
            },
            WordTiming {
                word: "on".into(),
                start: 0.6,
                end: 1.2,
            },
            WordTiming {
                word: "let".into(),
                start: 1.6,
                end: 2.0,
            },
            WordTiming {
                word: "go".into(),
                start: 2.0,
                end: 2.8,
            },
        ],
        beat_grid: BeatGrid {
            bpm: 96.0,
            beats: vec![],
        },
        song_start: 0.0,
        song_end: 3.0,
        ..Default::default()
    }
}

#[test]
fn frame_count_is_duration_times_fps() {
    let tl = bake(&three_second_payload(), &BakeConfig::default()).unwrap();
    assert_eq!(tl.frame_count, 180);
    assert_eq!(tl.keyframes.len(), 180);
    for (i, kf) in tl.keyframes.iter().enumerate() {
        assert_eq!(kf.frame, i as u64);
    }
}

#[test]
fn progress_is_monotonic_and_ends_at_one() {
    let mut seen = Vec::new();
    let mut cb = |p: f64| seen.push(p);
    bake_with(
        &three_second_payload(),
        &BakeConfig::default(),
        &mut GlyphWidthEstimator,
        Some(&mut cb),
    )
    .unwrap();
    assert_eq!(seen.len(), 180 / 20);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(seen.last().copied(), Some(1.0));
}

#[test]
fn chunked_matches_synchronous_for_any_batch() {
    let p = three_second_payload();
    let cfg = BakeConfig::default();
    let sync = bake(&p, &cfg).unwrap();
    for batch in [1, 7, 120, 1000] {
        let chunked = ChunkedBake::new(&p, &cfg, &mut GlyphWidthEstimator)
            .unwrap()
            .with_batch_frames(batch)
            .finish();
        assert_eq!(chunked, sync, "batch {batch}");
    }
}

#[test]
fn step_reports_pending_until_done() {
    let p = three_second_payload();
    let mut b = ChunkedBake::new(&p, &BakeConfig::default(), &mut GlyphWidthEstimator)
        .unwrap()
        .with_batch_frames(100);
    assert_eq!(b.progress(), 0.0);
    assert_eq!(b.step(), BakeStep::Pending { done: 100, total: 180 });
    assert!(!b.is_done());
    assert_eq!(b.step(), BakeStep::Done);
    assert!(b.is_done());
    assert_eq!(b.progress(), 1.0);
    assert_eq!(b.step(), BakeStep::Done);
    assert_eq!(b.finish().keyframes.len(), 180);
}

#[test]
fn bake_chunked_yields_between_batches() {
    let p = three_second_payload();
    let cfg = BakeConfig {
        chunk_frames: 50,
        ..Default::default()
    };
    let mut yields = Vec::new();
    let tl = bake_chunked(&p, &cfg, &mut GlyphWidthEstimator, |v| yields.push(v)).unwrap();
    assert_eq!(tl.keyframes.len(), 180);
    assert_eq!(yields.len(), 4);
    assert_eq!(yields.last().copied(), Some(1.0));
}

#[test]
fn empty_payload_bakes_an_empty_timeline() {
    let mut calls = 0;
    let mut cb = |_: f64| calls += 1;
    let tl = bake_with(
        &Payload::default(),
        &BakeConfig::default(),
        &mut GlyphWidthEstimator,
        Some(&mut cb),
    )
    .unwrap();
    assert!(tl.keyframes.is_empty());
    assert_eq!(calls, 1);
}
