use super::*;
use crate::layout::measure::GlyphWidthEstimator;
use crate::payload::model::{
    BeatGrid, Chapter, CinematicDirection, LyricLine, SongDefaults, StoryboardBeat,
    StyleOverrides, TensionPoint, WordDirective, WordTiming,
};
use crate::style::tables::MotionProfileKind;

fn payload() -> Payload {
    let mut direction = CinematicDirection {
        defaults: SongDefaults {
            heat: Some(0.6),
            beat_response: Some("pulse".into()),
            ..Default::default()
        },
        chapters: vec![
            Chapter {
                title: "verse".into(),
                start_ratio: 0.0,
                end_ratio: 0.5,
                ..Default::default()
            },
            Chapter {
                title: "drop".into(),
                start_ratio: 0.5,
                end_ratio: 1.0,
                overrides: StyleOverrides {
                    motion: Some("weighted".into()),
                    shot: Some("close".into()),
                    ..Default::default()
                },
            },
        ],
        storyboard: vec![StoryboardBeat {
            line_index: 0,
            hero_word: None,
            shot: Some("wide".into()),
        }],
        tension_curve: vec![
            TensionPoint {
                ratio: 0.0,
                tension: 0.0,
            },
            TensionPoint {
                ratio: 1.0,
                tension: 1.0,
            },
        ],
        ..Default::default()
    };
    direction.word_directives.insert(
        "fall".into(),
        WordDirective {
            metaphor: Some("fire".into()),
            exit: Some("melt".into()),
            ..Default::default()
        },
    );
    Payload {
        lines: vec![
            LyricLine {
                text: "we rise".into(),
                start: 0.0,
                end: 1.0,
            },
            LyricLine {
                text: "then fall".into(),
                start: 1.0,
                end: 2.0,
            },
        ],
        words: vec![
            WordTiming {
                word: "we".into(),
                start: 0.0,
                end: 0.4,
            },
            WordTiming {
                word: "rise".into(),
                start: 0.4,
                end: 0.9,
            },
            WordTiming {
                word: "then".into(),
                start: 1.0,
                end: 1.4,
            },
            WordTiming {
                word: "fall".into(),
                start: 1.4,
                end: 1.9,
            },
        ],
        beat_grid: BeatGrid {
            bpm: 120.0,
            beats: vec![],
        },
        cinematic_direction: Some(direction),
        palette: vec![],
        song_start: 0.0,
        song_end: 2.0,
    }
}

fn build(p: &Payload) -> PrebakedData {
    PrebakedData::build(p, &BakeConfig::default(), &mut GlyphWidthEstimator).unwrap()
}

#[test]
fn lookup_arrays_cover_every_frame() {
    let data = build(&payload());
    assert_eq!(data.frame_count, 120);
    assert_eq!(data.frame_chapter.len(), 120);
    assert_eq!(data.frame_tension.len(), 120);
    assert_eq!(data.frame_line.len(), 120);

    assert_eq!(data.frame_chapter[0], Some(0));
    assert_eq!(data.frame_chapter[119], Some(1));
    assert_eq!(data.line_at_frame(30), Some(0));
    assert_eq!(data.line_at_frame(90), Some(1));
    assert!(data.tension_at_frame(0) < data.tension_at_frame(119));
    assert_eq!(data.beats.beats.len(), 5, "synthesized from bpm");
}

#[test]
fn chapter_overrides_drive_word_plans() {
    let data = build(&payload());
    assert_eq!(data.song_style.motion, MotionProfileKind::Fluid);
    assert_eq!(data.style_at_frame(90).motion, MotionProfileKind::Weighted);

    let fluid = MotionProfileKind::Fluid.profile();
    let weighted = MotionProfileKind::Weighted.profile();
    assert!(fluid.behaviors.contains(&data.plans[0].behavior));
    assert!(fluid.behaviors.contains(&data.plans[1].behavior));
    assert!(weighted.entries.contains(&data.plans[2].entry));

    let fall = &data.plans[3];
    assert_eq!(fall.exit, ExitStyle::Melt, "explicit exit beats the metaphor");
    assert_eq!(fall.entry, EntryStyle::Bloom, "metaphor beats the profile");
    assert_eq!(fall.emitter, Some("embers"));
    assert_eq!(fall.color, "#FF6A2B");
}

#[test]
fn camera_target_prefers_storyboard_then_chapter() {
    let data = build(&payload());
    assert_eq!(data.target_zoom(10), tables::find(&SHOTS, "wide").unwrap().zoom);
    assert_eq!(data.target_zoom(90), tables::find(&SHOTS, "close").unwrap().zoom);
}

#[test]
fn every_word_has_a_cached_placement() {
    let data = build(&payload());
    for g in &data.groups {
        for &w in &g.words {
            assert!(data.placement(g, w).is_some());
        }
    }
}

#[test]
fn word_plans_are_stable_across_builds() {
    let p = payload();
    assert_eq!(build(&p).plans, build(&p).plans);
}

#[test]
fn empty_payload_prebakes_to_nothing() {
    let data = build(&Payload::default());
    assert_eq!(data.frame_count, 0);
    assert!(data.words.is_empty() && data.groups.is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = BakeConfig {
        chunk_frames: 0,
        ..Default::default()
    };
    assert!(PrebakedData::build(&payload(), &cfg, &mut GlyphWidthEstimator).is_err());
}

#[test]
fn binary_exits_leave_no_tail() {
    let mut p = payload();
    if let Some(d) = p.cinematic_direction.as_mut() {
        d.word_directives.insert(
            "rise".into(),
            WordDirective {
                exit: Some("cut-out".into()),
                ..Default::default()
            },
        );
    }
    let data = build(&p);
    assert_eq!(data.plans[1].exit, ExitStyle::CutOut);
    assert_eq!(data.plans[1].exit_secs, 0.0);
    assert_eq!(data.plans[3].exit_secs, MotionProfileKind::Weighted.profile().exit_secs);
}
