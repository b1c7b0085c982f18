use super::*;
use crate::animation::behavior::BehaviorStyle;
use crate::bake::config::BakeConfig;
use crate::beat::spring::GLOW_TICKS;
use crate::layout::measure::GlyphWidthEstimator;
use crate::payload::model::{
    BeatGrid, CinematicDirection, LyricLine, Payload, SongDefaults, WordDirective, WordTiming,
};

fn payload(directive: Option<(&str, WordDirective)>) -> Payload {
    let mut direction = CinematicDirection {
        defaults: SongDefaults {
            heat: Some(0.6),
            beat_response: Some("pulse".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    if let Some((k, d)) = directive {
        direction.word_directives.insert(k.into(), d);
    }
    Payload {
        lines: vec![LyricLine {
            text: "we rise up".into(),
            start: 0.0,
            end: 2.0,
        }],
        words: vec![
            WordTiming {
                word: "we".into(),
                start: 0.0,
                end: 0.4,
            },
            WordTiming {
                word: "rise".into(),
                start: 0.41,
                end: 0.9,
            },
            WordTiming {
                word: "up".into(),
                start: 0.91,
                end: 1.2,
            },
        ],
        beat_grid: BeatGrid {
            bpm: 120.0,
            beats: vec![0.0, 0.5, 1.0, 1.5],
        },
        cinematic_direction: Some(direction),
        song_start: 0.0,
        song_end: 2.0,
        ..Default::default()
    }
}

fn run(p: &Payload) -> (PrebakedData, Vec<Keyframe>) {
    let data = PrebakedData::build(p, &BakeConfig::default(), &mut GlyphWidthEstimator).unwrap();
    let mut state = BakeState::new(&data);
    let frames = (0..data.frame_count)
        .map(|f| bake_frame(&data, &mut state, f))
        .collect();
    (data, frames)
}

#[test]
fn chunk_values_stay_in_domain() {
    let (_, frames) = run(&payload(None));
    assert_eq!(frames.len(), 120);
    for kf in &frames {
        for c in &kf.chunks {
            assert!((0.0..=1.0).contains(&c.alpha), "{c:?}");
            assert!(c.font_size > 0.0);
            assert!(c.scale >= 0.0 && c.glow >= 0.0 && c.blur >= 0.0);
            assert_eq!(c.visible, c.alpha > 0.0);
        }
        assert!((0.0..=1.0).contains(&kf.beat_glow));
    }
}

#[test]
fn words_wait_for_their_start() {
    let (_, frames) = run(&payload(None));
    let first = &frames[0];
    assert_eq!(first.chunks.len(), 3);
    assert!(first.chunks.iter().all(|c| !c.visible));
    let rise = frames[40].chunks.iter().find(|c| c.text == "rise").unwrap();
    assert!(rise.visible);
}

#[test]
fn beat_glow_fires_on_crossings_and_drains() {
    let (_, frames) = run(&payload(None));
    assert_eq!(frames[0].beat_glow, 1.0);
    assert_eq!(frames[0].beat_index, Some(0));
    assert_eq!(frames[30].beat_glow, 1.0);
    assert_eq!(frames[30].beat_index, Some(1));
    assert_eq!(frames[GLOW_TICKS as usize].beat_glow, 0.0);
    for pair in frames.windows(2) {
        assert!(pair[1].beat_index >= pair[0].beat_index);
    }
}

#[test]
fn fluid_behaviors_only() {
    let (_, frames) = run(&payload(None));
    for kf in &frames {
        for c in &kf.chunks {
            assert!(["float", "grow", "lean"].contains(&c.behavior), "{}", c.behavior);
        }
    }
}

#[test]
fn ghost_trail_emits_fading_echoes() {
    let d = WordDirective {
        ghost_trail: true,
        ..Default::default()
    };
    let (_, frames) = run(&payload(Some(("rise", d))));
    let rise = frames[45].chunks.iter().find(|c| c.text == "rise").unwrap();
    assert_eq!(rise.ghosts.len(), 3);
    assert!(rise.ghosts[0].alpha >= rise.ghosts[1].alpha);
    assert!(rise.ghosts.iter().all(|g| g.alpha <= 0.35));
}

#[test]
fn letter_sequence_reveals_letters_in_order() {
    let d = WordDirective {
        letter_sequence: true,
        ..Default::default()
    };
    let (data, frames) = run(&payload(Some(("rise", d))));
    let w = data.words.iter().position(|w| w.key == "rise").unwrap();
    let mid_entry = data.words[w].start + 0.5 * data.plans[w].entry_secs;
    let frame = (mid_entry * 60.0).ceil() as usize;
    let rise = frames[frame].chunks.iter().find(|c| c.text == "rise").unwrap();
    assert_eq!(rise.letters.len(), 4);
    let alphas: Vec<f64> = rise.letters.iter().map(|l| l.alpha).collect();
    assert!(alphas.windows(2).all(|p| p[0] >= p[1]), "{alphas:?}");
}

#[test]
fn camera_and_particles_are_populated() {
    let (_, frames) = run(&payload(None));
    let kf = &frames[60];
    assert!(kf.camera.zoom > 0.0);
    assert!(!kf.particles.is_empty());
    assert_eq!(kf.texture.tag, "clean");
    assert_eq!(kf.active_line, Some(0));
}

#[test]
fn ghost_echoes_retrace_earlier_frames() {
    let d = WordDirective {
        behavior: Some("pulse".into()),
        ghost_trail: true,
        ..Default::default()
    };
    let p = payload(Some(("we", d)));
    let data = PrebakedData::build(&p, &BakeConfig::default(), &mut GlyphWidthEstimator).unwrap();
    let mut state = BakeState::new(&data);
    let mut frames = Vec::new();
    let mut phases = Vec::new();
    for f in 0..data.frame_count {
        frames.push(bake_frame(&data, &mut state, f));
        phases.push(state.cursor.phase(&data.beats, frame_time(&data, f)));
    }

    let w = data.words.iter().position(|w| w.key == "we").unwrap();
    let group = data.groups.iter().find(|g| g.words.contains(&w)).unwrap();
    let plan = &data.plans[w];
    assert_eq!(plan.behavior, BehaviorStyle::Pulse);

    let now = 60usize;
    let we = frames[now].chunks.iter().find(|c| c.text == "we").unwrap();
    assert_eq!(we.ghosts.len(), 3);
    for (k, ghost) in we.ghosts.iter().enumerate() {
        let past = now - 3 * (k + 1);
        let then = frames[past].chunks.iter().find(|c| c.text == "we").unwrap();
        assert_eq!((ghost.x, ghost.y), (then.x, then.y));

        let pose = word_transform(
            plan,
            &data.words[w],
            group,
            frame_time(&data, past as u64),
            phases[past],
            tension_gain(&data, past as u64),
        )
        .unwrap();
        assert_eq!(ghost.scale, pose.scale * plan.scale);
    }
}

#[test]
fn binary_entries_skip_the_letter_reveal() {
    let d = WordDirective {
        entry: Some("cut-in".into()),
        letter_sequence: true,
        ..Default::default()
    };
    let (_, frames) = run(&payload(Some(("rise", d))));
    for kf in &frames[25..60] {
        if let Some(rise) = kf.chunks.iter().find(|c| c.text == "rise" && c.visible) {
            assert!(rise.letters.is_empty(), "frame {}", kf.frame);
            assert_eq!(rise.entry, "cut-in");
        }
    }
}
