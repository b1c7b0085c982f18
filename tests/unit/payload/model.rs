use super::*;

#[test]
fn minimal_json_uses_defaults() {
    let p = Payload::from_json_str(r#"{ "lines": [{ "text": "hi", "start": 0.0, "end": 1.0 }] }"#)
        .unwrap();
    assert_eq!(p.lines.len(), 1);
    assert!(p.words.is_empty());
    assert!(p.cinematic_direction.is_none());
    assert_eq!(p.beat_grid.bpm, 0.0);
}

#[test]
fn camel_case_fields_decode() {
    let json = r##"{
        "lines": [],
        "beatGrid": { "bpm": 120, "beats": [0, 0.5] },
        "songStart": 1.0,
        "songEnd": 4.0,
        "cinematicDirection": {
            "defaults": { "heat": 0.6, "beatResponse": "pulse", "typography": "bold-impact" },
            "chapters": [{ "startRatio": 0, "endRatio": 1, "overrides": { "shot": "close" } }],
            "wordDirectives": { "fire": { "metaphor": "fire", "ghostTrail": true, "emphasis": 4 } },
            "storyboard": [{ "lineIndex": 0, "heroWord": "rise" }],
            "tensionCurve": [{ "ratio": 0.5, "tension": 0.9 }]
        }
    }"##;
    let p = Payload::from_json_str(json).unwrap();
    assert_eq!(p.beat_grid.beats, vec![0.0, 0.5]);
    let d = p.cinematic_direction.unwrap();
    assert_eq!(d.defaults.heat, Some(0.6));
    assert_eq!(d.defaults.style.typography.as_deref(), Some("bold-impact"));
    assert_eq!(d.chapters[0].overrides.shot.as_deref(), Some("close"));
    let fire = &d.word_directives["fire"];
    assert!(fire.ghost_trail);
    assert_eq!(fire.emphasis, Some(4));
    assert_eq!(d.storyboard[0].hero_word.as_deref(), Some("rise"));
    assert_eq!(d.tension_curve[0].tension, 0.9);
}

#[test]
fn invalid_json_is_serde_error() {
    let err = Payload::from_json_slice(b"{ not json").unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}

#[test]
fn explicit_bounds_win() {
    let p = Payload {
        song_start: 2.0,
        song_end: 5.0,
        ..Payload::default()
    };
    assert_eq!(p.bounds(), (2.0, 5.0));
}

#[test]
fn bounds_derive_from_timing_when_missing() {
    let p = Payload {
        lines: vec![LyricLine {
            text: "a b".to_string(),
            start: 0.5,
            end: 2.0,
        }],
        words: vec![WordTiming {
            word: "b".to_string(),
            start: 1.0,
            end: 2.5,
        }],
        ..Payload::default()
    };
    assert_eq!(p.bounds(), (0.0, 3.5));
}

#[test]
fn empty_payload_has_empty_bounds() {
    assert_eq!(Payload::default().bounds(), (0.0, 0.0));
}
