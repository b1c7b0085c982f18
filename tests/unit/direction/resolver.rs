use super::*;
use crate::payload::model::StyleOverrides;

fn defaults(heat: Option<f64>, response: Option<&str>, style: StyleOverrides) -> SongDefaults {
    SongDefaults {
        heat,
        beat_response: response.map(str::to_string),
        style,
    }
}

#[test]
fn first_defined_respects_priority() {
    assert_eq!(first_defined([None, Some(2), Some(3)], 9), 2);
    assert_eq!(first_defined([Some(1), Some(2)], 9), 1);
    assert_eq!(first_defined([None::<i32>, None], 9), 9);
}

#[test]
fn unknown_tags_fall_through_to_the_next_layer() {
    let got = resolve_tag(
        "shot",
        &[Some("dutch-angle"), Some("close"), None],
        |t| tables::find(&SHOTS, t),
        &SHOTS[DEFAULT_SHOT],
    );
    assert_eq!(got.tag, "close");

    let got = resolve_tag(
        "shot",
        &[Some("dutch-angle"), None],
        |t| tables::find(&SHOTS, t),
        &SHOTS[DEFAULT_SHOT],
    );
    assert_eq!(got.tag, "medium");
}

#[test]
fn song_style_defaults_when_direction_is_empty() {
    let d = SongDefaults::default();
    let style = StyleResolver::new(&d, &[]).song();
    assert_eq!(style.motion, MotionProfileKind::Fluid);
    assert_eq!(style.typography.tag, "clean-modern");
    assert_eq!(style.palette.background, PALETTES[DEFAULT_PALETTE].background);
    assert_eq!(style.atmosphere.tag, "dust");
    assert_eq!(style.texture.tag, "clean");
    assert_eq!(style.shot.tag, "medium");
    assert!(style.entry.is_none() && style.behavior.is_none() && style.exit.is_none());
}

#[test]
fn chapter_overrides_win_over_song_defaults() {
    let d = defaults(
        Some(0.1),
        Some("pulse"),
        StyleOverrides {
            typography: Some("elegant-serif".into()),
            texture: Some("film".into()),
            ..Default::default()
        },
    );
    let chapter = Chapter {
        start_ratio: 0.0,
        end_ratio: 1.0,
        overrides: StyleOverrides {
            motion: Some("glitch".into()),
            typography: Some("mono-glitch".into()),
            texture: Some("not-a-texture".into()),
            entry: Some("Cut-In".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    let r = StyleResolver::new(&d, &[]);
    assert_eq!(r.song().motion, MotionProfileKind::Drift);

    let style = r.chapter(&chapter);
    assert_eq!(style.motion, MotionProfileKind::Glitch);
    assert_eq!(style.typography.tag, "mono-glitch");
    assert_eq!(style.texture.tag, "film");
    assert_eq!(style.entry, Some(EntryStyle::CutIn));
}

#[test]
fn named_palette_beats_payload_palette() {
    let payload_palette = vec!["#000000".to_string(), "#FAFAFA".to_string()];
    let d = SongDefaults::default();
    let style = StyleResolver::new(&d, &payload_palette).song();
    assert_eq!(style.palette.background, "#000000");
    assert_eq!(style.palette.text, "#FAFAFA");
    assert_eq!(style.palette.accent, PALETTES[DEFAULT_PALETTE].accent);

    let d = defaults(
        None,
        None,
        StyleOverrides {
            palette: Some("ember".into()),
            ..Default::default()
        },
    );
    let style = StyleResolver::new(&d, &payload_palette).song();
    assert_eq!(style.palette.text, tables::find(&PALETTES, "ember").map(|p| p.text).unwrap());
}

#[test]
fn malformed_payload_colors_are_replaced() {
    let payload_palette = vec!["navy".to_string(), "#12345".to_string(), "#abc".to_string()];
    let d = SongDefaults::default();
    let p = StyleResolver::new(&d, &payload_palette).song().palette;
    let base = &PALETTES[DEFAULT_PALETTE];
    assert_eq!(p.background, base.background);
    assert_eq!(p.text, base.text);
    assert_eq!(p.accent, "#abc");
}

#[test]
fn hex_color_shapes() {
    assert!(is_hex_color("#fff"));
    assert!(is_hex_color("#FF6A2B"));
    assert!(is_hex_color("#FF6A2B80"));
    assert!(!is_hex_color("FF6A2B"));
    assert!(!is_hex_color("#GG0000"));
}
