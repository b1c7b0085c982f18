use super::*;

#[test]
fn profiles_are_indexed_by_kind() {
    for (i, p) in MOTION_PROFILES.iter().enumerate() {
        assert_eq!(p.kind as usize, i);
        assert!(!p.entries.is_empty());
        assert!(!p.behaviors.is_empty());
        assert!(!p.exits.is_empty());
        assert!(p.entry_secs > 0.0 && p.exit_secs > 0.0);
        let tag = serde_json::to_string(&p.kind).unwrap();
        assert_eq!(tag, format!("\"{}\"", p.tag));
    }
}

#[test]
fn fluid_behaviors_are_float_grow_lean() {
    assert_eq!(
        MotionProfileKind::Fluid.profile().behaviors,
        &[BehaviorStyle::Float, BehaviorStyle::Grow, BehaviorStyle::Lean]
    );
}

#[test]
fn mood_selection() {
    assert_eq!(MotionProfileKind::from_mood(0.6, "pulse"), MotionProfileKind::Fluid);
    assert_eq!(MotionProfileKind::from_mood(0.1, "pulse"), MotionProfileKind::Drift);
    assert_eq!(MotionProfileKind::from_mood(0.9, "pulse"), MotionProfileKind::Elastic);
    assert_eq!(MotionProfileKind::from_mood(0.2, "SLAM"), MotionProfileKind::Weighted);
    assert_eq!(MotionProfileKind::from_mood(0.5, "glitch"), MotionProfileKind::Glitch);
    assert_eq!(MotionProfileKind::from_mood(0.5, "bounce"), MotionProfileKind::Elastic);
    assert_eq!(MotionProfileKind::from_mood(f64::NAN, "??"), MotionProfileKind::Fluid);
}

#[test]
fn lookups_are_case_insensitive_and_total() {
    assert_eq!(find(&TYPOGRAPHY, "Bold-Impact").map(|t| t.font_family), Some("Anton"));
    assert!(find(&PALETTES, "sepia").is_none());
    assert_eq!(MotionProfileKind::from_tag("glitch"), Some(MotionProfileKind::Glitch));
    assert_eq!(TYPOGRAPHY[DEFAULT_TYPOGRAPHY].tag, "clean-modern");
    assert_eq!(SHOTS[DEFAULT_SHOT].zoom, 1.0);
    assert_eq!(TEXTURES[DEFAULT_TEXTURE].tag, "clean");
    assert_eq!(PALETTES[DEFAULT_PALETTE].tag, "midnight");
    assert_eq!(ATMOSPHERES[DEFAULT_ATMOSPHERE].tag, "dust");
}

#[test]
fn tags_are_unique_per_table() {
    fn check<T: Tagged>(table: &'static [T]) {
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert_ne!(a.tag(), b.tag());
            }
        }
    }
    check(&MOTION_PROFILES);
    check(&TYPOGRAPHY);
    check(&PALETTES);
    check(&ATMOSPHERES);
    check(&TEXTURES);
    check(&METAPHORS);
    check(&SHOTS);
}

#[test]
fn metaphor_colors_are_hex() {
    for m in &METAPHORS {
        assert!(m.color.starts_with('#') && m.color.len() == 7, "{}", m.tag);
        assert!(m.scale > 0.0);
    }
}
