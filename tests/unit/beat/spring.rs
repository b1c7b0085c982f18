use super::*;

#[test]
fn glow_is_full_at_a_crossing_and_drains_within_budget() {
    let mut g = GlowBudget::default();
    assert_eq!(g.glow(), 0.0);
    g.trigger();
    assert_eq!(g.glow(), 1.0);

    let mut prev = g.glow();
    for _ in 0..GLOW_TICKS {
        g.tick();
        let now = g.glow();
        assert!(now <= prev && now >= 0.0);
        prev = now;
    }
    assert_eq!(g.glow(), 0.0);
    g.tick();
    assert_eq!(g.ticks(), 0);
}

#[test]
fn glow_curve_rises_fast() {
    let mut g = GlowBudget::default();
    g.trigger();
    for _ in 0..6 {
        g.tick();
    }
    assert!(g.glow() > 0.5);
}

#[test]
fn spring_thump_settles_without_oscillating() {
    let mut s = Spring::default();
    s.kick(0.2);
    let mut peak: f64 = 0.0;
    for _ in 0..90 {
        s.step();
        assert!(s.offset >= 0.0);
        peak = peak.max(s.offset);
    }
    assert!(peak > 0.1);
    assert!(s.offset < 1e-3);
    assert!(s.velocity < 1e-4);
}
