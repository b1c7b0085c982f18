use super::*;
use crate::style::tables::{ATMOSPHERES, DEFAULT_ATMOSPHERE, find};

#[test]
fn count_scales_with_tension_and_respects_the_cap() {
    let dust = &ATMOSPHERES[DEFAULT_ATMOSPHERE];
    let calm = particle_count(dust, 0.0, usize::MAX);
    let tense = particle_count(dust, 1.0, usize::MAX);
    assert!(tense > calm);
    assert_eq!(particle_count(dust, 1.0, 3), 3.min(tense));
    assert_eq!(particle_count(find(&ATMOSPHERES, "none").unwrap(), 1.0, 100), 0);
}

#[test]
fn field_is_a_pure_function_of_time() {
    let dust = &ATMOSPHERES[DEFAULT_ATMOSPHERE];
    let canvas = Canvas::default();
    let a = particles_at(dust, canvas, 0.5, 2.25, 64);
    let b = particles_at(dust, canvas, 0.5, 2.25, 64);
    assert_eq!(a, b);
    assert_ne!(a, particles_at(dust, canvas, 0.5, 2.5, 64));

    for p in &a {
        assert!((0.0..=canvas.width_f64()).contains(&p.x));
        assert!((0.0..=canvas.height_f64()).contains(&p.y));
        assert!(p.size > 0.0);
        assert!((0.0..=1.0).contains(&p.alpha));
    }
}

#[test]
fn first_particle_follows_the_drift_formula() {
    let snow = find(&ATMOSPHERES, "snow").unwrap();
    let canvas = Canvas {
        width: 100,
        height: 100,
    };
    let t = 0.75;
    let p = particles_at(snow, canvas, 1.0, t, 8);
    let expect_x = fract(PHI_INV + snow.drift * t) * 100.0;
    let expect_y = fract(SQRT2_M1 - snow.speed * t) * 100.0;
    assert!((p[1].x - expect_x).abs() < 1e-9);
    assert!((p[1].y - expect_y).abs() < 1e-9);
}
