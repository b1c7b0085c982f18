use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"scenebake");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b's');
    b.write_bytes(b"cenebake");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn seed_for_depends_on_key_and_salt() {
    assert_eq!(seed_for("rise", 1), seed_for("rise", 1));
    assert_ne!(seed_for("rise", 1), seed_for("rise", 2));
    assert_ne!(seed_for("rise", 1), seed_for("fall", 1));
}

#[test]
fn hash01_is_bounded_and_repeatable() {
    for i in 0..256 {
        let v = hash01(42, i);
        assert!((0.0..1.0).contains(&v));
        assert_eq!(v, hash01(42, i));
        let s = hash_signed(42, i);
        assert!((-1.0..1.0).contains(&s));
    }
    assert_ne!(hash01(42, 0), hash01(42, 1));
}

#[test]
fn progress_clamps_and_handles_zero_duration() {
    assert_eq!(progress(0.5, 0.0, 1.0), 0.5);
    assert_eq!(progress(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(progress(2.0, 0.0, 1.0), 1.0);
    assert_eq!(progress(1.0, 1.0, 0.0), 1.0);
    assert_eq!(progress(0.9, 1.0, 0.0), 0.0);
}

#[test]
fn fract_and_clamp() {
    assert!((fract(2.25) - 0.25).abs() < 1e-12);
    assert!((fract(-0.25) - 0.75).abs() < 1e-12);
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(3.0), 1.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}
