use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_default_is_sixty() {
    let fps = Fps::default();
    assert_eq!(fps.as_f64(), 60.0);
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
}

#[test]
fn secs_to_frames_ceil_handles_exact_and_partial() {
    let fps = Fps::default();
    assert_eq!(fps.secs_to_frames_ceil(3.0), 180);
    assert_eq!(fps.secs_to_frames_ceil(3.001), 181);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
    assert_eq!(fps.secs_to_frames_ceil(-1.0), 0);
    assert_eq!(fps.secs_to_frames_ceil(f64::NAN), 0);
}

#[test]
fn canvas_ratio_mapping() {
    let c = Canvas {
        width: 200,
        height: 100,
    };
    assert_eq!(c.center(), Point::new(100.0, 50.0));
    assert_eq!(c.at_ratio(0.25, 1.0), Point::new(50.0, 100.0));
}
