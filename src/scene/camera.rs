use std::f64::consts::TAU;

use crate::foundation::math::lerp;

/// Fraction of the remaining distance to the target zoom covered each frame.
pub const ZOOM_LERP: f64 = 0.06;
/// Zoom gain applied per unit of spring offset.
pub const ZOOM_SPRING_GAIN: f64 = 0.03;

const DRIFT_X_PX: f64 = 14.0;
const DRIFT_Y_PX: f64 = 9.0;
const DRIFT_ROTATION: f64 = 0.004;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Camera transform of one keyframe.
pub struct CameraState {
    pub zoom: f64,
    /// Pixel offset of the view center.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Radians.
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Smoothed zoom carried across frames of one bake.
pub struct CameraRig {
    zoom: f64,
}

impl CameraRig {
    pub fn new(initial_zoom: f64) -> Self {
        Self { zoom: initial_zoom }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Ease toward `target_zoom` and produce this frame's transform.
    ///
    /// The slow positional drift is a pure function of time and scales with tension.
    pub fn update(
        &mut self,
        target_zoom: f64,
        spring_offset: f64,
        tension: f64,
        t: f64,
    ) -> CameraState {
        if target_zoom.is_finite() {
            self.zoom = lerp(self.zoom, target_zoom, ZOOM_LERP);
        }
        let amount = tension.clamp(0.0, 1.0);
        CameraState {
            zoom: self.zoom * (1.0 + ZOOM_SPRING_GAIN * spring_offset),
            offset_x: (t * TAU / 11.0).sin() * DRIFT_X_PX * amount,
            offset_y: (t * TAU / 17.0).cos() * DRIFT_Y_PX * amount,
            rotation: (t * TAU / 23.0).sin() * DRIFT_ROTATION * amount,
        }
    }
}
