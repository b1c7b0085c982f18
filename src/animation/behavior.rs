//! Behavior curves: continuous loops applied while a word is fully visible.

use std::f64::consts::TAU;

use crate::animation::state::{AnimState, CurveCtx};
use crate::foundation::core::Vec2;
use crate::foundation::math::hash01;

/// `freeze` pulses with the beat for this long, then locks.
pub(crate) const FREEZE_PULSE_SECS: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BehaviorStyle {
    Pulse,
    Vibrate,
    Float,
    Grow,
    Lean,
    Orbit,
    Flicker,
    Sway,
    Breathe,
    Freeze,
    None,
}

pub(crate) struct BehaviorCurve {
    pub(crate) style: BehaviorStyle,
    pub(crate) tag: &'static str,
    pub(crate) eval: fn(&CurveCtx) -> AnimState,
}

pub(crate) static BEHAVIOR_CURVES: [BehaviorCurve; 11] = [
    BehaviorCurve {
        style: BehaviorStyle::Pulse,
        tag: "pulse",
        eval: pulse,
    },
    BehaviorCurve {
        style: BehaviorStyle::Vibrate,
        tag: "vibrate",
        eval: vibrate,
    },
    BehaviorCurve {
        style: BehaviorStyle::Float,
        tag: "float",
        eval: float,
    },
    BehaviorCurve {
        style: BehaviorStyle::Grow,
        tag: "grow",
        eval: grow,
    },
    BehaviorCurve {
        style: BehaviorStyle::Lean,
        tag: "lean",
        eval: lean,
    },
    BehaviorCurve {
        style: BehaviorStyle::Orbit,
        tag: "orbit",
        eval: orbit,
    },
    BehaviorCurve {
        style: BehaviorStyle::Flicker,
        tag: "flicker",
        eval: flicker,
    },
    BehaviorCurve {
        style: BehaviorStyle::Sway,
        tag: "sway",
        eval: sway,
    },
    BehaviorCurve {
        style: BehaviorStyle::Breathe,
        tag: "breathe",
        eval: breathe,
    },
    BehaviorCurve {
        style: BehaviorStyle::Freeze,
        tag: "freeze",
        eval: freeze,
    },
    BehaviorCurve {
        style: BehaviorStyle::None,
        tag: "none",
        eval: still,
    },
];

impl BehaviorStyle {
    pub const ALL: [BehaviorStyle; 11] = [
        Self::Pulse,
        Self::Vibrate,
        Self::Float,
        Self::Grow,
        Self::Lean,
        Self::Orbit,
        Self::Flicker,
        Self::Sway,
        Self::Breathe,
        Self::Freeze,
        Self::None,
    ];

    pub fn tag(self) -> &'static str {
        BEHAVIOR_CURVES[self as usize].tag
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        BEHAVIOR_CURVES
            .iter()
            .find(|c| c.tag.eq_ignore_ascii_case(tag))
            .map(|c| c.style)
    }
}

pub fn eval_behavior(style: BehaviorStyle, ctx: &CurveCtx) -> AnimState {
    (BEHAVIOR_CURVES[style as usize].eval)(ctx)
}

/// Per-word phase so neighbouring words do not move in lockstep.
fn phase(seed: u64) -> f64 {
    hash01(seed, 7) * TAU
}

fn pulse(c: &CurveCtx) -> AnimState {
    let k = (1.0 - c.beat_phase.clamp(0.0, 1.0)).powi(2);
    AnimState {
        scale: 1.0 + 0.06 * c.intensity * k,
        glow: 0.3 * c.intensity * k,
        ..AnimState::IDENTITY
    }
}

fn vibrate(c: &CurveCtx) -> AnimState {
    let t = c.elapsed;
    let ph = phase(c.seed);
    AnimState {
        offset: Vec2::new(
            (t * 55.0 + ph).sin() * 2.5 * c.intensity,
            (t * 47.0 + ph).cos() * 2.5 * c.intensity,
        ),
        ..AnimState::IDENTITY
    }
}

fn float(c: &CurveCtx) -> AnimState {
    AnimState {
        offset: Vec2::new(
            0.0,
            (c.elapsed * TAU * 0.35 + phase(c.seed)).sin() * 8.0 * c.intensity,
        ),
        ..AnimState::IDENTITY
    }
}

fn grow(c: &CurveCtx) -> AnimState {
    let w = 0.5 - 0.5 * (c.elapsed * TAU * 0.25).cos();
    AnimState {
        scale: 1.0 + 0.05 * c.intensity * w,
        ..AnimState::IDENTITY
    }
}

fn lean(c: &CurveCtx) -> AnimState {
    let s = (c.elapsed * TAU * 0.2 + phase(c.seed)).sin();
    AnimState {
        skew_x: 0.08 * c.intensity * s,
        rotation: 0.03 * c.intensity * s,
        ..AnimState::IDENTITY
    }
}

fn orbit(c: &CurveCtx) -> AnimState {
    let a = c.elapsed * TAU * 0.5 + phase(c.seed);
    AnimState {
        offset: Vec2::new(a.cos() * 6.0 * c.intensity, a.sin() * 6.0 * c.intensity),
        ..AnimState::IDENTITY
    }
}

fn flicker(c: &CurveCtx) -> AnimState {
    let step = (c.elapsed.max(0.0) * 20.0).floor() as u64;
    AnimState {
        alpha: 1.0 - 0.35 * c.intensity.min(1.0) * hash01(c.seed, step),
        glow: 0.1 * c.intensity * hash01(c.seed, step + 31),
        ..AnimState::IDENTITY
    }
}

fn sway(c: &CurveCtx) -> AnimState {
    let s = (c.elapsed * TAU * 0.3 + phase(c.seed)).sin();
    AnimState {
        rotation: 0.06 * c.intensity * s,
        offset: Vec2::new(4.0 * c.intensity * s, 0.0),
        ..AnimState::IDENTITY
    }
}

fn breathe(c: &CurveCtx) -> AnimState {
    let s = (c.elapsed * TAU * 0.25).sin();
    AnimState {
        scale: 1.0 + 0.03 * c.intensity * s,
        glow: 0.15 * c.intensity * (0.5 + 0.5 * s),
        ..AnimState::IDENTITY
    }
}

fn freeze(c: &CurveCtx) -> AnimState {
    if c.elapsed < FREEZE_PULSE_SECS {
        pulse(c)
    } else {
        AnimState::IDENTITY
    }
}

fn still(_c: &CurveCtx) -> AnimState {
    AnimState::IDENTITY
}

#[cfg(test)]
#[path = "../../tests/unit/animation/behavior.rs"]
mod tests;
