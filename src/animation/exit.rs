//! Exit curves: how a word departs.

use std::f64::consts::{PI, TAU};

use crate::animation::ease::Ease;
use crate::animation::state::{AnimState, CurveCtx};
use crate::foundation::core::Vec2;
use crate::foundation::math::{hash01, hash_signed};

/// Fraction of the `freeze-crack` window spent perfectly still.
const CRACK_HOLD: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitStyle {
    Fade,
    Dissolve,
    ScatterLetters,
    GravityFall,
    FreezeCrack,
    DriftUp,
    Sink,
    Shrink,
    BlowAway,
    BurnOut,
    Evaporate,
    SnapOut,
    CutOut,
    SpinOut,
    SlideLeftOut,
    SlideRightOut,
    Explode,
    Melt,
    BlurOut,
    GlitchOut,
    PunchOut,
    Fold,
    EchoFade,
    ZoomPast,
    Linger,
}

pub(crate) struct ExitCurve {
    pub(crate) style: ExitStyle,
    pub(crate) tag: &'static str,
    pub(crate) eval: fn(&CurveCtx) -> AnimState,
}

pub(crate) static EXIT_CURVES: [ExitCurve; 25] = [
    ExitCurve {
        style: ExitStyle::Fade,
        tag: "fade",
        eval: fade,
    },
    ExitCurve {
        style: ExitStyle::Dissolve,
        tag: "dissolve",
        eval: dissolve,
    },
    ExitCurve {
        style: ExitStyle::ScatterLetters,
        tag: "scatter-letters",
        eval: scatter_letters,
    },
    ExitCurve {
        style: ExitStyle::GravityFall,
        tag: "gravity-fall",
        eval: gravity_fall,
    },
    ExitCurve {
        style: ExitStyle::FreezeCrack,
        tag: "freeze-crack",
        eval: freeze_crack,
    },
    ExitCurve {
        style: ExitStyle::DriftUp,
        tag: "drift-up",
        eval: drift_up,
    },
    ExitCurve {
        style: ExitStyle::Sink,
        tag: "sink",
        eval: sink,
    },
    ExitCurve {
        style: ExitStyle::Shrink,
        tag: "shrink",
        eval: shrink,
    },
    ExitCurve {
        style: ExitStyle::BlowAway,
        tag: "blow-away",
        eval: blow_away,
    },
    ExitCurve {
        style: ExitStyle::BurnOut,
        tag: "burn-out",
        eval: burn_out,
    },
    ExitCurve {
        style: ExitStyle::Evaporate,
        tag: "evaporate",
        eval: evaporate,
    },
    ExitCurve {
        style: ExitStyle::SnapOut,
        tag: "snap-out",
        eval: snap_out,
    },
    ExitCurve {
        style: ExitStyle::CutOut,
        tag: "cut-out",
        eval: cut_out,
    },
    ExitCurve {
        style: ExitStyle::SpinOut,
        tag: "spin-out",
        eval: spin_out,
    },
    ExitCurve {
        style: ExitStyle::SlideLeftOut,
        tag: "slide-left-out",
        eval: slide_left_out,
    },
    ExitCurve {
        style: ExitStyle::SlideRightOut,
        tag: "slide-right-out",
        eval: slide_right_out,
    },
    ExitCurve {
        style: ExitStyle::Explode,
        tag: "explode",
        eval: explode,
    },
    ExitCurve {
        style: ExitStyle::Melt,
        tag: "melt",
        eval: melt,
    },
    ExitCurve {
        style: ExitStyle::BlurOut,
        tag: "blur-out",
        eval: blur_out,
    },
    ExitCurve {
        style: ExitStyle::GlitchOut,
        tag: "glitch-out",
        eval: glitch_out,
    },
    ExitCurve {
        style: ExitStyle::PunchOut,
        tag: "punch-out",
        eval: punch_out,
    },
    ExitCurve {
        style: ExitStyle::Fold,
        tag: "fold",
        eval: fold,
    },
    ExitCurve {
        style: ExitStyle::EchoFade,
        tag: "echo-fade",
        eval: echo_fade,
    },
    ExitCurve {
        style: ExitStyle::ZoomPast,
        tag: "zoom-past",
        eval: zoom_past,
    },
    ExitCurve {
        style: ExitStyle::Linger,
        tag: "linger",
        eval: linger,
    },
];

impl ExitStyle {
    pub const ALL: [ExitStyle; 25] = [
        Self::Fade,
        Self::Dissolve,
        Self::ScatterLetters,
        Self::GravityFall,
        Self::FreezeCrack,
        Self::DriftUp,
        Self::Sink,
        Self::Shrink,
        Self::BlowAway,
        Self::BurnOut,
        Self::Evaporate,
        Self::SnapOut,
        Self::CutOut,
        Self::SpinOut,
        Self::SlideLeftOut,
        Self::SlideRightOut,
        Self::Explode,
        Self::Melt,
        Self::BlurOut,
        Self::GlitchOut,
        Self::PunchOut,
        Self::Fold,
        Self::EchoFade,
        Self::ZoomPast,
        Self::Linger,
    ];

    pub fn tag(self) -> &'static str {
        EXIT_CURVES[self as usize].tag
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        EXIT_CURVES
            .iter()
            .find(|c| c.tag.eq_ignore_ascii_case(tag))
            .map(|c| c.style)
    }

    /// Styles that vanish in a single step.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::SnapOut | Self::CutOut)
    }
}

pub fn eval_exit(style: ExitStyle, ctx: &CurveCtx) -> AnimState {
    (EXIT_CURVES[style as usize].eval)(ctx)
}

fn fade(c: &CurveCtx) -> AnimState {
    AnimState::with_alpha(1.0 - c.progress)
}

fn dissolve(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        alpha: 1.0 - Ease::InQuad.apply(p),
        blur: 8.0 * p,
        scatter: 0.3 * p,
        ..AnimState::IDENTITY
    }
}

fn scatter_letters(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        alpha: 1.0 - Ease::InQuad.apply(p),
        scatter: Ease::OutCubic.apply(p),
        ..AnimState::IDENTITY
    }
}

fn gravity_fall(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(0.0, 260.0 * c.intensity * p * p * p),
        rotation: hash_signed(c.seed, 3) * 0.5 * p * p,
        alpha: 1.0 - Ease::InQuad.apply(p),
        ..AnimState::IDENTITY
    }
}

fn freeze_crack(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    if p < CRACK_HOLD {
        return AnimState::IDENTITY;
    }
    let q = (p - CRACK_HOLD) / (1.0 - CRACK_HOLD);
    AnimState {
        offset: Vec2::new(hash_signed(c.seed, 5) * 6.0 * q, 14.0 * c.intensity * q * q),
        skew_x: hash_signed(c.seed, 4) * 0.2 * q,
        glow: 0.5 * (1.0 - q),
        alpha: 1.0 - q,
        scatter: Ease::OutExpo.apply(q),
        ..AnimState::IDENTITY
    }
}

fn drift_up(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(0.0, -70.0 * c.intensity * Ease::OutQuad.apply(p)),
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn sink(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(0.0, 50.0 * c.intensity * Ease::InQuad.apply(p)),
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn shrink(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        scale: 1.0 - 0.9 * Ease::InCubic.apply(p),
        alpha: 1.0 - Ease::InQuad.apply(p),
        ..AnimState::IDENTITY
    }
}

fn blow_away(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(
            240.0 * c.intensity * Ease::InCubic.apply(p),
            -40.0 * c.intensity * p,
        ),
        skew_x: 0.3 * p,
        alpha: 1.0 - p,
        scatter: 0.4 * p,
        ..AnimState::IDENTITY
    }
}

fn burn_out(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        glow: 1.2 * c.intensity * (PI * p).sin(),
        alpha: 1.0 - Ease::InCubic.apply(p),
        blur: 4.0 * p,
        ..AnimState::IDENTITY
    }
}

fn evaporate(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(0.0, -30.0 * p),
        scale: 1.0 + 0.1 * p,
        blur: 12.0 * p,
        alpha: 1.0 - Ease::OutQuad.apply(p),
        ..AnimState::IDENTITY
    }
}

fn snap_out(c: &CurveCtx) -> AnimState {
    if c.progress > 0.0 {
        AnimState::with_alpha(0.0)
    } else {
        AnimState {
            scale: 1.1,
            ..AnimState::IDENTITY
        }
    }
}

fn cut_out(c: &CurveCtx) -> AnimState {
    AnimState::with_alpha(if c.progress > 0.0 { 0.0 } else { 1.0 })
}

fn spin_out(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        rotation: PI * c.intensity * Ease::InQuad.apply(p),
        scale: 1.0 - 0.6 * p,
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn slide_left_out(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(-220.0 * c.intensity * Ease::InCubic.apply(p), 0.0),
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn slide_right_out(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(220.0 * c.intensity * Ease::InCubic.apply(p), 0.0),
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn explode(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    let e = Ease::OutQuad.apply(p);
    AnimState {
        scale: 1.0 + 1.2 * e,
        scatter: e,
        glow: 0.5 * c.intensity * (1.0 - p),
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn melt(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(0.0, 40.0 * c.intensity * p * p),
        skew_x: 0.25 * p,
        blur: 6.0 * p,
        alpha: 1.0 - Ease::InQuad.apply(p),
        ..AnimState::IDENTITY
    }
}

fn blur_out(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        blur: 20.0 * p,
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn glitch_out(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    if p >= 1.0 {
        return AnimState::with_alpha(0.0);
    }
    let step = (p * 14.0).floor() as u64 + 200;
    AnimState {
        offset: Vec2::new(hash_signed(c.seed, step) * 26.0 * c.intensity * p, 0.0),
        skew_x: hash_signed(c.seed, step + 50) * 0.4 * p,
        alpha: (1.0 - p) * (1.0 - 0.5 * hash01(c.seed, step + 100) * (p * 4.0).min(1.0)),
        ..AnimState::IDENTITY
    }
}

fn punch_out(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        scale: 1.0 + 0.35 * c.intensity * Ease::OutBack.apply(p),
        alpha: 1.0 - Ease::InQuad.apply(p),
        ..AnimState::IDENTITY
    }
}

fn fold(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        skew_x: 0.6 * p,
        scale: 1.0 - 0.5 * Ease::InQuad.apply(p),
        alpha: 1.0 - p,
        ..AnimState::IDENTITY
    }
}

fn echo_fade(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        alpha: (1.0 - p) * (0.75 + 0.25 * (p * TAU * 3.0).cos()),
        blur: 3.0 * p,
        ..AnimState::IDENTITY
    }
}

fn zoom_past(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        scale: 1.0 + 3.0 * Ease::InCubic.apply(p),
        blur: 10.0 * p,
        alpha: 1.0 - Ease::OutQuad.apply(p),
        ..AnimState::IDENTITY
    }
}

fn linger(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        glow: 0.2 * (1.0 - p),
        alpha: 1.0 - Ease::InCubic.apply(p),
        ..AnimState::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/exit.rs"]
mod tests;
