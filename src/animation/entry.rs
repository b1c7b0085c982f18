//! Entry curves: how a word materializes.

use std::f64::consts::PI;

use crate::animation::ease::Ease;
use crate::animation::state::{AnimState, CurveCtx};
use crate::foundation::core::Vec2;
use crate::foundation::math::{clamp01, hash01, hash_signed};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryStyle {
    FadeUp,
    FadeDown,
    SlamDown,
    PunchIn,
    SnapIn,
    DriftIn,
    Rise,
    Bloom,
    Whisper,
    ShatterIn,
    CutIn,
    ElasticPop,
    SpinIn,
    SlideLeft,
    SlideRight,
    TypeOn,
    GhostIn,
    GlitchIn,
    FocusIn,
}

pub(crate) struct EntryCurve {
    pub(crate) style: EntryStyle,
    pub(crate) tag: &'static str,
    pub(crate) eval: fn(&CurveCtx) -> AnimState,
}

/// Evaluator table indexed by `EntryStyle as usize`.
pub(crate) static ENTRY_CURVES: [EntryCurve; 19] = [
    EntryCurve {
        style: EntryStyle::FadeUp,
        tag: "fade-up",
        eval: fade_up,
    },
    EntryCurve {
        style: EntryStyle::FadeDown,
        tag: "fade-down",
        eval: fade_down,
    },
    EntryCurve {
        style: EntryStyle::SlamDown,
        tag: "slam-down",
        eval: slam_down,
    },
    EntryCurve {
        style: EntryStyle::PunchIn,
        tag: "punch-in",
        eval: punch_in,
    },
    EntryCurve {
        style: EntryStyle::SnapIn,
        tag: "snap-in",
        eval: snap_in,
    },
    EntryCurve {
        style: EntryStyle::DriftIn,
        tag: "drift-in",
        eval: drift_in,
    },
    EntryCurve {
        style: EntryStyle::Rise,
        tag: "rise",
        eval: rise,
    },
    EntryCurve {
        style: EntryStyle::Bloom,
        tag: "bloom",
        eval: bloom,
    },
    EntryCurve {
        style: EntryStyle::Whisper,
        tag: "whisper",
        eval: whisper,
    },
    EntryCurve {
        style: EntryStyle::ShatterIn,
        tag: "shatter-in",
        eval: shatter_in,
    },
    EntryCurve {
        style: EntryStyle::CutIn,
        tag: "cut-in",
        eval: cut_in,
    },
    EntryCurve {
        style: EntryStyle::ElasticPop,
        tag: "elastic-pop",
        eval: elastic_pop,
    },
    EntryCurve {
        style: EntryStyle::SpinIn,
        tag: "spin-in",
        eval: spin_in,
    },
    EntryCurve {
        style: EntryStyle::SlideLeft,
        tag: "slide-left",
        eval: slide_left,
    },
    EntryCurve {
        style: EntryStyle::SlideRight,
        tag: "slide-right",
        eval: slide_right,
    },
    EntryCurve {
        style: EntryStyle::TypeOn,
        tag: "type-on",
        eval: type_on,
    },
    EntryCurve {
        style: EntryStyle::GhostIn,
        tag: "ghost-in",
        eval: ghost_in,
    },
    EntryCurve {
        style: EntryStyle::GlitchIn,
        tag: "glitch-in",
        eval: glitch_in,
    },
    EntryCurve {
        style: EntryStyle::FocusIn,
        tag: "focus-in",
        eval: focus_in,
    },
];

impl EntryStyle {
    pub const ALL: [EntryStyle; 19] = [
        Self::FadeUp,
        Self::FadeDown,
        Self::SlamDown,
        Self::PunchIn,
        Self::SnapIn,
        Self::DriftIn,
        Self::Rise,
        Self::Bloom,
        Self::Whisper,
        Self::ShatterIn,
        Self::CutIn,
        Self::ElasticPop,
        Self::SpinIn,
        Self::SlideLeft,
        Self::SlideRight,
        Self::TypeOn,
        Self::GhostIn,
        Self::GlitchIn,
        Self::FocusIn,
    ];

    pub fn tag(self) -> &'static str {
        ENTRY_CURVES[self as usize].tag
    }

    /// Case-insensitive tag lookup; unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        ENTRY_CURVES
            .iter()
            .find(|c| c.tag.eq_ignore_ascii_case(tag))
            .map(|c| c.style)
    }

    /// Styles that appear in a single step rather than fading in.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::SnapIn | Self::CutIn)
    }
}

pub fn eval_entry(style: EntryStyle, ctx: &CurveCtx) -> AnimState {
    (ENTRY_CURVES[style as usize].eval)(ctx)
}

fn fade_up(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    AnimState {
        offset: Vec2::new(0.0, 40.0 * c.intensity * (1.0 - e)),
        alpha: e,
        ..AnimState::IDENTITY
    }
}

fn fade_down(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    AnimState {
        offset: Vec2::new(0.0, -40.0 * c.intensity * (1.0 - e)),
        alpha: e,
        ..AnimState::IDENTITY
    }
}

fn slam_down(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    let e = Ease::OutQuart.apply(p);
    // Squash while landing, back to rest at p = 1.
    let land = clamp01((p - 0.55) / 0.45);
    let squash = (PI * land).sin();
    AnimState {
        offset: Vec2::new(0.0, -160.0 * c.intensity * (1.0 - e)),
        scale: 1.0 - 0.18 * c.intensity * squash,
        alpha: clamp01(p * 4.0),
        ..AnimState::IDENTITY
    }
}

fn punch_in(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        scale: 1.0 + 1.4 * c.intensity * (1.0 - Ease::OutBack.apply(p)),
        alpha: clamp01(p * 3.0),
        blur: 6.0 * (1.0 - p),
        ..AnimState::IDENTITY
    }
}

fn snap_in(c: &CurveCtx) -> AnimState {
    AnimState {
        scale: 1.0 + 0.08 * c.intensity * (1.0 - c.progress),
        ..AnimState::IDENTITY
    }
}

fn drift_in(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    AnimState {
        offset: Vec2::new(-60.0 * c.intensity * (1.0 - e), 0.0),
        alpha: Ease::InOutQuad.apply(c.progress),
        ..AnimState::IDENTITY
    }
}

fn rise(c: &CurveCtx) -> AnimState {
    let e = Ease::OutExpo.apply(c.progress);
    AnimState {
        offset: Vec2::new(0.0, 80.0 * c.intensity * (1.0 - e)),
        scale: 0.9 + 0.1 * e,
        alpha: Ease::InOutQuad.apply(c.progress),
        ..AnimState::IDENTITY
    }
}

fn bloom(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        scale: 0.3 + 0.7 * Ease::OutBack.apply(p),
        alpha: Ease::OutQuad.apply(p),
        glow: 0.8 * c.intensity * (PI * p).sin(),
        ..AnimState::IDENTITY
    }
}

fn whisper(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(0.0, 10.0 * (1.0 - p)),
        alpha: Ease::InQuad.apply(p),
        blur: 4.0 * (1.0 - p),
        ..AnimState::IDENTITY
    }
}

fn shatter_in(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    let rest = 1.0 - e;
    AnimState {
        offset: Vec2::new(
            hash_signed(c.seed, 0) * 90.0 * c.intensity * rest,
            hash_signed(c.seed, 1) * 60.0 * c.intensity * rest,
        ),
        rotation: hash_signed(c.seed, 2) * 0.4 * rest,
        alpha: Ease::OutQuad.apply(c.progress),
        scatter: rest,
        ..AnimState::IDENTITY
    }
}

fn cut_in(_c: &CurveCtx) -> AnimState {
    AnimState::IDENTITY
}

fn elastic_pop(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        scale: Ease::OutElastic.apply(p).max(0.0),
        alpha: clamp01(p * 5.0),
        ..AnimState::IDENTITY
    }
}

fn spin_in(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    AnimState {
        rotation: -PI * c.intensity * (1.0 - e),
        scale: 0.5 + 0.5 * e,
        alpha: e,
        ..AnimState::IDENTITY
    }
}

fn slide_left(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    AnimState {
        offset: Vec2::new(220.0 * c.intensity * (1.0 - e), 0.0),
        alpha: clamp01(c.progress * 2.0),
        ..AnimState::IDENTITY
    }
}

fn slide_right(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    AnimState {
        offset: Vec2::new(-220.0 * c.intensity * (1.0 - e), 0.0),
        alpha: clamp01(c.progress * 2.0),
        ..AnimState::IDENTITY
    }
}

fn type_on(c: &CurveCtx) -> AnimState {
    AnimState {
        alpha: clamp01(c.progress * 8.0),
        reveal: Some(clamp01(c.progress)),
        ..AnimState::IDENTITY
    }
}

fn ghost_in(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    AnimState {
        offset: Vec2::new(12.0 * (p * PI * 4.0).sin() * (1.0 - p), 0.0),
        alpha: Ease::InCubic.apply(p),
        blur: 10.0 * (1.0 - p),
        ..AnimState::IDENTITY
    }
}

fn glitch_in(c: &CurveCtx) -> AnimState {
    let p = c.progress;
    if p >= 1.0 {
        return AnimState::IDENTITY;
    }
    // Jitter changes in discrete steps so it reads as a glitch, not noise.
    let step = (p * 12.0).floor() as u64;
    AnimState {
        offset: Vec2::new(hash_signed(c.seed, step) * 18.0 * c.intensity * (1.0 - p), 0.0),
        skew_x: hash_signed(c.seed, step + 100) * 0.3 * (1.0 - p),
        alpha: clamp01(p * (0.5 + hash01(c.seed, step + 200))),
        ..AnimState::IDENTITY
    }
}

fn focus_in(c: &CurveCtx) -> AnimState {
    let e = Ease::OutCubic.apply(c.progress);
    AnimState {
        scale: 1.08 - 0.08 * e,
        alpha: Ease::OutQuad.apply(c.progress),
        blur: 14.0 * (1.0 - e),
        ..AnimState::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entry.rs"]
mod tests;
