use crate::foundation::core::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Transform delta produced by one curve for one frame.
///
/// Never persisted: every frame recomputes it from style, progress and intensity.
pub struct AnimState {
    /// Pixel offset from the laid-out position.
    pub offset: Vec2,
    /// Uniform scale multiplier.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Horizontal skew in radians.
    pub skew_x: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Additive glow strength.
    pub glow: f64,
    /// Per-letter scatter amount in `[0, 1]`; expanded into letter offsets by the baker.
    pub scatter: f64,
    /// Fraction of letters revealed, when the curve reveals letter by letter.
    pub reveal: Option<f64>,
}

impl Default for AnimState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AnimState {
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        scale: 1.0,
        alpha: 1.0,
        skew_x: 0.0,
        rotation: 0.0,
        blur: 0.0,
        glow: 0.0,
        scatter: 0.0,
        reveal: None,
    };

    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::IDENTITY
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Inputs shared by every curve evaluator.
pub struct CurveCtx {
    /// Normalized phase progress in `[0, 1]` (entry and exit curves).
    pub progress: f64,
    /// Motion-profile intensity, already modulated by tension and emphasis.
    pub intensity: f64,
    /// Seconds since the current phase began (behavior curves).
    pub elapsed: f64,
    /// Position inside the current beat interval, `[0, 1)`.
    pub beat_phase: f64,
    /// Stable per-word seed for deterministic jitter.
    pub seed: u64,
}

impl CurveCtx {
    pub fn at_progress(progress: f64, intensity: f64, seed: u64) -> Self {
        Self {
            progress,
            intensity,
            elapsed: 0.0,
            beat_phase: 0.0,
            seed,
        }
    }
}

/// Merge the three phase deltas into one frame transform.
///
/// Offsets, skew, rotation, blur and glow sum; scales multiply. Once the exit phase has started
/// its alpha replaces the entry alpha; behavior alpha modulates whichever is active.
pub fn compose(entry: &AnimState, behavior: &AnimState, exit: Option<&AnimState>) -> AnimState {
    let exit_state = exit.copied().unwrap_or(AnimState::IDENTITY);
    let base_alpha = match exit {
        Some(x) => x.alpha,
        None => entry.alpha,
    };
    let alpha = base_alpha * behavior.alpha;
    AnimState {
        offset: entry.offset + behavior.offset + exit_state.offset,
        scale: entry.scale * behavior.scale * exit_state.scale,
        alpha: if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        },
        skew_x: entry.skew_x + behavior.skew_x + exit_state.skew_x,
        rotation: entry.rotation + behavior.rotation + exit_state.rotation,
        blur: (entry.blur + behavior.blur + exit_state.blur).max(0.0),
        glow: (entry.glow + behavior.glow + exit_state.glow).max(0.0),
        scatter: entry.scatter.max(exit_state.scatter).clamp(0.0, 1.0),
        reveal: entry.reveal.or(exit_state.reveal),
    }
}
