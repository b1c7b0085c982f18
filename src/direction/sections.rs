use crate::foundation::math::lerp;
use crate::payload::model::{Chapter, TensionPoint};

/// Tension used when the curve is empty.
pub const DEFAULT_TENSION: f64 = 0.5;

/// Index of the chapter active at `ratio` (fraction of the song duration).
///
/// Bounds are `[start_ratio, end_ratio)`; the last matching chapter also covers its end so a song
/// ending exactly at `1.0` stays inside it. Overlapping chapters resolve to the earliest listed.
pub fn chapter_index_at(chapters: &[Chapter], ratio: f64) -> Option<usize> {
    if !ratio.is_finite() {
        return None;
    }
    chapters
        .iter()
        .position(|c| ratio >= c.start_ratio && ratio < c.end_ratio)
        .or_else(|| {
            chapters
                .iter()
                .rposition(|c| c.end_ratio > c.start_ratio && ratio == c.end_ratio)
        })
}

/// Tension at `ratio`, linearly interpolated and clamped to the curve's end points.
pub fn tension_at(curve: &[TensionPoint], ratio: f64) -> f64 {
    let mut points = curve.iter().filter(|p| p.ratio.is_finite() && p.tension.is_finite());
    let Some(first) = points.next() else {
        return DEFAULT_TENSION;
    };
    if !ratio.is_finite() || ratio <= first.ratio {
        return first.tension.clamp(0.0, 1.0);
    }

    let mut prev = first;
    for p in points {
        if ratio <= p.ratio {
            let span = p.ratio - prev.ratio;
            let t = if span > 0.0 {
                (ratio - prev.ratio) / span
            } else {
                1.0
            };
            return lerp(prev.tension, p.tension, t).clamp(0.0, 1.0);
        }
        prev = p;
    }
    prev.tension.clamp(0.0, 1.0)
}
