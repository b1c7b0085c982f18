use crate::foundation::core::Canvas;
use crate::foundation::math::{fract, hash01, seed_for};
use crate::style::tables::Atmosphere;

/// Golden-ratio conjugate, the x seed of the particle field.
const PHI_INV: f64 = 0.618_033_988_749_895;
/// `sqrt(2) - 1`, the y seed of the particle field.
const SQRT2_M1: f64 = 0.414_213_562_373_095;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// One ambient particle in canvas pixels.
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
}

/// Number of live particles for `tension`, capped at `max`.
pub fn particle_count(atmosphere: &Atmosphere, tension: f64, max: usize) -> usize {
    let scale = 0.5 + tension.clamp(0.0, 1.0);
    let n = (f64::from(atmosphere.particle_count) * scale).round() as usize;
    n.min(max)
}

/// Particle field at time `t`.
///
/// Positions are pure functions of the particle index and time, so no per-particle state is
/// carried between frames.
pub fn particles_at(
    atmosphere: &Atmosphere,
    canvas: Canvas,
    tension: f64,
    t: f64,
    max: usize,
) -> Vec<Particle> {
    let count = particle_count(atmosphere, tension, max);
    let seed = seed_for(atmosphere.tag, 0x5eed);
    (0..count)
        .map(|i| {
            let fi = i as f64;
            let x = fract(fi * PHI_INV + atmosphere.drift * t);
            let y = fract(fi * SQRT2_M1 - atmosphere.speed * t);
            let i = i as u64;
            Particle {
                x: x * canvas.width_f64(),
                y: y * canvas.height_f64(),
                size: atmosphere.size * (0.6 + 0.8 * hash01(seed, i)),
                alpha: (atmosphere.alpha * (0.5 + 0.5 * hash01(seed, i + 0x1000))).clamp(0.0, 1.0),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/atmosphere.rs"]
mod tests;
