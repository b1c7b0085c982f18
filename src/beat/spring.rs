/// Ticks a beat crossing lights the glow for.
pub const GLOW_TICKS: u32 = 12;
const GLOW_EXPONENT: f64 = 0.6;

pub const SPRING_VELOCITY_DECAY: f64 = 0.82;
pub const SPRING_OFFSET_DECAY: f64 = 0.88;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Countdown behind the beat glow pulse.
pub struct GlowBudget {
    ticks: u32,
}

impl GlowBudget {
    /// Refill on a beat crossing.
    pub fn trigger(&mut self) {
        self.ticks = GLOW_TICKS;
    }

    /// One frame without a crossing.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_sub(1);
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// `(ticks / 12)^0.6`: 1 right at a crossing, fast rise and slow fall to 0.
    pub fn glow(&self) -> f64 {
        (f64::from(self.ticks) / f64::from(GLOW_TICKS)).powf(GLOW_EXPONENT)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Two-stage decaying thump shared by text scale and camera zoom.
///
/// Velocity and offset both decay geometrically, so the spring settles without oscillating.
pub struct Spring {
    pub offset: f64,
    pub velocity: f64,
}

impl Spring {
    pub fn kick(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    pub fn step(&mut self) {
        self.offset += self.velocity;
        self.velocity *= SPRING_VELOCITY_DECAY;
        self.offset *= SPRING_OFFSET_DECAY;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/beat/spring.rs"]
mod tests;
