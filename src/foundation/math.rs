#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Stable 64-bit seed for a string key.
pub(crate) fn seed_for(key: &str, salt: u64) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(key.as_bytes());
    h.write_u8(0xff);
    h.write_u64(salt);
    h.finish()
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic hash of `(seed, index)` to `[0, 1)`.
///
/// Every jitter in the pipeline goes through this; there is no RNG state anywhere.
pub(crate) fn hash01(seed: u64, index: u64) -> f64 {
    let v = splitmix64(seed ^ index.wrapping_mul(0xD6E8_FEB8_6659_FD93)) >> 11;
    (v as f64) * (1.0 / ((1u64 << 53) as f64))
}

/// Deterministic hash of `(seed, index)` to `[-1, 1)`.
pub(crate) fn hash_signed(seed: u64, index: u64) -> f64 {
    hash01(seed, index) * 2.0 - 1.0
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub(crate) fn fract(v: f64) -> f64 {
    v - v.floor()
}

/// Normalized position of `t` inside `[start, start + dur]`, clamped to `[0, 1]`.
pub(crate) fn progress(t: f64, start: f64, dur: f64) -> f64 {
    if dur <= 0.0 {
        return if t >= start { 1.0 } else { 0.0 };
    }
    clamp01((t - start) / dur)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
