use xxhash_rust::xxh3::Xxh3;

use crate::bake::timeline::{ChunkState, Keyframe, Timeline};

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Stable 128-bit digest of a baked timeline.
///
/// Two timelines with the same fingerprint are, for all practical purposes, bit-identical.
pub struct TimelineFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for TimelineFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest every numeric and textual field of `timeline`, in order.
pub fn fingerprint_timeline(timeline: &Timeline) -> TimelineFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(timeline.fps.num);
    h.write_u32(timeline.fps.den);
    h.write_u64(timeline.frame_count);
    h.write_f64(timeline.song_start);
    h.write_f64(timeline.song_end);
    h.write_u64(timeline.keyframes.len() as u64);
    for kf in &timeline.keyframes {
        write_keyframe(&mut h, kf);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn write_opt_usize(&mut self, v: Option<usize>) {
        match v {
            None => self.write_u8(0),
            Some(v) => {
                self.write_u8(1);
                self.write_u64(v as u64);
            }
        }
    }

    fn finish(self) -> TimelineFingerprint {
        let v = self.inner.digest128();
        TimelineFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_keyframe(h: &mut StableHasher, kf: &Keyframe) {
    h.write_u64(kf.frame);
    h.write_f64(kf.time_sec);

    h.write_u32(kf.chunks.len() as u32);
    for c in &kf.chunks {
        write_chunk(h, c);
    }

    let cam = &kf.camera;
    for v in [cam.zoom, cam.offset_x, cam.offset_y, cam.rotation] {
        h.write_f64(v);
    }

    h.write_u32(kf.particles.len() as u32);
    for p in &kf.particles {
        for v in [p.x, p.y, p.size, p.alpha] {
            h.write_f64(v);
        }
    }

    let tx = &kf.texture;
    h.write_str(tx.tag);
    for v in [tx.grain, tx.vignette, tx.blur, tx.chroma, tx.scanlines] {
        h.write_f64(v);
    }

    h.write_str(&kf.background);
    h.write_opt_usize(kf.active_section);
    h.write_opt_usize(kf.active_line);
    h.write_opt_usize(kf.beat_index);
    h.write_f64(kf.beat_glow);
}

fn write_chunk(h: &mut StableHasher, c: &ChunkState) {
    h.write_str(&c.id);
    h.write_str(&c.text);
    for v in [
        c.x, c.y, c.font_size, c.scale, c.alpha, c.glow, c.skew_x, c.blur, c.rotation,
    ] {
        h.write_f64(v);
    }
    h.write_str(&c.font_family);
    h.write_u32(u32::from(c.font_weight));
    h.write_str(&c.color);
    h.write_str(c.entry);
    h.write_str(c.behavior);
    h.write_str(c.exit);
    match &c.emitter {
        None => h.write_u8(0),
        Some(e) => {
            h.write_u8(1);
            h.write_str(e);
        }
    }
    h.write_bool(c.visible);

    h.write_u32(c.letters.len() as u32);
    for l in &c.letters {
        h.write_u32(u32::from(l.ch));
        for v in [l.dx, l.dy, l.alpha, l.rotation] {
            h.write_f64(v);
        }
    }
    h.write_u32(c.ghosts.len() as u32);
    for g in &c.ghosts {
        for v in [g.x, g.y, g.scale, g.alpha] {
            h.write_f64(v);
        }
    }
}
