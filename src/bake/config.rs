use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{BakeError, BakeResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Options for one bake.
pub struct BakeConfig {
    /// Canvas the layout is solved for.
    pub canvas: Canvas,
    /// Keyframe rate.
    pub fps: Fps,
    /// Minimum distance in pixels between any word box and the canvas edge.
    pub margin_px: f64,
    /// Reference font size in pixels; typography and emphasis scale from it.
    pub base_font_size: f64,
    /// Frames between progress callbacks.
    pub progress_every: u64,
    /// Frames per batch of a chunked bake.
    pub chunk_frames: u64,
    /// Upper bound on particles per keyframe.
    pub max_particles: usize,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: Fps::default(),
            margin_px: 64.0,
            base_font_size: 72.0,
            progress_every: 20,
            chunk_frames: 120,
            max_particles: 256,
        }
    }
}

impl BakeConfig {
    /// Decode a (possibly partial) config from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BakeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> BakeResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(BakeError::validation("canvas width/height must be > 0"));
        }
        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(BakeError::validation("marginPx must be finite and >= 0"));
        }
        let short_side = f64::from(self.canvas.width.min(self.canvas.height));
        if 2.0 * self.margin_px >= short_side {
            return Err(BakeError::validation(
                "marginPx must leave room inside the canvas",
            ));
        }
        if !self.base_font_size.is_finite() || self.base_font_size <= 0.0 {
            return Err(BakeError::validation("baseFontSize must be finite and > 0"));
        }
        if self.progress_every == 0 {
            return Err(BakeError::validation("progressEvery must be > 0"));
        }
        if self.chunk_frames == 0 {
            return Err(BakeError::validation("chunkFrames must be > 0"));
        }
        Ok(())
    }
}
