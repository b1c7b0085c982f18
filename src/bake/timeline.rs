use crate::foundation::core::Fps;
use crate::scene::atmosphere::Particle;
use crate::scene::camera::CameraState;
use crate::style::tables::TextureParams;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Baked output: one keyframe per frame step, in frame order.
///
/// Immutable once produced. A renderer only reads it.
pub struct Timeline {
    pub fps: Fps,
    pub frame_count: u64,
    pub song_start: f64,
    pub song_end: f64,
    pub keyframes: Vec<Keyframe>,
}

impl Timeline {
    pub fn frame_duration_secs(&self) -> f64 {
        self.fps.frame_duration_secs()
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> crate::foundation::error::BakeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Fully resolved render state of one frame.
pub struct Keyframe {
    pub frame: u64,
    pub time_sec: f64,
    /// Word (or whole-line) chunks of every group on screen, in word order.
    pub chunks: Vec<ChunkState>,
    pub camera: CameraState,
    pub particles: Vec<Particle>,
    pub texture: TextureParams,
    /// Background color (hex).
    pub background: String,
    /// Active chapter index.
    pub active_section: Option<usize>,
    pub active_line: Option<usize>,
    /// Most recently crossed beat.
    pub beat_index: Option<usize>,
    /// Beat glow in `[0, 1]`.
    pub beat_glow: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Self-sufficient draw descriptor for one word.
pub struct ChunkState {
    /// Stable id: `<line>-<word index in line>`.
    pub id: String,
    pub text: String,
    /// Center in canvas pixels, animation offset applied.
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
    pub font_weight: u16,
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    pub color: String,
    pub glow: f64,
    pub skew_x: f64,
    pub blur: f64,
    pub rotation: f64,
    pub entry: &'static str,
    pub behavior: &'static str,
    pub exit: &'static str,
    /// Particle emitter attached by a metaphor.
    pub emitter: Option<String>,
    pub visible: bool,
    /// Per-letter overrides; empty when the word draws as one run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub letters: Vec<LetterState>,
    /// Fading echoes of earlier positions, newest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ghosts: Vec<GhostEcho>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// One letter's deviation from the word run.
pub struct LetterState {
    pub ch: char,
    pub dx: f64,
    pub dy: f64,
    pub alpha: f64,
    pub rotation: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// A trailing copy of a word drawn at an earlier pose.
pub struct GhostEcho {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub alpha: f64,
}
