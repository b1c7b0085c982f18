use std::collections::BTreeMap;

use crate::foundation::error::BakeResult;

/// Tail appended after the last lyric when song bounds have to be derived.
const DERIVED_TAIL_SECS: f64 = 1.0;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Complete, already time-aligned input to a bake.
///
/// The payload is read-only for the whole bake. Every field except `lines` is optional and
/// degrades to a simpler rendering path when absent.
pub struct Payload {
    /// Lyric lines in playback order.
    #[serde(default)]
    pub lines: Vec<LyricLine>,
    /// Word-level timestamps in playback order. Empty means whole-line rendering.
    #[serde(default)]
    pub words: Vec<WordTiming>,
    /// Beat grid supplied by the upstream analysis.
    #[serde(default)]
    pub beat_grid: BeatGrid,
    /// Directorial metadata parameterizing the bake.
    #[serde(default)]
    pub cinematic_direction: Option<CinematicDirection>,
    /// Ordered hex colors: `[background, text, accent, glow, ...]`.
    #[serde(default)]
    pub palette: Vec<String>,
    /// Song start in seconds.
    #[serde(default)]
    pub song_start: f64,
    /// Song end in seconds. Values `<= song_start` are derived from the lyric timing.
    #[serde(default)]
    pub song_end: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One lyric line with its display window in seconds.
pub struct LyricLine {
    /// Display text.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One sung word with its timing in seconds.
pub struct WordTiming {
    /// Word text as transcribed (punctuation included).
    pub word: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Beat timestamps plus tempo.
pub struct BeatGrid {
    /// Tempo in beats per minute. Used to synthesize beats when `beats` is empty.
    #[serde(default)]
    pub bpm: f64,
    /// Ascending beat timestamps in seconds.
    #[serde(default)]
    pub beats: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Hierarchical directorial metadata.
pub struct CinematicDirection {
    /// Song-wide defaults and mood inputs.
    #[serde(default)]
    pub defaults: SongDefaults,
    /// Sections with time-ratio bounds and optional overrides.
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    /// Per-word directives keyed by normalized word text.
    #[serde(default)]
    pub word_directives: BTreeMap<String, WordDirective>,
    /// Per-line storyboard notes.
    #[serde(default)]
    pub storyboard: Vec<StoryboardBeat>,
    /// Tension over time-ratio, linearly interpolated.
    #[serde(default)]
    pub tension_curve: Vec<TensionPoint>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Song-level defaults. Every tag falls back to a built-in value when absent or unknown.
pub struct SongDefaults {
    /// Continuous energy input in `[0, 1]` used to pick a motion profile.
    #[serde(default)]
    pub heat: Option<f64>,
    /// Categorical beat reaction (`pulse`, `slam`, `bounce`, `glitch`, ...).
    #[serde(default)]
    pub beat_response: Option<String>,
    /// Explicit style layer shared with chapter overrides.
    #[serde(flatten)]
    pub style: StyleOverrides,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Optional style tags. Used for song defaults and chapter overrides alike.
pub struct StyleOverrides {
    /// Motion profile tag.
    #[serde(default)]
    pub motion: Option<String>,
    /// Typography tag.
    #[serde(default)]
    pub typography: Option<String>,
    /// Named palette tag.
    #[serde(default)]
    pub palette: Option<String>,
    /// Atmosphere (particle system) tag.
    #[serde(default)]
    pub atmosphere: Option<String>,
    /// Texture (post-process) tag.
    #[serde(default)]
    pub texture: Option<String>,
    /// Camera shot tag.
    #[serde(default)]
    pub shot: Option<String>,
    /// Entry style tag applied to every word in scope.
    #[serde(default)]
    pub entry: Option<String>,
    /// Behavior style tag applied to every word in scope.
    #[serde(default)]
    pub behavior: Option<String>,
    /// Exit style tag applied to every word in scope.
    #[serde(default)]
    pub exit: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A song section bounded by time ratios in `[0, 1]`.
pub struct Chapter {
    /// Section title, informational only.
    #[serde(default)]
    pub title: String,
    /// Inclusive start as a fraction of the song duration.
    pub start_ratio: f64,
    /// Exclusive end as a fraction of the song duration.
    pub end_ratio: f64,
    /// Overrides in effect while the chapter is active.
    #[serde(default)]
    pub overrides: StyleOverrides,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Explicit per-word direction. Highest priority layer.
pub struct WordDirective {
    /// Entry style tag.
    #[serde(default)]
    pub entry: Option<String>,
    /// Behavior style tag.
    #[serde(default)]
    pub behavior: Option<String>,
    /// Exit style tag.
    #[serde(default)]
    pub exit: Option<String>,
    /// Semantic metaphor tag (`fire`, `ice`, ...).
    #[serde(default)]
    pub metaphor: Option<String>,
    /// Hex color override.
    #[serde(default)]
    pub color: Option<String>,
    /// Emphasis level, clamped to `1..=5`.
    #[serde(default)]
    pub emphasis: Option<u8>,
    /// Render fading echoes trailing the word.
    #[serde(default)]
    pub ghost_trail: bool,
    /// Reveal the word letter by letter.
    #[serde(default)]
    pub letter_sequence: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Storyboard note for one lyric line.
pub struct StoryboardBeat {
    /// Index into [`Payload::lines`].
    pub line_index: usize,
    /// Word of the line to push in emphasis.
    #[serde(default)]
    pub hero_word: Option<String>,
    /// Camera shot tag while the line is active.
    #[serde(default)]
    pub shot: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A point on the tension curve.
pub struct TensionPoint {
    /// Position as a fraction of the song duration.
    pub ratio: f64,
    /// Tension in `[0, 1]`.
    pub tension: f64,
}

impl Payload {
    /// Decode a payload from JSON text.
    pub fn from_json_str(s: &str) -> BakeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decode a payload from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> BakeResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Effective `(start, end)` song bounds in seconds.
    ///
    /// Explicit bounds win when they form a non-empty range; otherwise the range spans the lyric
    /// timing plus a short tail. A payload with no timing at all yields `(0, 0)`.
    pub fn bounds(&self) -> (f64, f64) {
        let (start, end) = (self.song_start, self.song_end);
        if start.is_finite() && end.is_finite() && end > start {
            return (start, end);
        }

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let spans = self
            .lines
            .iter()
            .map(|l| (l.start, l.end))
            .chain(self.words.iter().map(|w| (w.start, w.end)));
        for (s, e) in spans {
            if s.is_finite() {
                lo = lo.min(s);
            }
            if e.is_finite() {
                hi = hi.max(e);
            }
        }
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 0.0);
        }
        let lo = if start.is_finite() { start.min(lo) } else { lo };
        (lo, hi.max(lo) + DERIVED_TAIL_SECS)
    }

    /// Shared cinematic direction, or an empty one.
    pub fn direction(&self) -> std::borrow::Cow<'_, CinematicDirection> {
        match &self.cinematic_direction {
            Some(d) => std::borrow::Cow::Borrowed(d),
            None => std::borrow::Cow::Owned(CinematicDirection::default()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/payload/model.rs"]
mod tests;
