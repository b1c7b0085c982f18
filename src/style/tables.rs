use crate::animation::behavior::BehaviorStyle;
use crate::animation::entry::EntryStyle;
use crate::animation::exit::ExitStyle;

/// Entries of a static lookup table addressed by a categorical tag.
pub(crate) trait Tagged: 'static {
    fn tag(&self) -> &'static str;
}

/// Case-insensitive lookup of `tag` in `table`.
pub(crate) fn find<T: Tagged>(table: &'static [T], tag: &str) -> Option<&'static T> {
    let tag = tag.trim();
    table.iter().find(|e| e.tag().eq_ignore_ascii_case(tag))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionProfileKind {
    Weighted,
    Fluid,
    Elastic,
    Drift,
    Glitch,
}

#[derive(Debug)]
/// Default style sets and timing constants for one motion profile.
pub struct MotionProfile {
    pub kind: MotionProfileKind,
    pub tag: &'static str,
    pub entries: &'static [EntryStyle],
    pub behaviors: &'static [BehaviorStyle],
    pub exits: &'static [ExitStyle],
    /// Entry window in seconds.
    pub entry_secs: f64,
    /// Exit window in seconds.
    pub exit_secs: f64,
    /// Base curve intensity.
    pub intensity: f64,
    /// Spring velocity injected on every beat crossing.
    pub spring_kick: f64,
    /// How much of the beat glow reaches the text.
    pub beat_glow: f64,
}

pub(crate) static MOTION_PROFILES: [MotionProfile; 5] = [
    MotionProfile {
        kind: MotionProfileKind::Weighted,
        tag: "weighted",
        entries: &[EntryStyle::SlamDown, EntryStyle::PunchIn, EntryStyle::CutIn],
        behaviors: &[BehaviorStyle::Pulse, BehaviorStyle::Vibrate, BehaviorStyle::Freeze],
        exits: &[
            ExitStyle::GravityFall,
            ExitStyle::Shrink,
            ExitStyle::SnapOut,
            ExitStyle::FreezeCrack,
        ],
        entry_secs: 0.18,
        exit_secs: 0.35,
        intensity: 1.2,
        spring_kick: 0.22,
        beat_glow: 0.9,
    },
    MotionProfile {
        kind: MotionProfileKind::Fluid,
        tag: "fluid",
        entries: &[
            EntryStyle::FadeUp,
            EntryStyle::DriftIn,
            EntryStyle::Rise,
            EntryStyle::Whisper,
        ],
        behaviors: &[BehaviorStyle::Float, BehaviorStyle::Grow, BehaviorStyle::Lean],
        exits: &[
            ExitStyle::Fade,
            ExitStyle::Dissolve,
            ExitStyle::DriftUp,
            ExitStyle::Evaporate,
        ],
        entry_secs: 0.35,
        exit_secs: 0.5,
        intensity: 0.8,
        spring_kick: 0.12,
        beat_glow: 0.5,
    },
    MotionProfile {
        kind: MotionProfileKind::Elastic,
        tag: "elastic",
        entries: &[
            EntryStyle::ElasticPop,
            EntryStyle::Bloom,
            EntryStyle::PunchIn,
            EntryStyle::SpinIn,
        ],
        behaviors: &[BehaviorStyle::Pulse, BehaviorStyle::Breathe, BehaviorStyle::Orbit],
        exits: &[
            ExitStyle::PunchOut,
            ExitStyle::Shrink,
            ExitStyle::SpinOut,
            ExitStyle::Explode,
        ],
        entry_secs: 0.3,
        exit_secs: 0.4,
        intensity: 1.0,
        spring_kick: 0.18,
        beat_glow: 0.7,
    },
    MotionProfile {
        kind: MotionProfileKind::Drift,
        tag: "drift",
        entries: &[
            EntryStyle::GhostIn,
            EntryStyle::FocusIn,
            EntryStyle::Whisper,
            EntryStyle::FadeDown,
        ],
        behaviors: &[BehaviorStyle::Sway, BehaviorStyle::Breathe, BehaviorStyle::Float],
        exits: &[
            ExitStyle::Evaporate,
            ExitStyle::BlurOut,
            ExitStyle::EchoFade,
            ExitStyle::Linger,
        ],
        entry_secs: 0.6,
        exit_secs: 0.8,
        intensity: 0.6,
        spring_kick: 0.06,
        beat_glow: 0.3,
    },
    MotionProfile {
        kind: MotionProfileKind::Glitch,
        tag: "glitch",
        entries: &[
            EntryStyle::GlitchIn,
            EntryStyle::SnapIn,
            EntryStyle::ShatterIn,
            EntryStyle::TypeOn,
        ],
        behaviors: &[BehaviorStyle::Flicker, BehaviorStyle::Vibrate, BehaviorStyle::Freeze],
        exits: &[
            ExitStyle::GlitchOut,
            ExitStyle::ScatterLetters,
            ExitStyle::CutOut,
            ExitStyle::Explode,
        ],
        entry_secs: 0.15,
        exit_secs: 0.3,
        intensity: 1.1,
        spring_kick: 0.2,
        beat_glow: 0.8,
    },
];

impl Tagged for MotionProfile {
    fn tag(&self) -> &'static str {
        self.tag
    }
}

impl MotionProfileKind {
    pub fn profile(self) -> &'static MotionProfile {
        &MOTION_PROFILES[self as usize]
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        find(&MOTION_PROFILES, tag).map(|p| p.kind)
    }

    /// Pick a profile from continuous mood inputs.
    ///
    /// A categorical beat response wins where it names a profile; otherwise heat decides.
    pub fn from_mood(heat: f64, beat_response: &str) -> Self {
        match beat_response.trim().to_ascii_lowercase().as_str() {
            "slam" => return Self::Weighted,
            "bounce" => return Self::Elastic,
            "glitch" => return Self::Glitch,
            _ => {}
        }
        let heat = if heat.is_finite() { heat } else { 0.5 };
        if heat < 0.3 {
            Self::Drift
        } else if heat >= 0.8 {
            Self::Elastic
        } else {
            Self::Fluid
        }
    }
}

#[derive(Debug)]
/// Font selection and sizing for a typography tag.
pub struct Typography {
    pub tag: &'static str,
    pub font_family: &'static str,
    pub font_weight: u16,
    /// Multiplier on the configured base font size.
    pub size_scale: f64,
    /// Extra tracking as a fraction of the font size.
    pub letter_spacing: f64,
    pub uppercase: bool,
}

pub(crate) static TYPOGRAPHY: [Typography; 6] = [
    Typography {
        tag: "bold-impact",
        font_family: "Anton",
        font_weight: 800,
        size_scale: 1.15,
        letter_spacing: 0.02,
        uppercase: true,
    },
    Typography {
        tag: "elegant-serif",
        font_family: "Playfair Display",
        font_weight: 400,
        size_scale: 1.0,
        letter_spacing: 0.01,
        uppercase: false,
    },
    Typography {
        tag: "clean-modern",
        font_family: "Inter",
        font_weight: 600,
        size_scale: 1.0,
        letter_spacing: 0.0,
        uppercase: false,
    },
    Typography {
        tag: "raw-handwritten",
        font_family: "Caveat",
        font_weight: 500,
        size_scale: 1.1,
        letter_spacing: 0.0,
        uppercase: false,
    },
    Typography {
        tag: "mono-glitch",
        font_family: "JetBrains Mono",
        font_weight: 500,
        size_scale: 0.9,
        letter_spacing: 0.04,
        uppercase: true,
    },
    Typography {
        tag: "condensed",
        font_family: "Oswald",
        font_weight: 700,
        size_scale: 1.05,
        letter_spacing: 0.01,
        uppercase: true,
    },
];

pub(crate) const DEFAULT_TYPOGRAPHY: usize = 2;

impl Tagged for Typography {
    fn tag(&self) -> &'static str {
        self.tag
    }
}

#[derive(Debug)]
/// Named color set.
pub struct PaletteSpec {
    pub tag: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub glow: &'static str,
}

pub(crate) static PALETTES: [PaletteSpec; 6] = [
    PaletteSpec {
        tag: "midnight",
        background: "#0B0E1A",
        text: "#F5F7FF",
        accent: "#7C9CFF",
        glow: "#9FB4FF",
    },
    PaletteSpec {
        tag: "ember",
        background: "#1A0A06",
        text: "#FFE9D6",
        accent: "#FF6A2B",
        glow: "#FFB36B",
    },
    PaletteSpec {
        tag: "ocean",
        background: "#04151F",
        text: "#E6F7FF",
        accent: "#2EC4F1",
        glow: "#8BE3FF",
    },
    PaletteSpec {
        tag: "neon",
        background: "#0A0012",
        text: "#FDFDFD",
        accent: "#FF2BD6",
        glow: "#2BFFF1",
    },
    PaletteSpec {
        tag: "pastel",
        background: "#FDF6F0",
        text: "#3A3340",
        accent: "#F29CB7",
        glow: "#FFD8E4",
    },
    PaletteSpec {
        tag: "mono",
        background: "#000000",
        text: "#FFFFFF",
        accent: "#BDBDBD",
        glow: "#FFFFFF",
    },
];

pub(crate) const DEFAULT_PALETTE: usize = 0;

impl Tagged for PaletteSpec {
    fn tag(&self) -> &'static str {
        self.tag
    }
}

#[derive(Debug)]
/// Particle system parameters for an atmosphere tag.
pub struct Atmosphere {
    pub tag: &'static str,
    /// Emitter tag forwarded to the renderer.
    pub emitter: &'static str,
    /// Particle count at tension 1.
    pub particle_count: u16,
    /// Vertical travel in canvas heights per second (positive rises).
    pub speed: f64,
    /// Horizontal travel in canvas widths per second.
    pub drift: f64,
    /// Particle size in pixels.
    pub size: f64,
    /// Peak particle opacity.
    pub alpha: f64,
}

pub(crate) static ATMOSPHERES: [Atmosphere; 7] = [
    Atmosphere {
        tag: "none",
        emitter: "none",
        particle_count: 0,
        speed: 0.0,
        drift: 0.0,
        size: 0.0,
        alpha: 0.0,
    },
    Atmosphere {
        tag: "dust",
        emitter: "dust",
        particle_count: 40,
        speed: 0.01,
        drift: 0.004,
        size: 2.0,
        alpha: 0.35,
    },
    Atmosphere {
        tag: "embers",
        emitter: "embers",
        particle_count: 60,
        speed: 0.08,
        drift: 0.01,
        size: 3.0,
        alpha: 0.8,
    },
    Atmosphere {
        tag: "snow",
        emitter: "snow",
        particle_count: 90,
        speed: -0.05,
        drift: 0.012,
        size: 3.5,
        alpha: 0.7,
    },
    Atmosphere {
        tag: "rain",
        emitter: "rain",
        particle_count: 120,
        speed: -0.6,
        drift: -0.02,
        size: 1.5,
        alpha: 0.5,
    },
    Atmosphere {
        tag: "stars",
        emitter: "stars",
        particle_count: 80,
        speed: 0.0,
        drift: 0.002,
        size: 1.8,
        alpha: 0.9,
    },
    Atmosphere {
        tag: "smoke",
        emitter: "smoke",
        particle_count: 24,
        speed: 0.03,
        drift: 0.015,
        size: 40.0,
        alpha: 0.2,
    },
];

pub(crate) const DEFAULT_ATMOSPHERE: usize = 1;

impl Tagged for Atmosphere {
    fn tag(&self) -> &'static str {
        self.tag
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Full-frame post-processing parameters for a texture tag.
pub struct TextureParams {
    pub tag: &'static str,
    pub grain: f64,
    pub vignette: f64,
    pub blur: f64,
    pub chroma: f64,
    pub scanlines: f64,
}

pub(crate) static TEXTURES: [TextureParams; 5] = [
    TextureParams {
        tag: "clean",
        grain: 0.0,
        vignette: 0.15,
        blur: 0.0,
        chroma: 0.0,
        scanlines: 0.0,
    },
    TextureParams {
        tag: "film",
        grain: 0.35,
        vignette: 0.4,
        blur: 0.0,
        chroma: 0.05,
        scanlines: 0.0,
    },
    TextureParams {
        tag: "grunge",
        grain: 0.6,
        vignette: 0.55,
        blur: 0.5,
        chroma: 0.1,
        scanlines: 0.0,
    },
    TextureParams {
        tag: "dream",
        grain: 0.1,
        vignette: 0.3,
        blur: 2.0,
        chroma: 0.0,
        scanlines: 0.0,
    },
    TextureParams {
        tag: "neon",
        grain: 0.15,
        vignette: 0.35,
        blur: 0.0,
        chroma: 0.3,
        scanlines: 0.4,
    },
];

pub(crate) const DEFAULT_TEXTURE: usize = 0;

impl Tagged for TextureParams {
    fn tag(&self) -> &'static str {
        self.tag
    }
}

#[derive(Debug, PartialEq)]
/// Word-meaning override of the generic motion profile.
pub struct Metaphor {
    pub tag: &'static str,
    pub entry: EntryStyle,
    pub behavior: BehaviorStyle,
    pub exit: ExitStyle,
    pub color: &'static str,
    pub glow: f64,
    pub scale: f64,
    pub emitter: &'static str,
}

pub(crate) static METAPHORS: [Metaphor; 10] = [
    Metaphor {
        tag: "fire",
        entry: EntryStyle::Bloom,
        behavior: BehaviorStyle::Flicker,
        exit: ExitStyle::BurnOut,
        color: "#FF6A2B",
        glow: 0.8,
        scale: 1.15,
        emitter: "embers",
    },
    Metaphor {
        tag: "ice",
        entry: EntryStyle::FocusIn,
        behavior: BehaviorStyle::Freeze,
        exit: ExitStyle::FreezeCrack,
        color: "#A8E6FF",
        glow: 0.5,
        scale: 1.05,
        emitter: "frost",
    },
    Metaphor {
        tag: "water",
        entry: EntryStyle::DriftIn,
        behavior: BehaviorStyle::Sway,
        exit: ExitStyle::Melt,
        color: "#4FC3F7",
        glow: 0.3,
        scale: 1.0,
        emitter: "droplets",
    },
    Metaphor {
        tag: "fall",
        entry: EntryStyle::SlamDown,
        behavior: BehaviorStyle::Vibrate,
        exit: ExitStyle::GravityFall,
        color: "#B0BEC5",
        glow: 0.2,
        scale: 1.1,
        emitter: "debris",
    },
    Metaphor {
        tag: "ascend",
        entry: EntryStyle::Rise,
        behavior: BehaviorStyle::Float,
        exit: ExitStyle::DriftUp,
        color: "#FFE082",
        glow: 0.6,
        scale: 1.1,
        emitter: "sparkles",
    },
    Metaphor {
        tag: "break",
        entry: EntryStyle::ShatterIn,
        behavior: BehaviorStyle::Vibrate,
        exit: ExitStyle::ScatterLetters,
        color: "#EF5350",
        glow: 0.4,
        scale: 1.1,
        emitter: "shards",
    },
    Metaphor {
        tag: "ghost",
        entry: EntryStyle::GhostIn,
        behavior: BehaviorStyle::Flicker,
        exit: ExitStyle::Evaporate,
        color: "#CFD8DC",
        glow: 0.35,
        scale: 0.95,
        emitter: "mist",
    },
    Metaphor {
        tag: "heart",
        entry: EntryStyle::Bloom,
        behavior: BehaviorStyle::Pulse,
        exit: ExitStyle::Fade,
        color: "#FF4F8B",
        glow: 0.6,
        scale: 1.12,
        emitter: "hearts",
    },
    Metaphor {
        tag: "storm",
        entry: EntryStyle::GlitchIn,
        behavior: BehaviorStyle::Vibrate,
        exit: ExitStyle::BlowAway,
        color: "#7E57C2",
        glow: 0.5,
        scale: 1.08,
        emitter: "lightning",
    },
    Metaphor {
        tag: "light",
        entry: EntryStyle::FocusIn,
        behavior: BehaviorStyle::Breathe,
        exit: ExitStyle::Linger,
        color: "#FFFFFF",
        glow: 0.9,
        scale: 1.05,
        emitter: "rays",
    },
];

impl Tagged for Metaphor {
    fn tag(&self) -> &'static str {
        self.tag
    }
}

#[derive(Debug)]
/// Camera framing tag and its zoom multiplier.
pub struct Shot {
    pub tag: &'static str,
    pub zoom: f64,
}

pub(crate) static SHOTS: [Shot; 6] = [
    Shot {
        tag: "wide",
        zoom: 0.85,
    },
    Shot {
        tag: "medium",
        zoom: 1.0,
    },
    Shot {
        tag: "close",
        zoom: 1.15,
    },
    Shot {
        tag: "extreme-close",
        zoom: 1.35,
    },
    Shot {
        tag: "push-in",
        zoom: 1.1,
    },
    Shot {
        tag: "pull-back",
        zoom: 0.92,
    },
];

pub(crate) const DEFAULT_SHOT: usize = 1;

impl Tagged for Shot {
    fn tag(&self) -> &'static str {
        self.tag
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/tables.rs"]
mod tests;
