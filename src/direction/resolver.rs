use crate::animation::behavior::BehaviorStyle;
use crate::animation::entry::EntryStyle;
use crate::animation::exit::ExitStyle;
use crate::payload::model::{Chapter, SongDefaults, StyleOverrides};
use crate::style::tables::{
    self, ATMOSPHERES, Atmosphere, DEFAULT_ATMOSPHERE, DEFAULT_PALETTE, DEFAULT_SHOT,
    DEFAULT_TEXTURE, DEFAULT_TYPOGRAPHY, MotionProfileKind, PALETTES, PaletteSpec, SHOTS, Shot,
    TEXTURES, TYPOGRAPHY, TextureParams, Typography,
};

const DEFAULT_HEAT: f64 = 0.5;
const DEFAULT_BEAT_RESPONSE: &str = "pulse";

/// First defined value in priority order, else `fallback`.
///
/// Layers are passed highest priority first: word, chapter, song default.
pub fn first_defined<T>(layers: impl IntoIterator<Item = Option<T>>, fallback: T) -> T {
    layers.into_iter().flatten().next().unwrap_or(fallback)
}

/// Resolve a categorical tag through ordered override layers.
///
/// A layer counts as defined only when its tag is recognized by `lookup`; unknown tags are
/// skipped so the next layer (and finally `fallback`) applies.
pub(crate) fn resolve_tag<T>(
    kind: &'static str,
    layers: &[Option<&str>],
    lookup: impl Fn(&str) -> Option<T>,
    fallback: T,
) -> T {
    first_defined(
        layers.iter().map(|layer| {
            let tag = (*layer)?;
            let hit = lookup(tag);
            if hit.is_none() {
                tracing::debug!(kind, tag, "unknown style tag, falling back");
            }
            hit
        }),
        fallback,
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Concrete colors for one scope.
pub struct ResolvedPalette {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub glow: String,
}

impl ResolvedPalette {
    fn from_spec(spec: &PaletteSpec) -> Self {
        Self {
            background: spec.background.to_string(),
            text: spec.text.to_string(),
            accent: spec.accent.to_string(),
            glow: spec.glow.to_string(),
        }
    }

    /// Build from the payload's ordered color list, filling gaps from the built-in palette.
    fn from_list(colors: &[String]) -> Self {
        let base = &PALETTES[DEFAULT_PALETTE];
        let pick = |i: usize, fallback: &str| {
            colors
                .get(i)
                .filter(|c| is_hex_color(c))
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        Self {
            background: pick(0, base.background),
            text: pick(1, base.text),
            accent: pick(2, base.accent),
            glow: pick(3, base.glow),
        }
    }
}

pub(crate) fn is_hex_color(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Clone, Debug)]
/// Effective style for the song or for one chapter.
pub struct ResolvedStyle {
    pub motion: MotionProfileKind,
    pub typography: &'static Typography,
    pub palette: ResolvedPalette,
    pub atmosphere: &'static Atmosphere,
    pub texture: &'static TextureParams,
    pub shot: &'static Shot,
    /// Scope-wide forced styles, if any layer names a known one.
    pub entry: Option<EntryStyle>,
    pub behavior: Option<BehaviorStyle>,
    pub exit: Option<ExitStyle>,
}

/// Resolves song and chapter styles from one payload's direction layers.
pub struct StyleResolver<'a> {
    defaults: &'a SongDefaults,
    payload_palette: &'a [String],
}

impl<'a> StyleResolver<'a> {
    pub fn new(defaults: &'a SongDefaults, payload_palette: &'a [String]) -> Self {
        Self {
            defaults,
            payload_palette,
        }
    }

    /// Motion profile picked from the song's mood inputs alone.
    pub fn mood_profile(&self) -> MotionProfileKind {
        let heat = self.defaults.heat.unwrap_or(DEFAULT_HEAT);
        let response = self
            .defaults
            .beat_response
            .as_deref()
            .unwrap_or(DEFAULT_BEAT_RESPONSE);
        MotionProfileKind::from_mood(heat, response)
    }

    pub fn song(&self) -> ResolvedStyle {
        self.resolve(None)
    }

    pub fn chapter(&self, chapter: &Chapter) -> ResolvedStyle {
        self.resolve(Some(&chapter.overrides))
    }

    fn resolve(&self, chapter: Option<&StyleOverrides>) -> ResolvedStyle {
        let song = &self.defaults.style;
        let layers = |f: fn(&StyleOverrides) -> Option<&str>| [chapter.and_then(f), f(song)];

        let motion = resolve_tag(
            "motion",
            &layers(|s| s.motion.as_deref()),
            MotionProfileKind::from_tag,
            self.mood_profile(),
        );
        let typography = resolve_tag(
            "typography",
            &layers(|s| s.typography.as_deref()),
            |t| tables::find(&TYPOGRAPHY, t),
            &TYPOGRAPHY[DEFAULT_TYPOGRAPHY],
        );
        let palette = resolve_tag(
            "palette",
            &layers(|s| s.palette.as_deref()),
            |t| tables::find(&PALETTES, t).map(ResolvedPalette::from_spec),
            self.fallback_palette(),
        );
        let atmosphere = resolve_tag(
            "atmosphere",
            &layers(|s| s.atmosphere.as_deref()),
            |t| tables::find(&ATMOSPHERES, t),
            &ATMOSPHERES[DEFAULT_ATMOSPHERE],
        );
        let texture = resolve_tag(
            "texture",
            &layers(|s| s.texture.as_deref()),
            |t| tables::find(&TEXTURES, t),
            &TEXTURES[DEFAULT_TEXTURE],
        );
        let shot = resolve_tag(
            "shot",
            &layers(|s| s.shot.as_deref()),
            |t| tables::find(&SHOTS, t),
            &SHOTS[DEFAULT_SHOT],
        );
        let entry = resolve_tag(
            "entry",
            &layers(|s| s.entry.as_deref()),
            |t| EntryStyle::from_tag(t).map(Some),
            None,
        );
        let behavior = resolve_tag(
            "behavior",
            &layers(|s| s.behavior.as_deref()),
            |t| BehaviorStyle::from_tag(t).map(Some),
            None,
        );
        let exit = resolve_tag(
            "exit",
            &layers(|s| s.exit.as_deref()),
            |t| ExitStyle::from_tag(t).map(Some),
            None,
        );

        ResolvedStyle {
            motion,
            typography,
            palette,
            atmosphere,
            texture,
            shot,
            entry,
            behavior,
            exit,
        }
    }

    fn fallback_palette(&self) -> ResolvedPalette {
        if self.payload_palette.is_empty() {
            ResolvedPalette::from_spec(&PALETTES[DEFAULT_PALETTE])
        } else {
            ResolvedPalette::from_list(self.payload_palette)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/direction/resolver.rs"]
mod tests;
