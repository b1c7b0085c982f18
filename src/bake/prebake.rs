use crate::animation::behavior::BehaviorStyle;
use crate::animation::entry::EntryStyle;
use crate::animation::exit::ExitStyle;
use crate::bake::config::BakeConfig;
use crate::beat::cursor::BeatTrack;
use crate::direction::resolver::{ResolvedStyle, StyleResolver, first_defined};
use crate::direction::sections::{chapter_index_at, tension_at};
use crate::foundation::error::BakeResult;
use crate::foundation::math::{hash01, seed_for};
use crate::layout::measure::{TextMeasure, display_text};
use crate::layout::solver::{LayoutCache, LayoutKey, LayoutParams, WordPlacement, layout_all};
use crate::payload::model::Payload;
use crate::style::tables::{self, MotionProfile, SHOTS, Shot};
use crate::words::meta::{MAX_EMPHASIS, WordMetaEntry, build_word_meta};
use crate::words::phrase::{PhraseGroup, build_phrase_groups};

/// Intensity gained per emphasis level above 1.
const EMPHASIS_INTENSITY_STEP: f64 = 0.1;
/// Emphasis at which a word switches from the text color to the accent color.
const ACCENT_EMPHASIS: u8 = 4;

#[derive(Clone, Debug, PartialEq)]
/// Everything one word needs at frame time, resolved once.
pub struct WordPlan {
    pub entry: EntryStyle,
    pub behavior: BehaviorStyle,
    pub exit: ExitStyle,
    pub entry_secs: f64,
    pub exit_secs: f64,
    /// Profile intensity with emphasis applied; tension scales it per frame.
    pub intensity: f64,
    /// Beat glow gain of the motion profile.
    pub beat_glow: f64,
    pub color: String,
    /// Extra glow and scale from a metaphor.
    pub glow: f64,
    pub scale: f64,
    pub emitter: Option<&'static str>,
    /// Text as drawn (typography case applied).
    pub text: String,
    pub font_family: &'static str,
    pub font_weight: u16,
    /// Stable jitter seed.
    pub seed: u64,
    pub ghost_trail: bool,
    pub letter_sequence: bool,
    pub emphasis: u8,
}

/// Frame-independent bake inputs: resolved styles, words, groups, layouts and per-frame lookups.
///
/// Immutable once built and shared by every frame of a bake.
pub struct PrebakedData {
    pub config: BakeConfig,
    pub song_start: f64,
    pub song_end: f64,
    pub frame_count: u64,
    pub song_style: ResolvedStyle,
    /// One resolved style per payload chapter.
    pub chapter_styles: Vec<ResolvedStyle>,
    pub words: Vec<WordMetaEntry>,
    pub groups: Vec<PhraseGroup>,
    /// Per-word plan, parallel to `words`.
    pub plans: Vec<WordPlan>,
    pub layouts: LayoutCache,
    pub beats: BeatTrack,
    /// Storyboard shot per line, if any.
    pub line_shots: Vec<Option<&'static Shot>>,
    /// Per-frame active chapter.
    pub frame_chapter: Vec<Option<usize>>,
    /// Per-frame tension.
    pub frame_tension: Vec<f64>,
    /// Per-frame active line.
    pub frame_line: Vec<Option<usize>>,
}

impl PrebakedData {
    /// Resolve and lay out `payload` for `config`.
    ///
    /// Fails only on an invalid config; every payload degrades to something bakeable.
    #[tracing::instrument(
        skip_all,
        fields(lines = payload.lines.len(), words = payload.words.len())
    )]
    pub fn build(
        payload: &Payload,
        config: &BakeConfig,
        measure: &mut dyn TextMeasure,
    ) -> BakeResult<Self> {
        config.validate()?;

        let (song_start, song_end) = payload.bounds();
        let duration = song_end - song_start;
        let frame_count = config.fps.secs_to_frames_ceil(duration);
        let direction = payload.direction();

        let resolver = StyleResolver::new(&direction.defaults, &payload.palette);
        let song_style = resolver.song();
        let chapter_styles: Vec<_> = direction
            .chapters
            .iter()
            .map(|c| resolver.chapter(c))
            .collect();
        tracing::debug!(
            motion = song_style.motion.profile().tag,
            chapters = chapter_styles.len(),
            "resolved song style"
        );

        let ratio_of = |t: f64| {
            if duration > 0.0 {
                (t - song_start) / duration
            } else {
                0.0
            }
        };
        let style_at = |t: f64| {
            chapter_index_at(&direction.chapters, ratio_of(t))
                .and_then(|i| chapter_styles.get(i))
                .unwrap_or(&song_style)
        };

        let words = build_word_meta(&payload.lines, &payload.words, &direction);
        let groups = build_phrase_groups(&words);

        let params = LayoutParams {
            canvas: config.canvas,
            margin: config.margin_px,
            base_font_size: config.base_font_size,
        };
        let plans: Vec<WordPlan> = words
            .iter()
            .map(|w| plan_word(w, style_at(w.start)))
            .collect();
        let layouts = layout_all(
            &groups,
            &words,
            |g| style_at(g.start).typography,
            |g| g.end + exit_tail(g, &plans),
            &params,
            measure,
        );

        let beats = BeatTrack::from_grid(&payload.beat_grid, song_start, song_end);

        let mut line_shots = vec![None; payload.lines.len()];
        for beat in &direction.storyboard {
            let Some(slot) = line_shots.get_mut(beat.line_index) else {
                tracing::debug!(line = beat.line_index, "storyboard line out of range");
                continue;
            };
            if let Some(tag) = beat.shot.as_deref() {
                *slot = tables::find(&SHOTS, tag).or(*slot);
            }
        }

        let mut frame_chapter = Vec::with_capacity(frame_count as usize);
        let mut frame_tension = Vec::with_capacity(frame_count as usize);
        let mut frame_line = Vec::with_capacity(frame_count as usize);
        for f in 0..frame_count {
            let t = song_start + config.fps.frames_to_secs(f);
            let r = ratio_of(t);
            frame_chapter.push(chapter_index_at(&direction.chapters, r));
            frame_tension.push(tension_at(&direction.tension_curve, r));
            frame_line.push(
                payload
                    .lines
                    .iter()
                    .position(|l| t >= l.start && t < l.end),
            );
        }

        tracing::debug!(
            frames = frame_count,
            groups = groups.len(),
            beats = beats.beats.len(),
            "prebake complete"
        );

        Ok(Self {
            config: config.clone(),
            song_start,
            song_end,
            frame_count,
            song_style,
            chapter_styles,
            words,
            groups,
            plans,
            layouts,
            beats,
            line_shots,
            frame_chapter,
            frame_tension,
            frame_line,
        })
    }

    /// Style of the chapter active at `frame`, or the song style.
    pub fn style_at_frame(&self, frame: u64) -> &ResolvedStyle {
        self.frame_chapter
            .get(frame as usize)
            .copied()
            .flatten()
            .and_then(|i| self.chapter_styles.get(i))
            .unwrap_or(&self.song_style)
    }

    pub fn tension_at_frame(&self, frame: u64) -> f64 {
        self.frame_tension
            .get(frame as usize)
            .copied()
            .unwrap_or(crate::direction::sections::DEFAULT_TENSION)
    }

    pub fn line_at_frame(&self, frame: u64) -> Option<usize> {
        self.frame_line.get(frame as usize).copied().flatten()
    }

    pub fn placement(&self, group: &PhraseGroup, word: usize) -> Option<&WordPlacement> {
        self.layouts
            .get(&LayoutKey::of(group))
            .and_then(|l| l.placement_of(word))
    }

    /// Camera zoom target at `frame`: storyboard shot, then chapter shot, then song shot.
    pub fn target_zoom(&self, frame: u64) -> f64 {
        let line_shot = self
            .line_at_frame(frame)
            .and_then(|l| self.line_shots.get(l).copied().flatten());
        first_defined([line_shot], self.style_at_frame(frame).shot).zoom
    }
}

/// Longest exit among a group's words; the group stays on screen this long after its end.
pub(crate) fn exit_tail(group: &PhraseGroup, plans: &[WordPlan]) -> f64 {
    group
        .words
        .iter()
        .map(|&w| plans[w].exit_secs)
        .fold(0.0, f64::max)
}

fn pick<T: Copy>(set: &[T], seed: u64, salt: u64, fallback: T) -> T {
    if set.is_empty() {
        return fallback;
    }
    let i = (hash01(seed, salt) * set.len() as f64) as usize;
    set[i.min(set.len() - 1)]
}

/// Resolve the entry/behavior/exit triple and the look of one word.
///
/// Style priority: explicit word directive, metaphor, chapter or song forced style, then a
/// seed-stable pick from the motion profile's set.
fn plan_word(w: &WordMetaEntry, style: &ResolvedStyle) -> WordPlan {
    let profile: &MotionProfile = style.motion.profile();
    let d = &w.directive;
    let seed = seed_for(&w.key, ((w.line as u64) << 32) | w.index_in_line as u64);
    let metaphor = d.metaphor;

    let entry = first_defined(
        [d.entry, metaphor.map(|m| m.entry), style.entry],
        pick(profile.entries, seed, 1, EntryStyle::FadeUp),
    );
    let behavior = first_defined(
        [d.behavior, metaphor.map(|m| m.behavior), style.behavior],
        pick(profile.behaviors, seed, 2, BehaviorStyle::None),
    );
    let exit = first_defined(
        [d.exit, metaphor.map(|m| m.exit), style.exit],
        pick(profile.exits, seed, 3, ExitStyle::Fade),
    );

    let palette_color = if d.emphasis >= ACCENT_EMPHASIS {
        &style.palette.accent
    } else {
        &style.palette.text
    };
    let color = first_defined(
        [d.color.clone(), metaphor.map(|m| m.color.to_string())],
        palette_color.clone(),
    );

    let emphasis = d.emphasis.min(MAX_EMPHASIS);
    let boost = EMPHASIS_INTENSITY_STEP * f64::from(emphasis.saturating_sub(1));
    let intensity = profile.intensity * (1.0 + boost);

    WordPlan {
        entry,
        behavior,
        exit,
        entry_secs: profile.entry_secs,
        // Binary exits are over on their first frame and leave no tail.
        exit_secs: if exit.is_binary() {
            0.0
        } else {
            profile.exit_secs
        },
        intensity,
        beat_glow: profile.beat_glow,
        color,
        glow: metaphor.map_or(0.0, |m| m.glow),
        scale: metaphor.map_or(1.0, |m| m.scale),
        emitter: metaphor.map(|m| m.emitter),
        text: display_text(&w.text, style.typography).into_owned(),
        font_family: style.typography.font_family,
        font_weight: style.typography.font_weight,
        seed,
        ghost_trail: d.ghost_trail,
        letter_sequence: d.letter_sequence,
        emphasis,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bake/prebake.rs"]
mod tests;
