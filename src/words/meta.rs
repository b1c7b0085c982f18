use crate::animation::behavior::BehaviorStyle;
use crate::animation::entry::EntryStyle;
use crate::animation::exit::ExitStyle;
use crate::direction::resolver::is_hex_color;
use crate::payload::model::{CinematicDirection, LyricLine, WordDirective, WordTiming};
use crate::style::lexicon::{self, normalize_word};
use crate::style::tables::{self, METAPHORS, Metaphor};

pub const MIN_EMPHASIS: u8 = 1;
pub const MAX_EMPHASIS: u8 = 5;
const HERO_BOOST: u8 = 2;
const LONG_WORD_CHARS: usize = 8;

#[derive(Clone, Debug, Default, PartialEq)]
/// Word-level direction after layering the explicit directive, storyboard and lexicon defaults.
pub struct ResolvedDirective {
    pub entry: Option<EntryStyle>,
    pub behavior: Option<BehaviorStyle>,
    pub exit: Option<ExitStyle>,
    pub metaphor: Option<&'static Metaphor>,
    /// Validated hex color override.
    pub color: Option<String>,
    /// Emphasis level in `1..=5`.
    pub emphasis: u8,
    pub ghost_trail: bool,
    pub letter_sequence: bool,
}

#[derive(Clone, Debug, PartialEq)]
/// One timed word attached to its owning line.
pub struct WordMetaEntry {
    /// Display text.
    pub text: String,
    /// Normalized key used for directive lookup.
    pub key: String,
    pub start: f64,
    pub end: f64,
    /// Owning line index.
    pub line: usize,
    /// Position among the line's words, in time order.
    pub index_in_line: usize,
    /// Set when the entry stands in for a whole line because the payload has no word timing.
    pub whole_line: bool,
    pub directive: ResolvedDirective,
}

/// Attach every timed word to a line and resolve its directive.
///
/// A word belongs to the line whose `[start, end]` contains its midpoint; words outside every line
/// go to the line with the nearest start. Words with non-finite timing are dropped. Without any
/// word timing each line becomes a single whole-line entry.
///
/// The result is ordered by line, then by start time.
#[tracing::instrument(skip_all, fields(lines = lines.len(), words = words.len()))]
pub fn build_word_meta(
    lines: &[LyricLine],
    words: &[WordTiming],
    direction: &CinematicDirection,
) -> Vec<WordMetaEntry> {
    if lines.is_empty() {
        if !words.is_empty() {
            tracing::debug!("words present without lines; nothing to attach to");
        }
        return Vec::new();
    }

    let mut out: Vec<WordMetaEntry> = if words.is_empty() {
        tracing::debug!("no word timing, falling back to whole-line chunks");
        lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.start.is_finite() && l.end.is_finite() && !l.text.trim().is_empty())
            .map(|(i, l)| entry(l.text.trim(), l.start, l.end.max(l.start), i, true))
            .collect()
    } else {
        words
            .iter()
            .filter(|w| w.start.is_finite() && w.end.is_finite())
            .filter_map(|w| {
                let line = owning_line(lines, w)?;
                Some(entry(&w.word, w.start, w.end.max(w.start), line, false))
            })
            .collect()
    };

    out.sort_by(|a, b| a.line.cmp(&b.line).then(a.start.total_cmp(&b.start)));

    let mut prev_line = None;
    let mut idx = 0;
    for e in &mut out {
        if prev_line != Some(e.line) {
            prev_line = Some(e.line);
            idx = 0;
        }
        e.index_in_line = idx;
        idx += 1;
        e.directive = resolve_directive(e, direction);
    }
    out
}

fn entry(text: &str, start: f64, end: f64, line: usize, whole_line: bool) -> WordMetaEntry {
    WordMetaEntry {
        text: text.to_string(),
        key: normalize_word(text),
        start,
        end,
        line,
        index_in_line: 0,
        whole_line,
        directive: ResolvedDirective::default(),
    }
}

fn owning_line(lines: &[LyricLine], w: &WordTiming) -> Option<usize> {
    let mid = 0.5 * (w.start + w.end.max(w.start));
    lines
        .iter()
        .position(|l| mid >= l.start && mid <= l.end)
        .or_else(|| {
            lines
                .iter()
                .enumerate()
                .filter(|(_, l)| l.start.is_finite())
                .min_by(|(_, a), (_, b)| {
                    (a.start - w.start)
                        .abs()
                        .total_cmp(&(b.start - w.start).abs())
                })
                .map(|(i, _)| i)
        })
}

/// Lexicon-driven emphasis used when no directive names one.
pub fn default_emphasis(key: &str) -> u8 {
    if lexicon::is_impact(key) {
        3
    } else if key.chars().count() >= LONG_WORD_CHARS {
        2
    } else {
        MIN_EMPHASIS
    }
}

fn resolve_directive(e: &WordMetaEntry, direction: &CinematicDirection) -> ResolvedDirective {
    let explicit = direction.word_directives.get(&e.key);
    let fallback = WordDirective::default();
    let d = explicit.unwrap_or(&fallback);

    let base = if e.whole_line {
        MIN_EMPHASIS
    } else {
        default_emphasis(&e.key)
    };
    let mut emphasis = d
        .emphasis
        .map_or(base, |v| v.clamp(MIN_EMPHASIS, MAX_EMPHASIS));
    if is_hero(e, direction) {
        emphasis = (emphasis + HERO_BOOST).min(MAX_EMPHASIS);
    }

    let metaphor = d.metaphor.as_deref().and_then(|tag| {
        let hit = tables::find(&METAPHORS, tag);
        if hit.is_none() {
            tracing::debug!(tag, word = %e.key, "unknown metaphor tag, ignoring");
        }
        hit
    });
    let color = d.color.as_deref().and_then(|c| {
        if is_hex_color(c) {
            Some(c.to_string())
        } else {
            tracing::debug!(color = c, word = %e.key, "invalid color override, ignoring");
            None
        }
    });

    ResolvedDirective {
        entry: d.entry.as_deref().and_then(EntryStyle::from_tag),
        behavior: d.behavior.as_deref().and_then(BehaviorStyle::from_tag),
        exit: d.exit.as_deref().and_then(ExitStyle::from_tag),
        metaphor,
        color,
        emphasis,
        ghost_trail: d.ghost_trail,
        letter_sequence: d.letter_sequence,
    }
}

fn is_hero(e: &WordMetaEntry, direction: &CinematicDirection) -> bool {
    direction.storyboard.iter().any(|b| {
        b.line_index == e.line
            && b
                .hero_word
                .as_deref()
                .is_some_and(|h| !e.key.is_empty() && normalize_word(h) == e.key)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/words/meta.rs"]
mod tests;
