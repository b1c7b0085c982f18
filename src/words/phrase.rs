use smallvec::SmallVec;

use crate::style::lexicon;
use crate::words::meta::WordMetaEntry;

/// Upper bound on words per group.
pub const MAX_GROUP_WORDS: usize = 5;
/// Minimum on-screen duration of a group in seconds.
pub const MIN_GROUP_SECS: f64 = 0.4;

#[derive(Clone, Debug, PartialEq)]
/// Consecutive words of one line animated as a unit around an anchor word.
pub struct PhraseGroup {
    /// Owning line index.
    pub line: usize,
    /// Position of this group within its line.
    pub index_in_line: usize,
    /// Song-wide sequence number, used to rotate layout presets.
    pub sequence: usize,
    /// Indices into the word metadata list, in time order.
    pub words: SmallVec<[usize; MAX_GROUP_WORDS]>,
    /// Position of the anchor inside `words`.
    pub anchor: usize,
    pub start: f64,
    /// Display end, clamped so the group stays up at least [`MIN_GROUP_SECS`].
    pub end: f64,
}

impl PhraseGroup {
    pub fn anchor_word(&self) -> usize {
        self.words[self.anchor]
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Anchor score for one word.
///
/// `emphasis*2`, +6 impact, +4 rising, -5 filler, +2 for five or more chars and +2 more for eight
/// or more.
pub fn anchor_score(word: &WordMetaEntry) -> i32 {
    let key = word.key.as_str();
    let chars = key.chars().count();
    let mut score = i32::from(word.directive.emphasis) * 2;
    if lexicon::is_impact(key) {
        score += 6;
    }
    if lexicon::is_rising(key) {
        score += 4;
    }
    if lexicon::is_filler(key) {
        score -= 5;
    }
    if chars >= 5 {
        score += 2;
    }
    if chars >= 8 {
        score += 2;
    }
    score
}

/// Highest scoring word; the earliest wins on equal score.
fn pick_anchor(meta: &[WordMetaEntry], words: &[usize]) -> usize {
    let mut best = 0;
    let mut best_score = i32::MIN;
    for (i, &w) in words.iter().enumerate() {
        let s = anchor_score(&meta[w]);
        if s > best_score {
            best = i;
            best_score = s;
        }
    }
    best
}

type Span = SmallVec<[usize; MAX_GROUP_WORDS]>;

fn span_secs(meta: &[WordMetaEntry], span: &[usize]) -> f64 {
    match (span.first(), span.last()) {
        (Some(&a), Some(&b)) => meta[b].end - meta[a].start,
        _ => 0.0,
    }
}

/// Cluster every line's words into phrase groups.
///
/// `meta` must be ordered by line then time, as produced by
/// [`build_word_meta`](crate::words::meta::build_word_meta).
#[tracing::instrument(skip_all, fields(words = meta.len()))]
pub fn build_phrase_groups(meta: &[WordMetaEntry]) -> Vec<PhraseGroup> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < meta.len() {
        let line = meta[i].line;
        let end = meta[i..]
            .iter()
            .position(|m| m.line != line)
            .map_or(meta.len(), |n| i + n);

        for (index_in_line, span) in group_line(meta, i..end).into_iter().enumerate() {
            let start = meta[span[0]].start;
            let last_end = meta[span[span.len() - 1]].end;
            let anchor = pick_anchor(meta, &span);
            groups.push(PhraseGroup {
                line,
                index_in_line,
                sequence: groups.len(),
                words: span,
                anchor,
                start,
                end: last_end.max(start + MIN_GROUP_SECS),
            });
        }
        i = end;
    }
    tracing::debug!(groups = groups.len(), "built phrase groups");
    groups
}

fn group_line(meta: &[WordMetaEntry], range: std::ops::Range<usize>) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    let mut current = Span::new();
    for w in range {
        current.push(w);
        let closes = lexicon::ends_with_terminal_punctuation(&meta[w].text)
            && span_secs(meta, &current) >= MIN_GROUP_SECS;
        if closes || current.len() >= MAX_GROUP_WORDS {
            spans.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        spans.push(current);
    }

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    let mut pending: Option<Span> = None;
    for span in spans {
        let span = match pending.take() {
            Some(mut short) if short.len() + span.len() <= MAX_GROUP_WORDS => {
                short.extend(span);
                short
            }
            Some(short) => {
                merged.push(short);
                span
            }
            None => span,
        };
        if span_secs(meta, &span) < MIN_GROUP_SECS {
            pending = Some(span);
        } else {
            merged.push(span);
        }
    }
    merged.extend(pending);
    merged
}

#[cfg(test)]
#[path = "../../tests/unit/words/phrase.rs"]
mod tests;
