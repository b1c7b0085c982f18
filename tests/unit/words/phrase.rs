use super::*;
use crate::payload::model::{CinematicDirection, LyricLine, WordTiming};
use crate::words::meta::build_word_meta;

fn meta_for(lines: &[(&str, f64, f64)], words: &[(&str, f64, f64)]) -> Vec<WordMetaEntry> {
    let lines: Vec<_> = lines
        .iter()
        .map(|&(t, s, e)| LyricLine {
            text: t.into(),
            start: s,
            end: e,
        })
        .collect();
    let words: Vec<_> = words
        .iter()
        .map(|&(w, s, e)| WordTiming {
            word: w.into(),
            start: s,
            end: e,
        })
        .collect();
    build_word_meta(&lines, &words, &CinematicDirection::default())
}

fn assert_invariants(meta: &[WordMetaEntry], groups: &[PhraseGroup]) {
    let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.words.iter().copied()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..meta.len()).collect::<Vec<_>>(), "groups partition words");

    for g in groups {
        assert!(!g.words.is_empty());
        assert!(g.words.len() <= MAX_GROUP_WORDS);
        assert!(g.anchor < g.words.len());
        assert!(g.duration() >= MIN_GROUP_SECS - 1e-12);
        assert!(g.words.windows(2).all(|w| w[0] + 1 == w[1]));
        assert!(g.words.iter().all(|&w| meta[w].line == g.line));
    }
    for pair in groups.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.line == b.line {
            assert_eq!(a.index_in_line + 1, b.index_in_line);
            let a_last = meta[a.words[a.words.len() - 1]].end;
            assert!(a_last <= meta[b.words[0]].start + 1e-12, "word spans do not overlap");
        }
        assert_eq!(a.sequence + 1, b.sequence);
    }
}

#[test]
fn flushes_on_punctuation_and_size() {
    let meta = meta_for(
        &[("...", 0.0, 10.0)],
        &[
            ("hold", 0.0, 0.3),
            ("on,", 0.3, 0.6),
            ("one", 1.0, 1.2),
            ("two", 1.2, 1.4),
            ("three", 1.4, 1.6),
            ("four", 1.6, 1.8),
            ("five", 1.8, 2.0),
            ("six", 2.0, 2.5),
        ],
    );
    let groups = build_phrase_groups(&meta);
    let sizes: Vec<_> = groups.iter().map(|g| g.words.len()).collect();
    assert_eq!(sizes, vec![2, 5, 1]);
    assert_invariants(&meta, &groups);
}

#[test]
fn short_groups_merge_forward_and_clamp() {
    let meta = meta_for(
        &[("...", 0.0, 4.0)],
        &[("oh,", 0.0, 0.1), ("no.", 0.1, 0.2), ("run", 0.2, 0.3)],
    );
    let groups = build_phrase_groups(&meta);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].words.len(), 3);
    assert!((groups[0].end - 0.4).abs() < 1e-12);
    assert_invariants(&meta, &groups);
}

#[test]
fn we_rise_up_is_one_group_anchored_on_rise() {
    let meta = meta_for(
        &[("we rise up", 0.0, 2.0)],
        &[("we", 0.0, 0.4), ("rise", 0.41, 0.9), ("up", 0.91, 1.2)],
    );
    let groups = build_phrase_groups(&meta);
    assert_eq!(groups.len(), 1);
    assert_eq!(meta[groups[0].anchor_word()].key, "rise");
    assert_invariants(&meta, &groups);
}

#[test]
fn anchor_ties_go_to_the_earliest_word() {
    let meta = meta_for(&[("...", 0.0, 2.0)], &[("home", 0.0, 0.5), ("road", 0.5, 1.0)]);
    assert_eq!(anchor_score(&meta[0]), anchor_score(&meta[1]));
    let groups = build_phrase_groups(&meta);
    assert_eq!(groups[0].anchor, 0);
}

#[test]
fn groups_never_span_lines() {
    let meta = meta_for(
        &[("a b", 0.0, 1.0), ("c d", 1.0, 2.0)],
        &[("a", 0.0, 0.3), ("b", 0.3, 0.6), ("c", 1.0, 1.2), ("d", 1.2, 1.5)],
    );
    let groups = build_phrase_groups(&meta);
    assert_eq!(groups.len(), 2);
    assert_invariants(&meta, &groups);
}

#[test]
fn anchor_scoring_weights() {
    let meta = meta_for(
        &[("...", 0.0, 5.0)],
        &[("the", 0.0, 0.2), ("fire", 0.2, 0.4), ("higher", 0.4, 0.6)],
    );
    assert_eq!(anchor_score(&meta[0]), 2 - 5);
    assert_eq!(anchor_score(&meta[1]), 3 * 2 + 6);
    assert_eq!(anchor_score(&meta[2]), 2 + 4 + 2);
}
