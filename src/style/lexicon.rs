//! Word classes used by anchor scoring and emphasis defaults.
//!
//! All lists hold normalized keys (lowercase, alphanumeric only).

pub(crate) static FILLER_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "da", "for", "from", "im", "in", "is",
    "it", "its", "just", "la", "me", "my", "na", "of", "oh", "on", "or", "so", "that", "the",
    "to", "uh", "was", "we", "with", "yeah", "you", "your",
];

pub(crate) static IMPACT_WORDS: &[&str] = &[
    "bleed", "blood", "boom", "break", "broken", "burn", "crash", "dead", "die", "explode",
    "fight", "fire", "forever", "gone", "kill", "love", "never", "scream", "shatter", "storm",
    "thunder", "war",
];

pub(crate) static RISING_WORDS: &[&str] = &[
    "above", "ascend", "climb", "fly", "high", "higher", "lift", "rise", "rising", "skies",
    "sky", "soar", "up",
];

/// Lowercase, alphanumeric-only key used to match word directives.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

pub(crate) fn is_filler(key: &str) -> bool {
    FILLER_WORDS.contains(&key)
}

pub(crate) fn is_impact(key: &str) -> bool {
    IMPACT_WORDS.contains(&key)
}

pub(crate) fn is_rising(key: &str) -> bool {
    RISING_WORDS.contains(&key)
}

/// Whether a displayed word closes a phrase.
pub(crate) fn ends_with_terminal_punctuation(word: &str) -> bool {
    word.trim_end()
        .chars()
        .last()
        .is_some_and(|c| matches!(c, ',' | '.' | '!' | '?' | ';' | ':' | '—' | '…'))
}
