use once_cell::sync::Lazy;
use regex::Regex;

/// Segments at or below this many characters are treated as noise.
pub const MIN_SENTENCE_CHARS: usize = 10;

static TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("static regex compile"));

/// A candidate sentence and its position among the retained candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
}

impl Sentence {
    /// Length in characters, not bytes.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits normalized text on runs of `.`, `!` or `?` and keeps the trimmed
/// segments longer than [`MIN_SENTENCE_CHARS`].
///
/// Only segments closed by a terminator are candidates; trailing text after
/// the last terminator is dropped. Indices are assigned after filtering, so
/// they are always `0..len`.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut start = 0;
    let mut segments = Vec::new();
    for terminator in TERMINATOR_RE.find_iter(text) {
        segments.push(&text[start..terminator.start()]);
        start = terminator.end();
    }

    segments
        .into_iter()
        .map(str::trim)
        .filter(|segment| segment.chars().count() > MIN_SENTENCE_CHARS)
        .enumerate()
        .map(|(index, segment)| Sentence {
            index,
            text: segment.to_string(),
        })
        .collect()
}
