//! Word frequency counting and top keyword selection.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Number of keywords kept after ranking by frequency.
pub const TOP_KEYWORDS: usize = 5;

/// Tokens at or below this many characters are not counted.
pub const MIN_WORD_CHARS: usize = 2;

/// Korean connectives and function words that carry no topic signal.
pub const STOP_WORDS: [&str; 18] = [
    "그리고", "그런데", "하지만", "그러나", "또한", "그래서", "따라서", "이것", "저것", "것이",
    "것을", "수가", "있다", "없다", "한다", "된다", "이다", "아니다",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

// ASCII word characters plus precomposed Hangul syllables.
static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_가-힣]").expect("static regex compile"));

/// Returns true if `word` is in the fixed stop-word list.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Frequency table over the words of a normalized text.
///
/// Entries are kept in first-occurrence order. Ranking uses a stable sort, so
/// words with equal counts keep the order in which they first appeared.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<WordCount>,
    positions: HashMap<String, usize>,
}

impl KeywordTable {
    /// Counts words of `text` and drops stop words.
    #[must_use]
    pub fn build(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let cleaned = NON_WORD_RE.replace_all(&lowered, " ");

        let mut table = Self::default();
        for token in cleaned.split_whitespace() {
            if token.chars().count() <= MIN_WORD_CHARS {
                continue;
            }
            table.record(token);
        }

        table.remove_stop_words();
        table
    }

    fn record(&mut self, word: &str) {
        if let Some(&pos) = self.positions.get(word) {
            self.entries[pos].count += 1;
            return;
        }
        self.positions.insert(word.to_string(), self.entries.len());
        self.entries.push(WordCount {
            word: word.to_string(),
            count: 1,
        });
    }

    fn remove_stop_words(&mut self) {
        self.entries.retain(|entry| !is_stop_word(&entry.word));
        self.positions = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, entry)| (entry.word.clone(), pos))
            .collect();
    }

    /// Occurrence count for `word`, zero if absent.
    #[must_use]
    pub fn count(&self, word: &str) -> usize {
        self.positions
            .get(word)
            .map_or(0, |&pos| self.entries[pos].count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All surviving entries in first-occurrence order.
    #[must_use]
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    /// The [`TOP_KEYWORDS`] most frequent words, most frequent first.
    #[must_use]
    pub fn top_keywords(&self) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(TOP_KEYWORDS);
        ranked
    }
}
