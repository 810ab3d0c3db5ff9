//! Extractive summarizer for blog post bodies.
//!
//! The pipeline runs in a fixed order with no shared state:
//! 1. [`normalize`] strips Markdown and collapses whitespace
//! 2. [`split_sentences`] produces candidate sentences
//! 3. [`KeywordTable::build`] counts words and yields the top keywords
//! 4. [`rank_sentences`] scores candidates and picks a few in document order
//! 5. [`assemble`] joins, punctuates and caps the result
//!
//! Degenerate input never fails; it maps to one of the canned messages below.

pub mod assemble;
pub mod keywords;
pub mod normalize;
pub mod ranking;
pub mod sentences;

pub use assemble::{MAX_SUMMARY_CHARS, MORE_INPUT_MESSAGE, assemble};
pub use keywords::{KeywordTable, STOP_WORDS, WordCount, is_stop_word};
pub use normalize::normalize;
pub use ranking::{ScoredSentence, rank_sentences, score_sentences, selection_count};
pub use sentences::{Sentence, split_sentences};

use serde::Serialize;
use tracing::debug;

/// Returned when the input is empty after normalization.
pub const EMPTY_INPUT_MESSAGE: &str = "내용을 입력하면 AI가 자동으로 요약을 생성합니다.";

/// Returned when no candidate sentence survives splitting.
pub const INSUFFICIENT_CONTENT_MESSAGE: &str = "요약할 수 있는 충분한 내용이 없습니다.";

/// Which branch of the pipeline produced the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Summarized,
    ThinFallback,
    EmptyInput,
    InsufficientContent,
}

/// Every intermediate result of one summarization run.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub normalized: String,
    pub sentences: Vec<Sentence>,
    pub keywords: Vec<WordCount>,
    pub scored: Vec<ScoredSentence>,
    pub selected: Vec<Sentence>,
    pub summary: String,
    pub outcome: Outcome,
}

impl SummaryReport {
    fn early_exit(normalized: String, sentences: Vec<Sentence>, outcome: Outcome) -> Self {
        let summary = match outcome {
            Outcome::EmptyInput => EMPTY_INPUT_MESSAGE,
            _ => INSUFFICIENT_CONTENT_MESSAGE,
        };
        Self {
            normalized,
            sentences,
            keywords: Vec::new(),
            scored: Vec::new(),
            selected: Vec::new(),
            summary: summary.to_string(),
            outcome,
        }
    }

    /// Keyword strings only, most frequent first.
    #[must_use]
    pub fn keyword_words(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.word.as_str()).collect()
    }
}

/// Runs the full pipeline and keeps every intermediate stage.
#[must_use]
pub fn analyze(raw: &str) -> SummaryReport {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return SummaryReport::early_exit(normalized, Vec::new(), Outcome::EmptyInput);
    }

    let sentences = split_sentences(&normalized);
    if sentences.is_empty() {
        debug!(chars = normalized.chars().count(), "No candidate sentences");
        return SummaryReport::early_exit(normalized, sentences, Outcome::InsufficientContent);
    }

    let table = KeywordTable::build(&normalized);
    let keywords = table.top_keywords();

    #[cfg(feature = "debug-logs")]
    debug!(normalized = %normalized, keywords = ?keywords, "Summarizer input");

    let scored = score_sentences(&sentences, &keywords, &table);
    let selected = ranking::select(scored.clone());
    debug!(
        candidates = sentences.len(),
        vocabulary = table.len(),
        selected = selected.len(),
        "Ranked sentences"
    );

    let thin = assemble::join_selected(&selected).chars().count() < assemble::MIN_SUMMARY_CHARS;
    let summary = assemble(&selected, &sentences);
    let outcome = if thin {
        Outcome::ThinFallback
    } else {
        Outcome::Summarized
    };

    SummaryReport {
        normalized,
        sentences,
        keywords,
        scored,
        selected,
        summary,
        outcome,
    }
}

/// Summarizes a Markdown blog body into at most [`MAX_SUMMARY_CHARS`] characters.
///
/// # Examples
///
/// ```
/// use blog_summary::summarizer::generate_summary;
///
/// let summary = generate_summary(
///     "Rust makes systems programming approachable. \
///      Ownership rules prevent data races at compile time. \
///      The compiler explains its errors in detail.",
/// );
/// assert!(summary.ends_with('.'));
/// assert!(summary.chars().count() <= 150);
/// ```
#[must_use]
pub fn generate_summary(raw: &str) -> String {
    analyze(raw).summary
}
