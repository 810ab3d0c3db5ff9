use super::keywords::{KeywordTable, WordCount};
use super::sentences::Sentence;

/// Upper bound on the number of sentences a summary is built from.
pub const MAX_SELECTED: usize = 3;

const LEAD_FRACTION: f64 = 0.3;
const TAIL_FRACTION: f64 = 0.3;
const LEAD_BONUS: u32 = 2;
const TAIL_BONUS: u32 = 1;
const LENGTH_BONUS: u32 = 1;
const PREFERRED_MIN_CHARS: usize = 30;
const PREFERRED_MAX_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: u32,
}

/// How many sentences to keep for `total` candidates: a quarter, rounded up,
/// clamped to `1..=MAX_SELECTED`.
#[must_use]
pub fn selection_count(total: usize) -> usize {
    let quarter = total.div_ceil(4);
    quarter.clamp(1, MAX_SELECTED)
}

/// Scores one sentence against the top keywords.
///
/// The lead and tail bonuses are checked independently, each measured from
/// its own end of the document. A lone sentence gets both.
#[must_use]
pub fn score_sentence(
    sentence: &Sentence,
    total: usize,
    keywords: &[WordCount],
    table: &KeywordTable,
) -> u32 {
    let lowered = sentence.text.to_lowercase();
    let mut score: u32 = 0;

    for keyword in keywords {
        if lowered.contains(keyword.word.as_str()) {
            let count = u32::try_from(table.count(&keyword.word)).unwrap_or(u32::MAX);
            score = score.saturating_add(count);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let (position, total) = (sentence.index as f64, total as f64);
    if position < total * LEAD_FRACTION {
        score += LEAD_BONUS;
    }
    if total - 1.0 - position < total * TAIL_FRACTION {
        score += TAIL_BONUS;
    }

    let len = sentence.char_len();
    if len > PREFERRED_MIN_CHARS && len < PREFERRED_MAX_CHARS {
        score += LENGTH_BONUS;
    }

    score
}

/// Scores every candidate, keeping input order.
#[must_use]
pub fn score_sentences(
    sentences: &[Sentence],
    keywords: &[WordCount],
    table: &KeywordTable,
) -> Vec<ScoredSentence> {
    sentences
        .iter()
        .map(|sentence| ScoredSentence {
            score: score_sentence(sentence, sentences.len(), keywords, table),
            sentence: sentence.clone(),
        })
        .collect()
}

/// Picks the best-scoring sentences and returns them in document order.
///
/// Equal scores keep their original relative order (stable sort).
#[must_use]
pub fn rank_sentences(
    sentences: &[Sentence],
    keywords: &[WordCount],
    table: &KeywordTable,
) -> Vec<Sentence> {
    select(score_sentences(sentences, keywords, table))
}

pub(crate) fn select(mut scored: Vec<ScoredSentence>) -> Vec<Sentence> {
    let keep = selection_count(scored.len());
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(keep);

    let mut selected: Vec<Sentence> = scored.into_iter().map(|s| s.sentence).collect();
    selected.sort_by_key(|s| s.index);
    selected
}
