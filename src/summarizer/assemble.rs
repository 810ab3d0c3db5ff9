use super::sentences::Sentence;

/// Hard cap on summary length in characters, ellipsis included.
pub const MAX_SUMMARY_CHARS: usize = 150;

/// Summaries shorter than this fall back to the lead sentence.
pub const MIN_SUMMARY_CHARS: usize = 20;

const ELLIPSIS: &str = "...";

/// Returned when there is nothing at all to assemble.
pub const MORE_INPUT_MESSAGE: &str =
    "내용을 더 입력해주시면 더 정확한 요약을 생성할 수 있습니다.";

/// Joins the selected sentences into the final summary.
///
/// `candidates` is the full splitter output; its first entry is used when the
/// joined selection is too thin.
#[must_use]
pub fn assemble(selected: &[Sentence], candidates: &[Sentence]) -> String {
    let summary = join_selected(selected);
    if summary.chars().count() >= MIN_SUMMARY_CHARS {
        return summary;
    }

    match candidates.first() {
        Some(lead) => truncate(&terminate(lead.text.clone())),
        None => MORE_INPUT_MESSAGE.to_string(),
    }
}

/// Joined, terminated and length-capped selection, before the thin fallback.
pub(crate) fn join_selected(selected: &[Sentence]) -> String {
    let joined = selected
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    truncate(&terminate(joined))
}

fn ends_with_terminator(text: &str) -> bool {
    text.ends_with(['.', '!', '?'])
}

fn terminate(mut text: String) -> String {
    if !text.is_empty() && !ends_with_terminator(&text) {
        text.push('.');
    }
    text
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_SUMMARY_CHARS {
        return text.to_string();
    }
    let mut out: String = text
        .chars()
        .take(MAX_SUMMARY_CHARS - ELLIPSIS.len())
        .collect();
    out.push_str(ELLIPSIS);
    out
}
