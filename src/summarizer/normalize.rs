//! Markdown stripping for summary input.
//!
//! Blog posts are written in Markdown, so the raw body is full of headings,
//! emphasis, code and links that would otherwise leak into sentences and
//! keyword counts.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder substituted for fenced code blocks.
pub const CODE_BLOCK_PLACEHOLDER: &str = "[코드 블록]";

/// Placeholder substituted for images.
pub const IMAGE_PLACEHOLDER: &str = "[이미지]";

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}\s+").expect("static regex compile"));
static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("static regex compile"));
static ITALIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("static regex compile"));
static FENCED_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*?```").expect("static regex compile"));
static INLINE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`(.*?)`").expect("static regex compile"));
static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("static regex compile"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("static regex compile"));
// Quote and list markers swallow any block markers nested right after them,
// e.g. `> > x`, `- > x` or `> # x`.
static BLOCKQUOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*>\s+(?:(?:>|[-*+]|#{1,6})\s+)*").expect("static regex compile")
});
static LIST_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*[-*+]\s+(?:(?:>|[-*+]|#{1,6})\s+)*").expect("static regex compile")
});
static NEWLINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+").expect("static regex compile"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static regex compile"));

/// Strips Markdown markup and collapses whitespace into single spaces.
///
/// Fenced code blocks are replaced before inline code spans. Running the
/// inline rule first would eat the fence backticks pairwise and leave stray
/// backticks behind, so a second pass would not be a no-op.
///
/// # Examples
///
/// ```
/// use blog_summary::summarizer::normalize;
///
/// let text = "# Title\n\nSome **bold** and [a link](https://example.com).";
/// assert_eq!(normalize(text), "Title Some bold and a link.");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = HEADING_RE.replace_all(raw, "");
    let text = BOLD_RE.replace_all(&text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = FENCED_CODE_RE.replace_all(&text, CODE_BLOCK_PLACEHOLDER);
    let text = INLINE_CODE_RE.replace_all(&text, "$1");
    let text = IMAGE_RE.replace_all(&text, IMAGE_PLACEHOLDER);
    let text = LINK_RE.replace_all(&text, "$1");
    let text = BLOCKQUOTE_RE.replace_all(&text, "");
    let text = LIST_MARKER_RE.replace_all(&text, "");
    let text = NEWLINES_RE.replace_all(&text, " ");
    let text = WHITESPACE_RE.replace_all(&text, " ");

    text.trim().to_string()
}
