use blog_summary::summarizer::normalize;

#[test]
fn test_headings_are_removed() {
    assert_eq!(normalize("## Heading\nBody text"), "Heading Body text");
    assert_eq!(normalize("###### Deep\nmore"), "Deep more");
}

#[test]
fn test_emphasis_is_unwrapped() {
    assert_eq!(
        normalize("A **strong** and *soft* word"),
        "A strong and soft word"
    );
}

#[test]
fn test_inline_code_keeps_its_content() {
    assert_eq!(normalize("Call `cargo build` now"), "Call cargo build now");
}

#[test]
fn test_links_keep_only_their_text() {
    assert_eq!(
        normalize("Read [the docs](https://docs.rs) first"),
        "Read the docs first"
    );
}

#[test]
fn test_blockquotes_and_list_markers_are_removed() {
    assert_eq!(normalize("> quoted line\nnext"), "quoted line next");
    assert_eq!(
        normalize("- one\n- two\n+ three\n* four"),
        "one two three four"
    );
}

#[test]
fn test_whitespace_is_collapsed_and_trimmed() {
    assert_eq!(normalize("  many   spaces\t\tand\n\n\nlines  "), "many spaces and lines");
    assert_eq!(normalize("   \n\t  "), "");
    assert_eq!(normalize(""), "");
}

#[test]
fn test_full_document() {
    let raw = "# Title\n\nIntro with **bold** text.\n\n```\ncode here\n```\n\n\
               > A quote\n\n- item one\n- item two\n\n![pic](a.png) and [link](b)";
    assert_eq!(
        normalize(raw),
        "Title Intro with bold text. [코드 블록] A quote item one item two [이미지] and link"
    );
}

#[test]
fn test_normalization_is_idempotent() {
    let docs = [
        "# Title\n\nIntro with **bold** text.\n\n```js\nconst x = 1;\n```\n\n> A quote",
        "## 소개\n\n오늘은 *Rust* 로 `cargo` 를 다룹니다.\n\n- 첫째\n- 둘째\n\n[문서](https://doc.rust-lang.org)",
        "Plain prose with no markup at all. Just sentences.",
        "![cover](cover.png)\n\n본문이 여기에 있습니다.",
        "> > nested quote text here",
        "- > quoted list item",
        "  # Indented heading",
        "> # Quoted heading\n\n- - nested item",
    ];

    for doc in docs {
        let once = normalize(doc);
        let twice = normalize(&once);
        assert_eq!(once, twice, "normalizing twice changed: {doc:?}");
    }
}

#[test]
fn test_no_markup_survives() {
    let raw = "# H\n**b** *i* `c` [l](u) ![a](b)\n> q\n- x";
    let out = normalize(raw);
    for marker in ["#", "**", "`", "](", "> ", "- "] {
        assert!(!out.contains(marker), "{marker:?} left in {out:?}");
    }
}

#[test]
fn test_nested_block_markers_are_removed() {
    assert_eq!(normalize("> > nested quote text here"), "nested quote text here");
    assert_eq!(normalize("- > quoted list item"), "quoted list item");
    assert_eq!(normalize("  # Indented heading"), "Indented heading");
    assert_eq!(normalize("> # Quoted heading"), "Quoted heading");
    assert_eq!(normalize("  - indented item\n- - nested item"), "indented item nested item");
}
