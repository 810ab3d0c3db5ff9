use blog_summary::summarizer::ranking::score_sentence;
use blog_summary::summarizer::{
    KeywordTable, Sentence, rank_sentences, score_sentences, split_sentences,
};

fn sentences(texts: &[&str]) -> Vec<Sentence> {
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| Sentence {
            index,
            text: (*text).to_string(),
        })
        .collect()
}

fn filler(n: usize) -> Vec<Sentence> {
    (0..n)
        .map(|index| Sentence {
            index,
            text: format!("short line {index}"),
        })
        .collect()
}

#[test]
fn test_positional_bonus_for_ten_sentences() {
    let scored = score_sentences(&filler(10), &[], &KeywordTable::default());
    let scores: Vec<u32> = scored.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![2, 2, 2, 0, 0, 0, 0, 1, 1, 1]);
}

#[test]
fn test_positional_bonuses_at_small_counts() {
    // Lead and tail are checked separately, each from its own end. A single
    // sentence is both lead and tail and collects both bonuses.
    let scores = |n: usize| -> Vec<u32> {
        score_sentences(&filler(n), &[], &KeywordTable::default())
            .iter()
            .map(|s| s.score)
            .collect()
    };
    assert_eq!(scores(1), vec![3]);
    assert_eq!(scores(2), vec![2, 1]);
    assert_eq!(scores(3), vec![2, 0, 1]);
    assert_eq!(scores(4), vec![2, 2, 1, 1]);
    assert_eq!(scores(5), vec![2, 2, 0, 1, 1]);

    // From two sentences on, the bands no longer overlap
    for n in 2..60 {
        assert!(
            scores(n).iter().all(|&s| s <= 2),
            "lead and tail overlapped for n={n}"
        );
    }
}

#[test]
fn test_length_bonus_is_strictly_between_bounds() {
    let table = KeywordTable::default();
    let at = |len: usize| {
        let sentence = Sentence {
            index: 5,
            text: "x".repeat(len),
        };
        score_sentence(&sentence, 10, &[], &table)
    };
    assert_eq!(at(30), 0);
    assert_eq!(at(31), 1);
    assert_eq!(at(149), 1);
    assert_eq!(at(150), 0);
}

#[test]
fn test_keyword_frequency_is_added_per_matching_keyword() {
    let text = "caching layer. caching rules. caching again. layer cake.";
    let table = KeywordTable::build(text);
    let keywords = table.top_keywords();
    let sentence = Sentence {
        index: 5,
        text: "The Caching Layer".to_string(),
    };
    // caching (3) + layer (2), matched case-insensitively
    assert_eq!(score_sentence(&sentence, 10, &keywords, &table), 5);
}

#[test]
fn test_selected_sentences_come_back_in_document_order() {
    let candidates = sentences(&[
        "nothing relevant in here at all",
        "tokio runtime tokio tasks tokio timers tokio",
        "weather felt mild today",
        "lunch included sandwiches",
        "meetings ran long",
        "coffee machine broke",
        "parking lot filled",
        "tokio closes the article",
    ]);
    let text = candidates
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(". ");
    let table = KeywordTable::build(&text);
    let keywords = table.top_keywords();

    let selected = rank_sentences(&candidates, &keywords, &table);
    let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
    assert_eq!(selected.len(), 2);
    assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");
    assert!(indices.contains(&1), "keyword-dense sentence must be picked: {indices:?}");
}

#[test]
fn test_equal_scores_prefer_earlier_sentences() {
    let candidates = filler(5);
    let selected = rank_sentences(&candidates, &[], &KeywordTable::default());
    // n=5: two picks; indices 0 and 1 both earn the lead bonus
    let indices: Vec<usize> = selected.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn test_sentence_floor() {
    let out = split_sentences("Ok. This sentence is long enough to count. Fine! abcdefghij. abcdefghijk.");
    let texts: Vec<&str> = out.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["This sentence is long enough to count", "abcdefghijk"]);
    assert_eq!(out[1].index, 1);
    assert!(texts.iter().all(|t| *t != "Ok"));
}

#[test]
fn test_trailing_text_without_terminator_is_not_a_candidate() {
    let out = split_sentences("The first sentence ends here. this tail never ends");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].text, "The first sentence ends here");
}
