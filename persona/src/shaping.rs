//! Sentence-bounded truncation shared by the enricher and the answer shaper.
//!
//! A sentence is a maximal run of characters without `.`, `!` or `?`,
//! followed by one or more of them. Abbreviations ("z. B.") and decimals
//! ("3.5") split early; that is accepted behavior.

use std::sync::OnceLock;

use regex::Regex;

/// Hard cap for answers returned to the front-end.
pub const MAX_ANSWER_SENTENCES: usize = 5;

static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();

fn sentence_re() -> &'static Regex {
    SENTENCE_RE.get_or_init(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid sentence regex"))
}

/// Returns the first `n` complete sentences of `text`, trimmed and joined by
/// single spaces. Text after the last terminal mark is dropped; text without
/// any terminal mark yields an empty string.
pub fn first_sentences(text: &str, n: usize) -> String {
    sentence_re()
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims a model answer to [`MAX_ANSWER_SENTENCES`].
pub fn shape_answer(text: &str) -> String {
    first_sentences(text, MAX_ANSWER_SENTENCES)
}
