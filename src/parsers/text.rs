use regex::Regex;
use std::sync::LazyLock;

/// Word-like token: a run of Unicode word characters
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Counts the word-like tokens (`\w+` matches) in a piece of text.
///
/// Punctuation and whitespace separate tokens, digits count as words,
/// and underscores are part of a word:
///
/// - `"Hello, world! 123"` has 3 words
/// - `"snake_case"` has 1 word
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Collapses every whitespace run into a single space and trims the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
