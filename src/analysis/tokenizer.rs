use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Tokens of this many characters or fewer never count as keywords.
const MIN_TOKEN_CHARS: usize = 3;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[\p{L}\p{N}_]+").expect("valid regex");
    static ref STOP_WORDS: HashSet<&'static str> = {
        let words: &[&str] = &["the", "and", "is", "in", "to", "a", "of", "it", "that", "this"];
        words.iter().copied().collect()
    };
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Lowercase `text`, split it into runs of word characters and drop stop words
/// and short tokens. Order and duplicates are kept.
pub fn tokenize_and_filter(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|mat| mat.as_str())
        .filter(|token| !is_stop_word(token))
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}
