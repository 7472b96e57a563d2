use super::ScorerError;

const BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Produces a readability score for a piece of text.
pub trait ReadabilityScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64, ScorerError>;
}

/// Flesch reading ease, rounded to two decimals.
///
/// Text without words never divides by zero: both ratios collapse to 0 and the
/// score is the formula's base constant.
#[derive(Debug, Clone, Default)]
pub struct FleschReadingEase;

impl FleschReadingEase {
    pub fn new() -> Self {
        Self
    }
}

impl ReadabilityScorer for FleschReadingEase {
    fn score(&self, text: &str) -> Result<f64, ScorerError> {
        let words = words(text);
        let word_count = words.len();
        let sentences = sentence_count(text);
        let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();

        let (words_per_sentence, syllables_per_word) = if word_count == 0 {
            (0.0, 0.0)
        } else {
            (
                word_count as f64 / sentences as f64,
                syllables as f64 / word_count as f64,
            )
        };

        let score =
            BASE - SENTENCE_LENGTH_WEIGHT * words_per_sentence - SYLLABLE_WEIGHT * syllables_per_word;
        if !score.is_finite() {
            return Err(ScorerError::new(
                "readability",
                format!("non-finite score for {word_count} words"),
            ));
        }
        Ok((score * 100.0).round() / 100.0)
    }
}

/// Whitespace tokens with punctuation removed; tokens that were pure
/// punctuation disappear.
fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
                .collect::<String>()
        })
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .collect()
}

/// Segments delimited by runs of `.`, `!` or `?` that contain at least one
/// word. Never less than one.
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
        .max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel-group heuristic: each run of vowels is a syllable, a trailing silent
/// `e` is not (except after a consonant + `l`, as in "table"), minimum one.
pub fn syllable_count(word: &str) -> usize {
    let letters: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups: usize = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let len = letters.len();
    if len > 2 && letters[len - 1] == 'e' && !is_vowel(letters[len - 2]) {
        let le_ending = letters[len - 2] == 'l' && !is_vowel(letters[len - 3]);
        if !le_ending {
            groups = groups.saturating_sub(1);
        }
    }

    groups.max(1)
}
