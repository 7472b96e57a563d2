use super::ScorerError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;

/// Polarity strictly above this classifies as positive, strictly below its
/// negation as negative.
pub const POLARITY_THRESHOLD: f64 = 0.1;

/// How far back a negation word reaches.
const NEGATION_WINDOW: usize = 3;
/// Negated words flip and lose half of their weight.
const NEGATION_FACTOR: f64 = -0.5;

/// Produces a polarity in [-1, 1] for a piece of text.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> Result<f64, ScorerError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POLARITY_THRESHOLD {
            Sentiment::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"[\w']+").expect("valid regex");
    static ref LEXICON: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("beautiful", 0.85),
            ("best", 1.0),
            ("better", 0.5),
            ("brilliant", 0.9),
            ("clean", 0.37),
            ("clear", 0.1),
            ("comfortable", 0.4),
            ("cool", 0.35),
            ("delightful", 1.0),
            ("easy", 0.43),
            ("elegant", 0.4),
            ("enjoy", 0.4),
            ("enjoyed", 0.4),
            ("excellent", 1.0),
            ("exciting", 0.3),
            ("fantastic", 0.4),
            ("fast", 0.2),
            ("favorite", 0.5),
            ("fine", 0.42),
            ("fresh", 0.3),
            ("friendly", 0.38),
            ("fun", 0.3),
            ("glad", 0.5),
            ("good", 0.7),
            ("great", 0.8),
            ("happy", 0.8),
            ("helpful", 0.4),
            ("impressive", 1.0),
            ("incredible", 0.9),
            ("interesting", 0.5),
            ("love", 0.5),
            ("loved", 0.7),
            ("lovely", 0.5),
            ("nice", 0.6),
            ("perfect", 1.0),
            ("pleasant", 0.73),
            ("positive", 0.23),
            ("remarkable", 0.75),
            ("right", 0.29),
            ("satisfied", 0.5),
            ("smart", 0.21),
            ("strong", 0.43),
            ("successful", 0.75),
            ("superb", 1.0),
            ("useful", 0.3),
            ("wonderful", 1.0),
            ("angry", -0.5),
            ("annoying", -0.8),
            ("awful", -1.0),
            ("bad", -0.7),
            ("boring", -1.0),
            ("broken", -0.4),
            ("confusing", -0.3),
            ("difficult", -0.5),
            ("dirty", -0.6),
            ("disappointed", -0.75),
            ("disappointing", -0.6),
            ("disgusting", -1.0),
            ("dreadful", -1.0),
            ("dull", -0.31),
            ("evil", -1.0),
            ("expensive", -0.5),
            ("failed", -0.5),
            ("failure", -0.32),
            ("frustrating", -0.4),
            ("hard", -0.29),
            ("hate", -0.8),
            ("hated", -0.9),
            ("horrible", -1.0),
            ("nasty", -1.0),
            ("negative", -0.3),
            ("painful", -0.7),
            ("pathetic", -1.0),
            ("poor", -0.4),
            ("rude", -0.3),
            ("sad", -0.5),
            ("sick", -0.71),
            ("slow", -0.3),
            ("stupid", -0.8),
            ("terrible", -1.0),
            ("ugly", -0.7),
            ("unhappy", -0.6),
            ("useless", -0.5),
            ("weak", -0.38),
            ("worse", -0.4),
            ("worst", -1.0),
            ("wrong", -0.5),
        ];
        entries.iter().copied().collect()
    };
    static ref INTENSIFIERS: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            ("absolutely", 1.4),
            ("barely", 0.5),
            ("extremely", 1.5),
            ("highly", 1.3),
            ("incredibly", 1.5),
            ("quite", 1.1),
            ("really", 1.2),
            ("slightly", 0.7),
            ("so", 1.2),
            ("somewhat", 0.8),
            ("super", 1.3),
            ("too", 1.2),
            ("totally", 1.3),
            ("very", 1.3),
        ];
        entries.iter().copied().collect()
    };
}

fn is_negation(token: &str) -> bool {
    matches!(
        token,
        "not" | "no" | "never" | "none" | "nothing" | "neither" | "nor" | "cannot" | "without"
    ) || token.ends_with("n't")
}

/// Averaging lexicon scorer.
///
/// Every lexicon word contributes its polarity, scaled by an intensifier
/// directly in front of it and flipped by a negation within the last few
/// tokens. The result is the mean contribution, or 0.0 when nothing matched.
#[derive(Debug, Clone, Default)]
pub struct LexiconPolarity;

impl LexiconPolarity {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for LexiconPolarity {
    fn polarity(&self, text: &str) -> Result<f64, ScorerError> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN_RE.find_iter(&lowered).map(|mat| mat.as_str()).collect();

        let mut assessments = Vec::new();
        for (index, token) in tokens.iter().enumerate() {
            let Some(&base) = LEXICON.get(*token) else {
                continue;
            };

            let intensity = index
                .checked_sub(1)
                .and_then(|prev| INTENSIFIERS.get(tokens[prev]))
                .copied()
                .unwrap_or(1.0);
            let negated = (1..=NEGATION_WINDOW)
                .any(|back| index >= back && is_negation(tokens[index - back]));

            let mut value = (base * intensity).clamp(-1.0, 1.0);
            if negated {
                value *= NEGATION_FACTOR;
            }
            assessments.push(value);
        }

        if assessments.is_empty() {
            return Ok(0.0);
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}
