use crate::store::{Document, DocumentStore};
use serde::Serialize;
use thiserror::Error;

pub mod keywords;
pub mod readability;
pub mod sentiment;
pub mod tokenizer;

pub use keywords::top_keywords;
pub use readability::{FleschReadingEase, ReadabilityScorer};
pub use sentiment::{LexiconPolarity, PolarityScorer, Sentiment};
pub use tokenizer::tokenize_and_filter;

/// Failure reported by a sentiment or readability scorer.
#[derive(Debug, Clone, Error)]
#[error("{scorer} scorer failed: {message}")]
pub struct ScorerError {
    pub scorer: &'static str,
    pub message: String,
}

impl ScorerError {
    pub fn new(scorer: &'static str, message: impl Into<String>) -> Self {
        Self {
            scorer,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Document not found")]
    NotFound { id: String },
    #[error(transparent)]
    Scorer(#[from] ScorerError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentAnalysis {
    pub title: Option<String>,
    pub author: Option<String>,
    pub sentiment: Sentiment,
    pub keywords: Vec<String>,
    pub readability_score: f64,
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Composes the store with the keyword pipeline and both scorers.
pub struct Analyzer {
    polarity: Box<dyn PolarityScorer>,
    readability: Box<dyn ReadabilityScorer>,
    keyword_limit: usize,
}

impl Analyzer {
    pub fn new(
        polarity: Box<dyn PolarityScorer>,
        readability: Box<dyn ReadabilityScorer>,
        keyword_limit: usize,
    ) -> Self {
        Self {
            polarity,
            readability,
            keyword_limit,
        }
    }

    pub fn with_keyword_limit(keyword_limit: usize) -> Self {
        Self::new(
            Box::new(LexiconPolarity::new()),
            Box::new(FleschReadingEase::new()),
            keyword_limit,
        )
    }

    pub fn sentiment(&self, text: &str) -> Result<Sentiment, ScorerError> {
        let polarity = self.polarity.polarity(text)?;
        Ok(Sentiment::from_polarity(polarity))
    }

    pub fn keywords(&self, text: &str, limit: usize) -> Vec<String> {
        top_keywords(&tokenize_and_filter(text), limit)
    }

    pub fn readability(&self, text: &str) -> Result<f64, ScorerError> {
        self.readability.score(text)
    }

    pub fn analyze(&self, store: &DocumentStore, id: &str) -> Result<DocumentAnalysis, AnalysisError> {
        let Some((_, document)) = store.lookup(id) else {
            return Err(AnalysisError::NotFound { id: id.to_string() });
        };
        self.analyze_document(document)
    }

    fn analyze_document(&self, document: Document) -> Result<DocumentAnalysis, AnalysisError> {
        let text = document.content_or_empty();
        let sentiment = self.sentiment(text)?;
        let keywords = self.keywords(text, self.keyword_limit);
        let readability_score = self.readability(text)?;

        Ok(DocumentAnalysis {
            sentiment,
            keywords,
            readability_score,
            word_count: word_count(text),
            sentence_count: sentence_count(text),
            title: document.title,
            author: document.author,
        })
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts terminator characters, not real sentences: "Wait..." is three.
pub fn sentence_count(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count()
}
