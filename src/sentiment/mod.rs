//! Lexicon-based sentiment scoring for review text.
//!
//! [`VaderAnalyzer`] wraps the `vader_sentiment` engine, whose lexicon is
//! built once per process. Handlers only see the [`SentimentAnalyzer`] trait
//! so tests can swap in fixed scorers.

mod vader;

pub use vader::VaderAnalyzer;

use serde::Serialize;

/// Polarity of a piece of text
///
/// `neg`, `neu` and `pos` are proportions of the text; `compound` is the
/// normalized overall valence in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Scores text; implementations must be cheap to share across requests
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}
