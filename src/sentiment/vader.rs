use super::{SentimentAnalyzer, SentimentScores};
use vader_sentiment::SentimentIntensityAnalyzer;

/// [`SentimentAnalyzer`] backed by the VADER lexicon and rule set
pub struct VaderAnalyzer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let scores = self.inner.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or_default();

        SentimentScores {
            neg: score("neg"),
            neu: score("neu"),
            pos: score("pos"),
            compound: score("compound"),
        }
    }
}
