//! Lexicon tier: VADER polarity scoring.

use socintel_core::Sentiment;

use crate::error::AnalyticsError;
use crate::types::PolarityScores;

/// A rule/lexicon based scorer producing VADER-style polarity scores.
pub trait PolarityScorer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] if the scorer cannot produce a finite
    /// compound score for `text`.
    fn polarity(&self, text: &str) -> Result<PolarityScores, AnalyticsError>;
}

/// VADER, tuned for social media text.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> Result<PolarityScores, AnalyticsError> {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| -> Result<f64, AnalyticsError> {
            scores
                .get(key)
                .copied()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    AnalyticsError::Lexicon(format!("missing or non-finite '{key}' score"))
                })
        };

        Ok(PolarityScores {
            compound: get("compound")?.clamp(-1.0, 1.0),
            positive: get("pos")?,
            neutral: get("neu")?,
            negative: get("neg")?,
        })
    }
}

/// Map a compound score onto a label using the standard VADER cut-offs.
pub(crate) fn label_for_compound(compound: f64) -> Sentiment {
    if compound >= 0.05 {
        Sentiment::Positive
    } else if compound <= -0.05 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
