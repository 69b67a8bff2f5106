//! Layered sentiment classification: model → lexicon → keywords.

use std::sync::Arc;

use socintel_core::{AppConfig, Sentiment};

use crate::error::AnalyticsError;
use crate::keywords::{keyword_sentiment, TIE_CONFIDENCE};
use crate::lazy::LazyTier;
use crate::lexicon::{label_for_compound, PolarityScorer, VaderScorer};
use crate::model::{SentimentModel, TeiClassifier};
use crate::types::{LabelScore, PolarityScores, RawScores, SentimentResult, SentimentSource};

/// Characters of input the model tier sees by default.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 512;

/// Sentiment classifier with optional, lazily loaded model and lexicon tiers.
///
/// The keyword heuristic is always present, so [`classify`](Self::classify)
/// never fails. Safe to share across threads behind an `Arc`.
pub struct SentimentClassifier {
    model: Option<LazyTier<dyn SentimentModel>>,
    lexicon: Option<LazyTier<dyn PolarityScorer>>,
    max_input_chars: usize,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::keyword_only()
    }
}

impl SentimentClassifier {
    /// A classifier with neither model nor lexicon tier.
    #[must_use]
    pub fn keyword_only() -> Self {
        Self {
            model: None,
            lexicon: None,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    /// Build the tiers described by `config`: VADER when the lexicon is
    /// enabled, TEI when a URL is configured.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let mut classifier = Self::keyword_only().with_max_input_chars(config.max_input_chars);

        if let Some(url) = config.tei_url.clone() {
            let timeout_secs = config.inference_timeout_secs;
            classifier = classifier.with_model(move || TeiClassifier::new(&url, timeout_secs));
        }
        if config.lexicon_enabled {
            classifier = classifier.with_lexicon(|| Ok(VaderScorer::new()));
        }

        classifier
    }

    #[must_use]
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars.max(1);
        self
    }

    /// Register the model tier. `loader` runs once, on first classification.
    #[must_use]
    pub fn with_model<F, M>(mut self, loader: F) -> Self
    where
        F: Fn() -> Result<M, AnalyticsError> + Send + Sync + 'static,
        M: SentimentModel + 'static,
    {
        self.model = Some(LazyTier::new("model", move || {
            loader().map(|m| Arc::new(m) as Arc<dyn SentimentModel>)
        }));
        self
    }

    /// Register the lexicon tier. `loader` runs once, on first classification.
    #[must_use]
    pub fn with_lexicon<F, P>(mut self, loader: F) -> Self
    where
        F: Fn() -> Result<P, AnalyticsError> + Send + Sync + 'static,
        P: PolarityScorer + 'static,
    {
        self.lexicon = Some(LazyTier::new("lexicon", move || {
            loader().map(|p| Arc::new(p) as Arc<dyn PolarityScorer>)
        }));
        self
    }

    /// Classify `text`.
    ///
    /// Blank text is neutral at 0.5 confidence. Otherwise the first tier that
    /// succeeds decides; tier failures are logged and skipped. The lexicon
    /// also runs when the model decides, so `raw_scores` carries a compound
    /// score whenever a lexicon is available.
    #[must_use]
    pub fn classify(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult {
                label: Sentiment::Neutral,
                confidence: TIE_CONFIDENCE,
                raw_scores: RawScores {
                    source: SentimentSource::EmptyInput,
                    model: None,
                    lexicon: None,
                },
            };
        }

        let model_scores = self.run_model(text);
        let polarity = self.run_lexicon(text);

        let model_decision = model_scores.as_deref().and_then(decide_or_warn);

        let (label, confidence, source) = if let Some((label, confidence)) = model_decision {
            (label, confidence, SentimentSource::Model)
        } else if let Some(p) = polarity {
            (
                label_for_compound(p.compound),
                p.compound.abs().min(1.0),
                SentimentSource::Lexicon,
            )
        } else {
            let (label, confidence) = keyword_sentiment(text);
            (label, confidence, SentimentSource::Keywords)
        };

        tracing::debug!(label = %label, confidence, ?source, "classified text");

        SentimentResult {
            label,
            confidence,
            raw_scores: RawScores {
                source,
                model: model_scores,
                lexicon: polarity,
            },
        }
    }

    fn run_model(&self, text: &str) -> Option<Vec<LabelScore>> {
        let model = self.model.as_ref()?.get()?;
        let input = truncate_chars(text, self.max_input_chars);
        match model.predict(input) {
            Ok(scores) => Some(scores),
            Err(e) => {
                tracing::warn!(error = %e, "model sentiment failed; falling back");
                None
            }
        }
    }

    fn run_lexicon(&self, text: &str) -> Option<PolarityScores> {
        let lexicon = self.lexicon.as_ref()?.get()?;
        match lexicon.polarity(text) {
            Ok(scores) => Some(scores),
            Err(e) => {
                tracing::warn!(error = %e, "lexicon sentiment failed; falling back");
                None
            }
        }
    }
}

/// Pick the highest-scoring recognized label.
fn decide_from_model(scores: &[LabelScore]) -> Result<(Sentiment, f64), AnalyticsError> {
    let best = scores
        .iter()
        .filter(|s| s.score.is_finite())
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| AnalyticsError::Model("no finite label scores".to_string()))?;

    let label = parse_model_label(&best.label).ok_or_else(|| {
        AnalyticsError::Model(format!("unrecognized model label '{}'", best.label))
    })?;

    Ok((label, best.score.clamp(0.0, 1.0)))
}

fn decide_or_warn(scores: &[LabelScore]) -> Option<(Sentiment, f64)> {
    match decide_from_model(scores) {
        Ok(decision) => Some(decision),
        Err(e) => {
            tracing::warn!(error = %e, "model output unusable; falling back");
            None
        }
    }
}

/// Accepts plain names and the `LABEL_n` ids of the cardiffnlp models
/// (0 = negative, 1 = neutral, 2 = positive).
fn parse_model_label(raw: &str) -> Option<Sentiment> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "positive" | "pos" | "label_2" => Some(Sentiment::Positive),
        "negative" | "neg" | "label_0" => Some(Sentiment::Negative),
        "neutral" | "neu" | "label_1" => Some(Sentiment::Neutral),
        _ => None,
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
