//! Pretrained sentiment model tier, served by TEI (Text Embeddings Inference).

use std::time::Duration;

use serde::Serialize;

use crate::error::AnalyticsError;
use crate::types::LabelScore;

/// A pretrained text classifier emitting one score per label.
pub trait SentimentModel: Send + Sync {
    /// Score `text` against every label the model knows.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] if inference fails for any reason.
    fn predict(&self, text: &str) -> Result<Vec<LabelScore>, AnalyticsError>;
}

/// Blocking client for a TEI server hosting a sequence-classification model
/// (e.g. `cardiffnlp/twitter-roberta-base-sentiment-latest`).
///
/// Must be built, used, and dropped off the async runtime: call it from
/// `tokio::task::spawn_blocking` when inside tokio.
pub struct TeiClassifier {
    client: reqwest::blocking::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

impl TeiClassifier {
    /// Create a client for `{tei_url}/predict` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Http`] if the HTTP client cannot be built.
    pub fn new(tei_url: &str, timeout_secs: u64) -> Result<Self, AnalyticsError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent("socintel/0.1 (sentiment-analytics)")
            .build()?;

        Ok(Self {
            client,
            url: format!("{}/predict", tei_url.trim_end_matches('/')),
        })
    }
}

impl SentimentModel for TeiClassifier {
    fn predict(&self, text: &str) -> Result<Vec<LabelScore>, AnalyticsError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest { inputs: text })
            .send()
            .map_err(|e| AnalyticsError::Model(format!("TEI request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AnalyticsError::Model(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        let scores: Vec<LabelScore> = response
            .json()
            .map_err(|e| AnalyticsError::Model(format!("TEI response parse error: {e}")))?;

        if scores.is_empty() {
            return Err(AnalyticsError::Model(
                "TEI returned no label scores".to_string(),
            ));
        }

        Ok(scores)
    }
}
