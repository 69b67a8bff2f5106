use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sentiment model error: {0}")]
    Model(String),

    #[error("lexicon scorer error: {0}")]
    Lexicon(String),

    /// `generate_insights` was called with an empty batch.
    #[error("no posts provided")]
    NoData,
}
