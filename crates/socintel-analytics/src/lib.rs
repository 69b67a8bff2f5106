//! Sentiment, topic, and insight analytics for social posts.
//!
//! Classifies post sentiment through a layered fallback (TEI-hosted model,
//! VADER lexicon, keyword heuristic), extracts keyword topics, folds post
//! batches into an [`InsightSummary`] with rule-based recommendations, and
//! renders markdown reports. Everything here is synchronous; the model tier
//! performs blocking HTTP and must run off the async runtime.

pub mod breakdown;
pub mod classifier;
pub mod error;
pub mod insights;
pub mod lexicon;
pub mod model;
pub mod report;
pub mod summarize;
pub mod topics;
pub mod types;

mod keywords;
mod lazy;

pub use breakdown::DEFAULT_TOPIC_LIMIT;
pub use classifier::SentimentClassifier;
pub use error::AnalyticsError;
pub use insights::InsightEngine;
pub use lexicon::{PolarityScorer, VaderScorer};
pub use model::{SentimentModel, TeiClassifier};
pub use report::render_report;
pub use summarize::summarize_text;
pub use topics::extract_topics;
pub use types::{
    AnalyticsOptions, DailyBreakdown, DailySentiment, InsightSummary, LabelScore, PolarityScores,
    PostAnalysis, RawScores, SentimentResult, SentimentSource, TopicCount, TopicSentiment, Trend,
};
