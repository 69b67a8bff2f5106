use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use socintel_core::{AppConfig, Platform, Sentiment};

/// One label/score pair emitted by a pretrained classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// VADER-style polarity scores. `compound` is in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub compound: f64,
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Which classifier tier produced a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentSource {
    Model,
    Lexicon,
    Keywords,
    EmptyInput,
}

/// Everything the tiers emitted while classifying one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub source: SentimentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Vec<LabelScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PolarityScores>,
}

impl RawScores {
    /// Lexicon compound score, or `0.0` when the lexicon did not run.
    #[must_use]
    pub fn compound(&self) -> f64 {
        self.lexicon.map_or(0.0, |p| p.compound)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    /// Always within `[0.0, 1.0]`.
    pub confidence: f64,
    pub raw_scores: RawScores,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient_data",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub topic: String,
    pub frequency: usize,
}

/// Aggregated statistics for a batch of posts.
///
/// Posts without a sentiment are left out of `sentiment_distribution`, so its
/// values sum to at most `total_posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    pub total_posts: usize,
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    pub platform_breakdown: BTreeMap<Platform, usize>,
    pub total_engagement: u64,
    pub avg_engagement: f64,
    pub top_topics: Vec<TopicCount>,
    pub sentiment_trend: Trend,
    pub recommendations: Vec<String>,
}

impl InsightSummary {
    /// Number of posts that carry a sentiment label.
    #[must_use]
    pub fn classified_posts(&self) -> usize {
        self.sentiment_distribution.values().sum()
    }
}

/// Sentiment, topics, and a short summary for a single post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAnalysis {
    pub content: String,
    pub sentiment: SentimentResult,
    pub topics: Vec<String>,
    pub summary: String,
    pub analyzed_at: DateTime<Utc>,
}

/// Sentiment tallies for one calendar day (UTC).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
    pub avg_score: f64,
}

pub type DailyBreakdown = BTreeMap<NaiveDate, DailySentiment>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSentiment {
    pub topic: String,
    pub frequency: usize,
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    /// Positive share minus negative share, in `[-1.0, 1.0]`.
    pub sentiment_score: f64,
}

/// Tunables for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsOptions {
    pub topics_per_post: usize,
    pub top_topics_limit: usize,
    pub trend_window: usize,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self {
            topics_per_post: 5,
            top_topics_limit: 10,
            trend_window: 10,
        }
    }
}

impl AnalyticsOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            topics_per_post: config.topics_per_post,
            top_topics_limit: config.top_topics_limit,
            trend_window: config.trend_window,
        }
    }
}
