//! Batch aggregation of posts into an [`InsightSummary`].

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use socintel_core::{AppConfig, Platform, PostRecord, Sentiment};

use crate::classifier::SentimentClassifier;
use crate::error::AnalyticsError;
use crate::summarize::summarize_text;
use crate::topics::{extract_topics, rank_by_frequency};
use crate::types::{AnalyticsOptions, InsightSummary, PostAnalysis, TopicCount, Trend};

/// Mean compound score above which the trend is improving.
const TREND_THRESHOLD: f64 = 0.1;
/// Positive share (percent) that must be exceeded to keep the strategy.
const POSITIVE_SHARE_PCT: usize = 70;
/// Negative share (percent) that must be exceeded to raise concerns.
const NEGATIVE_SHARE_PCT: usize = 30;

/// Sentiment resolved for one post: label plus the compound score used for
/// the trend.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PostSentiment {
    pub(crate) label: Sentiment,
    pub(crate) compound: f64,
}

/// Classifier plus aggregation settings. Cheap to clone.
#[derive(Clone)]
pub struct InsightEngine {
    classifier: Arc<SentimentClassifier>,
    options: AnalyticsOptions,
}

impl InsightEngine {
    #[must_use]
    pub fn new(classifier: Arc<SentimentClassifier>, options: AnalyticsOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(SentimentClassifier::from_config(config)),
            AnalyticsOptions::from_app_config(config),
        )
    }

    #[must_use]
    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    #[must_use]
    pub fn options(&self) -> AnalyticsOptions {
        self.options
    }

    /// Reuse a post's precomputed sentiment, or classify its content.
    ///
    /// A precomputed label without a score contributes `0.0` to the trend.
    pub(crate) fn resolve_sentiment(&self, post: &PostRecord) -> PostSentiment {
        if let Some(label) = post.sentiment {
            return PostSentiment {
                label,
                compound: post.sentiment_score.unwrap_or(0.0),
            };
        }
        let result = self.classifier.classify(&post.content);
        PostSentiment {
            label: result.label,
            compound: result.raw_scores.compound(),
        }
    }

    /// Sentiment, topics, and a short summary for one piece of text.
    #[must_use]
    pub fn analyze_post(&self, text: &str) -> PostAnalysis {
        PostAnalysis {
            content: text.to_string(),
            sentiment: self.classifier.classify(text),
            topics: extract_topics(text, self.options.topics_per_post),
            summary: summarize_text(text),
            analyzed_at: chrono::Utc::now(),
        }
    }

    /// Fold a batch of posts into summary statistics and recommendations.
    ///
    /// The trend window is the last `trend_window` posts in the order given,
    /// not sorted by `posted_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::NoData`] when `posts` is empty.
    pub fn generate_insights(
        &self,
        posts: &[PostRecord],
    ) -> Result<InsightSummary, AnalyticsError> {
        if posts.is_empty() {
            return Err(AnalyticsError::NoData);
        }

        let mut sentiments: Vec<PostSentiment> = Vec::with_capacity(posts.len());
        let mut sentiment_distribution: BTreeMap<Sentiment, usize> = BTreeMap::new();
        let mut platform_breakdown: BTreeMap<Platform, usize> = BTreeMap::new();
        let mut platform_order: Vec<Platform> = Vec::new();
        let mut topic_index: HashMap<String, usize> = HashMap::new();
        let mut topic_counts: Vec<(String, usize)> = Vec::new();
        let mut total_engagement: u64 = 0;

        for post in posts {
            let sentiment = self.resolve_sentiment(post);
            *sentiment_distribution.entry(sentiment.label).or_insert(0) += 1;
            sentiments.push(sentiment);

            for topic in extract_topics(&post.content, self.options.topics_per_post) {
                if let Some(&i) = topic_index.get(&topic) {
                    topic_counts[i].1 += 1;
                } else {
                    topic_index.insert(topic.clone(), topic_counts.len());
                    topic_counts.push((topic, 1));
                }
            }

            let count = platform_breakdown.entry(post.platform).or_insert(0);
            if *count == 0 {
                platform_order.push(post.platform);
            }
            *count += 1;

            total_engagement = total_engagement.saturating_add(post.engagement());
        }

        rank_by_frequency(&mut topic_counts);
        let top_topics: Vec<TopicCount> = topic_counts
            .into_iter()
            .take(self.options.top_topics_limit)
            .map(|(topic, frequency)| TopicCount { topic, frequency })
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let avg_engagement = total_engagement as f64 / posts.len() as f64;

        let sentiment_trend = calculate_trend(&sentiments, self.options.trend_window);
        let top_platform = platform_order
            .iter()
            .copied()
            .fold(None::<(Platform, usize)>, |best, p| {
                let count = platform_breakdown.get(&p).copied().unwrap_or(0);
                match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((p, count)),
                }
            })
            .map(|(p, _)| p);
        let recommendations = generate_recommendations(
            &sentiment_distribution,
            top_platform,
            top_topics.first().map(|t| t.topic.as_str()),
        );

        tracing::info!(
            total_posts = posts.len(),
            total_engagement,
            trend = %sentiment_trend,
            topics = top_topics.len(),
            "generated insights"
        );

        Ok(InsightSummary {
            total_posts: posts.len(),
            sentiment_distribution,
            platform_breakdown,
            total_engagement,
            avg_engagement,
            top_topics,
            sentiment_trend,
            recommendations,
        })
    }
}

/// Direction of the mean compound score over the last `window` posts.
pub(crate) fn calculate_trend(sentiments: &[PostSentiment], window: usize) -> Trend {
    if sentiments.len() < 2 {
        return Trend::InsufficientData;
    }

    let recent = &sentiments[sentiments.len().saturating_sub(window.max(1))..];
    #[allow(clippy::cast_precision_loss)]
    let mean = recent.iter().map(|s| s.compound).sum::<f64>() / recent.len() as f64;

    if mean > TREND_THRESHOLD {
        Trend::Improving
    } else if mean < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Rule-based recommendations. Each rule is independent; output order is
/// fixed: positive share, negative share, top platform, top topic.
pub(crate) fn generate_recommendations(
    sentiment_distribution: &BTreeMap<Sentiment, usize>,
    top_platform: Option<Platform>,
    top_topic: Option<&str>,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let classified: usize = sentiment_distribution.values().sum();

    if classified > 0 {
        // Strict: exactly 30% does not trigger the negative rule.
        let exceeds = |label: Sentiment, pct: usize| -> bool {
            let count = sentiment_distribution.get(&label).copied().unwrap_or(0);
            count * 100 > classified * pct
        };

        if exceeds(Sentiment::Positive, POSITIVE_SHARE_PCT) {
            recommendations.push("Maintain current positive engagement strategies".to_string());
        }
        if exceeds(Sentiment::Negative, NEGATIVE_SHARE_PCT) {
            recommendations
                .push("Address customer concerns and improve service quality".to_string());
        }
    }

    if let Some(platform) = top_platform {
        recommendations.push(format!("Focus content strategy on {platform} for maximum reach"));
    }

    if let Some(topic) = top_topic {
        recommendations.push(format!("Create more content around '{topic}' as it's trending"));
    }

    recommendations
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;
