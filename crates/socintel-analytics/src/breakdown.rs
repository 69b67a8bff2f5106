//! Per-day and per-topic sentiment breakdowns.

use std::collections::{BTreeMap, HashMap};

use socintel_core::{PostRecord, Sentiment};

use crate::insights::InsightEngine;
use crate::topics::{extract_topics, rank_by_frequency};
use crate::types::{DailyBreakdown, TopicSentiment};

/// Topics returned by [`InsightEngine::topic_sentiment`] when no limit is given.
pub const DEFAULT_TOPIC_LIMIT: usize = 15;

#[derive(Default)]
struct TopicTally {
    frequency: usize,
    distribution: BTreeMap<Sentiment, usize>,
}

impl InsightEngine {
    /// Sentiment counts and mean score per UTC day, oldest first.
    ///
    /// Posts without `posted_at` are skipped. Missing labels are classified;
    /// a missing score falls back to the classifier's compound score.
    #[must_use]
    pub fn daily_sentiment(&self, posts: &[PostRecord]) -> DailyBreakdown {
        let mut days: DailyBreakdown = BTreeMap::new();
        let mut score_sums: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();

        for post in posts {
            let Some(posted_at) = post.posted_at else {
                continue;
            };
            let date = posted_at.date_naive();

            let (label, score) = match (post.sentiment, post.sentiment_score) {
                (Some(label), Some(score)) => (label, score),
                (label, score) => {
                    let result = self.classifier().classify(&post.content);
                    (
                        label.unwrap_or(result.label),
                        score.unwrap_or_else(|| result.raw_scores.compound()),
                    )
                }
            };

            let day = days.entry(date).or_default();
            match label {
                Sentiment::Positive => day.positive += 1,
                Sentiment::Negative => day.negative += 1,
                Sentiment::Neutral => day.neutral += 1,
            }
            day.total += 1;
            *score_sums.entry(date).or_insert(0.0) += score;
        }

        for (date, day) in &mut days {
            if day.total > 0 {
                #[allow(clippy::cast_precision_loss)]
                let total = day.total as f64;
                day.avg_score = score_sums.get(date).copied().unwrap_or(0.0) / total;
            }
        }

        days
    }

    /// Frequency and sentiment mix of the most common topics, most frequent
    /// first (ties in first-seen order), at most `limit` entries.
    #[must_use]
    pub fn topic_sentiment(&self, posts: &[PostRecord], limit: usize) -> Vec<TopicSentiment> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut tallies: Vec<(String, TopicTally)> = Vec::new();

        for post in posts {
            let label = self.resolve_sentiment(post).label;
            for topic in extract_topics(&post.content, self.options().topics_per_post) {
                let i = if let Some(&i) = index.get(&topic) {
                    i
                } else {
                    index.insert(topic.clone(), tallies.len());
                    tallies.push((topic, TopicTally::default()));
                    tallies.len() - 1
                };
                let tally = &mut tallies[i].1;
                tally.frequency += 1;
                *tally.distribution.entry(label).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(TopicSentiment, usize)> = tallies
            .into_iter()
            .map(|(topic, tally)| {
                let frequency = tally.frequency;
                (into_topic_sentiment(topic, tally), frequency)
            })
            .collect();
        rank_by_frequency(&mut ranked);

        ranked.into_iter().take(limit).map(|(t, _)| t).collect()
    }
}

fn into_topic_sentiment(topic: String, tally: TopicTally) -> TopicSentiment {
    let count = |label: Sentiment| tally.distribution.get(&label).copied().unwrap_or(0);
    #[allow(clippy::cast_precision_loss)]
    let sentiment_score = if tally.frequency == 0 {
        0.0
    } else {
        (count(Sentiment::Positive) as f64 - count(Sentiment::Negative) as f64)
            / tally.frequency as f64
    };

    TopicSentiment {
        topic,
        frequency: tally.frequency,
        sentiment_distribution: tally.distribution,
        sentiment_score,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, TimeZone, Utc};
    use socintel_core::Platform;

    use super::*;
    use crate::classifier::SentimentClassifier;
    use crate::lexicon::VaderScorer;
    use crate::types::AnalyticsOptions;

    fn engine() -> InsightEngine {
        InsightEngine::new(
            Arc::new(SentimentClassifier::keyword_only()),
            AnalyticsOptions::default(),
        )
    }

    fn dated(content: &str, day: u32, hour: u32) -> PostRecord {
        let mut post = PostRecord::new(Platform::Twitter, content);
        post.posted_at = Some(Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap());
        post
    }

    #[test]
    fn daily_groups_by_utc_date_in_order() {
        let mut scored = dated("whatever", 3, 9);
        scored.sentiment = Some(Sentiment::Positive);
        scored.sentiment_score = Some(0.8);

        let mut other = dated("meh", 3, 22);
        other.sentiment = Some(Sentiment::Negative);
        other.sentiment_score = Some(-0.4);

        let posts = vec![
            scored,
            dated("great launch", 1, 12),
            other,
            PostRecord::new(Platform::Twitter, "undated, ignored"),
        ];

        let days = engine().daily_sentiment(&posts);
        let dates: Vec<NaiveDate> = days.keys().copied().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            ]
        );

        let may3 = &days[&NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()];
        assert_eq!(may3.positive, 1);
        assert_eq!(may3.negative, 1);
        assert_eq!(may3.total, 2);
        assert!((may3.avg_score - 0.2).abs() < 1e-9);

        let may1 = &days[&NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()];
        assert_eq!(may1.positive, 1);
        // keyword tier has no compound score
        assert!(may1.avg_score.abs() < f64::EPSILON);
    }

    #[test]
    fn daily_of_undated_posts_is_empty() {
        let posts = vec![PostRecord::new(Platform::Facebook, "no timestamp")];
        assert!(engine().daily_sentiment(&posts).is_empty());
    }

    #[test]
    fn topic_sentiment_tallies_labels_per_topic() {
        let posts = vec![
            PostRecord::new(Platform::Twitter, "great pizza tonight"),
            PostRecord::new(Platform::Twitter, "terrible pizza delivery"),
            PostRecord::new(Platform::Twitter, "awesome pizza again"),
            PostRecord::new(Platform::Twitter, "delivery delayed"),
        ];

        let topics = engine().topic_sentiment(&posts, DEFAULT_TOPIC_LIMIT);

        assert_eq!(topics[0].topic, "pizza");
        assert_eq!(topics[0].frequency, 3);
        assert_eq!(
            topics[0].sentiment_distribution.get(&Sentiment::Positive),
            Some(&2)
        );
        assert_eq!(
            topics[0].sentiment_distribution.get(&Sentiment::Negative),
            Some(&1)
        );
        assert!((topics[0].sentiment_score - 1.0 / 3.0).abs() < 1e-9);

        assert_eq!(topics[1].topic, "delivery");
        assert_eq!(topics[1].frequency, 2);
    }

    #[test]
    fn daily_keeps_precomputed_label_and_scores_with_classifier() {
        let classifier =
            SentimentClassifier::keyword_only().with_lexicon(|| Ok(VaderScorer::new()));
        let engine = InsightEngine::new(Arc::new(classifier), AnalyticsOptions::default());

        let mut post = dated("What a wonderful, happy launch day", 2, 10);
        post.sentiment = Some(Sentiment::Negative);

        let expected = engine
            .classifier()
            .classify(&post.content)
            .raw_scores
            .compound();
        assert!(expected > 0.05);

        let days = engine.daily_sentiment(&[post]);
        let may2 = &days[&NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()];
        assert_eq!(may2.negative, 1);
        assert_eq!(may2.positive, 0);
        assert!((may2.avg_score - expected).abs() < 1e-12);
    }

    #[test]
    fn topic_sentiment_ties_keep_first_seen_order() {
        let posts = vec![
            PostRecord::new(Platform::Twitter, "mango smoothie"),
            PostRecord::new(Platform::Twitter, "kiwi mango"),
            PostRecord::new(Platform::Twitter, "kiwi smoothie"),
        ];

        let topics = engine().topic_sentiment(&posts, DEFAULT_TOPIC_LIMIT);
        let ranked: Vec<(&str, usize)> = topics
            .iter()
            .map(|t| (t.topic.as_str(), t.frequency))
            .collect();
        assert_eq!(ranked, vec![("mango", 2), ("smoothie", 2), ("kiwi", 2)]);
    }

    #[test]
    fn topic_sentiment_respects_limit() {
        let posts = vec![PostRecord::new(
            Platform::Twitter,
            "alpha bravo charlie delta echo",
        )];
        assert_eq!(engine().topic_sentiment(&posts, 2).len(), 2);
    }
}
