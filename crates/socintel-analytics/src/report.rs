//! Markdown report rendering for an [`InsightSummary`].

use std::collections::BTreeMap;

use socintel_core::{Platform, Sentiment};

use crate::types::{InsightSummary, TopicCount};

/// Topics listed in the report's topic section.
const REPORT_TOPICS: usize = 5;

/// Render `summary` as a markdown report for `period_label` (e.g. `daily`).
///
/// Empty sentiment, platform, topic, and recommendation collections each
/// render an explicit "No ... available." line.
#[must_use]
pub fn render_report(summary: &InsightSummary, period_label: &str) -> String {
    format!(
        "# AI Social Intelligence {period} Report\n\
         \n\
         ## Executive Summary\n\
         This report provides insights from {total} social media posts analyzed during the \
         {label} period.\n\
         \n\
         ## Key Metrics\n\
         - Total Posts Analyzed: {total}\n\
         - Total Engagement: {engagement}\n\
         - Average Engagement per Post: {avg:.1}\n\
         - Sentiment Trend: {trend}\n\
         \n\
         ## Sentiment Analysis\n\
         {sentiment}\n\
         \n\
         ## Platform Performance\n\
         {platforms}\n\
         \n\
         ## Top Topics\n\
         {topics}\n\
         \n\
         ## Recommendations\n\
         {recommendations}\n\
         \n\
         ---\n\
         *Generated automatically by AI Social Intelligence System*",
        period = title_case(period_label),
        total = summary.total_posts,
        label = period_label.trim(),
        engagement = summary.total_engagement,
        avg = summary.avg_engagement,
        trend = summary.sentiment_trend,
        sentiment = sentiment_section(&summary.sentiment_distribution),
        platforms = platform_section(&summary.platform_breakdown),
        topics = topics_section(&summary.top_topics),
        recommendations = recommendations_section(&summary.recommendations),
    )
}

fn sentiment_section(distribution: &BTreeMap<Sentiment, usize>) -> String {
    let total: usize = distribution.values().sum();
    if total == 0 {
        return "No sentiment data available.".to_string();
    }

    distribution
        .iter()
        .map(|(label, &count)| {
            #[allow(clippy::cast_precision_loss)]
            let pct = count as f64 / total as f64 * 100.0;
            format!("- {}: {count} posts ({pct:.1}%)", label.title())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn platform_section(breakdown: &BTreeMap<Platform, usize>) -> String {
    if breakdown.is_empty() {
        return "No platform data available.".to_string();
    }

    breakdown
        .iter()
        .map(|(platform, count)| format!("- {}: {count} posts", platform.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn topics_section(topics: &[TopicCount]) -> String {
    if topics.is_empty() {
        return "No topic data available.".to_string();
    }

    topics
        .iter()
        .take(REPORT_TOPICS)
        .map(|t| format!("- {}: {} mentions", t.topic, t.frequency))
        .collect::<Vec<_>>()
        .join("\n")
}

fn recommendations_section(recommendations: &[String]) -> String {
    if recommendations.is_empty() {
        return "No recommendations available.".to_string();
    }

    recommendations
        .iter()
        .map(|r| format!("- {r}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Upper-case the first letter of every whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
