//! Command handlers. All of them are synchronous and return the text to
//! print, so `main` can run them on a blocking thread.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use socintel_analytics::{render_report, AnalyticsError, InsightEngine};
use socintel_core::{AppConfig, Platform, PostRecord};

use crate::Commands;

/// Printed instead of a summary when the (filtered) batch is empty.
pub(crate) const NO_POSTS_MESSAGE: &str = "no posts found; nothing to analyze";

pub(crate) fn run(config: &AppConfig, command: Commands) -> anyhow::Result<String> {
    let engine = InsightEngine::from_config(config);
    let now = Utc::now();

    match command {
        Commands::Insights {
            input,
            platform,
            days,
        } => {
            let posts = load_filtered(config, input.as_deref(), platform, since(now, days))?;
            insights_output(&engine, &posts)
        }
        Commands::Report {
            input,
            platform,
            days,
            period,
        } => {
            let posts = load_filtered(config, input.as_deref(), platform, since(now, days))?;
            Ok(report_output(&engine, &posts, &period))
        }
        Commands::Analyze { text } => to_json(&engine.analyze_post(&text)),
        Commands::Daily {
            input,
            platform,
            days,
        } => {
            let posts = load_filtered(config, input.as_deref(), platform, since(now, days))?;
            to_json(&engine.daily_sentiment(&posts))
        }
        Commands::Topics { input, days, limit } => {
            let posts = load_filtered(config, input.as_deref(), None, since(now, days))?;
            to_json(&engine.topic_sentiment(&posts, limit))
        }
    }
}

/// Start of a `days`-long window ending at `now`.
pub(crate) fn since(now: DateTime<Utc>, days: Option<u32>) -> Option<DateTime<Utc>> {
    days.map(|d| now - Duration::days(i64::from(d)))
}

/// Load posts from `input` (or the configured default path), keeping only
/// those on `platform` and posted at or after `since`, when given.
///
/// Undated posts are dropped whenever a `since` bound is set.
///
/// # Errors
///
/// Returns an error if the posts file cannot be read or parsed.
pub(crate) fn load_filtered(
    config: &AppConfig,
    input: Option<&Path>,
    platform: Option<Platform>,
    since: Option<DateTime<Utc>>,
) -> anyhow::Result<Vec<PostRecord>> {
    let path: PathBuf = input.map_or_else(|| config.posts_path.clone(), Path::to_path_buf);
    let mut posts = socintel_core::load_posts(&path)?;
    if let Some(platform) = platform {
        posts.retain(|p| p.platform == platform);
    }
    if let Some(since) = since {
        posts.retain(|p| p.posted_at.is_some_and(|at| at >= since));
    }
    tracing::info!(
        path = %path.display(),
        posts = posts.len(),
        ?platform,
        ?since,
        "loaded posts"
    );
    Ok(posts)
}

pub(crate) fn insights_output(
    engine: &InsightEngine,
    posts: &[PostRecord],
) -> anyhow::Result<String> {
    match engine.generate_insights(posts) {
        Ok(summary) => to_json(&summary),
        Err(AnalyticsError::NoData) => Ok(NO_POSTS_MESSAGE.to_string()),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn report_output(engine: &InsightEngine, posts: &[PostRecord], period: &str) -> String {
    match engine.generate_insights(posts) {
        Ok(summary) => render_report(&summary, period),
        Err(e) => {
            tracing::info!(error = %e, "skipping report");
            NO_POSTS_MESSAGE.to_string()
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
