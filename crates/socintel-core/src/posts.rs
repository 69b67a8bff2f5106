use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Social network a post was collected from.
///
/// Variant order is the display order used in summaries and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Linkedin,
    Facebook,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Facebook,
        Platform::Instagram,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
        }
    }

    /// Human-facing name used in rendered reports.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| format!("unknown platform '{s}'"))
    }
}

/// Categorical polarity of a piece of text.
///
/// Variant order is the display order used in summaries and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collected social post, as handed to the analytics core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub platform: Platform,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: u64,
    /// Sentiment already assigned upstream. Analytics reuses it instead of
    /// classifying the content again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    /// Compound score in `[-1.0, 1.0]` paired with `sentiment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<f64>,
}

impl PostRecord {
    /// A bare post with zero engagement and no precomputed sentiment.
    #[must_use]
    pub fn new(platform: Platform, content: impl Into<String>) -> Self {
        Self {
            post_id: None,
            platform,
            content: content.into(),
            author: None,
            posted_at: None,
            likes: 0,
            shares: 0,
            comments: 0,
            sentiment: None,
            sentiment_score: None,
        }
    }

    /// Likes + shares + comments.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.likes
            .saturating_add(self.shares)
            .saturating_add(self.comments)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PostsFile {
    Bare(Vec<PostRecord>),
    Wrapped { posts: Vec<PostRecord> },
}

impl PostsFile {
    fn into_posts(self) -> Vec<PostRecord> {
        match self {
            PostsFile::Bare(posts) | PostsFile::Wrapped { posts } => posts,
        }
    }
}

/// Load posts from a JSON or YAML file.
///
/// `.yaml`/`.yml` files are parsed as YAML, anything else as JSON. Both a bare
/// list and a `posts:` wrapper object are accepted. Input order is preserved.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or contains a
/// post with an out-of-range `sentiment_score`.
pub fn load_posts(path: &Path) -> Result<Vec<PostRecord>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PostsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parse_err = |reason: String| ConfigError::PostsFileParse {
        path: path.display().to_string(),
        reason,
    };

    let file: PostsFile = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string()))?
    } else {
        serde_json::from_str(&content).map_err(|e| parse_err(e.to_string()))?
    };

    let posts = file.into_posts();
    validate_posts(&posts)?;
    Ok(posts)
}

fn validate_posts(posts: &[PostRecord]) -> Result<(), ConfigError> {
    for (index, post) in posts.iter().enumerate() {
        if let Some(score) = post.sentiment_score {
            if !score.is_finite() || !(-1.0..=1.0).contains(&score) {
                return Err(ConfigError::InvalidPost {
                    index,
                    reason: format!("sentiment_score {score} is outside [-1, 1]"),
                });
            }
        }
    }
    Ok(())
}
