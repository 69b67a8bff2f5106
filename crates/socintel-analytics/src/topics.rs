//! Keyword topic extraction by stop-word-filtered frequency.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

pub(crate) const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her",
];

/// Tokens shorter than this are never topics.
const MIN_TOPIC_LEN: usize = 4;

fn is_topic_token(token: &str) -> bool {
    token.chars().count() >= MIN_TOPIC_LEN
        && token.chars().all(char::is_alphanumeric)
        && !STOP_WORDS.contains(&token)
}

/// Count candidate topics in `text`, in first-occurrence order.
pub(crate) fn topic_counts(text: &str) -> Vec<(String, usize)> {
    let lower = text.to_lowercase();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in WORD_RE.find_iter(&lower).map(|m| m.as_str()) {
        if !is_topic_token(token) {
            continue;
        }
        if let Some(&i) = index.get(token) {
            counts[i].1 += 1;
        } else {
            index.insert(token, counts.len());
            counts.push((token.to_string(), 1));
        }
    }

    counts
}

/// Rank `(item, count)` pairs by descending count. The sort is stable, so
/// equal counts keep their incoming (first-seen) order.
pub(crate) fn rank_by_frequency<T>(items: &mut [(T, usize)]) {
    items.sort_by_key(|item| std::cmp::Reverse(item.1));
}

/// Extract up to `max_topics` keyword topics from `text`.
///
/// Tokens are lower-cased word-boundary matches longer than three
/// characters that are not stop words, ranked by frequency with ties broken
/// by first occurrence.
#[must_use]
pub fn extract_topics(text: &str, max_topics: usize) -> Vec<String> {
    let mut counts = topic_counts(text);
    rank_by_frequency(&mut counts);
    counts
        .into_iter()
        .take(max_topics)
        .map(|(topic, _)| topic)
        .collect()
}
