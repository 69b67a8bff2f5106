//! Last-resort keyword heuristic. Never fails.

use socintel_core::Sentiment;

pub(crate) const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "like",
    "best",
    "awesome",
];

pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "worst",
    "horrible",
    "disappointed",
    "poor",
    "sad",
    "angry",
];

/// Confidence reported when one side wins.
pub(crate) const DECISION_CONFIDENCE: f64 = 0.6;
/// Confidence reported for ties and texts with no keywords.
pub(crate) const TIE_CONFIDENCE: f64 = 0.5;

/// Label `text` by counting which keyword list it matches more of.
///
/// Each keyword counts once no matter how often it appears. Keywords match
/// as lowercase substrings, so inflections like "loved" count as "love".
#[must_use]
pub(crate) fn keyword_sentiment(text: &str) -> (Sentiment, f64) {
    let lower = text.to_lowercase();
    let matches = |list: &[&str]| list.iter().filter(|k| lower.contains(*k)).count();
    let positive = matches(POSITIVE_WORDS);
    let negative = matches(NEGATIVE_WORDS);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => (Sentiment::Positive, DECISION_CONFIDENCE),
        std::cmp::Ordering::Less => (Sentiment::Negative, DECISION_CONFIDENCE),
        std::cmp::Ordering::Equal => (Sentiment::Neutral, TIE_CONFIDENCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn praise_is_positive() {
        assert_eq!(
            keyword_sentiment("I love this amazing product!"),
            (Sentiment::Positive, 0.6)
        );
    }

    #[test]
    fn complaint_is_negative() {
        assert_eq!(
            keyword_sentiment("Awful support, really disappointed."),
            (Sentiment::Negative, 0.6)
        );
    }

    #[test]
    fn tie_is_neutral() {
        assert_eq!(
            keyword_sentiment("good food, bad service"),
            (Sentiment::Neutral, 0.5)
        );
    }

    #[test]
    fn no_keywords_is_neutral() {
        assert_eq!(
            keyword_sentiment("the meeting moved to thursday"),
            (Sentiment::Neutral, 0.5)
        );
    }

    #[test]
    fn inflected_keywords_still_match() {
        assert_eq!(
            keyword_sentiment("We loved the new release"),
            (Sentiment::Positive, 0.6)
        );
        assert_eq!(
            keyword_sentiment("Customers hated the update"),
            (Sentiment::Negative, 0.6)
        );
        assert_eq!(
            keyword_sentiment("#bestever launch, greatness"),
            (Sentiment::Positive, 0.6)
        );
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        // "likely" contains "like"
        assert_eq!(
            keyword_sentiment("likely to ship friday"),
            (Sentiment::Positive, 0.6)
        );
    }

    #[test]
    fn repeated_keyword_counts_once() {
        assert_eq!(
            keyword_sentiment("bad bad bad but great and awesome"),
            (Sentiment::Positive, 0.6)
        );
    }
}
