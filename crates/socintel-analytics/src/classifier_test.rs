use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;

struct FixedModel(Vec<LabelScore>);

impl SentimentModel for FixedModel {
    fn predict(&self, _text: &str) -> Result<Vec<LabelScore>, AnalyticsError> {
        Ok(self.0.clone())
    }
}

struct FailingModel;

impl SentimentModel for FailingModel {
    fn predict(&self, _text: &str) -> Result<Vec<LabelScore>, AnalyticsError> {
        Err(AnalyticsError::Model("inference server down".to_string()))
    }
}

/// Records the length of the text it was asked to score.
struct LengthRecorder(Arc<AtomicUsize>);

impl SentimentModel for LengthRecorder {
    fn predict(&self, text: &str) -> Result<Vec<LabelScore>, AnalyticsError> {
        self.0.store(text.chars().count(), Ordering::SeqCst);
        Ok(vec![score("neutral", 0.9)])
    }
}

struct FixedLexicon(f64);

impl PolarityScorer for FixedLexicon {
    fn polarity(&self, _text: &str) -> Result<PolarityScores, AnalyticsError> {
        Ok(PolarityScores {
            compound: self.0,
            positive: 0.0,
            neutral: 1.0,
            negative: 0.0,
        })
    }
}

struct FailingLexicon;

impl PolarityScorer for FailingLexicon {
    fn polarity(&self, _text: &str) -> Result<PolarityScores, AnalyticsError> {
        Err(AnalyticsError::Lexicon("lexicon file corrupt".to_string()))
    }
}

fn score(label: &str, score: f64) -> LabelScore {
    LabelScore {
        label: label.to_string(),
        score,
    }
}

#[test]
fn keyword_fallback_when_no_tiers_configured() {
    let result = SentimentClassifier::keyword_only().classify("I love this amazing product!");
    assert_eq!(result.label, Sentiment::Positive);
    assert!((result.confidence - 0.6).abs() < f64::EPSILON);
    assert_eq!(result.raw_scores.source, SentimentSource::Keywords);
    assert!(result.raw_scores.lexicon.is_none());
    assert!(result.raw_scores.compound().abs() < f64::EPSILON);
}

#[test]
fn blank_text_is_neutral_half_confidence() {
    let classifier = SentimentClassifier::keyword_only()
        .with_model(|| Ok(FixedModel(vec![score("positive", 0.99)])));
    let result = classifier.classify("   ");
    assert_eq!(result.label, Sentiment::Neutral);
    assert!((result.confidence - 0.5).abs() < f64::EPSILON);
    assert_eq!(result.raw_scores.source, SentimentSource::EmptyInput);
}

#[test]
fn model_highest_score_wins() {
    let classifier = SentimentClassifier::keyword_only().with_model(|| {
        Ok(FixedModel(vec![
            score("negative", 0.1),
            score("neutral", 0.2),
            score("positive", 0.7),
        ]))
    });
    let result = classifier.classify("whatever the keywords say: terrible");
    assert_eq!(result.label, Sentiment::Positive);
    assert!((result.confidence - 0.7).abs() < 1e-9);
    assert_eq!(result.raw_scores.source, SentimentSource::Model);
}

#[test]
fn model_accepts_label_ids() {
    let classifier = SentimentClassifier::keyword_only().with_model(|| {
        Ok(FixedModel(vec![
            score("LABEL_0", 0.8),
            score("LABEL_1", 0.15),
            score("LABEL_2", 0.05),
        ]))
    });
    assert_eq!(classifier.classify("meh").label, Sentiment::Negative);
}

#[test]
fn lexicon_still_runs_when_model_decides() {
    let classifier = SentimentClassifier::keyword_only()
        .with_model(|| Ok(FixedModel(vec![score("Neutral", 0.55)])))
        .with_lexicon(|| Ok(FixedLexicon(0.42)));
    let result = classifier.classify("a post");
    assert_eq!(result.label, Sentiment::Neutral);
    assert_eq!(result.raw_scores.source, SentimentSource::Model);
    assert!((result.raw_scores.compound() - 0.42).abs() < 1e-9);
}

#[test]
fn failing_model_falls_through_to_lexicon() {
    let classifier = SentimentClassifier::keyword_only()
        .with_model(|| Ok(FailingModel))
        .with_lexicon(|| Ok(FixedLexicon(-0.3)));
    let result = classifier.classify("a post");
    assert_eq!(result.label, Sentiment::Negative);
    assert!((result.confidence - 0.3).abs() < 1e-9);
    assert_eq!(result.raw_scores.source, SentimentSource::Lexicon);
    assert!(result.raw_scores.model.is_none());
}

#[test]
fn unrecognized_model_label_falls_through() {
    let classifier = SentimentClassifier::keyword_only()
        .with_model(|| Ok(FixedModel(vec![score("joy", 0.9)])))
        .with_lexicon(|| Ok(FixedLexicon(0.01)));
    let result = classifier.classify("a post");
    assert_eq!(result.label, Sentiment::Neutral);
    assert_eq!(result.raw_scores.source, SentimentSource::Lexicon);
    assert!(result.raw_scores.model.is_some());
}

#[test]
fn model_that_fails_to_load_falls_through_to_keywords() {
    let classifier = SentimentClassifier::keyword_only().with_model(|| -> Result<FixedModel, _> {
        Err(AnalyticsError::Model("weights not found".to_string()))
    });
    let result = classifier.classify("this is the worst, I hate it");
    assert_eq!(result.label, Sentiment::Negative);
    assert_eq!(result.raw_scores.source, SentimentSource::Keywords);
}

#[test]
fn failing_lexicon_falls_through_to_keywords() {
    let classifier = SentimentClassifier::keyword_only().with_lexicon(|| Ok(FailingLexicon));
    let result = classifier.classify("great and awesome");
    assert_eq!(result.label, Sentiment::Positive);
    assert_eq!(result.raw_scores.source, SentimentSource::Keywords);
}

#[test]
fn model_input_is_truncated() {
    let seen = Arc::new(AtomicUsize::new(0));
    let recorder = Arc::clone(&seen);
    let classifier = SentimentClassifier::keyword_only()
        .with_max_input_chars(16)
        .with_model(move || Ok(LengthRecorder(Arc::clone(&recorder))));
    let long_text = "é".repeat(100);
    let _ = classifier.classify(&long_text);
    assert_eq!(seen.load(Ordering::SeqCst), 16);
}

#[test]
fn confidence_is_clamped_to_unit_interval() {
    let classifier = SentimentClassifier::keyword_only()
        .with_model(|| Ok(FixedModel(vec![score("positive", 1.7)])));
    let result = classifier.classify("a post");
    assert!((0.0..=1.0).contains(&result.confidence));
}

#[test]
fn vader_tier_from_config_classifies_praise() {
    let config = socintel_core::AppConfig {
        env: socintel_core::Environment::Test,
        log_level: "info".to_string(),
        posts_path: std::path::PathBuf::from("posts.json"),
        tei_url: None,
        inference_timeout_secs: 1,
        lexicon_enabled: true,
        max_input_chars: 512,
        topics_per_post: 5,
        top_topics_limit: 10,
        trend_window: 10,
    };
    let result = SentimentClassifier::from_config(&config).classify("I love this amazing product!");
    assert_eq!(result.label, Sentiment::Positive);
    assert_eq!(result.raw_scores.source, SentimentSource::Lexicon);
    assert!(result.raw_scores.compound() > 0.05);
}

#[test]
fn labels_and_confidence_stay_in_range_for_assorted_text() {
    let classifier = SentimentClassifier::keyword_only().with_lexicon(|| Ok(VaderScorer::new()));
    for text in [
        "",
        "!!!",
        "\u{0}\u{1}binary-ish\u{7f}",
        "🙂🙂🙂",
        "NOT GOOD AT ALL",
        "best day ever",
        "ok",
    ] {
        let result = classifier.classify(text);
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} for {text:?}",
            result.confidence
        );
        assert!(Sentiment::ALL.contains(&result.label));
    }
}

#[test]
fn truncate_chars_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("hi", 10), "hi");
}
