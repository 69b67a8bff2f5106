//! Extractive summary: the first three sentences.

const SUMMARY_SENTENCES: usize = 3;

/// Summarize `text` by keeping its first three non-empty sentences.
///
/// Sentences end at `.`, `!` or `?`. The result is joined with `". "` and
/// ends with a period; empty input gives an empty string.
#[must_use]
pub fn summarize_text(text: &str) -> String {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|piece| !piece.is_empty())
        .take(SUMMARY_SENTENCES)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let mut summary = sentences.join(". ");
    if !summary.is_empty() && !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_three_sentences() {
        assert_eq!(summarize_text("One. Two! Three? Four."), "One. Two. Three.");
    }

    #[test]
    fn short_text_gets_terminal_period() {
        assert_eq!(summarize_text("just one thought"), "just one thought.");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(summarize_text(""), "");
        assert_eq!(summarize_text("..."), "");
    }

    #[test]
    fn runs_of_punctuation_do_not_consume_sentences() {
        // "Wow!!!" splits into "Wow" plus empty pieces, which must not count.
        assert_eq!(summarize_text("Wow!!! Nice. Again"), "Wow. Nice. Again.");
    }
}
