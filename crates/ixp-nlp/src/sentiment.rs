//! Sentiment fusion: optional compound-polarity analyzer combined with
//! an always-available keyword-count estimator.

use ixp_core::{KeywordScores, Sentiment, SentimentResult};

use crate::lexicon::Lexicon;

/// Compound score at or above which the lexical analyzer decides
/// `positive` on its own (mirrored negatively for `negative`).
const COMPOUND_THRESHOLD: f32 = 0.05;

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "excellent",
    "great",
    "good",
    "amazing",
    "wonderful",
    "fantastic",
    "smooth",
    "easy",
    "helpful",
    "supportive",
    "professional",
    "organized",
    "clear",
    "fair",
    "selected",
    "offered",
    "positive",
    "successful",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "difficult",
    "hard",
    "stressful",
    "unclear",
    "confusing",
    "disorganized",
    "unprofessional",
    "rude",
    "unhelpful",
    "negative",
    "rejected",
    "failed",
    "disappointing",
    "frustrating",
    "terrible",
    "awful",
    "bad",
    "poor",
];

pub const NEUTRAL_KEYWORDS: &[&str] = &[
    "okay",
    "fine",
    "average",
    "standard",
    "normal",
    "typical",
    "expected",
    "reasonable",
    "fair",
    "balanced",
    "mixed",
];

/// Count case-insensitive substring occurrences of each polarity
/// vocabulary across the full text.
#[must_use]
pub fn keyword_scores(text: &str) -> KeywordScores {
    let lower = text.to_lowercase();
    let count = |words: &[&str]| -> usize {
        words.iter().map(|w| lower.matches(w).count()).sum()
    };
    KeywordScores {
        positive: count(POSITIVE_KEYWORDS),
        negative: count(NEGATIVE_KEYWORDS),
        neutral: count(NEUTRAL_KEYWORDS),
    }
}

/// Fuse the optional compound analyzer with keyword counts.
///
/// Decision ladder, in priority order: a decisive compound score
/// (|compound| >= 0.05) wins outright; otherwise keyword counts are
/// compared, including when the analyzer ran but landed in the
/// (-0.05, +0.05) dead band. Confidence is `|compound|` whenever the
/// analyzer ran, else the dominant keyword bucket's share of all
/// matches, with a 0.5 floor when nothing matched at all.
///
/// Always returns a well-formed result, even with `lexicon` absent.
#[must_use]
pub fn analyze_sentiment(text: &str, lexicon: Option<&Lexicon>) -> SentimentResult {
    let keyword = keyword_scores(text);
    let compound = lexicon.map(|lex| lex.compound(text));

    let sentiment = match compound {
        Some(c) if c >= COMPOUND_THRESHOLD => Sentiment::Positive,
        Some(c) if c <= -COMPOUND_THRESHOLD => Sentiment::Negative,
        _ => {
            if keyword.positive > keyword.negative {
                Sentiment::Positive
            } else if keyword.negative > keyword.positive {
                Sentiment::Negative
            } else {
                Sentiment::Neutral
            }
        }
    };

    let confidence = match compound {
        Some(c) => c.abs(),
        None => {
            let total = keyword.total();
            if total > 0 {
                #[allow(clippy::cast_precision_loss)]
                let share = keyword.max() as f32 / total as f32;
                share
            } else {
                0.5
            }
        }
    };

    SentimentResult {
        sentiment,
        primary_score: compound.unwrap_or(0.0),
        keyword_scores: keyword,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::load().unwrap()
    }

    #[test]
    fn decisive_positive_compound_wins() {
        let result = analyze_sentiment(
            "Overall it was a great experience.",
            Some(&lexicon()),
        );
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.primary_score >= COMPOUND_THRESHOLD);
        assert!((result.confidence - result.primary_score.abs()).abs() < f32::EPSILON);
    }

    #[test]
    fn decisive_negative_compound_wins() {
        let result = analyze_sentiment(
            "The panel was rude and the whole day felt stressful and disorganized.",
            Some(&lexicon()),
        );
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn dead_band_falls_through_to_keywords() {
        // No lexicon word appears, so the compound score sits at 0.0 —
        // inside the (-0.05, +0.05) dead band. The verdict then comes
        // from keyword counts ("fair" is positive vocabulary), exactly
        // as if the analyzer had been absent. The analyzer still owns
        // the confidence, which is |0.0|.
        let result = analyze_sentiment("The interviewers were fair throughout.", Some(&lexicon()));
        assert!(result.primary_score.abs() < COMPOUND_THRESHOLD);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn degraded_mode_uses_keyword_counts() {
        let result = analyze_sentiment("The rounds were difficult and the feedback was bad.", None);
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.primary_score, 0.0);
        assert!(result.keyword_scores.negative > result.keyword_scores.positive);
    }

    #[test]
    fn degraded_mode_always_well_formed() {
        for text in ["", "plain words only", "great but terrible", "okay fine"] {
            let result = analyze_sentiment(text, None);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence out of range for {text:?}: {}",
                result.confidence
            );
            assert!(matches!(
                result.sentiment,
                Sentiment::Positive | Sentiment::Negative | Sentiment::Neutral
            ));
        }
    }

    #[test]
    fn keyword_tie_is_neutral() {
        let result = analyze_sentiment("It was great but also bad.", None);
        assert_eq!(result.keyword_scores.positive, result.keyword_scores.negative);
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn zero_matches_floor_confidence_at_half() {
        let result = analyze_sentiment("the recruiter emailed me twice", None);
        assert_eq!(result.keyword_scores.total(), 0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!((result.confidence - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn keyword_matching_is_substring_based() {
        // "difficult" counts inside "difficulty"; preserved behavior.
        let scores = keyword_scores("The difficulty level was unclear.");
        assert_eq!(scores.negative, 2);
    }

    #[test]
    fn same_text_same_result() {
        let lex = lexicon();
        let text = "Technical round was smooth, I was selected.";
        let a = analyze_sentiment(text, Some(&lex));
        let b = analyze_sentiment(text, Some(&lex));
        assert_eq!(a.sentiment, b.sentiment);
        assert_eq!(a.keyword_scores, b.keyword_scores);
        assert!((a.confidence - b.confidence).abs() < f32::EPSILON);
    }
}
