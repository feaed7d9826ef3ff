//! Weighted word lexicon producing a compound polarity score.

use crate::error::PipelineError;

/// Interview-experience word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The compound score is clamped to
/// `[-1.0, 1.0]`.
const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("excellent", 0.5),
    ("great", 0.4),
    ("good", 0.3),
    ("amazing", 0.5),
    ("wonderful", 0.5),
    ("fantastic", 0.5),
    ("smooth", 0.3),
    ("helpful", 0.4),
    ("supportive", 0.4),
    ("professional", 0.3),
    ("organized", 0.3),
    ("friendly", 0.4),
    ("selected", 0.5),
    ("offered", 0.4),
    ("offer", 0.4),
    ("positive", 0.4),
    ("successful", 0.4),
    ("cleared", 0.4),
    ("enjoyed", 0.4),
    ("impressed", 0.4),
    // Negative signals
    ("stressful", -0.5),
    ("unclear", -0.4),
    ("confusing", -0.4),
    ("disorganized", -0.5),
    ("unprofessional", -0.6),
    ("rude", -0.6),
    ("unhelpful", -0.5),
    ("negative", -0.4),
    ("rejected", -0.5),
    ("failed", -0.4),
    ("failure", -0.4),
    ("disappointing", -0.5),
    ("frustrating", -0.5),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("bad", -0.4),
    ("poor", -0.4),
    ("horrible", -0.6),
    ("waste", -0.5),
];

/// Compound-polarity analyzer backed by the embedded lexicon.
///
/// Optional capability: [`Lexicon::load`] validates the table once at
/// startup and the pipeline runs without it if validation fails.
pub struct Lexicon {
    entries: &'static [(&'static str, f32)],
}

impl Lexicon {
    /// Validate and load the embedded lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Lexicon`] if the table is empty or a
    /// weight falls outside `[-1.0, 1.0]`.
    pub fn load() -> Result<Self, PipelineError> {
        if LEXICON.is_empty() {
            return Err(PipelineError::Lexicon("lexicon table is empty".into()));
        }
        for &(word, weight) in LEXICON {
            if !(-1.0..=1.0).contains(&weight) {
                return Err(PipelineError::Lexicon(format!(
                    "weight {weight} for '{word}' is outside [-1.0, 1.0]"
                )));
            }
        }
        Ok(Self { entries: LEXICON })
    }

    /// Compound polarity of `text` in `[-1.0, 1.0]`.
    ///
    /// Splits text into lowercase words (non-alphabetic edges trimmed),
    /// sums matching weights, and clamps the result. Returns `0.0` for
    /// empty or unknown text.
    #[must_use]
    pub fn compound(&self, text: &str) -> f32 {
        let mut score = 0.0_f32;
        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            for &(lex_word, weight) in self.entries {
                if w == lex_word {
                    score += weight;
                    break;
                }
            }
        }
        score.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_accepts_embedded_table() {
        assert!(Lexicon::load().is_ok());
    }

    #[test]
    fn empty_string_scores_zero() {
        assert_eq!(Lexicon::load().unwrap().compound(""), 0.0);
    }

    #[test]
    fn unknown_text_scores_zero() {
        let lex = Lexicon::load().unwrap();
        assert_eq!(lex.compound("the recruiter called me on monday"), 0.0);
    }

    #[test]
    fn positive_word_scores_positive() {
        let lex = Lexicon::load().unwrap();
        let score = lex.compound("overall it was a great experience");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_word_scores_negative() {
        let lex = Lexicon::load().unwrap();
        let score = lex.compound("the process was stressful and disorganized");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn suffixed_forms_do_not_match() {
        // Whole-word matching: "difficulty" must not match any entry.
        let lex = Lexicon::load().unwrap();
        assert_eq!(lex.compound("a medium difficulty round"), 0.0);
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let lex = Lexicon::load().unwrap();
        let text = "excellent great amazing wonderful fantastic selected";
        assert_eq!(lex.compound(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let lex = Lexicon::load().unwrap();
        let text = "terrible awful horrible rude unprofessional rejected";
        assert_eq!(lex.compound(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let lex = Lexicon::load().unwrap();
        assert!(lex.compound("great!") > 0.0);
    }
}
