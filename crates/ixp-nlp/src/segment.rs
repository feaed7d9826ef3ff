//! Sentence segmentation with graceful degradation.

use regex::Regex;

/// Tokens that end with a period without ending a sentence. Compared
/// against the lowercased word preceding a punctuation run.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "vs", "etc", "eg", "ie", "e.g", "i.e", "st",
    "no", "approx",
];

/// Punctuation run that may terminate a sentence.
const BOUNDARY_PATTERN: &str = r"[.!?]+";

/// Splits narrative text into sentence-like units, preserving source
/// order.
///
/// The primary strategy honors abbreviations and requires a
/// capitalized/numeric continuation after the boundary. If the boundary
/// pattern fails to compile the segmenter degrades to splitting on
/// terminal punctuation runs; the degradation is logged, never raised.
pub struct SentenceSegmenter {
    boundary: Option<Regex>,
}

impl SentenceSegmenter {
    #[must_use]
    pub fn new() -> Self {
        match Regex::new(BOUNDARY_PATTERN) {
            Ok(re) => Self { boundary: Some(re) },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "sentence boundary model unavailable; using punctuation splitting"
                );
                Self { boundary: None }
            }
        }
    }

    /// Whether the primary boundary model is active.
    #[must_use]
    pub fn has_model(&self) -> bool {
        self.boundary.is_some()
    }

    /// Split `text` into trimmed, non-empty sentences in source order.
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<String> {
        match &self.boundary {
            Some(re) => segment_with_model(re, text),
            None => segment_by_punctuation(text),
        }
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn segment_with_model(boundary: &Regex, text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in boundary.find_iter(text) {
        if !is_sentence_break(text, m.start(), m.end()) {
            continue;
        }
        let span = text[start..m.end()].trim();
        if !span.is_empty() {
            sentences.push(span.to_string());
        }
        start = m.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// A punctuation run at `[run_start, run_end)` ends a sentence when it
/// is followed by whitespace and an upper-case or numeric continuation
/// (or end of text), and the preceding word is not an abbreviation or a
/// single-letter initial.
fn is_sentence_break(text: &str, run_start: usize, run_end: usize) -> bool {
    let after = &text[run_end..];
    match after.chars().next() {
        // End of text always closes the final sentence.
        None => return true,
        Some(c) if !c.is_whitespace() => return false,
        Some(_) => {}
    }
    if let Some(next) = after.chars().find(|c| !c.is_whitespace()) {
        if !(next.is_uppercase() || next.is_ascii_digit() || next == '"' || next == '\'') {
            return false;
        }
    }

    let before = &text[..run_start];
    let word: String = before
        .chars()
        .rev()
        .take_while(|c| c.is_alphabetic() || *c == '.')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let word = word.trim_matches('.').to_lowercase();
    if word.chars().count() == 1 {
        return false;
    }
    !ABBREVIATIONS.contains(&word.as_str())
}

/// Fallback strategy: split on terminal punctuation characters, trim,
/// and discard empty spans.
fn segment_by_punctuation(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degraded() -> SentenceSegmenter {
        SentenceSegmenter { boundary: None }
    }

    #[test]
    fn splits_simple_narrative() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("They asked me questions. It went well. I was selected!");
        assert_eq!(
            out,
            vec![
                "They asked me questions.",
                "It went well.",
                "I was selected!"
            ]
        );
    }

    #[test]
    fn keeps_abbreviations_together() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("I spoke with Dr. Rao about the role. He was helpful.");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "I spoke with Dr. Rao about the role.");
    }

    #[test]
    fn does_not_split_decimal_numbers() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("My CGPA is 8.5 and I cleared the round.");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn fallback_splits_on_punctuation_runs() {
        let out = degraded().segment("What is DNS?? Tell me more... done");
        assert_eq!(out, vec!["What is DNS", "Tell me more", "done"]);
    }

    #[test]
    fn both_strategies_preserve_order() {
        let text = "First round was coding. Second round was HR. Third was easy.";
        let primary = SentenceSegmenter::new().segment(text);
        let fallback = degraded().segment(text);
        assert_eq!(primary.len(), 3);
        assert_eq!(fallback.len(), 3);
        for (p, f) in primary.iter().zip(&fallback) {
            assert!(p.starts_with(f.as_str()));
        }
    }

    #[test]
    fn empty_text_yields_no_sentences() {
        assert!(SentenceSegmenter::new().segment("").is_empty());
        assert!(degraded().segment("   ").is_empty());
    }
}
