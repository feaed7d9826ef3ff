//! Highlight selection: a bounded, human-readable summary.

use std::collections::HashSet;

/// A sentence must contain one of these to be considered informative.
pub const RELEVANCE_KEYWORDS: &[&str] = &[
    "selected",
    "shortlisted",
    "focused on",
    "asked",
    "interview",
    "round",
    "cleared",
    "explained",
    "project",
    "resume",
    "background",
    "assessment",
];

const MIN_CHARS: usize = 40;
const MIN_WORDS: usize = 5;

/// Pick up to `max_highlights` informative sentences in source order.
///
/// A sentence qualifies if it is at least 40 characters and 5 words
/// after whitespace collapsing, contains a relevance keyword, and is
/// not an exact duplicate of an already-selected sentence. Selection
/// stops as soon as the cap is reached.
#[must_use]
pub fn generate_highlights(sentences: &[String], max_highlights: usize) -> Vec<String> {
    let mut highlights = Vec::new();
    let mut seen = HashSet::new();

    for sentence in sentences {
        if highlights.len() >= max_highlights {
            break;
        }

        let trimmed = sentence.trim();
        if trimmed.chars().count() < MIN_CHARS {
            continue;
        }

        let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.split_whitespace().count() < MIN_WORDS {
            continue;
        }

        let lower = collapsed.to_lowercase();
        if !RELEVANCE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            continue;
        }

        if seen.insert(collapsed.clone()) {
            highlights.push(collapsed);
        }
    }

    highlights
}
