//! Round segmentation: a single-pass state machine over narrative lines.

use ixp_core::RoundRecord;
use regex::Regex;

use crate::error::PipelineError;
use crate::questions::is_question;

/// Minimum character count for a line to be attached as a question.
const MIN_QUESTION_LEN: usize = 10;

/// Canonical round-name mapping, checked as lowercase substrings in
/// order. More specific keys come before keys they contain.
pub const ROUND_MAPPING: &[(&str, &str)] = &[
    ("technical interview 1", "Technical"),
    ("technical interview 2", "Technical"),
    ("technical round", "Technical Round"),
    ("hr round", "HR"),
    ("managerial round", "Managerial"),
    ("coding round", "Coding"),
    ("group discussion", "Group Discussion"),
    ("gd round", "Group Discussion"),
    ("aptitude round", "Aptitude"),
    ("online assessment", "Online Assessment"),
    ("resume shortlisting", "Resume Shortlisting"),
    ("exploratory round", "Initial Screening"),
];

/// Normalize a header or keyword line to its canonical round label.
/// Unmatched lines are title-cased verbatim.
#[must_use]
pub fn normalize_round_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    for (key, label) in ROUND_MAPPING {
        if lower.contains(key) {
            return (*label).to_string();
        }
    }
    title_case(&lower)
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Walks narrative lines with one mutable state variable — the active
/// round label — and attaches trailing question lines to it.
pub struct RoundSegmenter {
    header: Regex,
}

impl RoundSegmenter {
    /// # Errors
    ///
    /// Returns [`PipelineError::Pattern`] if the header pattern fails
    /// to compile.
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            header: Regex::new(r"(?i)^round\s*\d*[:\-]?\s*")?,
        })
    }

    /// Partition `text` into labeled rounds.
    ///
    /// Per line, in order: a `Round N`-style header or a canonical round
    /// keyword switches the active round (the line itself is not
    /// content); otherwise a question line of at least 10 characters is
    /// appended to the active round. The starting state is `General`,
    /// which only materializes if a question arrives before any header.
    /// Re-entering a label appends to its existing bucket. Question
    /// lists are NOT deduplicated here; that is the deduplicator's job.
    #[must_use]
    pub fn segment_rounds(&self, text: &str) -> Vec<RoundRecord> {
        let mut rounds: Vec<RoundRecord> = Vec::new();
        let mut current = "General".to_string();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if self.header.is_match(line) {
                current = normalize_round_name(line);
                open_round(&mut rounds, &current, line);
                continue;
            }

            let lower = line.to_lowercase();
            if ROUND_MAPPING.iter().any(|(key, _)| lower.contains(key)) {
                current = normalize_round_name(line);
                open_round(&mut rounds, &current, line);
                continue;
            }

            if line.chars().count() >= MIN_QUESTION_LEN && is_question(line) {
                open_round(&mut rounds, &current, "");
                if let Some(round) = rounds.iter_mut().find(|r| r.round_type == current) {
                    round.questions.push(line.to_string());
                }
            }
        }

        rounds
    }
}

/// Create the bucket for `label` if it does not exist yet. The first
/// opening line becomes the round description.
fn open_round(rounds: &mut Vec<RoundRecord>, label: &str, line: &str) {
    if !rounds.iter().any(|r| r.round_type == label) {
        rounds.push(RoundRecord {
            round_type: label.to_string(),
            description: line.to_string(),
            questions: Vec::new(),
        });
    }
}
