//! Keyword/regex extraction of topical insights and record metadata.

use std::collections::HashSet;

use ixp_core::InsightBundle;
use regex::Regex;

use crate::entities::EntityRecognizer;
use crate::error::PipelineError;
use crate::sentiment::{NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};

const TECHNOLOGY_PATTERN: &str = r"\b(python|java|javascript|typescript|react|angular|vue|node|express|django|flask|spring|hibernate|mysql|postgresql|mongodb|redis|docker|kubernetes|aws|azure|gcp|git|jenkins|jira|zendesk)\b";

/// Difficulty ladder, easy → very hard. All ladder matches are
/// collected as indicators; the scalar difficulty label is decided
/// separately by [`InsightExtractor::difficulty_label`].
const DIFFICULTY_PATTERNS: &[&str] = &[
    r"\b(easy|simple|straightforward|basic|fundamental)\b",
    r"\b(medium|moderate|reasonable|standard|typical)\b",
    r"\b(hard|difficult|challenging|complex|advanced)\b",
    r"\b(very hard|extremely difficult|intense|rigorous)\b",
];

const TIP_PATTERN: &str =
    r"\b(study|practice|prepare|review|learn|read|watch|mock interview|leetcode|hackerrank)\b";

/// Deliberately unanchored: the earliest occurrence in text order wins,
/// whatever its severity.
const DIFFICULTY_LABEL_PATTERN: &str = r"(easy|medium|moderate|hard|difficult|tough)";

/// Verdict keywords in priority order; the longest phrase comes first
/// so `not selected` is never misread as `selected`.
const VERDICT_KEYWORDS: &[(&str, &str)] = &[
    ("not selected", "Rejected"),
    ("selected", "Selected"),
    ("rejected", "Rejected"),
    ("shortlisted", "Shortlisted"),
];

/// Scans narratives for technologies, difficulty signals, preparation
/// tips, red flags, positive aspects, and (when the recognizer is
/// available) company mentions.
pub struct InsightExtractor {
    technologies: Regex,
    difficulty: Vec<Regex>,
    tips: Regex,
    difficulty_label: Regex,
    role: Regex,
}

impl InsightExtractor {
    /// # Errors
    ///
    /// Returns [`PipelineError::Pattern`] if a pattern fails to compile.
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            technologies: Regex::new(TECHNOLOGY_PATTERN)?,
            difficulty: DIFFICULTY_PATTERNS
                .iter()
                .map(|p| Regex::new(p).map_err(PipelineError::from))
                .collect::<Result<_, _>>()?,
            tips: Regex::new(TIP_PATTERN)?,
            difficulty_label: Regex::new(DIFFICULTY_LABEL_PATTERN)?,
            role: Regex::new(r"(?i)for ([A-Za-z0-9()+\- ]+)")?,
        })
    }

    /// Extract every insight kind independently; each list is
    /// deduplicated in first-occurrence order. Entity augmentation is
    /// additive only — with `entities` absent, all other lists are
    /// byte-identical.
    #[must_use]
    pub(crate) fn extract(&self, text: &str, entities: Option<&EntityRecognizer>) -> InsightBundle {
        let lower = text.to_lowercase();

        let collect = |re: &Regex| -> Vec<String> {
            re.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
        };

        let mut difficulty_indicators = Vec::new();
        for re in &self.difficulty {
            difficulty_indicators.extend(collect(re));
        }

        let red_flags = NEGATIVE_KEYWORDS
            .iter()
            .filter(|k| lower.contains(*k))
            .map(|k| (*k).to_string())
            .collect();
        let positive_aspects = POSITIVE_KEYWORDS
            .iter()
            .filter(|k| lower.contains(*k))
            .map(|k| (*k).to_string())
            .collect();

        let companies_mentioned = entities
            .map(|ner| ner.organizations(text))
            .unwrap_or_default();

        InsightBundle {
            technologies: dedup_preserve_order(collect(&self.technologies)),
            difficulty_indicators: dedup_preserve_order(difficulty_indicators),
            preparation_tips: dedup_preserve_order(collect(&self.tips)),
            red_flags: dedup_preserve_order(red_flags),
            positive_aspects: dedup_preserve_order(positive_aspects),
            companies_mentioned: dedup_preserve_order(companies_mentioned),
        }
    }

    /// The scalar difficulty label: first ladder match in text scan
    /// order, mapped to `Easy`/`Medium`/`Hard`.
    #[must_use]
    pub fn difficulty_label(&self, text: &str) -> Option<&'static str> {
        let lower = text.to_lowercase();
        let m = self.difficulty_label.find(&lower)?;
        Some(match m.as_str() {
            "easy" => "Easy",
            "medium" | "moderate" => "Medium",
            _ => "Hard",
        })
    }

    /// The role captured from a `for <role>` clause in the title.
    #[must_use]
    pub fn role_from_title(&self, title: &str) -> Option<String> {
        self.role
            .captures(title)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// First line containing a verdict keyword decides the verdict;
/// `not selected` takes priority over the `selected` substring it
/// contains.
#[must_use]
pub fn extract_verdict(text: &str) -> Option<&'static str> {
    for line in text.lines() {
        let lower = line.to_lowercase();
        for (key, verdict) in VERDICT_KEYWORDS {
            if lower.contains(key) {
                return Some(verdict);
            }
        }
    }
    None
}

/// Company name taken as the title prefix before "Interview Experience".
#[must_use]
pub fn company_from_title(title: &str) -> String {
    title
        .split("Interview Experience")
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Remove duplicates while preserving first-occurrence order.
#[must_use]
pub fn dedup_preserve_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
