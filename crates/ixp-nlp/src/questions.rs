//! Question extraction and multi-signal category classification.

use ixp_core::{CategorizedQuestions, Category};
use regex::Regex;

use crate::error::PipelineError;

/// Interrogative cue words; a sentence containing any of them (or
/// ending with `?`) is a candidate question.
pub const CUE_WORDS: &[&str] = &[
    "asked", "question", "what", "how", "why", "when", "where", "which", "who", "explain",
    "describe", "tell me",
];

/// Pattern groups per category. Scores are summed across a category's
/// groups; all matching happens against lowercased text.
const TECHNICAL_PATTERNS: &[&str] = &[
    r"\b(algorithm|data structure|complexity|optimization|performance|database|api|framework|library|testing|deployment|architecture|design pattern|microservices|distributed|concurrency|threading|memory|network|protocol|security|authentication|encryption|caching|monitoring|logging)\b",
    r"\b(implement|code|write|solve|optimize|design|build|create|develop|function|class|method|loop|recursion|sorting|searching|graph|tree|array|stack|queue|heap|hash table|binary search|dynamic programming)\b",
    r"\b(dns|dhcp|tcp|ip|http|https|ssl|tls|rest|graphql|json|xml|sql|nosql|mysql|postgresql|mongodb|redis|elasticsearch|docker|kubernetes|aws|azure|gcp|linux|windows|bash|shell|git|ci/cd)\b",
];

const BEHAVIORAL_PATTERNS: &[&str] = &[
    r"\b(experience|project|team|leadership|conflict|challenge|problem|solution|collaboration|communication|feedback|mentor|growth|learning|improvement|goal|achievement|failure|success|stress|pressure|deadline|priority|decision|difficult customer|customer service)\b",
    r"\b(tell me about|describe|explain|how did you|what would you|situation|example|instance|time when|handled|managed|resolved|overcame|learned|grew|developed|improved|stay calm|prioritize|communication skills)\b",
];

const SYSTEM_DESIGN_PATTERNS: &[&str] = &[
    r"\b(system|architecture|design|scale|scalability|performance|throughput|latency|availability|reliability|fault tolerance|redundancy|load balancing|caching|database|storage|distributed|microservices|api|message queue|real-time|batch processing)\b",
    r"\b(design a|build a|create a|architect|scale to|handle|support|serve|process|store|retrieve|search|recommend|notify|authenticate|monitor|deploy|containerize|manage|operate|maintain|backup|recovery)\b",
];

const CODING_PATTERNS: &[&str] = &[
    r"\b(code|program|implement|write|solve|algorithm|data structure|complexity|time complexity|space complexity|optimization|efficiency|correctness|edge case|test case|debug|fix|refactor|clean code)\b",
    r"\b(leetcode|hackerrank|codility|competitive programming|interview question|coding challenge|whiteboard|pair programming|code review|version control|git|branch|commit)\b",
];

/// True if `sentence` qualifies as a candidate question: ends with `?`
/// or contains an interrogative cue word (case-insensitive substring).
#[must_use]
pub fn is_question(sentence: &str) -> bool {
    let trimmed = sentence.trim();
    if trimmed.ends_with('?') {
        return true;
    }
    let lower = trimmed.to_lowercase();
    CUE_WORDS.iter().any(|cue| lower.contains(cue))
}

/// Collect candidate questions from segmented sentences, in order. No
/// candidate is dropped for length.
#[must_use]
pub fn extract_questions(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .map(|s| s.trim())
        .filter(|s| is_question(s))
        .map(str::to_string)
        .collect()
}

/// Scores candidate questions against category-defining pattern sets.
///
/// Classification is greedy and per-question: the strictly
/// highest-scoring category wins, ties go to the earliest category in
/// canonical order, and an all-zero candidate lands in `other`.
pub struct CategoryMatcher {
    groups: Vec<(Category, Vec<Regex>)>,
}

impl CategoryMatcher {
    /// Compile the static pattern sets.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Pattern`] if a pattern fails to compile.
    pub fn new() -> Result<Self, PipelineError> {
        let compile = |patterns: &[&str]| -> Result<Vec<Regex>, PipelineError> {
            patterns
                .iter()
                .map(|p| Regex::new(p).map_err(PipelineError::from))
                .collect()
        };

        // Kept in canonical order: score ties resolve to the first entry.
        let groups = vec![
            (Category::Technical, compile(TECHNICAL_PATTERNS)?),
            (Category::Behavioral, compile(BEHAVIORAL_PATTERNS)?),
            (Category::SystemDesign, compile(SYSTEM_DESIGN_PATTERNS)?),
            (Category::Coding, compile(CODING_PATTERNS)?),
        ];
        debug_assert_eq!(
            groups.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
            Category::CANONICAL
        );

        Ok(Self { groups })
    }

    /// Assign the best-scoring category for one question.
    #[must_use]
    pub fn classify(&self, question: &str) -> Category {
        let lower = question.to_lowercase();
        let mut best = Category::Other;
        let mut max_score = 0;

        for (category, patterns) in &self.groups {
            let score: usize = patterns.iter().map(|p| p.find_iter(&lower).count()).sum();
            if score > max_score {
                max_score = score;
                best = *category;
            }
        }

        best
    }

    /// Classify every question independently, preserving input order
    /// within each bucket.
    #[must_use]
    pub fn categorize(&self, questions: &[String]) -> CategorizedQuestions {
        let mut categorized = CategorizedQuestions::default();
        for question in questions {
            categorized.push(self.classify(question), question.clone());
        }
        categorized
    }
}
