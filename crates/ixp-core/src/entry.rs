//! Record types exchanged between the raw submission feed and the
//! enrichment pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw interview-experience submission as read from the input feed.
///
/// Everything is optional: community submissions arrive with wildly
/// inconsistent field sets. Unknown fields are preserved in `extra` and
/// carried through to the enriched record untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Narrative body of a user submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    /// Narrative body of a scraped entry. `experience` wins if both are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawEntry {
    /// The narrative text to analyze, or `None` if the entry has no
    /// usable body.
    #[must_use]
    pub fn narrative(&self) -> Option<&str> {
        let non_blank = |s: &&str| !s.trim().is_empty();
        self.experience
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.content.as_deref().filter(non_blank))
    }
}

/// Overall polarity verdict for a narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Occurrence counts per polarity vocabulary bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordScores {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl KeywordScores {
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.positive.max(self.negative).max(self.neutral)
    }
}

/// Fused sentiment verdict for one narrative. Computed once, immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Compound polarity in `[-1.0, 1.0]`; `0.0` when the lexical
    /// analyzer did not run.
    pub primary_score: f32,
    pub keyword_scores: KeywordScores,
    /// Scalar in `[0.0, 1.0]`.
    pub confidence: f32,
}

/// Question domain assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Behavioral,
    SystemDesign,
    Coding,
    Other,
}

impl Category {
    /// Canonical iteration order used for classifier tie-breaks.
    /// `Other` is deliberately absent: it is the zero-score fallback.
    pub const CANONICAL: [Category; 4] = [
        Category::Technical,
        Category::Behavioral,
        Category::SystemDesign,
        Category::Coding,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Technical => write!(f, "technical"),
            Category::Behavioral => write!(f, "behavioral"),
            Category::SystemDesign => write!(f, "system_design"),
            Category::Coding => write!(f, "coding"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Extracted questions grouped by classifier category, source order
/// preserved within each bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorizedQuestions {
    pub technical: Vec<String>,
    pub behavioral: Vec<String>,
    pub system_design: Vec<String>,
    pub coding: Vec<String>,
    pub other: Vec<String>,
}

impl CategorizedQuestions {
    pub fn push(&mut self, category: Category, question: String) {
        match category {
            Category::Technical => self.technical.push(question),
            Category::Behavioral => self.behavioral.push(question),
            Category::SystemDesign => self.system_design.push(question),
            Category::Coding => self.coding.push(question),
            Category::Other => self.other.push(question),
        }
    }

    #[must_use]
    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Technical => &self.technical,
            Category::Behavioral => &self.behavioral,
            Category::SystemDesign => &self.system_design,
            Category::Coding => &self.coding,
            Category::Other => &self.other,
        }
    }
}

/// One labeled interview round and the questions attached to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Canonical round label (e.g. `Technical Round`, `HR`).
    #[serde(rename = "type")]
    pub round_type: String,
    /// The header line (or keyword line) that opened this round.
    pub description: String,
    pub questions: Vec<String>,
}

/// Keyword/regex-derived topical insights, each list deduplicated in
/// first-occurrence order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightBundle {
    pub technologies: Vec<String>,
    pub difficulty_indicators: Vec<String>,
    pub preparation_tips: Vec<String>,
    pub red_flags: Vec<String>,
    pub positive_aspects: Vec<String>,
    pub companies_mentioned: Vec<String>,
}

/// Which optional analyzers were active when an entry was processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerFlags {
    /// Lexical compound-polarity analyzer.
    pub lexicon: bool,
    /// Named-entity recognizer used for insight augmentation.
    pub entities: bool,
    /// Sentence embedder backing semantic deduplication.
    pub embedder: bool,
    /// Abbreviation-aware sentence boundary model (vs. punctuation split).
    pub segmenter_model: bool,
}

/// A fully enriched entry. Created once per [`RawEntry`], never mutated
/// afterwards; its `title` must be unique within the output collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    pub role: String,
    pub verdict: String,
    pub difficulty: String,
    pub source: String,
    pub processed_at: DateTime<Utc>,

    pub nlp_processed: bool,
    pub analyzers: AnalyzerFlags,

    pub sentiment: SentimentResult,
    /// Convenience copy of `sentiment.sentiment` for catalog consumers.
    pub feedback_sentiment: Sentiment,
    pub raw_questions: Vec<String>,
    pub question_count: usize,
    pub categorized_questions: CategorizedQuestions,
    pub insights: InsightBundle,
    pub rounds: Vec<RoundRecord>,
    pub highlights: Vec<String>,

    /// Original narrative, preserved verbatim.
    pub experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_prefers_experience_over_content() {
        let entry = RawEntry {
            experience: Some("user story".to_string()),
            content: Some("scraped story".to_string()),
            ..RawEntry::default()
        };
        assert_eq!(entry.narrative(), Some("user story"));
    }

    #[test]
    fn narrative_falls_back_to_content() {
        let entry = RawEntry {
            content: Some("scraped story".to_string()),
            ..RawEntry::default()
        };
        assert_eq!(entry.narrative(), Some("scraped story"));
    }

    #[test]
    fn blank_experience_is_treated_as_absent() {
        let entry = RawEntry {
            experience: Some("   ".to_string()),
            content: Some("scraped story".to_string()),
            ..RawEntry::default()
        };
        assert_eq!(entry.narrative(), Some("scraped story"));
    }

    #[test]
    fn narrative_none_when_both_missing() {
        assert_eq!(RawEntry::default().narrative(), None);
    }

    #[test]
    fn unknown_fields_round_trip_through_extra() {
        let json = r#"{"title":"Acme Interview Experience","preparationTime":"2 weeks"}"#;
        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.title.as_deref(), Some("Acme Interview Experience"));
        assert_eq!(
            entry.extra.get("preparationTime").and_then(Value::as_str),
            Some("2 weeks")
        );

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["preparationTime"], "2 weeks");
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::SystemDesign).unwrap();
        assert_eq!(json, "\"system_design\"");
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
