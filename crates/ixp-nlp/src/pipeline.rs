//! Pipeline orchestration: per-record enrichment, batch processing,
//! and the idempotent incremental merge.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;
use ixp_core::{EnrichedEntry, PipelineConfig, RawEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::analyzers::Analyzers;
use crate::dedupe::dedupe_semantic;
use crate::error::PipelineError;
use crate::highlights::generate_highlights;
use crate::insights::{company_from_title, extract_verdict};
use crate::questions::extract_questions;
use crate::sentiment::analyze_sentiment;

/// Single-threaded enrichment pipeline. Holds the analyzer set for its
/// lifetime; each entry is fully enriched before the next begins.
pub struct Pipeline {
    analyzers: Analyzers,
    config: PipelineConfig,
}

impl Pipeline {
    /// Build a pipeline with a freshly initialized analyzer set.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if a required analyzer cannot be
    /// constructed.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            analyzers: Analyzers::init()?,
            config,
        })
    }

    /// Build a pipeline around an externally constructed analyzer set.
    #[must_use]
    pub fn with_analyzers(config: PipelineConfig, analyzers: Analyzers) -> Self {
        Self { analyzers, config }
    }

    /// Enrich one raw entry. Returns `None` — a logged skip, not a
    /// failure — when the entry has no narrative text.
    #[must_use]
    pub fn process_entry(&self, raw: &RawEntry) -> Option<EnrichedEntry> {
        let Some(text) = raw.narrative() else {
            tracing::warn!(
                id = raw.id.as_deref().unwrap_or("unknown"),
                "skipping entry with no narrative text"
            );
            return None;
        };

        tracing::info!(
            id = raw.id.as_deref().unwrap_or("unknown"),
            chars = text.len(),
            "processing entry"
        );

        let sentences = self.analyzers.segmenter.segment(text);
        let raw_questions = extract_questions(&sentences);
        let categorized_questions = self.analyzers.matcher.categorize(&raw_questions);

        let sentiment = analyze_sentiment(text, self.analyzers.lexicon.as_ref());
        let insights = self
            .analyzers
            .insights
            .extract(text, self.analyzers.entities.as_ref());

        let mut rounds = self.analyzers.rounds.segment_rounds(text);
        for round in &mut rounds {
            round.questions = dedupe_semantic(
                &round.questions,
                self.analyzers.embedder.as_ref(),
                self.config.dedupe_threshold,
            );
        }
        let question_count = rounds.iter().map(|r| r.questions.len()).sum();

        let highlights = generate_highlights(&sentences, self.config.max_highlights);

        let title = raw.title.clone().unwrap_or_else(|| {
            format!(
                "Interview at {}",
                raw.company.as_deref().unwrap_or("Unknown Company")
            )
        });
        let id = raw
            .id
            .clone()
            .unwrap_or_else(|| format!("exp_{}", Utc::now().format("%Y%m%d_%H%M%S")));

        let non_blank = |s: &String| !s.trim().is_empty();
        let company = raw
            .company
            .clone()
            .filter(non_blank)
            .unwrap_or_else(|| company_from_title(&title));
        let role = raw
            .role
            .clone()
            .filter(non_blank)
            .or_else(|| self.analyzers.insights.role_from_title(&title))
            .unwrap_or_default();
        let verdict = raw
            .verdict
            .clone()
            .filter(non_blank)
            .or_else(|| extract_verdict(text).map(str::to_string))
            .unwrap_or_default();
        let difficulty = raw
            .difficulty
            .clone()
            .filter(non_blank)
            .or_else(|| {
                self.analyzers
                    .insights
                    .difficulty_label(text)
                    .map(str::to_string)
            })
            .unwrap_or_default();

        let feedback_sentiment = sentiment.sentiment;

        Some(EnrichedEntry {
            id,
            title,
            company,
            role,
            verdict,
            difficulty,
            source: "User Submission".to_string(),
            processed_at: Utc::now(),
            nlp_processed: true,
            analyzers: self.analyzers.flags(),
            sentiment,
            feedback_sentiment,
            raw_questions,
            question_count,
            categorized_questions,
            insights,
            rounds,
            highlights,
            experience: text.to_string(),
            tags: raw.tags.clone(),
            extra: raw.extra.clone(),
        })
    }

    /// Enrich every entry in `input` and write the result to `output`.
    ///
    /// Entries that cannot be enriched (no narrative) are dropped with
    /// a log line; the rest of the batch continues. Returns the number
    /// of records written.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InputNotFound`] if `input` does not
    /// exist (no partial output is written), or an `Io`/`Json` error on
    /// read/write failure.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<usize, PipelineError> {
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input.to_path_buf()));
        }

        let entries: Vec<RawEntry> = read_json(input)?;
        tracing::info!(count = entries.len(), input = %input.display(), "loaded raw entries");

        let mut processed = Vec::new();
        for entry in &entries {
            if let Some(enriched) = self.process_entry(entry) {
                processed.push(enriched);
            }
        }

        write_json(output, &processed)?;
        tracing::info!(
            count = processed.len(),
            output = %output.display(),
            "wrote enriched entries"
        );
        Ok(processed.len())
    }

    /// Incremental batch merge: enrich only entries whose title is not
    /// already present in the prior output, then append and write back.
    ///
    /// Re-running on unchanged input appends nothing — the merge is
    /// idempotent. Entries without a title cannot be merged stably and
    /// are skipped with a warning. Returns the number of newly appended
    /// records.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InputNotFound`] if `input` does not
    /// exist, or an `Io`/`Json` error on read/write failure.
    pub fn enrich_incremental(&self, input: &Path, output: &Path) -> Result<usize, PipelineError> {
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input.to_path_buf()));
        }

        let raw_entries: Vec<RawEntry> = read_json(input)?;
        let mut merged: Vec<EnrichedEntry> = if output.exists() {
            read_json(output)?
        } else {
            Vec::new()
        };

        let mut known_titles: HashSet<String> =
            merged.iter().map(|e| e.title.clone()).collect();

        let mut appended = 0;
        for entry in &raw_entries {
            let Some(title) = entry.title.as_deref() else {
                tracing::warn!("skipping untitled entry; batch identity is the title");
                continue;
            };
            if known_titles.contains(title) {
                continue;
            }
            if let Some(enriched) = self.process_entry(entry) {
                known_titles.insert(enriched.title.clone());
                merged.push(enriched);
                appended += 1;
            }
        }

        write_json(output, &merged)?;
        tracing::info!(
            appended,
            total = merged.len(),
            output = %output.display(),
            "merged enriched entries"
        );
        Ok(appended)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PipelineError> {
    let content = fs::read_to_string(path).map_err(|e| PipelineError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| PipelineError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Pretty-printed UTF-8 JSON; non-ASCII characters are preserved as-is.
/// The parent directory is created on demand.
fn write_json<T: Serialize>(path: &Path, items: &[T]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(items).map_err(|e| PipelineError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, json).map_err(|e| PipelineError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
