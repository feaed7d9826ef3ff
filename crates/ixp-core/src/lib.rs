//! Shared data model and configuration for the IXP enrichment pipeline.

use thiserror::Error;

pub mod config;
pub mod entry;

pub use config::{load_config, load_config_from_env, PipelineConfig};
pub use entry::{
    AnalyzerFlags, CategorizedQuestions, Category, EnrichedEntry, InsightBundle, KeywordScores,
    RawEntry, RoundRecord, Sentiment, SentimentResult,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
