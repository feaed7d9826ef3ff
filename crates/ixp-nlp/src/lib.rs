//! Text-analysis pipeline for interview-experience narratives.
//!
//! Turns a free-text narrative into a structured record: extracted
//! questions categorized by domain, a fused sentiment verdict, topical
//! insights, a segmentation into interview rounds with semantically
//! deduplicated questions, and a short list of highlights. Batch mode
//! merges incrementally into previously enriched output, keyed by title.
//!
//! Optional analyzers (compound-polarity lexicon, entity recognizer,
//! sentence embedder, boundary model) are constructed once at startup;
//! any that fail to initialize downgrade a capability flag instead of
//! aborting, and the pipeline produces a deterministic result even with
//! every optional analyzer absent.

pub mod analyzers;
pub mod dedupe;
pub mod embed;
pub mod error;
pub mod highlights;
pub mod insights;
pub mod lexicon;
pub mod pipeline;
pub mod questions;
pub mod rounds;
pub mod segment;
pub mod sentiment;

mod entities;

pub use analyzers::Analyzers;
pub use dedupe::dedupe_semantic;
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use sentiment::analyze_sentiment;
