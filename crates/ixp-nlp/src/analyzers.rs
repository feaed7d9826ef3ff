//! One-time analyzer construction and capability tracking.

use ixp_core::AnalyzerFlags;

use crate::embed::HashEmbedder;
use crate::entities::EntityRecognizer;
use crate::error::PipelineError;
use crate::insights::InsightExtractor;
use crate::lexicon::Lexicon;
use crate::questions::CategoryMatcher;
use crate::rounds::RoundSegmenter;
use crate::segment::SentenceSegmenter;

/// Every analyzer the pipeline consumes, constructed once at startup
/// and held for the process lifetime.
///
/// Required analyzers (classifier, round segmenter, insight extractor)
/// fail construction loudly; optional ones (lexicon, entity recognizer,
/// embedder) log a warning and downgrade their capability flag instead.
/// Every dependent operation branches on presence, never on call-time
/// error handling.
pub struct Analyzers {
    pub segmenter: SentenceSegmenter,
    pub matcher: CategoryMatcher,
    pub rounds: RoundSegmenter,
    pub insights: InsightExtractor,
    pub lexicon: Option<Lexicon>,
    pub(crate) entities: Option<EntityRecognizer>,
    pub embedder: Option<HashEmbedder>,
}

impl Analyzers {
    /// Build the full analyzer set, downgrading optional capabilities
    /// that fail to initialize.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] only if a required analyzer cannot be
    /// constructed.
    pub fn init() -> Result<Self, PipelineError> {
        let segmenter = SentenceSegmenter::new();
        let matcher = CategoryMatcher::new()?;
        let rounds = RoundSegmenter::new()?;
        let insights = InsightExtractor::new()?;

        let lexicon = match Lexicon::load() {
            Ok(lex) => Some(lex),
            Err(e) => {
                tracing::warn!(error = %e, "lexical analyzer unavailable; sentiment degrades to keyword counts");
                None
            }
        };

        let entities = match EntityRecognizer::new() {
            Ok(ner) => Some(ner),
            Err(e) => {
                tracing::warn!(error = %e, "entity recognizer unavailable; insight augmentation disabled");
                None
            }
        };

        let embedder = Some(HashEmbedder::new());

        Ok(Self {
            segmenter,
            matcher,
            rounds,
            insights,
            lexicon,
            entities,
            embedder,
        })
    }

    /// Build a set with every optional analyzer absent. Used to exercise
    /// the degraded path deterministically.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] only if a required analyzer cannot be
    /// constructed.
    pub fn degraded() -> Result<Self, PipelineError> {
        let mut analyzers = Self::init()?;
        analyzers.lexicon = None;
        analyzers.entities = None;
        analyzers.embedder = None;
        Ok(analyzers)
    }

    /// Capability snapshot recorded on every enriched entry.
    #[must_use]
    pub fn flags(&self) -> AnalyzerFlags {
        AnalyzerFlags {
            lexicon: self.lexicon.is_some(),
            entities: self.entities.is_some(),
            embedder: self.embedder.is_some(),
            segmenter_model: self.segmenter.has_model(),
        }
    }
}
