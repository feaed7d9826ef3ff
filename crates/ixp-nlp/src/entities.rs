//! Lightweight named-entity recognition for insight augmentation.

use regex::Regex;

use crate::error::PipelineError;

/// Detects organization mentions as capitalized spans ending in a
/// corporate suffix. Optional capability; its output only ever adds to
/// the insight bundle.
pub(crate) struct EntityRecognizer {
    org: Regex,
}

impl EntityRecognizer {
    pub(crate) fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            org: Regex::new(
                r"\b([A-Z][A-Za-z0-9&]*(?:\s+[A-Z][A-Za-z0-9&]*)*\s+(?:Inc|Ltd|LLC|Corp|Labs|Technologies|Systems|Solutions|Software))\b",
            )?,
        })
    }

    /// Organization mentions in source order, duplicates included (the
    /// insight extractor dedups).
    pub(crate) fn organizations(&self, text: &str) -> Vec<String> {
        self.org
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_suffixed_organizations() {
        let ner = EntityRecognizer::new().unwrap();
        let orgs = ner.organizations("I interviewed at Acme Labs and later joined Initech Software.");
        assert_eq!(orgs, vec!["Acme Labs", "Initech Software"]);
    }

    #[test]
    fn ignores_plain_capitalized_words() {
        let ner = EntityRecognizer::new().unwrap();
        assert!(ner.organizations("Monday morning I met the panel.").is_empty());
    }
}
