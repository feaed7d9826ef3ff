//! Semantic deduplication of near-identical questions.

use std::collections::HashSet;

use crate::embed::{cosine_similarity, HashEmbedder};

/// Remove near-duplicates, keeping the first-seen representative of
/// each cluster.
///
/// Single greedy pass over a positional `used` arena: each unused
/// question becomes a representative and marks every later unused
/// question whose cosine similarity exceeds `threshold`. Marked
/// questions are transitively skipped, never re-compared — two
/// questions can land in separate clusters even though both sit above
/// threshold relative to a third. That order-dependent behavior is
/// load-bearing for reproducibility; do not replace it with exhaustive
/// clustering.
///
/// Without an embedder this degrades to exact-match deduplication.
#[must_use]
pub fn dedupe_semantic(
    questions: &[String],
    embedder: Option<&HashEmbedder>,
    threshold: f32,
) -> Vec<String> {
    if questions.len() <= 1 {
        return questions.to_vec();
    }

    let Some(embedder) = embedder else {
        return dedupe_exact(questions);
    };

    let embeddings = embedder.embed_all(questions);
    let mut used = vec![false; questions.len()];
    let mut deduped = Vec::new();

    for i in 0..questions.len() {
        if used[i] {
            continue;
        }
        deduped.push(questions[i].clone());
        for j in (i + 1)..questions.len() {
            if !used[j] && cosine_similarity(&embeddings[i], &embeddings[j]) > threshold {
                used[j] = true;
            }
        }
    }

    deduped
}

fn dedupe_exact(questions: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    questions
        .iter()
        .filter(|q| seen.insert(q.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.8;

    fn embedder() -> HashEmbedder {
        HashEmbedder::new()
    }

    fn qs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn near_duplicates_collapse_to_first_seen() {
        let questions = qs(&[
            "What is a hash table?",
            "Explain what a hash table is.",
            "How do you handle deadlines under pressure?",
        ]);
        let deduped = dedupe_semantic(&questions, Some(&embedder()), THRESHOLD);
        assert_eq!(
            deduped,
            qs(&[
                "What is a hash table?",
                "How do you handle deadlines under pressure?"
            ])
        );
    }

    #[test]
    fn dedupe_is_idempotent() {
        let questions = qs(&[
            "What is a hash table?",
            "Explain what a hash table is.",
            "What is a hash table?",
            "Why did you leave your last job?",
        ]);
        let once = dedupe_semantic(&questions, Some(&embedder()), THRESHOLD);
        let twice = dedupe_semantic(&once, Some(&embedder()), THRESHOLD);
        assert_eq!(once, twice);
    }

    #[test]
    fn unrelated_questions_all_survive() {
        let questions = qs(&[
            "What is a hash table?",
            "Why do you want this role?",
            "Describe your biggest failure.",
        ]);
        let deduped = dedupe_semantic(&questions, Some(&embedder()), THRESHOLD);
        assert_eq!(deduped, questions);
    }

    #[test]
    fn exact_fallback_without_embedder() {
        let questions = qs(&[
            "What is a hash table?",
            "Explain what a hash table is.",
            "What is a hash table?",
        ]);
        let deduped = dedupe_semantic(&questions, None, THRESHOLD);
        // Exact matching only: the paraphrase survives.
        assert_eq!(
            deduped,
            qs(&["What is a hash table?", "Explain what a hash table is."])
        );
    }

    #[test]
    fn empty_and_singleton_inputs_pass_through() {
        assert!(dedupe_semantic(&[], Some(&embedder()), THRESHOLD).is_empty());
        let one = qs(&["What is polymorphism?"]);
        assert_eq!(dedupe_semantic(&one, Some(&embedder()), THRESHOLD), one);
    }
}
