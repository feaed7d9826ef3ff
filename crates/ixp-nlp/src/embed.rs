//! Fixed-dimension sentence embeddings via feature hashing.

use sha2::{Digest, Sha256};

/// Embedding vector width.
pub const EMBEDDING_DIM: usize = 256;

/// Deterministic bag-of-words embedder: each lowercase token is hashed
/// with SHA-256 into a bucket and a sign, counts are accumulated, and
/// the vector is L2-normalized. Word order is ignored, which is exactly
/// the robustness near-duplicate detection needs ("What is X?" vs
/// "Explain what X is.").
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    #[must_use]
    pub fn new() -> Self {
        Self { dim: EMBEDDING_DIM }
    }

    /// Embed one text into a unit-length vector. Empty or
    /// non-alphanumeric text embeds to the zero vector.
    #[must_use]
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];

        for token in tokens(text) {
            let digest = Sha256::digest(token.as_bytes());
            let mut prefix = [0_u8; 8];
            prefix.copy_from_slice(&digest[..8]);
            let hash = u64::from_be_bytes(prefix);

            #[allow(clippy::cast_possible_truncation)]
            let index = (hash % self.dim as u64) as usize;
            let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[index] += sign;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }

    /// Embed a batch, one vector per input text, in the same order.
    #[must_use]
    pub fn embed_all(&self, texts: &[String]) -> Vec<Vec<f32>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosine similarity; zero vectors compare as 0.0.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_is_deterministic() {
        let embedder = HashEmbedder::new();
        assert_eq!(
            embedder.embed("What is a hash table?"),
            embedder.embed("What is a hash table?")
        );
    }

    #[test]
    fn embedding_is_unit_length() {
        let v = HashEmbedder::new().embed("Explain the difference between a stack and a queue.");
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "norm was {norm}");
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let v = HashEmbedder::new().embed("  ?! ");
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn identical_texts_have_similarity_one() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("Why do you want this role?");
        let sim = cosine_similarity(&a, &a);
        assert!((sim - 1.0).abs() < 1e-5, "similarity was {sim}");
    }

    #[test]
    fn paraphrases_score_higher_than_unrelated_texts() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("What is a hash table?");
        let b = embedder.embed("Explain what a hash table is.");
        let c = embedder.embed("Describe your weekend plans in detail.");
        let close = cosine_similarity(&a, &b);
        let far = cosine_similarity(&a, &c);
        assert!(close > 0.8, "paraphrase similarity too low: {close}");
        assert!(far < close, "unrelated {far} >= paraphrase {close}");
    }

    #[test]
    fn zero_vector_similarity_is_zero() {
        let zero = vec![0.0_f32; EMBEDDING_DIM];
        let v = HashEmbedder::new().embed("anything at all");
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
    }
}
