//! Embedding + similarity utilities.
//!
//! - [`TextEmbedder`] is the seam the scorer depends on.
//! - [`sentence`] provides the production implementation (BERT or lexical stub).
//! - [`MockEmbedder`] returns a fixed similarity, for exact-arithmetic tests.

/// BERT encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
/// Sentence embedder.
pub mod sentence;
/// Tokenizer loading helpers.
pub mod utils;


pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use sentence::{
    DEFAULT_MODEL_NAME, SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, SentenceConfig,
    SentenceEmbedder,
};

/// Produces comparably-scaled embeddings for a scoring session.
///
/// Implementations must be deterministic for a fixed model. Only [`encode`](Self::encode)
/// is required; similarity methods default to cosine similarity over encodings.
pub trait TextEmbedder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Output vector length.
    fn dimension(&self) -> usize;

    /// `true` when embeddings are not produced by a trained model.
    fn is_stub(&self) -> bool {
        false
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.encode(text)).collect()
    }

    /// Cosine similarity of two texts, in `[-1, 1]`.
    fn similarity(&self, a: &str, b: &str) -> Result<f32, EmbeddingError> {
        let a = self.encode(a)?;
        let b = self.encode(b)?;
        Ok(cosine_similarity(&a, &b))
    }

    /// One similarity per document, in document order. Empty input yields an empty vec.
    fn batch_similarity(&self, query: &str, documents: &[&str]) -> Result<Vec<f32>, EmbeddingError> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let query = self.encode(query)?;
        let documents = self.encode_batch(documents)?;

        Ok(documents
            .iter()
            .map(|document| cosine_similarity(&query, document))
            .collect())
    }
}

/// Cosine similarity clamped to `[-1, 1]`.
///
/// Mismatched lengths, empty vectors and zero-norm vectors give `0.0`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0) as f32
}
