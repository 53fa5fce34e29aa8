use parking_lot::Mutex;

use super::{EmbeddingError, TextEmbedder};

/// Embedder whose similarities are a configured constant.
///
/// `encode` still returns a deterministic unit vector so callers that encode directly
/// keep working; `similarity`/`batch_similarity` ignore it and return the constant.
#[derive(Debug)]
pub struct MockEmbedder {
    similarity: f32,
    dimension: usize,
    calls: Mutex<usize>,
}

impl MockEmbedder {
    pub fn new(similarity: f32) -> Self {
        Self {
            similarity: similarity.clamp(-1.0, 1.0),
            dimension: 8,
            calls: Mutex::new(0),
        }
    }

    /// Number of `batch_similarity` calls served.
    pub fn batch_calls(&self) -> usize {
        *self.calls.lock()
    }
}

impl TextEmbedder for MockEmbedder {
    fn encode(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut v = vec![0.0; self.dimension];
        v[0] = 1.0;
        Ok(v)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn is_stub(&self) -> bool {
        true
    }

    fn similarity(&self, _a: &str, _b: &str) -> Result<f32, EmbeddingError> {
        Ok(self.similarity)
    }

    fn batch_similarity(
        &self,
        _query: &str,
        documents: &[&str],
    ) -> Result<Vec<f32>, EmbeddingError> {
        *self.calls.lock() += 1;
        Ok(vec![self.similarity; documents.len()])
    }
}
