//! Embedding provider seam and vector similarity.

use crate::error::Result;

/// Sentence-embedding encoder behind the skill matcher.
///
/// Implementations batch internally; the matcher makes one `encode` call
/// per document covering every candidate n-gram.
pub trait EmbeddingProvider: Send + Sync {
    /// Encode a batch of strings into fixed-dimension vectors, one per
    /// input, in input order.
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Dimension of the produced vectors.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

/// Cosine similarity of two vectors; 0.0 when either has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Pairwise cosine similarity: `result[i][j]` compares `a[i]` with `b[j]`.
pub fn similarity_matrix(a: &[Vec<f32>], b: &[Vec<f32>]) -> Vec<Vec<f32>> {
    a.iter()
        .map(|row| b.iter().map(|col| cosine_similarity(row, col)).collect())
        .collect()
}

/// Local encoder backed by `fastembed` (BGE-base-en-v1.5).
#[cfg(feature = "embeddings")]
pub use fastembed_provider::FastEmbedProvider;

#[cfg(feature = "embeddings")]
mod fastembed_provider {
    use super::EmbeddingProvider;
    use crate::error::{Error, Result};
    use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
    use std::sync::Mutex;

    /// Batch size passed through to the model runtime.
    const BATCH_SIZE: usize = 32;
    /// Output dimension of BGE-base-en-v1.5.
    const DIMENSIONS: usize = 768;

    pub struct FastEmbedProvider {
        model: Mutex<TextEmbedding>,
    }

    impl FastEmbedProvider {
        /// Initialize the model, downloading it on first use.
        pub fn new() -> Result<Self> {
            let model = TextEmbedding::try_new(
                InitOptions::new(EmbeddingModel::BGEBaseENV15).with_show_download_progress(false),
            )
            .map_err(|e| Error::Embedding(e.to_string()))?;
            Ok(Self {
                model: Mutex::new(model),
            })
        }
    }

    impl EmbeddingProvider for FastEmbedProvider {
        fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            let mut model = self
                .model
                .lock()
                .map_err(|_| Error::Embedding("embedding model lock poisoned".to_string()))?;
            model
                .embed(texts.to_vec(), Some(BATCH_SIZE))
                .map_err(|e| Error::Embedding(e.to_string()))
        }

        fn dimensions(&self) -> usize {
            DIMENSIONS
        }

        fn name(&self) -> &str {
            "fastembed/bge-base-en-v1.5"
        }
    }
}
