//! Request/response types for the embedding service.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// How the service splits text into chunks before embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkStrategy {
    /// One chunk per sentence.
    Sentence,
    /// Sentences further split at conjunctions and subordinate clauses.
    Clause,
    /// Semantic chunks (the service default).
    #[default]
    Semantic,
}

impl ChunkStrategy {
    /// Wire name of the strategy.
    pub fn as_str(self) -> &'static str {
        match self {
            ChunkStrategy::Sentence => "sentence",
            ChunkStrategy::Clause => "clause",
            ChunkStrategy::Semantic => "semantic",
        }
    }
}

impl std::fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chunks of the input text and one vector per chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    pub chunks: Vec<String>,
    pub embeddings: Vec<Vec<f32>>,
}

/// Embeddings of the removed and added side of one file's changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileEmbeddings {
    pub filename: String,
    /// Removed lines, joined with newlines.
    pub before: Embedding,
    /// Added lines, joined with newlines.
    pub after: Embedding,
}

/// Failure of an embedding call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// The service could not be reached or returned an error.
    #[error("embedding service unavailable: {0}")]
    Unavailable(String),

    /// The call did not complete within the configured timeout.
    #[error("embedding call timed out after {0:?}")]
    TimedOut(Duration),

    /// The response carried a different number of chunks and vectors.
    #[error("embedding response has {chunks} chunks but {embeddings} embeddings")]
    MismatchedResponse { chunks: usize, embeddings: usize },

    /// The worker running the call panicked.
    #[error("embedding worker panicked")]
    WorkerPanicked,
}
