//! Embedding client with timeout and bounded batch fan-out.

use super::config::EmbedderConfig;
use super::types::{ChunkStrategy, EmbedError, Embedding, FileEmbeddings};
use crate::diff::{FileChange, LineChange, added_only, removed_only};
use crate::error::DiffLogError;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

/// Transport to a remote embedding service.
///
/// Implementations perform one blocking request/response. Timeouts and
/// concurrency limits are applied by [`EmbeddingClient`].
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str, strategy: ChunkStrategy) -> Result<Embedding, EmbedError>;
}

/// Client for an embedding service, configured once at construction.
pub struct EmbeddingClient<E> {
    pub(super) embedder: Arc<E>,
    config: EmbedderConfig,
}

impl<E: Embedder + 'static> EmbeddingClient<E> {
    /// Build a client, rejecting an unusable configuration.
    pub fn new(embedder: E, config: EmbedderConfig) -> Result<Self, DiffLogError> {
        config.validate()?;
        Ok(Self {
            embedder: Arc::new(embedder),
            config,
        })
    }

    /// Embed one text, failing if the call exceeds the configured timeout.
    ///
    /// A timed-out call is abandoned; its worker thread finishes in the
    /// background and the result is dropped.
    pub fn embed(&self, text: &str, strategy: ChunkStrategy) -> Result<Embedding, EmbedError> {
        let timeout = self.config.timeout();
        let (tx, rx) = mpsc::channel();
        let embedder = Arc::clone(&self.embedder);
        let text = text.to_string();

        thread::spawn(move || {
            // The receiver is gone if the caller already timed out
            let _ = tx.send(embedder.embed(&text, strategy));
        });

        let result = match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(EmbedError::TimedOut(timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(EmbedError::WorkerPanicked),
        }
        .and_then(check_response);

        match &result {
            Ok(embedding) => tracing::info!(
                address = %self.config.address(),
                %strategy,
                chunks = embedding.chunks.len(),
                embeddings = embedding.embeddings.len(),
                "received embeddings"
            ),
            Err(e) => tracing::warn!(
                address = %self.config.address(),
                %strategy,
                error = %e,
                "embedding call failed"
            ),
        }

        result
    }

    /// Embed several texts with at most `max_workers` calls in flight.
    ///
    /// Results are in input order. The first failure aborts the batch.
    pub fn embed_batch<S>(
        &self,
        texts: &[S],
        strategy: ChunkStrategy,
    ) -> Result<Vec<Embedding>, EmbedError>
    where
        S: AsRef<str> + Sync,
    {
        let workers = self.config.max_workers.max(1);
        let mut results = Vec::with_capacity(texts.len());

        for wave in texts.chunks(workers) {
            thread::scope(|scope| -> Result<(), EmbedError> {
                let handles: Vec<_> = wave
                    .iter()
                    .map(|text| scope.spawn(move || self.embed(text.as_ref(), strategy)))
                    .collect();

                for handle in handles {
                    let embedding = handle.join().map_err(|_| EmbedError::WorkerPanicked)??;
                    results.push(embedding);
                }
                Ok(())
            })?;
        }

        Ok(results)
    }

    /// Embed the removed side and the added side of one file's changes.
    ///
    /// A side with no lines is left empty and costs no service call.
    pub fn embed_file_change(
        &self,
        file: &FileChange,
        strategy: ChunkStrategy,
    ) -> Result<FileEmbeddings, EmbedError> {
        let before = join_content(&removed_only(&file.line_changes));
        let after = join_content(&added_only(&file.line_changes));

        let pending: Vec<&str> = [before.as_str(), after.as_str()]
            .into_iter()
            .filter(|text| !text.is_empty())
            .collect();
        let mut embedded = self.embed_batch(&pending, strategy)?.into_iter();

        let mut take = |text: &str| {
            if text.is_empty() {
                Embedding::default()
            } else {
                embedded.next().unwrap_or_default()
            }
        };

        Ok(FileEmbeddings {
            filename: file.filename.clone(),
            before: take(&before),
            after: take(&after),
        })
    }
}

fn check_response(embedding: Embedding) -> Result<Embedding, EmbedError> {
    if embedding.chunks.len() != embedding.embeddings.len() {
        return Err(EmbedError::MismatchedResponse {
            chunks: embedding.chunks.len(),
            embeddings: embedding.embeddings.len(),
        });
    }
    Ok(embedding)
}

fn join_content(lines: &[&LineChange]) -> String {
    lines
        .iter()
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
