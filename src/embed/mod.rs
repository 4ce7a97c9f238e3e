//! Client side of the remote embedding service.
//!
//! The service chunks a text and returns one vector per chunk. difflog uses
//! it to embed the before/after text of parsed changes. The transport itself
//! is supplied by an [`Embedder`] implementation; this module owns the
//! configuration, timeouts, batch concurrency and response checks.

mod client;
mod config;
mod types;


// Re-export public API
pub use client::{Embedder, EmbeddingClient};
pub use config::{ENV_HOST, ENV_MAX_WORKERS, ENV_PORT, ENV_TIMEOUT, EmbedderConfig};
pub use types::{ChunkStrategy, EmbedError, Embedding, FileEmbeddings};
