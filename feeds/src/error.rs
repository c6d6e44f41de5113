//! Unified error types for the history feed worker
//!
//! This module defines error types for each layer:
//! - `DomainError`: Store and settings failures
//! - `PublishError`: Output destination failures
//! - `FeedError`: Pipeline errors (wraps the other two for the invoker)

use thiserror::Error;

/// Domain layer errors - raised by store and settings adapters
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Publisher errors
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Pipeline errors - any of these aborts the run
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to fetch events: {0}")]
    SourceFetch(#[from] DomainError),

    #[error("Unknown event kind: {kind} (event {id})")]
    UnknownEventKind { id: String, kind: String },

    #[error("Failed to serialize feed: {0}")]
    Serialization(String),

    #[error("Failed to publish {name}: {source}")]
    Publish {
        name: String,
        #[source]
        source: PublishError,
    },
}
