//! Per-source failure taxonomy.

use thiserror::Error;

use crate::fetch::FetchError;

/// Why one source did not produce an artifact. Every variant is recoverable:
/// the resolver moves on to the next source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The substituted template is not an absolute HTTP(S) URL.
    #[error("template resolved to an unusable URL: {0}")]
    Template(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The response declared JSON but the body did not parse.
    #[error("malformed JSON response: {0}")]
    Parse(#[from] serde_json::Error),
    /// JSON response without a nested media URL, or one that led to more JSON.
    #[error("no audio URL in JSON response")]
    NotFound,
    /// Payload is the provider's "no audio" placeholder.
    #[error("payload matches the no-audio placeholder")]
    Rejected,
}

/// A failed attempt, kept for reporting once every source is exhausted.
#[derive(Debug)]
pub struct SourceFailure {
    pub source_name: String,
    pub error: SourceError,
}
