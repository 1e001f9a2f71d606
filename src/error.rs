// src/error.rs
use thiserror::Error;

/// Operation-fatal outcomes of a refresh. Batch-local trouble (unparseable
/// output, transient HTTP errors) never surfaces here; it is absorbed by the
/// runner and shows up only as missing enrichment.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Rate-limit / quota rejection from the hosted model. Aborts the whole
    /// refresh; records collected by earlier batches are discarded.
    #[error("API usage quota exceeded (rate limit); please wait a minute before retrying")]
    QuotaExceeded,

    /// Caller contract violation detected before any batch runs.
    #[error("invalid subject list: {0}")]
    InvalidInput(String),

    /// Anything else fatal.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Failure of a single remote query. The runner classifies these: `Quota`
/// aborts the operation, everything else costs only that batch.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("quota exhausted: {0}")]
    Quota(String),

    #[error("provider returned HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("network error")]
    Network(#[from] reqwest::Error),

    #[error("model returned an empty response")]
    EmptyResponse,
}

impl ProviderError {
    pub fn is_quota(&self) -> bool {
        matches!(self, ProviderError::Quota(_))
    }
}
