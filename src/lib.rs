// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod provider;
pub mod reconcile;
pub mod runner;
pub mod schema;
pub mod seed;
pub mod subject;

// ---- Re-exports for stable public API ----
pub use crate::config::EnricherConfig;
pub use crate::error::{EnrichError, ProviderError};
pub use crate::provider::{GeminiProvider, SearchProvider, StaticProvider};
pub use crate::runner::{Enricher, RefreshOptions};
pub use crate::schema::{EnrichmentSchema, MatchKey};
pub use crate::subject::{EnrichmentRecord, Subject};
