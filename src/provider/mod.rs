// src/provider/mod.rs
pub mod gemini;

use crate::error::ProviderError;

pub use gemini::GeminiProvider;

/// One remote query to a hosted generative model with a web-search tool
/// attached. No retry lives here; the batch runner decides what a failure
/// costs.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Submit a prompt, return the model's raw text output. The text may be
    /// empty, fenced, or wrapped in prose; extraction deals with that.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Canned-response provider for tests and keyless local runs.
#[derive(Clone)]
pub struct StaticProvider {
    pub fixed: String,
}

impl StaticProvider {
    pub fn new(fixed: impl Into<String>) -> Self {
        Self { fixed: fixed.into() }
    }
}

#[async_trait::async_trait]
impl SearchProvider for StaticProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Ok(self.fixed.clone())
    }
    fn name(&self) -> &'static str {
        "static"
    }
}
