// src/runner.rs
// Drives one refresh: partition subjects into batches, run them strictly
// sequentially (prompt -> query -> extract -> parse), absorb batch-local
// failures, abort on quota, then reconcile everything collected in one final
// pass. Sequencing is deliberate: the hosted model sits behind a request-rate
// ceiling, so batches never overlap and an unconditional delay precedes every
// batch after the first.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::EnrichError;
use crate::extract::{parse_records, recover_json_array};
use crate::prompt::build_prompt;
use crate::provider::SearchProvider;
use crate::reconcile::reconcile;
use crate::schema::EnrichmentSchema;
use crate::subject::{EnrichmentRecord, Subject};

/// Per-call tuning. Batch size and delay are empirically tuned guesses
/// against an external, unspecified rate limit, so they are parameters, not
/// constants.
#[derive(Debug, Clone, Copy)]
pub struct RefreshOptions {
    /// Maximum subjects per remote request. Clamped to >= 1.
    pub batch_size: usize,
    /// Unconditional pause before every batch after the first.
    pub batch_delay: Duration,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            batch_size: 3,
            batch_delay: Duration::ZERO,
        }
    }
}

impl RefreshOptions {
    /// The conservative profile used for per-line portfolio review: one
    /// subject per request, six seconds apart, to stay inside the free-tier
    /// rate limit.
    pub fn conservative() -> Self {
        Self {
            batch_size: 1,
            batch_delay: Duration::from_millis(6000),
        }
    }
}

/// Ordered, non-overlapping partition of `items`. Concatenating the chunks
/// reproduces the input exactly; every chunk has 1..=batch_size elements.
pub fn partition<T>(items: &[T], batch_size: usize) -> Vec<&[T]> {
    items.chunks(batch_size.max(1)).collect()
}

/// Progress callback: receives `round(100 * completed / total)` once per
/// completed batch, in strictly increasing batch order.
pub type ProgressFn<'a> = &'a mut dyn FnMut(u8);

pub struct Enricher {
    provider: Arc<dyn SearchProvider>,
}

impl Enricher {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Runs the full pipeline for one subject list. Returns a new list of the
    /// same length and order; each subject is either unchanged or carries
    /// fresh enrichment. Batch-local failures (unparseable output, transient
    /// HTTP errors) cost only their batch; a quota rejection aborts the whole
    /// operation and nothing is returned.
    pub async fn refresh(
        &self,
        schema: &EnrichmentSchema,
        subjects: &[Subject],
        opts: RefreshOptions,
        mut progress: Option<ProgressFn<'_>>,
    ) -> Result<Vec<Subject>, EnrichError> {
        if let Some(bad) = subjects.iter().position(Subject::lacks_identity) {
            return Err(EnrichError::InvalidInput(format!(
                "subject at index {bad} has neither a name nor an identifier"
            )));
        }
        if subjects.is_empty() {
            return Ok(Vec::new());
        }

        let batches = partition(subjects, opts.batch_size);
        let total = batches.len();
        let mut collected: Vec<EnrichmentRecord> = Vec::new();

        for (i, batch) in batches.iter().enumerate() {
            if i > 0 && !opts.batch_delay.is_zero() {
                tokio::time::sleep(opts.batch_delay).await;
            }

            let prompt = build_prompt(schema, batch);
            match self.provider.generate(&prompt).await {
                Ok(text) => {
                    let records = parse_records(recover_json_array(&text), schema);
                    if records.is_empty() {
                        warn!(batch = i, "batch yielded no usable records");
                    }
                    collected.extend(records);
                }
                Err(e) if e.is_quota() => {
                    warn!(batch = i, error = %e, "quota exhausted, aborting refresh");
                    return Err(EnrichError::QuotaExceeded);
                }
                Err(e) => {
                    warn!(batch = i, error = %e, "batch failed, continuing without it");
                }
            }

            let percent = ((i + 1) as f64 / total as f64 * 100.0).round() as u8;
            if let Some(cb) = progress.as_mut() {
                cb(percent);
            }
        }

        info!(
            provider = self.provider.name(),
            subjects = subjects.len(),
            batches = total,
            records = collected.len(),
            "refresh complete, reconciling"
        );
        Ok(reconcile(subjects, &collected, schema))
    }
}
