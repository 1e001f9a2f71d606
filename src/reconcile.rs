// src/reconcile.rs
// Aligns parsed enrichment records with the subjects they describe and merges
// them. Name matching is a deliberate heuristic: case-folded substring
// containment in both directions. Two subjects whose names contain one
// another ("Danone" / "Danone Group") can both match the same record;
// first-match-wins in record order is the inherited, documented behavior.

use chrono::Utc;
use serde_json::Map;
use tracing::debug;

use crate::schema::{EnrichmentSchema, MatchKey};
use crate::subject::{EnrichmentRecord, Subject};

/// Symmetric containment check, case-insensitive. Heuristic, not a
/// similarity guarantee: "SAP" matches "SAP America Holdings Ireland".
pub fn names_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// ISIN comparison form: trimmed, upper-cased. Identifier matching is strict
/// equality on this.
pub fn normalize_isin(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Merges `records` onto `subjects`, returning a new list of the same length
/// and order. Per subject: first matching record wins (scanning records in
/// model order); no match leaves the subject untouched, prior enrichment
/// included; a match rebuilds the enrichment map from scratch, so stale
/// fields never survive — declared fields the record omits get the schema
/// default instead.
pub fn reconcile(
    subjects: &[Subject],
    records: &[EnrichmentRecord],
    schema: &EnrichmentSchema,
) -> Vec<Subject> {
    subjects
        .iter()
        .map(|subject| {
            match records.iter().find(|r| record_matches(subject, r, schema.key)) {
                Some(record) => merge(subject, record, schema),
                None => {
                    debug!(subject = %subject.name, "no enrichment record matched");
                    subject.clone()
                }
            }
        })
        .collect()
}

fn record_matches(subject: &Subject, record: &EnrichmentRecord, key: MatchKey) -> bool {
    match key {
        MatchKey::Isin => match (&subject.isin, &record.isin) {
            (Some(s), Some(r)) => normalize_isin(s) == normalize_isin(r),
            _ => false,
        },
        MatchKey::Name => record
            .name
            .as_deref()
            .map(|n| names_match(&subject.name, n))
            .unwrap_or(false),
    }
}

fn merge(subject: &Subject, record: &EnrichmentRecord, schema: &EnrichmentSchema) -> Subject {
    let mut enrichment: Map<String, serde_json::Value> = record.fields.clone();
    for field in &schema.fields {
        if !enrichment.contains_key(field.name) {
            if let Some(default) = &field.default {
                enrichment.insert(field.name.to_string(), default.clone());
            }
        }
    }

    let mut out = subject.clone();
    out.enrichment = Some(enrichment);
    out.last_enriched = Some(Utc::now());
    out
}
