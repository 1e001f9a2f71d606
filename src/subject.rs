// src/subject.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named entity awaiting AI-sourced enrichment: a radar stock, a dividend
/// payer, a health-sector company, or a portfolio line.
///
/// The pipeline only reads the identity fields (`name`, `isin`) and writes
/// back `enrichment` + `last_enriched`. Everything in `attrs` (reference
/// price, quantity, average price, ...) belongs to the caller and passes
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subject {
    /// Display name, e.g. "Cisco Systems". Used for fuzzy matching.
    pub name: String,
    /// Stable identifier (ISIN-like) for portfolio lines. When present and
    /// the schema keys on it, matching is strict instead of fuzzy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    /// Caller-owned attributes. Opaque to the pipeline.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Map<String, Value>,
    /// Enrichment fields from the most recent matching record, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<Map<String, Value>>,
    /// When `enrichment` was last written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_enriched: Option<DateTime<Utc>>,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            isin: None,
            attrs: Map::new(),
            enrichment: None,
            last_enriched: None,
        }
    }

    pub fn with_isin(name: impl Into<String>, isin: impl Into<String>) -> Self {
        Self {
            isin: Some(isin.into()),
            ..Self::new(name)
        }
    }

    pub fn with_attr(mut self, key: &str, value: Value) -> Self {
        self.attrs.insert(key.to_string(), value);
        self
    }

    /// True if the subject carries neither a usable name nor an identifier.
    /// Such entries are a caller contract violation and reject the whole
    /// operation before any batch runs.
    pub fn lacks_identity(&self) -> bool {
        self.name.trim().is_empty() && self.isin.as_deref().map_or(true, |i| i.trim().is_empty())
    }
}

/// One parsed element of the model's JSON array: the identity key it claims
/// to describe plus whatever enrichment fields it provided. Produced
/// transiently per refresh, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentRecord {
    pub name: Option<String>,
    pub isin: Option<String>,
    pub fields: Map<String, Value>,
}

impl EnrichmentRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            isin: None,
            fields: Map::new(),
        }
    }

    pub fn keyed(isin: impl Into<String>) -> Self {
        Self {
            name: None,
            isin: Some(isin.into()),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }
}
