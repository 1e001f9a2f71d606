// src/extract.rs
// Recovers a parseable JSON array from free-form model output. Models keep
// ignoring the "no markdown, no prose" instruction, so recovery runs in three
// tiers: outer brackets, then a ```json fenced block, then a literal "[]".

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::warn;

use crate::schema::EnrichmentSchema;
use crate::subject::EnrichmentRecord;

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(\[.*?\])\s*```").expect("fenced-json regex"));

/// Returns a substring that is valid JSON for *some* array, or "[]" when no
/// candidate exists. Callers must still parse defensively; tier 1 can hand
/// back a truncated array.
pub fn recover_json_array(text: &str) -> &str {
    if text.is_empty() {
        return "[]";
    }

    // 1) Outer brackets of a JSON array.
    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if end > start {
            return &text[start..=end];
        }
    }

    // 2) Fenced block tagged as JSON.
    if let Some(caps) = FENCED_JSON.captures(text) {
        if let Some(m) = caps.get(1) {
            return m.as_str();
        }
    }

    "[]"
}

/// Parses recovered text into enrichment records. A parse failure or a
/// non-array value yields zero records; non-object elements and elements
/// without any identity field are skipped with a warning. The batch as a
/// whole never fails here.
pub fn parse_records(json: &str, schema: &EnrichmentSchema) -> Vec<EnrichmentRecord> {
    let value: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "discarding unparseable model output");
            return Vec::new();
        }
    };

    let Value::Array(items) = value else {
        warn!("model output parsed but is not an array");
        return Vec::new();
    };

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(obj) = item else {
            warn!("skipping non-object array element");
            continue;
        };
        if let Some(rec) = record_from_object(obj, schema) {
            records.push(rec);
        }
    }
    records
}

fn record_from_object(
    mut obj: Map<String, Value>,
    schema: &EnrichmentSchema,
) -> Option<EnrichmentRecord> {
    let isin = take_string(&mut obj, "isin");
    // The key property varies by task ("name", "company", "isin"); accept the
    // common aliases so a model that renames it does not lose the record.
    let name = take_string(&mut obj, schema.key_field)
        .or_else(|| take_string(&mut obj, "name"))
        .or_else(|| take_string(&mut obj, "company"));

    if name.is_none() && isin.is_none() {
        warn!("skipping record with no identity field");
        return None;
    }
    Some(EnrichmentRecord {
        name,
        isin,
        fields: obj,
    })
}

fn take_string(obj: &mut Map<String, Value>, key: &str) -> Option<String> {
    match obj.remove(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(other) => {
            // Put non-string values back; they are enrichment, not identity.
            if !other.is_null() {
                obj.insert(key.to_string(), other);
            }
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_array_passes_through_unchanged() {
        let raw = r#"[{"name":"Acme","marketPrice":12.5}]"#;
        assert_eq!(recover_json_array(raw), raw);
    }

    #[test]
    fn prose_around_brackets_is_stripped() {
        let raw = "Sure! Here is the data: [{\"name\":\"Acme\"}] Hope this helps.";
        assert_eq!(recover_json_array(raw), "[{\"name\":\"Acme\"}]");
    }

    #[test]
    fn fenced_markdown_answer_recovers_the_array() {
        let raw = "Here you go:\n```json\n[{\"name\":\"Acme\"}]\n```\nThanks!";
        assert_eq!(recover_json_array(raw), "[{\"name\":\"Acme\"}]");
    }

    #[test]
    fn hopeless_text_yields_empty_array() {
        assert_eq!(recover_json_array("no data available"), "[]");
        assert_eq!(recover_json_array(""), "[]");
        // Brackets in the wrong order do not form a candidate span.
        assert_eq!(recover_json_array("] nothing here ["), "[]");
    }

    #[test]
    fn truncated_array_parses_to_zero_records() {
        let schema = EnrichmentSchema::stock_radar();
        let recovered = recover_json_array("[{\"name\":\"Acme\", \"marketPri]");
        assert!(parse_records(recovered, &schema).is_empty());
    }

    #[test]
    fn identityless_and_non_object_elements_are_skipped() {
        let schema = EnrichmentSchema::stock_radar();
        let recs = parse_records(
            r#"[42, {"marketPrice": 3.0}, {"name":"Acme","marketPrice":3.0}]"#,
            &schema,
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name.as_deref(), Some("Acme"));
    }
}
