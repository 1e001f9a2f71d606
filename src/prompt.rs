// src/prompt.rs
// Renders an EnrichmentSchema + batch of subjects into one instruction
// string. Pure; the same inputs always produce the same prompt, and every
// subject's identifying text appears verbatim so the model cannot silently
// drop one.

use std::fmt::Write as _;

use crate::schema::{EnrichmentSchema, MatchKey};
use crate::subject::Subject;

pub fn build_prompt(schema: &EnrichmentSchema, batch: &[Subject]) -> String {
    let mut out = String::with_capacity(1024);

    let _ = writeln!(out, "You are {}.", schema.role);
    let _ = writeln!(out, "Analyze the following subjects:");
    for s in batch {
        match (&s.isin, schema.key) {
            (Some(isin), MatchKey::Isin) => {
                let _ = writeln!(out, "- {} (ISIN: {})", s.name, isin);
            }
            _ => {
                let _ = writeln!(out, "- {}", s.name);
            }
        }
    }

    let _ = writeln!(out, "\nPerform the following steps for EACH subject:");
    for (i, step) in schema.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }

    out.push_str(
        "\nCRITICAL OUTPUT RULE:\n\
         - You MUST return ONLY a valid JSON array.\n\
         - Do NOT use Markdown formatting (no ```json fences).\n\
         - Do NOT add conversational text.\n",
    );

    let _ = writeln!(out, "\nJSON Schema:");
    out.push_str("[\n  {\n");
    let _ = writeln!(
        out,
        "    \"{}\": string ({}),",
        schema.key_field,
        match schema.key {
            MatchKey::Name => "exact match from input list",
            MatchKey::Isin => "original ISIN",
        }
    );
    for (i, f) in schema.fields.iter().enumerate() {
        let comma = if i + 1 == schema.fields.len() { "" } else { "," };
        let _ = writeln!(out, "    \"{}\": {} ({}){}", f.name, f.ty, f.desc, comma);
    }
    out.push_str("  }\n]\n");

    out
}
