// tests/pipeline_merge.rs
// End-to-end merge behavior through Enricher::refresh: fuzzy name matching,
// strict ISIN matching, preservation of unmatched subjects, first-match-wins.

use std::sync::Arc;

use portfolio_enricher::{
    seed, Enricher, EnrichmentSchema, RefreshOptions, StaticProvider, Subject,
};
use serde_json::json;

fn big_batch() -> RefreshOptions {
    RefreshOptions {
        batch_size: 50,
        ..RefreshOptions::default()
    }
}

#[tokio::test]
async fn fuzzy_name_containment_matches_both_directions() {
    // Model answers with the short name; subject list carries the long one.
    let provider = Arc::new(StaticProvider::new(
        r#"[{"name":"Cisco","marketPrice":77.0,"currency":"USD"},
            {"name":"Nestlé S.A. Registered Shares","marketPrice":81.2,"currency":"CHF"}]"#,
    ));
    let subjects = vec![Subject::new("Cisco Systems"), Subject::new("Nestlé")];

    let out = Enricher::new(provider)
        .refresh(&EnrichmentSchema::stock_radar(), &subjects, big_batch(), None)
        .await
        .unwrap();

    assert_eq!(out[0].enrichment.as_ref().unwrap()["marketPrice"], json!(77.0));
    assert_eq!(out[1].enrichment.as_ref().unwrap()["marketPrice"], json!(81.2));
}

#[tokio::test]
async fn isin_matching_is_strict_and_normalized() {
    let provider = Arc::new(StaticProvider::new(
        r#"[{"isin":" es0173516115 ","action":"ACCUMULATE","currentPrice":16.4},
            {"isin":"ES0173516116","action":"SELL","currentPrice":99.9}]"#,
    ));
    let subjects = vec![
        Subject::with_isin("Repsol", "ES0173516115")
            .with_attr("quantity", json!(120)),
        Subject::with_isin("Not Repsol", "ES0173516117"),
    ];

    let out = Enricher::new(provider)
        .refresh(
            &EnrichmentSchema::portfolio_review(),
            &subjects,
            big_batch(),
            None,
        )
        .await
        .unwrap();

    let repsol = out[0].enrichment.as_ref().unwrap();
    assert_eq!(repsol["action"], json!("ACCUMULATE"));
    // Declared fields the record omitted fall back to the neutral defaults.
    assert_eq!(repsol["forecast3to5Years"], json!("-"));
    assert_eq!(repsol["optimizationTip"], json!("-"));
    // Caller attrs pass through untouched.
    assert_eq!(out[0].attrs["quantity"], json!(120));
    // ...516117 matches neither record, not even the near-miss ...516116.
    assert!(out[1].enrichment.is_none());
}

#[tokio::test]
async fn unmatched_subjects_keep_prior_enrichment() {
    let mut subjects = vec![Subject::new("Iberdrola"), Subject::new("Endesa")];
    let mut prior = serde_json::Map::new();
    prior.insert("marketPrice".into(), json!(17.8));
    subjects[1].enrichment = Some(prior.clone());

    let provider = Arc::new(StaticProvider::new(
        r#"[{"name":"Iberdrola","marketPrice":18.4}]"#,
    ));
    let out = Enricher::new(provider)
        .refresh(&EnrichmentSchema::stock_radar(), &subjects, big_batch(), None)
        .await
        .unwrap();

    assert_eq!(out[0].enrichment.as_ref().unwrap()["marketPrice"], json!(18.4));
    // No matching record: previous enrichment survives unchanged.
    assert_eq!(out[1].enrichment.as_ref().unwrap(), &prior);
    assert!(out[1].last_enriched.is_none());
}

#[tokio::test]
async fn duplicate_names_each_receive_the_same_record() {
    // "Danone" and "Danone Group" contain one another; both match the single
    // record, first-match-wins per subject. Documented heuristic behavior.
    let provider = Arc::new(StaticProvider::new(
        r#"[{"name":"Danone","marketPrice":78.5}]"#,
    ));
    let subjects = vec![Subject::new("Danone"), Subject::new("Danone Group")];

    let out = Enricher::new(provider)
        .refresh(&EnrichmentSchema::stock_radar(), &subjects, big_batch(), None)
        .await
        .unwrap();
    for s in &out {
        assert_eq!(s.enrichment.as_ref().unwrap()["marketPrice"], json!(78.5));
    }
}

#[tokio::test]
async fn seed_watchlist_round_trips_with_partial_answer() {
    // A single-record answer against the full 29-stock watchlist: exactly the
    // matching subject is updated, everything else passes through untouched.
    let subjects = seed::initial_stocks();
    let provider = Arc::new(StaticProvider::new(
        r#"[{"name":"Viscofan","marketPrice":55.1,"currency":"EUR","recommendation":"Buy"}]"#,
    ));

    let out = Enricher::new(provider)
        .refresh(&EnrichmentSchema::stock_radar(), &subjects, big_batch(), None)
        .await
        .unwrap();

    assert_eq!(out.len(), subjects.len());
    let updated: Vec<&str> = out
        .iter()
        .filter(|s| s.enrichment.is_some())
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(updated, vec!["Viscofan"]);
    // Order preserved.
    let names_in: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    let names_out: Vec<&str> = out.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names_in, names_out);
}

#[tokio::test]
async fn dividend_schema_accepts_month_lists() {
    let provider = Arc::new(StaticProvider::new(
        "Here you go:\n```json\n[{\"name\":\"Repsol\",\"paymentMonths\":[\"January\",\"July\"]}]\n```\nThanks!",
    ));
    let subjects = vec![Subject::new("Repsol"), Subject::new("Endesa")];

    let out = Enricher::new(provider)
        .refresh(
            &EnrichmentSchema::dividend_calendar(),
            &subjects,
            big_batch(),
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        out[0].enrichment.as_ref().unwrap()["paymentMonths"],
        json!(["January", "July"])
    );
    assert!(out[1].enrichment.is_none());
}
