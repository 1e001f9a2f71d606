//! Demo that refreshes the seed stock-radar list once. With GEMINI_API_KEY
//! set it hits the real endpoint; otherwise it runs against a canned response
//! so the pipeline can be watched offline.

use std::sync::Arc;

use portfolio_enricher::{
    seed, Enricher, EnrichmentSchema, GeminiProvider, RefreshOptions, SearchProvider,
    StaticProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let provider: Arc<dyn SearchProvider> = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Arc::new(GeminiProvider::new(key, None)),
        _ => {
            println!("GEMINI_API_KEY not set, using canned response");
            Arc::new(StaticProvider::new(
                r#"[{"name":"Repsol","marketPrice":16.1,"currency":"EUR","exitPrice":17.8,"accumulativePrice":13.9,"recommendation":"Hold"}]"#,
            ))
        }
    };

    let enricher = Enricher::new(provider);
    let subjects = seed::initial_stocks();
    let mut on_progress = |pct: u8| println!("progress: {pct}%");

    let merged = enricher
        .refresh(
            &EnrichmentSchema::stock_radar(),
            &subjects,
            RefreshOptions::default(),
            Some(&mut on_progress),
        )
        .await?;

    for s in &merged {
        match &s.enrichment {
            Some(e) => println!("{:30} {}", s.name, serde_json::to_string(e)?),
            None => println!("{:30} (no update)", s.name),
        }
    }
    Ok(())
}
