// src/seed.rs
// Static seed data for the dashboard lists. Reference prices come from the
// owner's broker statement; the pipeline overwrites none of them, it only
// adds enrichment next to them.

use serde_json::json;

use crate::subject::Subject;

fn stock(name: &str, current_price: f64, currency: &str, exit: f64, accumulate: f64) -> Subject {
    Subject::new(name)
        .with_attr("currentPrice", json!(current_price))
        .with_attr("currency", json!(currency))
        .with_attr("exitPrice", json!(exit))
        .with_attr("accumulativePrice", json!(accumulate))
}

/// The stock-radar watchlist.
pub fn initial_stocks() -> Vec<Subject> {
    vec![
        stock("Repsol", 15.7, "€", 17.5, 13.5),
        stock("Endesa", 30.6, "€", 35.0, 27.5),
        stock("Enagás", 14.1, "€", 16.5, 13.0),
        stock("Iberdrola", 18.0, "€", 20.5, 16.0),
        stock("BAE Systems PLC", 18.9, "€", 21.5, 18.0),
        stock("Danone", 77.2, "€", 88.0, 72.0),
        stock("Nestlé", 80.56, "CHF", 85.0, 80.0),
        stock("Viscofan", 52.8, "€", 58.0, 48.0),
        stock("Logista", 29.0, "€", 32.5, 27.0),
        stock("Cisco Systems", 76.2, "USD", 80.0, 65.0),
        stock("Indra Sistemas", 45.6, "€", 54.5, 44.0),
        stock("LVMH", 622.9, "€", 700.0, 570.0),
        stock("ASML", 870.6, "€", 1050.0, 800.0),
        stock("SAP", 206.1, "€", 260.0, 200.0),
        stock("Alphabet Inc Class C", 318.5, "USD", 320.0, 250.0),
        stock("Zurich Insurance Group", 563.2, "€", 600.0, 510.0),
        stock("Enterprise Products Partners", 32.6, "€", 35.0, 28.0),
        stock("Altria Group (MO)", 57.3, "€", 65.0, 53.0),
        stock("Verizon Communications", 40.2, "€", 45.0, 36.0),
        stock("LyondellBasell (LYB)", 45.4, "€", 48.0, 38.0),
        stock("Unilever PLC", 51.9, "€", 56.0, 47.0),
        stock("St. Galler Kantonalbank", 527.0, "CHF", 585.0, 495.0),
        stock("Groupe CRIT", 60.6, "€", 68.0, 55.0),
        stock("Legal & General Group", 239.1, "€", 270.0, 210.0),
        stock("The Coca-Cola Company", 72.6, "USD", 78.0, 65.0),
        stock("Johnson & Johnson", 206.1, "€", 220.0, 180.0),
        stock("PepsiCo", 145.5, "€", 158.0, 135.0),
        stock("Icade", 20.3, "€", 26.0, 18.0),
    ]
}

fn health(company: &str, subsector: &str, country: &str, growth_prob: &str) -> Subject {
    Subject::new(company)
        .with_attr("subsector", json!(subsector))
        .with_attr("country", json!(country))
        .with_attr("growthProb", json!(growth_prob))
}

/// Health-sector companies tracked as defensive assets.
pub fn initial_health_sector() -> Vec<Subject> {
    vec![
        health("Roche", "Pharma / diagnostics", "Switzerland", "70%"),
        health("AstraZeneca", "Pharma / biotech", "UK", "65%"),
        health("Grifols", "Plasma derivatives", "Spain", "60%"),
        health("Novo Nordisk", "Diabetes / obesity", "Denmark", "80%"),
        health("Fresenius SE", "Health services", "Germany", "58%"),
        health("Lonza Group", "Biopharma outsourcing", "Switzerland", "55%"),
        health("EssilorLuxottica", "Optics / eye care", "France", "65%"),
        health("Sanofi", "General pharma", "France", "60%"),
        health("GN Store Nord", "Hearing technology", "Denmark", "50%"),
        health("Coloplast", "Urological care", "Denmark", "63%"),
    ]
}

/// Companies tracked on the dividend calendar tab.
pub fn dividend_companies() -> Vec<Subject> {
    [
        "LyondellBasell",
        "Logista",
        "Viscofan",
        "Enagás",
        "Icade",
        "Altria",
        "Verizon",
        "Legal & General",
        "Enterprise Products",
        "Banco Sabadell",
        "Repsol",
        "Cisco",
        "St. Galler Kantonalbank",
        "Danone",
        "Atria Oyj",
        "Groupe CRIT",
        "Zurich Insurance",
        "Indra",
        "Nestlé",
        "Johnson & Johnson",
        "Iberdrola",
        "Unilever",
        "Stanley Black & Decker",
        "LVMH",
        "ASML",
        "PepsiCo",
        "SAP",
        "Coca-Cola",
        "Alphabet",
        "Endesa",
    ]
    .into_iter()
    .map(Subject::new)
    .collect()
}
