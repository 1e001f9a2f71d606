// src/schema.rs
// Task schemas: what the model is asked to produce per batch, which field
// identifies the subject, and which defaults fill in when the model omits a
// declared field.

use serde_json::Value;

/// How parsed records are aligned with subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKey {
    /// Case-folded symmetric substring containment on the display name.
    Name,
    /// Exact equality on the trimmed, upper-cased identifier.
    Isin,
}

/// One declared output field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    /// JSON type shown in the schema block of the prompt ("number", "string",
    /// "string[]", ...).
    pub ty: &'static str,
    /// Short instruction rendered next to the field in the prompt.
    pub desc: &'static str,
    /// Fallback written on merge when a matching record omits this field.
    /// `None` means the field is simply absent from the merged enrichment.
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn new(name: &'static str, ty: &'static str, desc: &'static str) -> Self {
        Self {
            name,
            ty,
            desc,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// A complete enrichment task: persona, instructions, identity key and the
/// declared output fields. Pure data; the prompt builder renders it.
#[derive(Debug, Clone)]
pub struct EnrichmentSchema {
    /// One-line analyst persona, e.g. "an expert financial analyst".
    pub role: &'static str,
    /// Numbered task instructions, one step per element.
    pub steps: Vec<&'static str>,
    pub key: MatchKey,
    /// JSON property carrying the subject identity ("name", "company", "isin").
    pub key_field: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl EnrichmentSchema {
    /// Live-price radar refresh for tracked stocks: current market price plus
    /// recalculated exit/accumulation targets and a recommendation.
    pub fn stock_radar() -> Self {
        Self {
            role: "an expert financial analyst",
            steps: vec![
                "Use web search to find the REAL-TIME current market price for each stock. Do NOT use historical data.",
                "From the live price and recent market news, calculate an optimized exit price (realistic profit-taking level above the current price) and an accumulation price (strong support level or good entry point below or near the current price).",
                "Provide a brief recommendation (Buy, Sell, Hold, Accumulate).",
            ],
            key: MatchKey::Name,
            key_field: "name",
            fields: vec![
                FieldSpec::new("marketPrice", "number", "the live price you found"),
                FieldSpec::new("currency", "string", "e.g. EUR, USD, CHF"),
                FieldSpec::new("exitPrice", "number", "optimized sell target"),
                FieldSpec::new("accumulativePrice", "number", "optimized buy target"),
                FieldSpec::new("recommendation", "string", "Buy | Sell | Hold | Accumulate")
                    .with_default(Value::String("Hold".into())),
            ],
        }
    }

    /// Usual dividend payment months per company, historical pattern as
    /// fallback when no confirmed calendar is found.
    pub fn dividend_calendar() -> Self {
        Self {
            role: "a dividend calendar researcher",
            steps: vec![
                "Search broadly for dividend calendars covering each company.",
                "If confirmed payment dates exist for the current or next year, use them; otherwise fall back to the company's historical payment pattern.",
                "Translate all month names to English.",
                "Return a result for EVERY company in the list. Do not return an empty list.",
            ],
            key: MatchKey::Name,
            key_field: "name",
            fields: vec![FieldSpec::new(
                "paymentMonths",
                "string[]",
                "English month names, e.g. [\"January\", \"July\"]",
            )
            .with_default(Value::Array(vec![]))],
        }
    }

    /// Defensive-asset screen for health-sector companies tracked as a hedge
    /// against tech-sector volatility.
    pub fn health_sector() -> Self {
        Self {
            role: "an equity analyst screening defensive assets as a hedge against a potential tech-sector bubble burst",
            steps: vec![
                "Find the REAL-TIME current stock price for each company.",
                "Set a target price based on growth probability.",
                "Determine the buy signal: BUY NOW if the price is attractive or undervalued specifically for defensive rotation, ACCUMULATE if the price is fair, WAIT if the price is too high or overbought even for a defensive stock.",
                "Briefly explain why in the defensive note (e.g. low volatility and high dividend, or currently overvalued).",
            ],
            key: MatchKey::Name,
            key_field: "company",
            fields: vec![
                FieldSpec::new("currentPrice", "number", "live price"),
                FieldSpec::new("currency", "string", "e.g. EUR, USD, CHF"),
                FieldSpec::new("targetPrice", "number", "price target"),
                FieldSpec::new("buySignal", "string", "BUY NOW | ACCUMULATE | WAIT")
                    .with_default(Value::String("WAIT".into())),
                FieldSpec::new("defensiveNote", "string", "one short reason"),
            ],
        }
    }

    /// Per-line portfolio review keyed on ISIN: current price in EUR, an
    /// action derived from entry/exit levels, and two short free-text hints.
    pub fn portfolio_review() -> Self {
        Self {
            role: "a quantitative hedge-fund analyst",
            steps: vec![
                "All prices MUST be in euros; convert if the line trades in USD or GBP.",
                "Estimate an ideal entry price (strong support or intrinsic value) and a sell target (resistance or overvaluation).",
                "If the current price is at or below the entry price, the action is ACCUMULATE; at or above the sell target, SELL; in between, HOLD.",
                "Keep the forecast under 10 words and the optimization tip under 15 words.",
            ],
            key: MatchKey::Isin,
            key_field: "isin",
            fields: vec![
                FieldSpec::new("currentPrice", "number", "current price in EUR"),
                FieldSpec::new("action", "string", "ACCUMULATE | SELL | HOLD")
                    .with_default(Value::String("HOLD".into())),
                FieldSpec::new(
                    "forecast3to5Years",
                    "string",
                    "short format: 'Trend: [Bullish/Bearish/Sideways] | est. CAGR: [XX]% p.a.'",
                )
                .with_default(Value::String("-".into())),
                FieldSpec::new(
                    "optimizationTip",
                    "string",
                    "tactical format: 'Ideal entry: [XX]€ | Exit: [XX]€ | [short reason]'",
                )
                .with_default(Value::String("-".into())),
            ],
        }
    }
}
