// src/config.rs
use std::time::Duration;
use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::runner::RefreshOptions;

fn default_model() -> String {
    crate::provider::gemini::DEFAULT_MODEL.to_string()
}
fn default_batch_size() -> usize {
    3
}
fn default_batch_delay_ms() -> u64 {
    6000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnricherConfig {
    pub enabled: bool,
    /// "ENV" means: read from GEMINI_API_KEY.
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: "ENV".to_string(),
            model: default_model(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
        }
    }
}

impl EnricherConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)?;
        let mut cfg: EnricherConfig = serde_json::from_str(&data)?;

        // Resolve api key if "ENV"
        if cfg.api_key.trim().eq_ignore_ascii_case("env") {
            cfg.api_key = env::var("GEMINI_API_KEY")
                .map_err(|_| anyhow::anyhow!("Missing GEMINI_API_KEY env var"))?;
        }

        // Sanitize: a zero batch size would stall partitioning.
        if cfg.batch_size == 0 {
            cfg.batch_size = default_batch_size();
        }
        if cfg.model.trim().is_empty() {
            cfg.model = default_model();
        }

        Ok(cfg)
    }

    pub fn refresh_options(&self) -> RefreshOptions {
        RefreshOptions {
            batch_size: self.batch_size,
            batch_delay: Duration::from_millis(self.batch_delay_ms),
        }
    }
}
