// tests/config_load.rs
// Run single-threaded guards via serial_test because we mutate process env.

use std::io::Write;
use std::{env, fs};

use portfolio_enricher::EnricherConfig;
use serial_test::serial;

/// Small RAII helper to snapshot & restore env vars in each test.
struct EnvSnapshot {
    saved: Vec<(String, Option<String>)>,
}
impl EnvSnapshot {
    fn set(pairs: &[(&str, Option<&str>)]) -> Self {
        let mut saved = Vec::with_capacity(pairs.len());
        for (k, v) in pairs {
            let key = k.to_string();
            saved.push((key.clone(), env::var(k).ok()));
            match v {
                Some(val) => env::set_var(&key, val),
                None => env::remove_var(&key),
            }
        }
        Self { saved }
    }
}
impl Drop for EnvSnapshot {
    fn drop(&mut self) {
        for (k, maybe_v) in self.saved.drain(..) {
            match maybe_v {
                Some(v) => env::set_var(&k, v),
                None => env::remove_var(&k),
            }
        }
    }
}

fn write_cfg(name: &str, body: &str) -> std::path::PathBuf {
    let path = env::temp_dir().join(format!("enricher_{}_{}.json", name, std::process::id()));
    let mut f = fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
#[serial]
fn env_indirection_resolves_api_key() {
    let _env = EnvSnapshot::set(&[("GEMINI_API_KEY", Some("test-key-123"))]);
    let path = write_cfg("env", r#"{"enabled": true, "api_key": "ENV"}"#);

    let cfg = EnricherConfig::load_from_file(&path).unwrap();
    assert!(cfg.enabled);
    assert_eq!(cfg.api_key, "test-key-123");
    // Defaults fill in.
    assert_eq!(cfg.model, "gemini-2.5-flash");
    assert_eq!(cfg.batch_size, 3);
    assert_eq!(cfg.batch_delay_ms, 6000);

    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn missing_env_key_is_an_error() {
    let _env = EnvSnapshot::set(&[("GEMINI_API_KEY", None)]);
    let path = write_cfg("missing", r#"{"enabled": true, "api_key": "env"}"#);

    let err = EnricherConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY"));

    let _ = fs::remove_file(path);
}

#[test]
#[serial]
fn zero_batch_size_is_sanitized() {
    let path = write_cfg(
        "zero",
        r#"{"enabled": false, "api_key": "literal-key", "batch_size": 0, "model": "  "}"#,
    );

    let cfg = EnricherConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.batch_size, 3);
    assert_eq!(cfg.model, "gemini-2.5-flash");

    let opts = cfg.refresh_options();
    assert_eq!(opts.batch_size, 3);
    assert_eq!(opts.batch_delay.as_millis(), 6000);

    let _ = fs::remove_file(path);
}
