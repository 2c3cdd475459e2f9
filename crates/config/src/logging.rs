//! Tracing subscriber setup shared by binaries and integration tests.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub active: bool,
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format: text, json or pretty
    pub format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            active: true,
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Installs a global `fmt` subscriber. `RUST_LOG` overrides the configured level.
///
/// Returns `false` when logging is inactive or a subscriber was already set.
pub fn init_tracing(config: &LoggerConfig) -> bool {
    if !config.active {
        return false;
    }

    let level = config.level.as_str();
    let filter_spec = format!("{level},spn={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_spec));

    let builder = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    match config.format.to_ascii_lowercase().as_str() {
        "json" => builder.json().try_init().is_ok(),
        "pretty" => builder.pretty().try_init().is_ok(),
        _ => builder.try_init().is_ok(),
    }
}
