//! Structured logging via `tracing`.
//!
//! Output always goes to stderr so log lines never interleave with the
//! interactive menus on stdout. Level and format come from the config file
//! with CLI flags taking precedence.

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::ConsoleError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
        }
    }
}

/// Initialize the logging system. CLI overrides beat the config file; the
/// `AGENTOPS_LOG` environment variable beats both.
pub fn init_logging(
    config: &LoggingConfig,
    cli_level: Option<&str>,
    cli_format: Option<&str>,
) -> Result<(), ConsoleError> {
    let level = cli_level.unwrap_or(&config.level);
    let filter = match std::env::var("AGENTOPS_LOG") {
        Ok(spec) if !spec.is_empty() => EnvFilter::try_new(spec),
        _ => EnvFilter::try_new(level),
    }
    .map_err(|e| ConsoleError::Config(format!("Invalid log level: {}", e)))?;

    let format = cli_format.unwrap_or(&config.format);
    let base_subscriber = Registry::default().with(filter);
    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
