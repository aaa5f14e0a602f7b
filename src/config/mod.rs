//! Console configuration.
//!
//! Merge order, lowest to highest precedence: built-in defaults, the XDG
//! config file (or an explicit `--config` path), `AGENTOPS_*` environment
//! variables, then CLI flags applied by the caller.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;
use crate::logging::LoggingConfig;
use crate::transport::AttachStyle;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8283";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base address of the agent service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; None leaves the client default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Which attach/detach route convention to try first.
    #[serde(default)]
    pub attach_style: AttachStyle,

    /// How many messages to fetch when viewing history.
    #[serde(default = "default_message_limit")]
    pub message_limit: usize,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_message_limit() -> usize {
    50
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            attach_style: AttachStyle::default(),
            message_limit: default_message_limit(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config file path (~/.config/agentops/config.toml).
    pub fn xdg_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "agentops", "agentops")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration, optionally from an explicit file path. The
    /// explicit path must exist; the XDG default is optional.
    pub fn load(explicit: Option<&Path>) -> Result<ConsoleConfig, ConsoleError> {
        let mut builder = Config::builder();
        match explicit {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()));
            }
            None => {
                if let Some(path) = Self::xdg_config_path() {
                    builder = builder.add_source(File::from(path).required(false));
                }
            }
        }
        builder = builder.add_source(Environment::with_prefix("AGENTOPS").separator("__"));

        let merged = builder
            .build()
            .map_err(|e| ConsoleError::Config(format!("Failed to load config: {}", e)))?;
        merged
            .try_deserialize()
            .map_err(|e| ConsoleError::Config(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_local_service() {
        let config = ConsoleConfig::default();
        assert_eq!(config.base_url, "http://localhost:8283");
        assert_eq!(config.attach_style, AttachStyle::Query);
        assert_eq!(config.message_limit, 50);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"http://agents.internal:9000\"\nattach_style = \"path\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "http://agents.internal:9000");
        assert_eq!(config.attach_style, AttachStyle::Path);
        assert_eq!(config.message_limit, 50);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = ConfigLoader::load(Some(Path::new("/nonexistent/agentops.toml"))).unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }
}
