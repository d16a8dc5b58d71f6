//! Configuration loading and typed config structures for the Yak Shop.
//!
//! The configuration lives in `yakshop-config.yaml` at the project root.
//! Every field has a default, so an empty or missing file yields a working
//! shop listening on `0.0.0.0:8080` and reading `herd.yaml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level shop configuration.
///
/// Mirrors the structure of `yakshop-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShopConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Where the herd snapshot comes from.
    #[serde(default)]
    pub herd: HerdSection,

    /// Query limits.
    #[serde(default)]
    pub shop: ShopSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `YAKSHOP_HOST` overrides `server.host`
    /// - `YAKSHOP_PORT` overrides `server.port`
    /// - `YAKSHOP_HERD_FILE` overrides `herd.path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Same as [`ShopConfig::from_file`] for a file that exists.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        info!(path = %path.display(), "config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override selected values with environment variables when set.
    ///
    /// An unparseable `YAKSHOP_PORT` is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("YAKSHOP_HOST") {
            self.server.host = val;
        }
        if let Some(port) = std::env::var("YAKSHOP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("YAKSHOP_HERD_FILE") {
            self.herd.path = PathBuf::from(val);
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Herd snapshot location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HerdSection {
    /// Path to the herd YAML file, relative to the working directory.
    #[serde(default = "default_herd_path")]
    pub path: PathBuf,
}

impl Default for HerdSection {
    fn default() -> Self {
        Self {
            path: default_herd_path(),
        }
    }
}

/// Query limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShopSection {
    /// Largest day offset the API accepts. Accruals replay every day up to
    /// the requested one, so this bounds the cost of a single request.
    #[serde(default = "default_max_day")]
    pub max_day: u32,
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            max_day: default_max_day(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_herd_path() -> PathBuf {
    PathBuf::from("herd.yaml")
}

const fn default_max_day() -> u32 {
    36_500
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ShopConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.herd.path, PathBuf::from("herd.yaml"));
        assert_eq!(config.shop.max_day, 36_500);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9090

herd:
  path: "data/herd.yaml"

shop:
  max_day: 500

logging:
  level: "debug"
  json: true
"#;

        let config = ShopConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.shop.max_day, 500);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        if std::env::var("YAKSHOP_HERD_FILE").is_err() {
            assert_eq!(config.herd.path, PathBuf::from("data/herd.yaml"));
        }
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "shop:\n  max_day: 7\n";
        let config = ShopConfig::parse(yaml).ok().unwrap_or_default();

        // Limit is overridden
        assert_eq!(config.shop.max_day, 7);
        // Everything else uses defaults
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(ShopConfig::parse("").is_ok());
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let result = ShopConfig::parse("shop: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-config.yaml");
        let config = ShopConfig::load_or_default(&path).ok().unwrap_or_default();
        assert_eq!(config.shop.max_day, 36_500);
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("yakshop-config.yaml");
        if path.exists() {
            let config = ShopConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
