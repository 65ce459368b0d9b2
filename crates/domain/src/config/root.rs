use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::fetch::FetchConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "memocache.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/memocache/config.toml";

/// Main configuration structure for memocache
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Bounded cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Remote source settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. memocache.toml in current directory
    /// 3. /etc/memocache/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied last, then the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(capacity) = overrides.capacity {
            self.cache.capacity = capacity;
        }
        if overrides.case_insensitive_keys {
            self.cache.case_insensitive_keys = true;
        }
        if let Some(latency) = overrides.latency_ms {
            self.fetch.latency_ms = latency;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.capacity == 0 {
            return Err(ConfigError::Validation(
                "Cache capacity must be greater than 0".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Unknown log format '{}' (expected 'text' or 'json')",
                    other
                )))
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub capacity: Option<usize>,
    pub case_insensitive_keys: bool,
    pub latency_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}
