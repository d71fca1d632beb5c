use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use crate::RequestMethod;

pub const DEFAULT_CONFIG_FILE: &str = "ferrous-doh.toml";

/// Main configuration structure for the `doh` command
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-doh.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied last, then the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.url {
            self.resolver.url = url;
        }
        if let Some(method) = overrides.method {
            self.resolver.method = method;
        }
        if let Some(timeout) = overrides.timeout {
            self.resolver.timeout = timeout;
        }
        if !overrides.headers.is_empty() {
            self.resolver.headers = overrides.headers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.resolver.url.as_str();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "DoH endpoint must be an http:// or https:// URL, got '{}'",
                url
            )));
        }

        for name in self.resolver.headers.keys() {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Header names cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub method: Option<RequestMethod>,
    pub timeout: Option<u64>,
    pub headers: BTreeMap<String, String>,
    pub log_level: Option<String>,
}
