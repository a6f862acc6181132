//! API configuration

use std::path::PathBuf;

use infra_store::DataFiles;
use serde::Deserialize;

/// Prefix of the environment variables read by [`ApiConfig::from_env`]
pub const ENV_PREFIX: &str = "ANALYTICS";

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding the four JSON data files
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `ANALYTICS_*` environment variables
    ///
    /// Unset variables keep their default values.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned())?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Data file locations under [`ApiConfig::data_dir`]
    pub fn data_files(&self) -> DataFiles {
        DataFiles::in_dir(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.data_files().claims.starts_with("data"));
    }
}
