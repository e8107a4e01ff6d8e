//! Quote API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

/// Quote API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP server port
    pub port: u16,

    /// Root directory for persisted quotes
    pub store_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("QUOTE_API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_API_PORT".to_string()))?,

            store_dir: env::var("QUOTE_STORE_DIR")
                .unwrap_or_else(|_| "./quotes".to_string())
                .into(),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Relies on the variables not being set in the test environment
        let config = ApiConfig::load().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.store_dir, PathBuf::from("./quotes"));
    }
}
