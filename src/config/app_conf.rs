use std::env;
use std::str::FromStr;
use tracing::{info, warn};

use crate::config::ConfigError;

/// Where records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process lifetime only
    Memory,
    Mongo,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            other => Err(ConfigError::InvalidValue(format!(
                "STORAGE_BACKEND must be 'memory' or 'mongo', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub log_to_files: bool,
}

impl AppConfig {
    /// Reads APP_HOST, APP_PORT, STORAGE_BACKEND and LOG_TO_FILES.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue(format!("Invalid APP_PORT value: {}", raw)))?,
            Err(_) => 8080,
        };
        let storage = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => {
                warn!("STORAGE_BACKEND not set, keeping records in memory");
                StorageBackend::Memory
            }
        };
        let log_to_files = env::var("LOG_TO_FILES")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let config = AppConfig { host, port, storage, log_to_files };
        info!(host = %config.host, port = config.port, storage = ?config.storage, "App configuration loaded");
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            storage: StorageBackend::Memory,
            log_to_files: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!(" MongoDB ".parse::<StorageBackend>().unwrap(), StorageBackend::Mongo);
        assert!("postgres".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(!config.log_to_files);
    }
}
