use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// MongoDB configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoConfig {
    /// MongoDB connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Username for authentication (optional)
    pub username: Option<String>,
    /// Password for authentication (optional)
    pub password: Option<String>,
    pub lead_collection: String,
    pub quote_collection: String,
    pub testimonial_collection: String,
    /// Holds the integer id sequences
    pub counter_collection: String,
    /// Connection pool size
    pub pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl MongoConfig {
    /// Load MongoDB configuration from environment variables
    ///
    /// MONGO_URI and MONGO_DATABASE are required. MONGO_USERNAME/MONGO_PASSWORD,
    /// the MONGO_*_COLLECTION names, MONGO_POOL_SIZE and MONGO_CONNECTION_TIMEOUT
    /// fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading MongoDB configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MongoConfig::default();
        let required = |key: &str| {
            lookup(key).ok_or_else(|| {
                error!("{} environment variable not found", key);
                ConfigError::EnvVarNotFound(key.to_string())
            })
        };
        let collection = |key: &str, fallback: String| lookup(key).unwrap_or(fallback);

        let uri = required("MONGO_URI")?;
        let database = required("MONGO_DATABASE")?;
        debug!("MongoDB database: {}", database);

        let username = lookup("MONGO_USERNAME");
        let password = lookup("MONGO_PASSWORD");
        debug!(has_username = username.is_some(), has_password = password.is_some(), "MongoDB credentials");

        let config = MongoConfig {
            uri,
            database,
            username,
            password,
            lead_collection: collection("MONGO_LEAD_COLLECTION", defaults.lead_collection),
            quote_collection: collection("MONGO_QUOTE_COLLECTION", defaults.quote_collection),
            testimonial_collection: collection("MONGO_TESTIMONIAL_COLLECTION", defaults.testimonial_collection),
            counter_collection: collection("MONGO_COUNTER_COLLECTION", defaults.counter_collection),
            pool_size: parse_or(&lookup, "MONGO_POOL_SIZE", defaults.pool_size)?,
            connection_timeout_secs: parse_or(&lookup, "MONGO_CONNECTION_TIMEOUT", defaults.connection_timeout_secs)?,
        };

        config.validate()?;
        info!(
            leads = %config.lead_collection,
            quotes = %config.quote_collection,
            testimonials = %config.testimonial_collection,
            "MongoDB configuration loaded"
        );
        Ok(config)
    }

    /// Create MongoConfig for testing
    pub fn from_test_env() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "or_moving_test".to_string(),
            username: None,
            password: None,
            lead_collection: "test_leads".to_string(),
            quote_collection: "test_price_quotes".to_string(),
            testimonial_collection: "test_testimonials".to_string(),
            counter_collection: "test_counters".to_string(),
            pool_size: 2,
            connection_timeout_secs: 2,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.uri.is_empty() {
            error!("MongoDB URI is empty");
            return Err(ConfigError::ValidationError("MongoDB URI cannot be empty".to_string()));
        }

        if self.database.is_empty() {
            error!("MongoDB database is empty");
            return Err(ConfigError::ValidationError("MongoDB database cannot be empty".to_string()));
        }

        for (key, name) in [
            ("lead", &self.lead_collection),
            ("quote", &self.quote_collection),
            ("testimonial", &self.testimonial_collection),
            ("counter", &self.counter_collection),
        ] {
            if name.is_empty() {
                error!("MongoDB {} collection name is empty", key);
                return Err(ConfigError::ValidationError(format!("MongoDB {} collection cannot be empty", key)));
            }
        }

        if self.pool_size == 0 {
            error!("MongoDB pool size is 0");
            return Err(ConfigError::ValidationError("MongoDB pool size must be greater than 0".to_string()));
        }

        if self.connection_timeout_secs == 0 {
            error!("MongoDB connection timeout is 0");
            return Err(ConfigError::ValidationError("MongoDB connection timeout must be greater than 0".to_string()));
        }

        if matches!(self.username.as_deref(), Some("")) || matches!(self.password.as_deref(), Some("")) {
            error!("MongoDB credentials are set but empty");
            return Err(ConfigError::ValidationError("MongoDB credentials cannot be empty if set".to_string()));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, fallback: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            error!("Invalid {} value: {}", key, raw);
            ConfigError::InvalidValue(format!("Invalid {} value: {}", key, raw))
        }),
        None => {
            warn!("{} not set, using default: {}", key, fallback);
            Ok(fallback)
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "or_moving".to_string(),
            username: None,
            password: None,
            lead_collection: "leads".to_string(),
            quote_collection: "price_quotes".to_string(),
            testimonial_collection: "testimonials".to_string(),
            counter_collection: "counters".to_string(),
            pool_size: 10,
            connection_timeout_secs: 5,
        }
    }
}
