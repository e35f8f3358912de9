//! API configuration

use serde::Deserialize;

/// API configuration
///
/// Every field has a default, so any subset may be set through the
/// environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum connections in the database pool
    pub db_max_connections: u32,
    /// Base URL of the address lookup service
    pub address_lookup_url: String,
    /// Timeout for a single address lookup, in seconds
    pub address_lookup_timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/customers".to_string(),
            db_max_connections: 10,
            address_lookup_url: "http://localhost:8081/addresses".to_string(),
            address_lookup_timeout_secs: 10,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
