//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub store_connection_string: String,
    pub payment_base_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// The connection string and the upstream base URL fall back to local
    /// development defaults; everything else about the store (database name,
    /// collection name) is a fixed constant.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let store_connection_string = env::var("MONGO_CONNECTION_STRING")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let payment_base_url = env::var("PAYMENT_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        Ok(Self {
            port,
            store_connection_string,
            payment_base_url,
        })
    }
}
