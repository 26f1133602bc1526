//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup and carried in `AppState`; nothing
//! reads the environment after boot.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted store project (also serves the identity API)
    pub store_url: String,
    /// Service API key for the hosted store
    pub store_api_key: String,
    /// Shared secret the identity provider signs bearer tokens with (raw bytes)
    pub jwt_secret: Vec<u8>,
    /// CDN account (cloud) name
    pub cdn_cloud_name: String,
    /// CDN API key
    pub cdn_api_key: String,
    /// CDN API secret used to sign upload requests
    pub cdn_api_secret: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            store_url: env::var("STORE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("STORE_URL"))?,
            store_api_key: env::var("STORE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("STORE_API_KEY"))?,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET"))?
                .into_bytes(),
            cdn_cloud_name: env::var("CDN_CLOUD_NAME")
                .map_err(|_| ConfigError::Missing("CDN_CLOUD_NAME"))?,
            cdn_api_key: env::var("CDN_API_KEY")
                .map_err(|_| ConfigError::Missing("CDN_API_KEY"))?,
            cdn_api_secret: env::var("CDN_API_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("CDN_API_SECRET"))?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
                Err(_) => 1450,
            },
        })
    }

    /// Fixed configuration for tests.
    pub fn test_default() -> Self {
        Self {
            store_url: "http://localhost:54321".to_string(),
            store_api_key: "test_api_key".to_string(),
            jwt_secret: b"test_jwt_secret_32_bytes_minimum".to_vec(),
            cdn_cloud_name: "testcloud".to_string(),
            cdn_api_key: "test_cdn_key".to_string(),
            cdn_api_secret: "test_cdn_secret".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 1450,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Malformed environment variable: {0}")]
    Invalid(&'static str),
}
