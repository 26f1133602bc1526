// SPDX-License-Identifier: MIT

//! Client for the store's built-in identity provider.
//!
//! Registration and login are straight relays: the provider owns the user
//! lifecycle, hashes passwords and issues the bearer tokens that the auth
//! middleware later verifies against the shared project secret. Failures
//! are classified by the provider's machine-readable error codes, never by
//! matching human-readable messages.

use crate::error::AppError;
use serde::Deserialize;

/// Client for the hosted identity API.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Successful login response from the provider.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Error body returned by the provider.
///
/// Older provider versions report `error`, newer ones `error_code`; both
/// carry the same machine-readable kind.
#[derive(Debug, Default, Deserialize)]
struct ProviderError {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderError {
    fn kind(&self) -> Option<&str> {
        self.error_code.as_deref().or(self.error.as_deref())
    }
}

impl IdentityClient {
    /// Create a new identity client from the project URL and service key.
    pub fn new(store_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/auth/v1", store_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    /// Register a new user. No session is issued on success.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), AppError> {
        let url = format!("{}/signup", self.base_url);
        let body = serde_json::json!({ "email": email, "password": password });

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Identity request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error: ProviderError = response.json().await.unwrap_or_default();
        match error.kind() {
            Some("user_already_exists") | Some("email_exists") => {
                Err(AppError::Conflict("Username already exists".to_string()))
            }
            kind => Err(AppError::Service(format!(
                "Identity provider returned HTTP {} ({})",
                status,
                kind.unwrap_or("unknown")
            ))),
        }
    }

    /// Log a user in; returns the provider-issued bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let url = format!("{}/token?grant_type=password", self.base_url);
        let body = serde_json::json!({ "email": email, "password": password });

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Identity request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let token: TokenResponse = response
                .json()
                .await
                .map_err(|e| AppError::Service(format!("Identity JSON parse error: {}", e)))?;
            return Ok(token.access_token);
        }

        let error: ProviderError = response.json().await.unwrap_or_default();
        match error.kind() {
            Some("invalid_credentials") | Some("invalid_grant") => {
                Err(AppError::AuthFailed("Invalid credentials".to_string()))
            }
            kind => Err(AppError::Service(format!(
                "Identity provider returned HTTP {} ({})",
                status,
                kind.unwrap_or("unknown")
            ))),
        }
    }
}
