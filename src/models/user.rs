//! Registration/login request body.

use crate::error::AppError;
use serde::Deserialize;

/// Credentials relayed to the identity provider.
///
/// The password is opaque to this service: it is forwarded as-is and never
/// hashed or stored locally.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Used as the email identity by the provider
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Require both fields present and non-empty.
    pub fn validate(self) -> Result<(String, String), AppError> {
        let username = self
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Field 'username' is required".to_string()))?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::Validation("Field 'password' is required".to_string()))?;
        Ok((username, password))
    }
}
