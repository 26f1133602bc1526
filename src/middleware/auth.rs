// SPDX-License-Identifier: MIT

//! Bearer-token authentication middleware.
//!
//! Verifies provider-issued session tokens locally against the shared
//! project secret. One stateless check per request: no refresh, no
//! revocation list, no expiry grace period.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (identity-provider user id)
    pub sub: String,
    /// Email identity, when the provider includes it
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
}

/// Middleware that requires a valid bearer token.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization header missing".to_string()))?;

    // Only the "Bearer <token>" scheme is accepted; a bare scheme or a
    // different scheme carries no usable token.
    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Access token required".to_string()))?;

    let key = DecodingKey::from_secret(&state.config.jwt_secret);
    let mut validation = Validation::new(Algorithm::HS256);
    // Provider tokens carry an audience claim we don't pin.
    validation.validate_aud = false;

    let token_data = decode::<Claims>(token, &key, &validation)
        .map_err(|_| AppError::Forbidden("Invalid or expired token".to_string()))?;

    // Downstream handlers can read the verified claims if they need them.
    request.extensions_mut().insert(token_data.claims);

    Ok(next.run(request).await)
}
