// SPDX-License-Identifier: MIT

//! Registration and login routes.
//!
//! Both endpoints are unauthenticated entry points; all credential
//! handling happens inside the identity provider.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Credentials;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Register a new user with the identity provider.
///
/// Returns 201 without a session; the client logs in separately.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Credentials>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let (username, password) = body.validate()?;

    state.identity.register(&username, &password).await?;

    tracing::info!(username = %username, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Log in; returns the provider-issued bearer token.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Credentials>,
) -> Result<Json<LoginResponse>> {
    let (username, password) = body.validate()?;

    let token = state.identity.login(&username, &password).await?;

    tracing::info!(username = %username, "User logged in");
    Ok(Json(LoginResponse { token }))
}
