// SPDX-License-Identifier: MIT

//! Image upload route.
//!
//! Receives a multipart `image` field in memory and forwards the bytes to
//! the CDN. Size and content type are whatever the CDN will accept; the
//! bytes are never written to disk here.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::AppState;

/// Upload route. The auth middleware is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/upload-image", post(upload_image))
}

#[derive(Serialize)]
pub struct UploadResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Forward the uploaded image to the CDN and return its public URL.
async fn upload_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read image field: {}", e)))?;

        tracing::debug!(bytes = data.len(), "Forwarding image to CDN");
        let image_url = state.cdn.upload_image(data.to_vec()).await?;

        return Ok(Json(UploadResponse { image_url }));
    }

    Err(AppError::Validation(
        "Multipart field 'image' is required".to_string(),
    ))
}
