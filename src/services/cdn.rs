// SPDX-License-Identifier: MIT

//! Client for the image-hosting CDN.
//!
//! Uploads are signed requests: the parameter string is hashed together
//! with the API secret (SHA-256) and the CDN checks the signature before
//! accepting the bytes. Only the returned public URL leaves this service;
//! the image bytes are never persisted locally.

use crate::error::AppError;
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// All course images land under one folder on the CDN.
const UPLOAD_FOLDER: &str = "courses";

/// Client for the hosted image CDN.
#[derive(Clone)]
pub struct CdnClient {
    http: reqwest::Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

/// Successful upload response from the CDN.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CdnClient {
    /// Create a new CDN client for an account.
    pub fn new(cloud_name: &str, api_key: &str, api_secret: &str) -> Self {
        Self::with_base_url("https://api.cloudinary.com/v1_1", cloud_name, api_key, api_secret)
    }

    /// Create a client against a non-default API endpoint (used by tests).
    pub fn with_base_url(
        base_url: &str,
        cloud_name: &str,
        api_key: &str,
        api_secret: &str,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }

    /// Upload image bytes; returns the CDN-assigned public URL.
    pub async fn upload_image(&self, data: Vec<u8>) -> Result<String, AppError> {
        let timestamp = chrono::Utc::now().timestamp();
        let signature = self.sign(timestamp);

        let file_part = reqwest::multipart::Part::bytes(data).file_name("upload");
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("folder", UPLOAD_FOLDER)
            .text("signature_algorithm", "sha256")
            .text("signature", signature);

        let url = format!("{}/{}/image/upload", self.base_url, self.cloud_name);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Service(format!("CDN request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Service(format!(
                "CDN returned HTTP {}: {}",
                status, body
            )));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::Service(format!("CDN JSON parse error: {}", e)))?;

        Ok(uploaded.secure_url)
    }

    /// Signature over the signable parameters plus the API secret.
    ///
    /// The CDN expects the parameters sorted by name, joined with `&`, with
    /// the secret appended before hashing. Only `folder` and `timestamp`
    /// are signable here.
    fn sign(&self, timestamp: i64) -> String {
        let payload = format!(
            "folder={}&timestamp={}{}",
            UPLOAD_FOLDER, timestamp, self.api_secret
        );
        let digest = Sha256::digest(payload.as_bytes());
        hex::encode(digest)
    }
}
