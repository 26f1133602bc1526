// SPDX-License-Identifier: MIT

//! REST client for the hosted course table.
//!
//! The store exposes a PostgREST-style API: rows are addressed with query
//! filters (`id=eq.{id}`) and mutations return the affected rows when asked
//! to with `Prefer: return=representation`. Conflict and not-found outcomes
//! are detected structurally, from status codes, the provider's machine
//! error code and returned row counts. Upstream messages are never matched
//! as strings.

use crate::error::AppError;
use crate::models::{Course, CourseFields};
use serde::Deserialize;

/// Client for the external course table.
#[derive(Clone)]
pub struct CourseStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Error body returned by the store on failed operations.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    /// SQLSTATE-style machine code (e.g. "23505" for unique violations)
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Unique-constraint violation, as surfaced by the store.
const UNIQUE_VIOLATION: &str = "23505";

impl CourseStore {
    /// Create a new store client from the project URL and service key.
    pub fn new(store_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/rest/v1", store_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    fn courses_url(&self) -> String {
        format!("{}/courses", self.base_url)
    }

    /// Attach the credentials the store expects on every request.
    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// List all courses, in store order.
    pub async fn list(&self) -> Result<Vec<Course>, AppError> {
        let response = self
            .with_auth(self.http.get(self.courses_url()))
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Store request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Create a course; the store assigns the id.
    pub async fn create(&self, fields: &CourseFields) -> Result<Course, AppError> {
        let response = self
            .with_auth(self.http.post(self.courses_url()))
            .header("Prefer", "return=representation")
            .json(fields)
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Store request failed: {}", e)))?;

        let mut rows: Vec<Course> = self.check_response_json(response).await?;
        rows.pop()
            .ok_or_else(|| AppError::Service("Store returned no created row".to_string()))
    }

    /// Replace all writable fields of a course.
    ///
    /// The id is opaque; an unmatched filter comes back as an empty
    /// representation and surfaces as not-found.
    pub async fn update(&self, id: &str, fields: &CourseFields) -> Result<Course, AppError> {
        let url = format!(
            "{}?id=eq.{}",
            self.courses_url(),
            urlencoding::encode(id)
        );
        let response = self
            .with_auth(self.http.patch(&url))
            .header("Prefer", "return=representation")
            .json(fields)
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Store request failed: {}", e)))?;

        let mut rows: Vec<Course> = self.check_response_json(response).await?;
        rows.pop()
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))
    }

    /// Delete a course by id.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let url = format!(
            "{}?id=eq.{}",
            self.courses_url(),
            urlencoding::encode(id)
        );
        let response = self
            .with_auth(self.http.delete(&url))
            // Ask for the deleted rows back so a miss is distinguishable
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|e| AppError::Service(format!("Store request failed: {}", e)))?;

        let rows: Vec<Course> = self.check_response_json(response).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound(format!("Course {} not found", id)));
        }
        Ok(())
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.classify_failure(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Service(format!("Store JSON parse error: {}", e)))
    }

    fn classify_failure(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        let parsed: Option<StoreErrorBody> = serde_json::from_str(body).ok();
        let code = parsed.as_ref().and_then(|e| e.code.as_deref());

        if status == reqwest::StatusCode::CONFLICT || code == Some(UNIQUE_VIOLATION) {
            return AppError::Conflict("Course code already exists".to_string());
        }

        let message = parsed
            .and_then(|e| e.message)
            .unwrap_or_else(|| body.to_string());
        AppError::Service(format!("Store returned HTTP {}: {}", status, message))
    }
}
