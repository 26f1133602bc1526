//! Course record and request bodies.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// A course record as held by the external store.
///
/// The store is the sole owner of these rows; this service never retains a
/// copy beyond the lifetime of a single response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned identifier, treated as opaque here
    pub id: String,
    pub name: String,
    /// Unique course code (uniqueness enforced by the store)
    pub code: String,
    pub description: String,
    pub credit: f64,
    /// Public image URL (usually produced by the upload endpoint)
    pub image: String,
}

/// The five writable course fields, validated and ready to send upstream.
#[derive(Debug, Clone, Serialize)]
pub struct CourseFields {
    pub name: String,
    pub code: String,
    pub description: String,
    pub credit: f64,
    pub image: String,
}

/// Request body for course create/update.
///
/// Fields are optional at the serde level so that a missing field surfaces
/// as a validation error rather than a body-deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub credit: Option<f64>,
    pub image: Option<String>,
}

impl CreateCourseRequest {
    /// Require all five fields present and all strings non-empty.
    pub fn validate(self) -> Result<CourseFields, AppError> {
        let name = require_string("name", self.name)?;
        let code = require_string("code", self.code)?;
        let description = require_string("description", self.description)?;
        let credit = self
            .credit
            .ok_or_else(|| AppError::Validation("Field 'credit' is required".to_string()))?;
        let image = require_string("image", self.image)?;

        Ok(CourseFields {
            name,
            code,
            description,
            credit,
            image,
        })
    }
}

fn require_string(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "Field '{}' is required",
            field
        ))),
    }
}
