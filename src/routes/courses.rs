// SPDX-License-Identifier: MIT

//! Course CRUD routes.
//!
//! Every handler validates its input, issues exactly one store call and
//! maps the outcome to a status code. The store is the source of truth;
//! nothing is cached here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

use crate::error::Result;
use crate::models::{Course, CreateCourseRequest};
use crate::AppState;

/// Read-only course routes (no auth).
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/courses", get(list_courses))
}

/// Mutating course routes. The auth middleware is applied in routes/mod.rs.
pub fn mutation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/courses", post(create_course))
        .route("/courses/{id}", put(update_course).delete(delete_course))
}

/// List all courses, in the order the store returns them.
async fn list_courses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Course>>> {
    let courses = state.store.list().await?;
    Ok(Json(courses))
}

/// Create a course; the store assigns the id and enforces code uniqueness.
async fn create_course(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>)> {
    let fields = body.validate()?;

    let course = state.store.create(&fields).await?;

    tracing::info!(id = %course.id, code = %course.code, "Course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// Full replace of the five writable fields.
///
/// The id is opaque to this service; only the store knows whether it
/// matches a row.
async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<Json<Course>> {
    let fields = body.validate()?;

    let course = state.store.update(&id, &fields).await?;

    tracing::info!(id = %id, "Course updated");
    Ok(Json(course))
}

/// Delete a course. Success is a plain-text confirmation.
async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<&'static str> {
    state.store.delete(&id).await?;

    tracing::info!(id = %id, "Course deleted");
    Ok("Course deleted successfully")
}
