// SPDX-License-Identifier: MIT

//! Course CRUD behavior against a mocked store.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn course_json(id: &str, code: &str) -> Value {
    json!({
        "id": id,
        "name": "Databases",
        "code": code,
        "description": "Relational model, query planning",
        "credit": 3.0,
        "image": "https://cdn.example/db.png"
    })
}

fn course_request(code: &str) -> Value {
    json!({
        "name": "Databases",
        "code": code,
        "description": "Relational model, query planning",
        "credit": 3.0,
        "image": "https://cdn.example/db.png"
    })
}

async fn authed_request(
    app: axum::Router,
    token: &str,
    method_name: &str,
    uri: &str,
    body: Option<Value>,
) -> axum::response::Response {
    let mut builder = Request::builder()
        .method(method_name)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

#[tokio::test]
async fn test_list_courses_passes_through_store_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/courses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([course_json("2", "CS245"), course_json("1", "CS145")])),
        )
        .mount(&server)
        .await;

    let (app, _) = common::create_test_app(&server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/courses")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&common::body_string(response).await).unwrap();
    let courses = body.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["code"], "CS245");
    assert_eq!(courses[1]["code"], "CS145");
}

#[tokio::test]
async fn test_list_courses_store_failure_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/courses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let (app, _) = common::create_test_app(&server.uri());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/courses")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // Upstream detail must not leak to the client
    let body = common::body_string(response).await;
    assert!(!body.contains("upstream down"));
}

#[tokio::test]
async fn test_create_course_missing_field_never_reaches_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/courses"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    for missing in ["name", "code", "description", "credit", "image"] {
        let mut body = course_request("CS145");
        body.as_object_mut().unwrap().remove(missing);

        let response =
            authed_request(app.clone(), &token, "POST", "/courses", Some(body)).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "missing '{}' should be rejected",
            missing
        );
    }

    server.verify().await;
}

#[tokio::test]
async fn test_create_course_returns_created_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/courses"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([course_json("7", "CS145")])))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(
        app,
        &token,
        "POST",
        "/courses",
        Some(course_request("CS145")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = serde_json::from_str(&common::body_string(response).await).unwrap();
    assert_eq!(body["id"], "7");
    assert_eq!(body["code"], "CS145");
}

#[tokio::test]
async fn test_create_duplicate_code_is_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/courses"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"courses_code_key\""
        })))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(
        app,
        &token,
        "POST",
        "/courses",
        Some(course_request("CS145")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_string(response).await;
    assert!(body.contains("Course code already exists"));
}

#[tokio::test]
async fn test_update_nonexistent_course_is_404() {
    let server = MockServer::start().await;
    // An id filter matching nothing yields an empty representation
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/courses"))
        .and(query_param("id", "eq.999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(
        app,
        &token,
        "PUT",
        "/courses/999",
        Some(course_request("CS145")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_course_returns_updated_record() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/courses"))
        .and(query_param("id", "eq.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([course_json("7", "CS245")])))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(
        app,
        &token,
        "PUT",
        "/courses/7",
        Some(course_request("CS245")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&common::body_string(response).await).unwrap();
    assert_eq!(body["id"], "7");
    assert_eq!(body["code"], "CS245");
}

#[tokio::test]
async fn test_update_missing_field_is_validation_error() {
    let (app, state) = common::create_test_app("http://127.0.0.1:9");
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let mut body = course_request("CS145");
    body.as_object_mut().unwrap().remove("description");

    let response = authed_request(app, &token, "PUT", "/courses/7", Some(body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_nonexistent_course_is_404() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/courses"))
        .and(query_param("id", "eq.999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(app, &token, "DELETE", "/courses/999", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_opaque_id_with_no_match_is_404() {
    let server = MockServer::start().await;
    // Ids are opaque: a non-numeric one still reaches the store filter and
    // an unmatched filter means not-found, never a malformed request.
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/courses"))
        .and(query_param("id", "eq.not-a-number"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(app, &token, "DELETE", "/courses/not-a-number", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_opaque_id_with_no_match_is_404() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/courses"))
        .and(query_param("id", "eq.8f9b2c4d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(
        app,
        &token,
        "PUT",
        "/courses/8f9b2c4d",
        Some(course_request("CS145")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_course_returns_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/courses"))
        .and(query_param("id", "eq.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([course_json("7", "CS145")])))
        .mount(&server)
        .await;

    let (app, state) = common::create_test_app(&server.uri());
    let token = common::create_test_jwt("user-1", &state.config.jwt_secret, 3600);

    let response = authed_request(app, &token, "DELETE", "/courses/7", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert_eq!(body, "Course deleted successfully");
}
