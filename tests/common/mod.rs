// SPDX-License-Identifier: MIT

use course_catalog::config::Config;
use course_catalog::routes::create_router;
use course_catalog::services::{CdnClient, CourseStore, IdentityClient};
use course_catalog::AppState;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;

/// Create a test app whose external clients all point at `upstream_url`
/// (normally a wiremock server). Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(upstream_url: &str) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();

    let store = CourseStore::new(upstream_url, &config.store_api_key);
    let identity = IdentityClient::new(upstream_url, &config.store_api_key);
    let cdn = CdnClient::with_base_url(
        upstream_url,
        &config.cdn_cloud_name,
        &config.cdn_api_key,
        &config.cdn_api_secret,
    );

    let state = Arc::new(AppState {
        config,
        store,
        identity,
        cdn,
    });

    (create_router(state.clone()), state)
}

/// Mint a bearer token signed with the test secret.
///
/// `ttl_secs` may be negative to produce an already-expired token.
#[allow(dead_code)]
pub fn create_test_jwt(sub: &str, signing_key: &[u8], ttl_secs: i64) -> String {
    #[derive(Serialize)]
    struct Claims {
        sub: String,
        email: Option<String>,
        exp: usize,
    }

    let exp = (chrono::Utc::now().timestamp() + ttl_secs).max(0) as usize;
    let claims = Claims {
        sub: sub.to_string(),
        email: Some(format!("{}@example.edu", sub)),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap()
}

/// Collect a response body into a string.
#[allow(dead_code)]
pub async fn body_string(response: axum::response::Response) -> String {
    use http_body_util::BodyExt;

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
