// SPDX-License-Identifier: MIT

//! Course-Catalog API Server
//!
//! Thin backend facade exposing course records, user registration/login
//! and image upload, delegating all durable state to hosted services.

use course_catalog::{
    config::Config,
    services::{CdnClient, CourseStore, IdentityClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Course-Catalog API");

    // External-service clients share credentials loaded at startup and are
    // never reconfigured afterwards.
    let store = CourseStore::new(&config.store_url, &config.store_api_key);
    let identity = IdentityClient::new(&config.store_url, &config.store_api_key);
    let cdn = CdnClient::new(
        &config.cdn_cloud_name,
        &config.cdn_api_key,
        &config.cdn_api_secret,
    );
    tracing::info!(store = %config.store_url, cloud = %config.cdn_cloud_name, "Service clients initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        identity,
        cdn,
    });

    // Build router
    let app = course_catalog::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("course_catalog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
