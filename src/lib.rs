// SPDX-License-Identifier: MIT

//! Course-Catalog: HTTP facade over hosted course storage, identity and
//! image hosting services.
//!
//! This crate holds no durable state of its own. Every operation maps one
//! HTTP request onto one call against an external managed service and
//! translates the result back into an HTTP response.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{CdnClient, CourseStore, IdentityClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: CourseStore,
    pub identity: IdentityClient,
    pub cdn: CdnClient,
}
