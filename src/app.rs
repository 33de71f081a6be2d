// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Executive Partners

//! Route handlers and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::models::version::VersionResponse;
use crate::services::{directives, sitemap};
use axum::{http::header, response::IntoResponse, routing::get, Json, Router};

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `EPSEO_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("EPSEO_VERSION");

/// Serve the crawler directives at the well-known path.
///
/// A `String` response gets `text/plain; charset=utf-8` from axum, which is
/// what crawlers expect for robots.txt.
pub async fn robots_txt_handler() -> String {
    directives::crawler_directives().to_string()
}

/// Serve the sitemap document the crawler directives point at.
pub async fn sitemap_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap::sitemap().to_string(),
    )
}

pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: "execpartners-seo".to_string(),
        version: VERSION.to_string(),
    })
}

/// Build the Axum application router.
///
/// Handlers are pure over constants, so the router carries no state.
pub fn create_router() -> Router {
    Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/version", get(version_handler))
}
