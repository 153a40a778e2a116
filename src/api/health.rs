//! Root status and health endpoints

use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

/// Root status body, kept byte-compatible with the original API
#[derive(Serialize)]
pub struct RootResponse {
    pub status: &'static str,
}

/// Health response with the crate version
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
}

/// GET / - the original API's banner endpoint
pub async fn root_status() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            status: "working fine",
        }),
    )
}

/// GET /health - liveness probe
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
