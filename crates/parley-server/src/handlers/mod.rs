//! HTTP route handlers.

pub mod chat;
pub mod home;

use axum::Json;

use crate::dto::HealthResponse;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
