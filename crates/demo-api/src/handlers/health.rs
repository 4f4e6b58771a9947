//! Health check and catch-all handlers.

use axum::response::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Demo content API is running!".to_string(),
    })
}

/// Fallback for unknown paths.
pub async fn route_not_found() -> AppError {
    AppError::NotFound
}
