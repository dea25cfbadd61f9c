use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

/// Liveness only. Artifacts are loaded before the listener binds, so a
/// running process can always serve predictions.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn home() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "News Credibility Analysis API is running".to_string(),
        status: "healthy".to_string(),
    })
}
