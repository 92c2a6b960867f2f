/// Liveness and health endpoints
///
/// `GET /` is the wire-level liveness check consumed by clients: a literal
/// JSON string `"hello"`. `GET /health` additionally probes database
/// connectivity.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Database status
    pub database: String,
}

/// Liveness handler
///
/// ```text
/// GET /
/// ```
///
/// Responds with the literal string `"hello"`.
pub async fn hello() -> Json<&'static str> {
    Json("hello")
}

/// Health check handler
///
/// Returns service health including database connectivity. The response
/// is always 200; a failed probe is reported as `degraded`.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let database_status = match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Ok(Json(HealthResponse {
        status: if database_status == "connected" {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database_status.to_string(),
    }))
}
