//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: DatabaseHealth,
}

/// Database connectivity with optional error message.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database connectivity.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match &state.database {
        Some(db) => match db.ping().await {
            Ok(()) => DatabaseHealth {
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Database health check failed: {}", e);
                DatabaseHealth {
                    status: "unhealthy".to_string(),
                    error: Some(e.to_string()),
                }
            }
        },
        None => DatabaseHealth {
            status: "not_configured".to_string(),
            error: None,
        },
    };

    let healthy = database.error.is_none();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        database,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
