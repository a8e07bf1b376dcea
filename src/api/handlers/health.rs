//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// The service is stateless and holds no connections between requests, so
/// the only component reported is the configured delivery API endpoint. No
/// probe request is made; delivery failures surface per dispatch instead.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            mailer: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("Delivery API: {}", state.mailer_endpoint)),
            },
        },
    })
}
