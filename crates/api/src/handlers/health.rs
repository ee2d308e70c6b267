use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = String)),
    tag = "health"
))]
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
	pub status: String,
	pub version: String,
	pub storage_healthy: bool,
	pub total_users: usize,
	pub total_vitals: usize,
	pub vital_kinds: Vec<String>,
}

/// GET /ready - Readiness probe with storage and registry checks
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/ready",
    responses((status = 200, description = "Readiness response")),
    tag = "health"
))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let storage_healthy = state.storage.health_check().await.unwrap_or(false);
	let stats = state.storage.stats().await.ok();

	let status = if storage_healthy { "ready" } else { "degraded" };
	let body = ReadinessResponse {
		status: status.to_string(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		storage_healthy,
		total_users: stats.as_ref().map(|s| s.total_users).unwrap_or(0),
		total_vitals: stats.as_ref().map(|s| s.total_vitals).unwrap_or(0),
		vital_kinds: state.vital_service.registry().ids(),
	};
	let code = if storage_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};
	(code, Json(body))
}
