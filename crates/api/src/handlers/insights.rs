//! Insight handlers
//!
//! The aggregate and population-insight paths; their request and response
//! field names are observable behavior.

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::ErrorResponse;
use crate::state::AppState;
use vitals_service::InsightServiceError;
use vitals_types::insights::{
	AggregateRequest, AggregateResponse, PopulationInsightData, PopulationInsightRequest,
	PopulationInsightResponse,
};
use vitals_types::{AggregateQuery, InsightError};

fn map_insight_error(error: InsightServiceError) -> (StatusCode, Json<ErrorResponse>) {
	match error {
		InsightServiceError::UserNotFound(username) => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"USER_NOT_FOUND",
				format!("User not found: {}", username),
			)),
		),
		InsightServiceError::NoSubjectData { username } => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"NO_DATA",
				format!(
					"No vitals found for {} in the requested window",
					username
				),
			)),
		),
		InsightServiceError::Insight(InsightError::EmptyInput) => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"NO_DATA",
				"No vitals found for the specified user and time range",
			)),
		),
		InsightServiceError::Insight(InsightError::EmptyPopulation) => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"NO_DATA",
				"No population data for the specified vital and time range",
			)),
		),
		InsightServiceError::Insight(e) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("INSIGHT_ERROR", e.to_string())),
		),
		InsightServiceError::Storage(message) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("STORAGE_ERROR", message)),
		),
	}
}

/// POST /api/v1/insights/aggregate - Per-kind means over a window
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/insights/aggregate",
    request_body = AggregateRequest,
    responses(
        (status = 200, description = "Aggregates computed", body = AggregateResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "User or data not found", body = ErrorResponse)
    ),
    tag = "insights"
))]
pub async fn post_aggregate(
	State(state): State<AppState>,
	Json(request): Json<AggregateRequest>,
) -> Result<Json<AggregateResponse>, (StatusCode, Json<ErrorResponse>)> {
	if let Err(e) = request.validate() {
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"VALIDATION_ERROR",
				format!("Invalid request: {}", e),
			)),
		));
	}

	info!(
		username = %request.username,
		kinds = request.vital_ids.len(),
		"processing aggregate request"
	);

	let start_timestamp = request.start_timestamp;
	let end_timestamp = request.end_timestamp;
	let query = AggregateQuery::from(request);
	let aggregates = state
		.insight_service
		.aggregate(&query)
		.await
		.map_err(map_insight_error)?;

	Ok(Json(AggregateResponse::success(
		query.username,
		aggregates,
		start_timestamp,
		end_timestamp,
	)))
}

/// POST /api/v1/insights/population - Percentile standing within the population
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/insights/population",
    request_body = PopulationInsightRequest,
    responses(
        (status = 200, description = "Population insight computed", body = PopulationInsightResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "User or data not found", body = ErrorResponse)
    ),
    tag = "insights"
))]
pub async fn post_population_insight(
	State(state): State<AppState>,
	Json(request): Json<PopulationInsightRequest>,
) -> Result<Json<PopulationInsightResponse>, (StatusCode, Json<ErrorResponse>)> {
	if let Err(e) = request.validate() {
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"VALIDATION_ERROR",
				format!("Invalid request: {}", e),
			)),
		));
	}

	info!(
		username = %request.username,
		vital_id = %request.vital_id,
		"processing population insight request"
	);

	let (_, insight) = state
		.insight_service
		.population_standing(&request.username, &request.vital_id, request.window())
		.await
		.map_err(map_insight_error)?;

	Ok(Json(PopulationInsightResponse::success(
		PopulationInsightData {
			username: request.username,
			vital_id: request.vital_id,
			start_timestamp: request.start_timestamp,
			end_timestamp: request.end_timestamp,
			insight,
		},
	)))
}
