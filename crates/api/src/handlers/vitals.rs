//! Vital record handlers

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::Json,
};
use tracing::debug;

use crate::handlers::common::{ErrorResponse, MessageResponse};
use crate::state::AppState;
use vitals_service::VitalServiceError;
use vitals_types::vitals::{
	AmendVitalRequest, RecordVitalRequest, RemoveVitalRequest, VitalRecord, VitalWindowQuery,
	VitalsResponse,
};
use vitals_types::TimeWindow;

fn map_vital_error(error: VitalServiceError) -> (StatusCode, Json<ErrorResponse>) {
	match error {
		VitalServiceError::UserNotFound(username) => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"USER_NOT_FOUND",
				format!("User not found: {}", username),
			)),
		),
		VitalServiceError::RecordNotFound { username, vital_id } => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"VITAL_NOT_FOUND",
				format!("No {} record at that timestamp for {}", vital_id, username),
			)),
		),
		VitalServiceError::Validation(e) => (
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"VALIDATION_ERROR",
				format!("Invalid request: {}", e),
			)),
		),
		VitalServiceError::Storage(message) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("STORAGE_ERROR", message)),
		),
	}
}

/// POST /api/v1/vitals - Record a measurement
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/vitals",
    request_body = RecordVitalRequest,
    responses(
        (status = 201, description = "Vital recorded"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "vitals"
))]
pub async fn post_vitals(
	State(state): State<AppState>,
	Json(request): Json<RecordVitalRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, Json<ErrorResponse>)> {
	let username = request.username.clone();
	state
		.vital_service
		.record(VitalRecord::from(request))
		.await
		.map_err(map_vital_error)?;

	Ok((
		StatusCode::CREATED,
		Json(MessageResponse::success(format!(
			"Vital inserted for {}.",
			username
		))),
	))
}

/// GET /api/v1/vitals/{username} - List a subject's measurements in a window
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/vitals/{username}",
    params(
        ("username" = String, Path, description = "Username"),
        ("start" = String, Query, description = "Window start, RFC 3339, inclusive"),
        ("end" = String, Query, description = "Window end, RFC 3339, inclusive")
    ),
    responses(
        (status = 200, description = "Measurements in the window", body = VitalsResponse),
        (status = 400, description = "Invalid window", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "vitals"
))]
pub async fn get_vitals(
	State(state): State<AppState>,
	Path(username): Path<String>,
	Query(query): Query<VitalWindowQuery>,
) -> Result<Json<VitalsResponse>, (StatusCode, Json<ErrorResponse>)> {
	let window = TimeWindow::new(query.start, query.end);
	if !window.is_well_formed() {
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"VALIDATION_ERROR",
				"Invalid period: window must not end before it starts",
			)),
		));
	}

	debug!(username = %username, "listing vitals");
	let records = state
		.vital_service
		.list(&username, window)
		.await
		.map_err(map_vital_error)?;

	Ok(Json(VitalsResponse::success(&records)))
}

/// PUT /api/v1/vitals/{username} - Amend a measurement's value
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/api/v1/vitals/{username}",
    params(("username" = String, Path, description = "Username")),
    request_body = AmendVitalRequest,
    responses(
        (status = 200, description = "Vital updated"),
        (status = 404, description = "User or record not found", body = ErrorResponse)
    ),
    tag = "vitals"
))]
pub async fn put_vital(
	State(state): State<AppState>,
	Path(username): Path<String>,
	Json(request): Json<AmendVitalRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
	state
		.vital_service
		.amend(
			&username,
			&request.vital_id,
			request.timestamp,
			request.new_value,
		)
		.await
		.map_err(map_vital_error)?;

	Ok(Json(MessageResponse::success(format!(
		"Vital updated for {}.",
		username
	))))
}

/// DELETE /api/v1/vitals/{username} - Remove a measurement
///
/// Removing a record that does not exist is a success, matching the write
/// path's idempotent contract.
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/vitals/{username}",
    params(("username" = String, Path, description = "Username")),
    request_body = RemoveVitalRequest,
    responses(
        (status = 200, description = "Vital deleted"),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "vitals"
))]
pub async fn delete_vital(
	State(state): State<AppState>,
	Path(username): Path<String>,
	Json(request): Json<RemoveVitalRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
	state
		.vital_service
		.remove(&username, &request.vital_id, request.timestamp)
		.await
		.map_err(map_vital_error)?;

	Ok(Json(MessageResponse::success(format!(
		"Vital deleted for {}.",
		username
	))))
}
