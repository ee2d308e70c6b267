//! User handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::debug;

use crate::handlers::common::{ErrorResponse, MessageResponse};
use crate::state::AppState;
use vitals_service::UserServiceError;
use vitals_types::users::{CreateUserRequest, UpdateUserRequest, User, UserResponse};

fn map_user_error(error: UserServiceError) -> (StatusCode, Json<ErrorResponse>) {
	match error {
		UserServiceError::NotFound(username) => (
			StatusCode::NOT_FOUND,
			Json(ErrorResponse::new(
				"USER_NOT_FOUND",
				format!("User not found: {}", username),
			)),
		),
		UserServiceError::Duplicate(_) => (
			StatusCode::CONFLICT,
			Json(ErrorResponse::new(
				"USER_EXISTS",
				"User with this username already exists",
			)),
		),
		UserServiceError::Validation(e) => (
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"VALIDATION_ERROR",
				format!("Invalid request: {}", e),
			)),
		),
		UserServiceError::Storage(message) => (
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("STORAGE_ERROR", message)),
		),
	}
}

/// POST /api/v1/users - Register a user
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Username taken", body = ErrorResponse)
    ),
    tag = "users"
))]
pub async fn post_users(
	State(state): State<AppState>,
	Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, Json<ErrorResponse>)> {
	if let Err(e) = request.validate() {
		return Err((
			StatusCode::BAD_REQUEST,
			Json(ErrorResponse::new(
				"VALIDATION_ERROR",
				format!("Invalid request: {}", e),
			)),
		));
	}

	let user = User::from(request);
	let username = user.username.clone();
	state
		.user_service
		.register(user)
		.await
		.map_err(map_user_error)?;

	Ok((
		StatusCode::CREATED,
		Json(MessageResponse::success(format!(
			"User {} created.",
			username
		))),
	))
}

/// GET /api/v1/users/{username} - Fetch a user
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "users"
))]
pub async fn get_user(
	State(state): State<AppState>,
	Path(username): Path<String>,
) -> Result<Json<UserResponse>, (StatusCode, Json<ErrorResponse>)> {
	debug!(username = %username, "fetching user");
	let user = state
		.user_service
		.get(&username)
		.await
		.map_err(map_user_error)?;
	Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/v1/users/{username} - Update a user's attributes
#[cfg_attr(feature = "openapi", utoipa::path(
    put,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Username")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated"),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "users"
))]
pub async fn put_user(
	State(state): State<AppState>,
	Path(username): Path<String>,
	Json(request): Json<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
	state
		.user_service
		.update(&username, request)
		.await
		.map_err(map_user_error)?;

	Ok(Json(MessageResponse::success(format!(
		"User {} updated.",
		username
	))))
}

/// DELETE /api/v1/users/{username} - Remove a user and their vitals
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "Not found", body = ErrorResponse)
    ),
    tag = "users"
))]
pub async fn delete_user(
	State(state): State<AppState>,
	Path(username): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
	state
		.user_service
		.remove(&username)
		.await
		.map_err(map_user_error)?;

	Ok(Json(MessageResponse::success(format!(
		"User {} deleted.",
		username
	))))
}
