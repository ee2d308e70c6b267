//! User request models and validation

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{User, UserValidationResult};

/// API request body for POST /api/v1/users
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateUserRequest {
	pub username: String,
	pub age: Option<u32>,
	pub gender: Option<String>,
}

impl CreateUserRequest {
	pub fn validate(&self) -> UserValidationResult<()> {
		User::from(self.clone()).validate()
	}
}

impl From<CreateUserRequest> for User {
	fn from(request: CreateUserRequest) -> Self {
		let mut user = User::new(request.username);
		user.age = request.age;
		user.gender = request.gender;
		user
	}
}

/// API request body for PUT /api/v1/users/{username}
///
/// The username comes from the path; only mutable attributes appear here.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateUserRequest {
	pub age: Option<u32>,
	pub gender: Option<String>,
}
