//! User response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::User;

/// API representation of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UserResponse {
	pub username: String,
	pub age: Option<u32>,
	pub gender: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
	fn from(user: &User) -> Self {
		Self {
			username: user.username.clone(),
			age: user.age,
			gender: user.gender.clone(),
			created_at: user.created_at,
		}
	}
}
