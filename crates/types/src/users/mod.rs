//! Core User domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{UserValidationError, UserValidationResult};
pub use request::{CreateUserRequest, UpdateUserRequest};
pub use response::UserResponse;

/// A registered subject whose measurements the service records.
///
/// Usernames are unique and serve as the storage key; a user owns all
/// vital records carrying the same username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
	pub username: String,
	pub age: Option<u32>,
	pub gender: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl User {
	pub fn new(username: impl Into<String>) -> Self {
		Self {
			username: username.into(),
			age: None,
			gender: None,
			created_at: Utc::now(),
		}
	}

	pub fn validate(&self) -> UserValidationResult<()> {
		if self.username.trim().is_empty() {
			return Err(UserValidationError::EmptyUsername);
		}
		if let Some(age) = self.age {
			if age > 150 {
				return Err(UserValidationError::ImplausibleAge { age });
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_username_fails_validation() {
		let user = User::new("  ");
		assert!(matches!(
			user.validate(),
			Err(UserValidationError::EmptyUsername)
		));
	}

	#[test]
	fn implausible_age_fails_validation() {
		let mut user = User::new("alice");
		user.age = Some(200);
		assert!(matches!(
			user.validate(),
			Err(UserValidationError::ImplausibleAge { age: 200 })
		));

		user.age = Some(34);
		assert!(user.validate().is_ok());
	}
}
