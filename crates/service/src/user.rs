//! User service
//!
//! CRUD orchestration for subjects.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use vitals_storage::{Storage, StorageError};
use vitals_types::{UpdateUserRequest, User, UserValidationError};

#[derive(Debug, Error)]
pub enum UserServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("user not found: {0}")]
	NotFound(String),
	#[error("user already exists: {0}")]
	Duplicate(String),
	#[error("user validation failed: {0}")]
	Validation(#[from] UserValidationError),
}

#[derive(Clone)]
pub struct UserService {
	storage: Arc<dyn Storage>,
}

impl UserService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	pub async fn register(&self, user: User) -> Result<User, UserServiceError> {
		user.validate()?;
		match self.storage.create_user(user.clone()).await {
			Ok(()) => {
				info!(username = %user.username, "user registered");
				Ok(user)
			},
			Err(StorageError::Duplicate { id }) => Err(UserServiceError::Duplicate(id)),
			Err(e) => Err(UserServiceError::Storage(e.to_string())),
		}
	}

	pub async fn get(&self, username: &str) -> Result<User, UserServiceError> {
		match self
			.storage
			.get_user(username)
			.await
			.map_err(|e| UserServiceError::Storage(e.to_string()))?
		{
			Some(user) => Ok(user),
			None => Err(UserServiceError::NotFound(username.to_string())),
		}
	}

	/// Replace the mutable attributes of an existing user.
	pub async fn update(
		&self,
		username: &str,
		request: UpdateUserRequest,
	) -> Result<User, UserServiceError> {
		let mut user = self.get(username).await?;
		user.age = request.age;
		user.gender = request.gender;
		user.validate()?;

		match self.storage.update_user(user.clone()).await {
			Ok(()) => Ok(user),
			Err(StorageError::NotFound { id }) => Err(UserServiceError::NotFound(id)),
			Err(e) => Err(UserServiceError::Storage(e.to_string())),
		}
	}

	pub async fn remove(&self, username: &str) -> Result<(), UserServiceError> {
		let removed = self
			.storage
			.remove_user(username)
			.await
			.map_err(|e| UserServiceError::Storage(e.to_string()))?;
		if removed {
			info!(username, "user removed");
			Ok(())
		} else {
			Err(UserServiceError::NotFound(username.to_string()))
		}
	}

	pub async fn exists(&self, username: &str) -> Result<bool, UserServiceError> {
		self.storage
			.user_exists(username)
			.await
			.map_err(|e| UserServiceError::Storage(e.to_string()))
	}
}
