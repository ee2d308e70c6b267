//! Storage traits for pluggable storage implementations

use async_trait::async_trait;
use thiserror::Error;

use crate::models::TimeWindow;
use crate::users::User;
use crate::vitals::VitalRecord;

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("Item not found: {id}")]
	NotFound { id: String },
	#[error("Item already exists: {id}")]
	Duplicate { id: String },
	#[error("Connection error: {message}")]
	Connection { message: String },
	#[error("Storage operation failed: {message}")]
	Operation { message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Statistics about storage usage
#[derive(Debug, Clone)]
pub struct StorageStats {
	pub total_users: usize,
	pub total_vitals: usize,
}

/// Trait for user storage operations
#[async_trait]
pub trait UserStorageTrait: Send + Sync {
	/// Add a new user; fails with `Duplicate` when the username is taken
	async fn create_user(&self, user: User) -> StorageResult<()>;

	/// Get a user by username
	async fn get_user(&self, username: &str) -> StorageResult<Option<User>>;

	/// Update an existing user; fails with `NotFound` when missing
	async fn update_user(&self, user: User) -> StorageResult<()>;

	/// Remove a user and all of their vital records; returns whether a
	/// user was removed
	async fn remove_user(&self, username: &str) -> StorageResult<bool>;

	/// Whether a user with this username exists
	async fn user_exists(&self, username: &str) -> StorageResult<bool>;

	/// Get user count
	async fn user_count(&self) -> StorageResult<usize>;
}

/// Trait for vital record storage operations
#[async_trait]
pub trait VitalStorageTrait: Send + Sync {
	/// Append a measurement record
	async fn add_vital(&self, record: VitalRecord) -> StorageResult<()>;

	/// All of one subject's records inside the window, bounds inclusive
	async fn vitals_for_subject(
		&self,
		username: &str,
		window: TimeWindow,
	) -> StorageResult<Vec<VitalRecord>>;

	/// All subjects' records of one kind inside the window, bounds
	/// inclusive; feeds population queries
	async fn vitals_by_kind(
		&self,
		vital_id: &str,
		window: TimeWindow,
	) -> StorageResult<Vec<VitalRecord>>;

	/// Replace the value of the record identified by (username, vital_id,
	/// timestamp); returns whether a record matched
	async fn update_vital(
		&self,
		username: &str,
		vital_id: &str,
		timestamp: chrono::DateTime<chrono::Utc>,
		new_value: f64,
	) -> StorageResult<bool>;

	/// Remove the record identified by (username, vital_id, timestamp);
	/// returns whether a record matched
	async fn remove_vital(
		&self,
		username: &str,
		vital_id: &str,
		timestamp: chrono::DateTime<chrono::Utc>,
	) -> StorageResult<bool>;

	/// Get total record count
	async fn vital_count(&self) -> StorageResult<usize>;
}

/// Main storage trait that combines all storage operations
#[async_trait]
pub trait StorageTrait: UserStorageTrait + VitalStorageTrait {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats>;

	/// Close the storage connection
	async fn close(&self) -> StorageResult<()>;
}
