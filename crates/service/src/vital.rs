//! Vital record service
//!
//! Write-time validation (registry membership, structural checks) and CRUD
//! orchestration for measurements.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use vitals_storage::Storage;
use vitals_types::{TimeWindow, VitalRecord, VitalRegistry, VitalValidationError};

#[derive(Debug, Error)]
pub enum VitalServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("user not found: {0}")]
	UserNotFound(String),
	#[error("no vital {vital_id} at the given timestamp for {username}")]
	RecordNotFound { username: String, vital_id: String },
	#[error("vital validation failed: {0}")]
	Validation(#[from] VitalValidationError),
}

#[derive(Clone)]
pub struct VitalService {
	storage: Arc<dyn Storage>,
	registry: Arc<VitalRegistry>,
}

impl VitalService {
	pub fn new(storage: Arc<dyn Storage>, registry: Arc<VitalRegistry>) -> Self {
		Self { storage, registry }
	}

	pub fn registry(&self) -> &VitalRegistry {
		&self.registry
	}

	/// Store one measurement after validating it structurally and against
	/// the registry of known kinds.
	pub async fn record(&self, record: VitalRecord) -> Result<(), VitalServiceError> {
		record.validate()?;
		if !self.registry.contains(&record.vital_id) {
			return Err(VitalValidationError::UnknownKind {
				vital_id: record.vital_id.clone(),
			}
			.into());
		}
		self.ensure_user(&record.username).await?;

		debug!(
			username = %record.username,
			vital_id = %record.vital_id,
			value = record.value,
			"recording vital"
		);
		self.storage
			.add_vital(record)
			.await
			.map_err(|e| VitalServiceError::Storage(e.to_string()))
	}

	/// A subject's measurements inside the window, bounds inclusive.
	pub async fn list(
		&self,
		username: &str,
		window: TimeWindow,
	) -> Result<Vec<VitalRecord>, VitalServiceError> {
		self.ensure_user(username).await?;
		self.storage
			.vitals_for_subject(username, window)
			.await
			.map_err(|e| VitalServiceError::Storage(e.to_string()))
	}

	/// Replace the value of the record identified by (username, vital_id,
	/// timestamp).
	pub async fn amend(
		&self,
		username: &str,
		vital_id: &str,
		timestamp: DateTime<Utc>,
		new_value: f64,
	) -> Result<(), VitalServiceError> {
		if !new_value.is_finite() {
			return Err(VitalValidationError::NonFiniteValue { value: new_value }.into());
		}
		self.ensure_user(username).await?;

		let updated = self
			.storage
			.update_vital(username, vital_id, timestamp, new_value)
			.await
			.map_err(|e| VitalServiceError::Storage(e.to_string()))?;
		if updated {
			Ok(())
		} else {
			Err(VitalServiceError::RecordNotFound {
				username: username.to_string(),
				vital_id: vital_id.to_string(),
			})
		}
	}

	/// Remove the record identified by (username, vital_id, timestamp).
	/// Removing a record that does not exist is a success; returns whether
	/// anything matched.
	pub async fn remove(
		&self,
		username: &str,
		vital_id: &str,
		timestamp: DateTime<Utc>,
	) -> Result<bool, VitalServiceError> {
		self.ensure_user(username).await?;
		self.storage
			.remove_vital(username, vital_id, timestamp)
			.await
			.map_err(|e| VitalServiceError::Storage(e.to_string()))
	}

	async fn ensure_user(&self, username: &str) -> Result<(), VitalServiceError> {
		let exists = self
			.storage
			.user_exists(username)
			.await
			.map_err(|e| VitalServiceError::Storage(e.to_string()))?;
		if exists {
			Ok(())
		} else {
			Err(VitalServiceError::UserNotFound(username.to_string()))
		}
	}
}
