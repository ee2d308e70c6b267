//! Core vital measurement domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod registry;
pub mod request;
pub mod response;

pub use errors::{VitalValidationError, VitalValidationResult};
pub use registry::{VitalKind, VitalRegistry};
pub use request::{AmendVitalRequest, RecordVitalRequest, RemoveVitalRequest, VitalWindowQuery};
pub use response::{VitalResponse, VitalsResponse};

/// A single physiological measurement for one subject.
///
/// Records are immutable once stored; amendments replace the value of the
/// record identified by the (username, vital_id, timestamp) triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalRecord {
	pub username: String,
	pub vital_id: String,
	pub value: f64,
	pub timestamp: DateTime<Utc>,
}

impl VitalRecord {
	pub fn new(
		username: impl Into<String>,
		vital_id: impl Into<String>,
		value: f64,
		timestamp: DateTime<Utc>,
	) -> Self {
		Self {
			username: username.into(),
			vital_id: vital_id.into(),
			value,
			timestamp,
		}
	}

	/// Structural validation; registry membership is checked at write time
	/// by the service layer.
	pub fn validate(&self) -> VitalValidationResult<()> {
		if self.username.trim().is_empty() {
			return Err(VitalValidationError::EmptyUsername);
		}
		if self.vital_id.trim().is_empty() {
			return Err(VitalValidationError::EmptyVitalId);
		}
		if !self.value.is_finite() {
			return Err(VitalValidationError::NonFiniteValue { value: self.value });
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn non_finite_values_are_rejected() {
		let record = VitalRecord::new("alice", "HeartRate", f64::NAN, Utc::now());
		assert!(matches!(
			record.validate(),
			Err(VitalValidationError::NonFiniteValue { .. })
		));

		let record = VitalRecord::new("alice", "HeartRate", f64::INFINITY, Utc::now());
		assert!(record.validate().is_err());

		let record = VitalRecord::new("alice", "HeartRate", 72.0, Utc::now());
		assert!(record.validate().is_ok());
	}

	#[test]
	fn blank_identifiers_are_rejected() {
		let record = VitalRecord::new("", "HeartRate", 72.0, Utc::now());
		assert!(matches!(
			record.validate(),
			Err(VitalValidationError::EmptyUsername)
		));

		let record = VitalRecord::new("alice", " ", 72.0, Utc::now());
		assert!(matches!(
			record.validate(),
			Err(VitalValidationError::EmptyVitalId)
		));
	}
}
