//! Error types for vital record validation

use thiserror::Error;

/// Validation errors for vital records
#[derive(Debug, Error, PartialEq)]
pub enum VitalValidationError {
	#[error("username must not be empty")]
	EmptyUsername,

	#[error("vital_id must not be empty")]
	EmptyVitalId,

	#[error("measurement value must be finite, got {value}")]
	NonFiniteValue { value: f64 },

	#[error("unknown vital kind: {vital_id}")]
	UnknownKind { vital_id: String },
}

pub type VitalValidationResult<T> = Result<T, VitalValidationError>;
