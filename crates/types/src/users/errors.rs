//! Error types for user validation

use thiserror::Error;

/// Validation errors for user records
#[derive(Debug, Error, PartialEq)]
pub enum UserValidationError {
	#[error("username must not be empty")]
	EmptyUsername,

	#[error("implausible age: {age}")]
	ImplausibleAge { age: u32 },
}

pub type UserValidationResult<T> = Result<T, UserValidationError>;
