//! Error types for the statistical computation core

use thiserror::Error;

/// Failures of the mean-aggregation and percentile-ranking computations.
///
/// These fail fast and return no partial results; retrying cannot change the
/// outcome of an in-memory deterministic computation.
#[derive(Debug, Error, PartialEq)]
pub enum InsightError {
	/// No records were supplied to aggregate. An empty slice is a hard
	/// error rather than an empty result: the caller is expected to have
	/// confirmed the subject/window combination yields data.
	#[error("no measurements to aggregate for the requested window")]
	EmptyInput,

	/// The population sample was empty; a percentile is undefined and the
	/// division by population size must never execute.
	#[error("population sample is empty")]
	EmptyPopulation,

	/// The subject's value had no exact match in the population sample.
	/// The population is fetched as a superset that includes the subject,
	/// so this only occurs when the two were computed through different
	/// arithmetic paths.
	#[error("subject value {value} not present in population sample")]
	SubjectOutsidePopulation { value: f64 },
}

pub type InsightResult<T> = Result<T, InsightError>;

/// Validation errors for insight requests
#[derive(Debug, Error, PartialEq)]
pub enum InsightValidationError {
	#[error("invalid {field}: {reason}")]
	InvalidField { field: String, reason: String },

	#[error("window must not end before it starts")]
	InvertedWindow,
}

pub type InsightValidationResult<T> = Result<T, InsightValidationError>;
