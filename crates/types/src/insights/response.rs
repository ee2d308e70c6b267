//! Insight response models
//!
//! Field names and formatting here are observable behavior and must stay
//! stable across releases.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Per-subject aggregates for POST /api/v1/insights/aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AggregateData {
	pub username: String,
	/// Mean per requested vital kind; kinds without data in the window are
	/// absent rather than zero.
	pub aggregates: HashMap<String, f64>,
}

/// Envelope for POST /api/v1/insights/aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AggregateResponse {
	pub status: String,
	pub message: String,
	pub data: AggregateData,
	pub start_timestamp: DateTime<Utc>,
	pub end_timestamp: DateTime<Utc>,
}

impl AggregateResponse {
	pub fn success(
		username: impl Into<String>,
		aggregates: HashMap<String, f64>,
		start_timestamp: DateTime<Utc>,
		end_timestamp: DateTime<Utc>,
	) -> Self {
		Self {
			status: "success".to_string(),
			message: "Aggregate fetched successfully".to_string(),
			data: AggregateData {
				username: username.into(),
				aggregates,
			},
			start_timestamp,
			end_timestamp,
		}
	}
}

/// Percentile standing for POST /api/v1/insights/population
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PopulationInsightData {
	pub username: String,
	pub vital_id: String,
	pub start_timestamp: DateTime<Utc>,
	pub end_timestamp: DateTime<Utc>,
	/// Rendered sentence, e.g. "Your HeartRate is in the 75.00th percentile."
	pub insight: String,
}

/// Envelope for POST /api/v1/insights/population
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PopulationInsightResponse {
	pub status: String,
	pub message: String,
	pub data: PopulationInsightData,
}

impl PopulationInsightResponse {
	pub fn success(data: PopulationInsightData) -> Self {
		Self {
			status: "success".to_string(),
			message: "Population insight fetched successfully".to_string(),
			data,
		}
	}
}
