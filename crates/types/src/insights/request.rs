//! Insight request models and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{AggregateQuery, InsightValidationError, InsightValidationResult};
use crate::models::TimeWindow;

/// API request body for POST /api/v1/insights/aggregate
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AggregateRequest {
	pub username: String,
	pub vital_ids: Vec<String>,
	pub start_timestamp: DateTime<Utc>,
	pub end_timestamp: DateTime<Utc>,
}

impl AggregateRequest {
	pub fn validate(&self) -> InsightValidationResult<()> {
		if self.username.trim().is_empty() {
			return Err(InsightValidationError::InvalidField {
				field: "username".to_string(),
				reason: "must not be empty".to_string(),
			});
		}
		if self.vital_ids.is_empty() {
			return Err(InsightValidationError::InvalidField {
				field: "vital_ids".to_string(),
				reason: "at least one vital kind is required".to_string(),
			});
		}
		if self.vital_ids.iter().any(|id| id.trim().is_empty()) {
			return Err(InsightValidationError::InvalidField {
				field: "vital_ids".to_string(),
				reason: "vital kinds must not be empty".to_string(),
			});
		}
		if self.start_timestamp > self.end_timestamp {
			return Err(InsightValidationError::InvertedWindow);
		}
		Ok(())
	}

	pub fn window(&self) -> TimeWindow {
		TimeWindow::new(self.start_timestamp, self.end_timestamp)
	}
}

impl From<AggregateRequest> for AggregateQuery {
	fn from(request: AggregateRequest) -> Self {
		let window = request.window();
		Self {
			username: request.username,
			vital_ids: request.vital_ids,
			window,
		}
	}
}

/// API request body for POST /api/v1/insights/population
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PopulationInsightRequest {
	pub username: String,
	pub vital_id: String,
	pub start_timestamp: DateTime<Utc>,
	pub end_timestamp: DateTime<Utc>,
}

impl PopulationInsightRequest {
	pub fn validate(&self) -> InsightValidationResult<()> {
		if self.username.trim().is_empty() {
			return Err(InsightValidationError::InvalidField {
				field: "username".to_string(),
				reason: "must not be empty".to_string(),
			});
		}
		if self.vital_id.trim().is_empty() {
			return Err(InsightValidationError::InvalidField {
				field: "vital_id".to_string(),
				reason: "must not be empty".to_string(),
			});
		}
		if self.start_timestamp > self.end_timestamp {
			return Err(InsightValidationError::InvertedWindow);
		}
		Ok(())
	}

	pub fn window(&self) -> TimeWindow {
		TimeWindow::new(self.start_timestamp, self.end_timestamp)
	}
}
