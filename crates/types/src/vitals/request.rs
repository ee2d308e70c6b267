//! Vital request models and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::{VitalRecord, VitalValidationResult};

/// API request body for POST /api/v1/vitals
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RecordVitalRequest {
	pub username: String,
	pub vital_id: String,
	pub value: f64,
	pub timestamp: DateTime<Utc>,
}

impl RecordVitalRequest {
	pub fn validate(&self) -> VitalValidationResult<()> {
		VitalRecord::from(self.clone()).validate()
	}
}

impl From<RecordVitalRequest> for VitalRecord {
	fn from(request: RecordVitalRequest) -> Self {
		VitalRecord::new(
			request.username,
			request.vital_id,
			request.value,
			request.timestamp,
		)
	}
}

/// Query parameters for GET /api/v1/vitals/{username}
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VitalWindowQuery {
	pub start: DateTime<Utc>,
	pub end: DateTime<Utc>,
}

/// API request body for PUT /api/v1/vitals/{username}
///
/// Identifies the record to amend by (vital_id, timestamp) within the
/// subject named in the path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AmendVitalRequest {
	pub vital_id: String,
	pub timestamp: DateTime<Utc>,
	pub new_value: f64,
}

/// API request body for DELETE /api/v1/vitals/{username}
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RemoveVitalRequest {
	pub vital_id: String,
	pub timestamp: DateTime<Utc>,
}
