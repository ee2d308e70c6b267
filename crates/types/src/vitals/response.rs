//! Vital response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use super::VitalRecord;

/// API representation of a single measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VitalResponse {
	pub vital_id: String,
	pub value: f64,
	pub timestamp: DateTime<Utc>,
}

impl From<&VitalRecord> for VitalResponse {
	fn from(record: &VitalRecord) -> Self {
		Self {
			vital_id: record.vital_id.clone(),
			value: record.value,
			timestamp: record.timestamp,
		}
	}
}

/// Envelope for a subject's measurements over a window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VitalsResponse {
	pub status: String,
	pub data: Vec<VitalResponse>,
}

impl VitalsResponse {
	pub fn success(records: &[VitalRecord]) -> Self {
		Self {
			status: "success".to_string(),
			data: records.iter().map(VitalResponse::from).collect(),
		}
	}
}
