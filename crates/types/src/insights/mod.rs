//! Insight domain model
//!
//! Types carried between the storage collaborator, the computation core, and
//! the API layer for the aggregate and population-insight operations.

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::models::TimeWindow;

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{InsightError, InsightResult, InsightValidationError, InsightValidationResult};
pub use request::{AggregateRequest, PopulationInsightRequest};
pub use response::{
	AggregateData, AggregateResponse, PopulationInsightData, PopulationInsightResponse,
};

/// One aggregation request: which subject, which kinds, which window.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateQuery {
	pub username: String,
	pub vital_ids: Vec<String>,
	pub window: TimeWindow,
}

/// A subject's standing within the population for one vital kind.
///
/// The percentile is only defined for a non-empty population that contains
/// the subject's own aggregate, and falls in (0, 100].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PercentileStanding {
	pub vital_id: String,
	pub percentile: f64,
}
