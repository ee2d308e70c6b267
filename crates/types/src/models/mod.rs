//! Shared domain models used across entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Inclusive time window over which measurements are selected.
///
/// Both bounds are inclusive; a record timestamped exactly at `start` or
/// `end` belongs to the window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TimeWindow {
	pub start: DateTime<Utc>,
	pub end: DateTime<Utc>,
}

impl TimeWindow {
	pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
		Self { start, end }
	}

	/// Whether a timestamp falls inside the window, bounds included.
	pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
		self.start <= timestamp && timestamp <= self.end
	}

	/// A window is well-formed when it does not end before it starts.
	pub fn is_well_formed(&self) -> bool {
		self.start <= self.end
	}
}
