//! Seeded entities shared by integration tests

use vitals_aggregator::mocks::{mock_user, mock_vital};
use vitals_aggregator::{MemoryStore, VitalsBuilder};

/// Window covering every mock measurement, RFC 3339
#[allow(dead_code)]
pub const WINDOW_START: &str = "2024-01-01T00:00:00Z";
#[allow(dead_code)]
pub const WINDOW_END: &str = "2024-01-02T00:00:00Z";

/// Builder seeded with four subjects and known heart-rate data.
///
/// Per-subject means over the window: alice 80, bob 60, carol 70, dave 90,
/// so alice ranks 3rd of 4 (75.00th percentile). Alice additionally has one
/// temperature reading.
#[allow(dead_code)]
pub fn seeded_builder() -> VitalsBuilder<MemoryStore> {
	VitalsBuilder::default()
		.with_user(mock_user("alice"))
		.with_user(mock_user("bob"))
		.with_user(mock_user("carol"))
		.with_user(mock_user("dave"))
		.with_vital(mock_vital("alice", "HeartRate", 70.0, 60))
		.with_vital(mock_vital("alice", "HeartRate", 80.0, 120))
		.with_vital(mock_vital("alice", "HeartRate", 90.0, 180))
		.with_vital(mock_vital("alice", "Temperature", 36.8, 240))
		.with_vital(mock_vital("bob", "HeartRate", 60.0, 60))
		.with_vital(mock_vital("carol", "HeartRate", 70.0, 60))
		.with_vital(mock_vital("dave", "HeartRate", 90.0, 60))
}

/// Builder whose heart-rate means tie alice and bob at 70 against carol's 80.
#[allow(dead_code)]
pub fn tied_builder() -> VitalsBuilder<MemoryStore> {
	VitalsBuilder::default()
		.with_user(mock_user("alice"))
		.with_user(mock_user("bob"))
		.with_user(mock_user("carol"))
		.with_vital(mock_vital("alice", "HeartRate", 70.0, 60))
		.with_vital(mock_vital("bob", "HeartRate", 70.0, 60))
		.with_vital(mock_vital("carol", "HeartRate", 80.0, 60))
}
