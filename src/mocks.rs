//! Mock entities for examples and tests
//!
//! Small, deterministic fixtures that exercise the service without a real
//! measurement source.

use vitals_types::chrono::{DateTime, TimeZone, Utc};
use vitals_types::{User, VitalRecord};

/// Base instant the mock measurements are anchored to
pub fn mock_epoch() -> DateTime<Utc> {
	Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A registered user with plausible attributes
pub fn mock_user(username: &str) -> User {
	let mut user = User::new(username);
	user.age = Some(34);
	user.gender = Some("female".to_string());
	user
}

/// One measurement `offset_secs` after the mock epoch
pub fn mock_vital(username: &str, vital_id: &str, value: f64, offset_secs: i64) -> VitalRecord {
	VitalRecord::new(
		username,
		vital_id,
		value,
		mock_epoch() + chrono::Duration::seconds(offset_secs),
	)
}
