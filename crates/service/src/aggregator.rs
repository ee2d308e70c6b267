//! Mean aggregation over measurement records

use std::collections::HashMap;

use vitals_types::{InsightError, InsightResult, VitalRecord};

/// Reduce a collection of measurement records into a mean per requested
/// vital kind.
///
/// Only requested kinds appear in the result, and only those with at least
/// one matching record; a requested kind without data in `records` is
/// omitted rather than reported as zero. Kind comparison is an exact,
/// case-sensitive string match.
///
/// An empty `records` slice is a hard error: the caller is expected to have
/// confirmed the subject/window combination yields data before aggregating.
///
/// Summation order follows input order, so results are reproducible for a
/// given input but not guaranteed bit-identical across implementations that
/// sum in a different order.
pub fn mean_by_kind(
	records: &[VitalRecord],
	vital_ids: &[String],
) -> InsightResult<HashMap<String, f64>> {
	if records.is_empty() {
		return Err(InsightError::EmptyInput);
	}

	let mut aggregates = HashMap::new();
	for vital_id in vital_ids {
		let mut sum = 0.0;
		let mut count = 0u64;

		for record in records {
			if record.vital_id == *vital_id {
				sum += record.value;
				count += 1;
			}
		}

		if count > 0 {
			aggregates.insert(vital_id.clone(), sum / count as f64);
		}
	}

	Ok(aggregates)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	fn record(vital_id: &str, value: f64, secs: i64) -> VitalRecord {
		VitalRecord::new("alice", vital_id, value, Utc.timestamp_opt(secs, 0).unwrap())
	}

	fn kinds(ids: &[&str]) -> Vec<String> {
		ids.iter().map(|id| id.to_string()).collect()
	}

	#[test]
	fn mean_of_heart_rate_records() {
		let records = vec![
			record("HeartRate", 70.0, 100),
			record("HeartRate", 80.0, 110),
			record("HeartRate", 90.0, 120),
		];

		let aggregates = mean_by_kind(&records, &kinds(&["HeartRate"])).unwrap();
		assert_eq!(aggregates.len(), 1);
		assert_eq!(aggregates["HeartRate"], 80.0);
	}

	#[test]
	fn kinds_without_data_are_omitted_not_zeroed() {
		let records = vec![
			record("HeartRate", 70.0, 100),
			record("HeartRate", 80.0, 110),
		];

		let aggregates =
			mean_by_kind(&records, &kinds(&["HeartRate", "Temperature"])).unwrap();
		assert!(aggregates.contains_key("HeartRate"));
		assert!(!aggregates.contains_key("Temperature"));
		assert_eq!(aggregates.len(), 1);
	}

	#[test]
	fn unrequested_kinds_are_ignored() {
		let records = vec![
			record("HeartRate", 70.0, 100),
			record("Temperature", 36.8, 105),
		];

		let aggregates = mean_by_kind(&records, &kinds(&["HeartRate"])).unwrap();
		assert_eq!(aggregates.len(), 1);
		assert_eq!(aggregates["HeartRate"], 70.0);
	}

	#[test]
	fn kind_match_is_case_sensitive() {
		let records = vec![record("HeartRate", 70.0, 100)];

		let aggregates = mean_by_kind(&records, &kinds(&["heartrate"])).unwrap();
		assert!(aggregates.is_empty());
	}

	#[test]
	fn empty_records_are_a_hard_error() {
		let err = mean_by_kind(&[], &kinds(&["HeartRate"])).unwrap_err();
		assert_eq!(err, InsightError::EmptyInput);
	}

	#[test]
	fn repeated_calls_are_idempotent() {
		let records = vec![
			record("HeartRate", 72.5, 100),
			record("HeartRate", 68.25, 110),
			record("Temperature", 37.1, 120),
		];
		let requested = kinds(&["HeartRate", "Temperature"]);

		let first = mean_by_kind(&records, &requested).unwrap();
		let second = mean_by_kind(&records, &requested).unwrap();
		assert_eq!(first, second);
		assert_eq!(first["HeartRate"], (72.5 + 68.25) / 2.0);
	}
}
