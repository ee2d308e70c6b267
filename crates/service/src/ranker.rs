//! Percentile ranking within a population sample

use vitals_types::{InsightError, InsightResult};

/// Place one subject's aggregate within a population of per-subject
/// aggregates and return the percentile rank in (0, 100].
///
/// The population is sorted ascending and the subject's 1-based position is
/// that of the first element exactly equal to `subject_value`; the rank is
/// `position / total * 100`. Ties are therefore first-match-wins: a subject
/// tied with others receives the rank of the lowest-positioned occurrence.
///
/// Equality is exact floating-point comparison. The population is expected
/// to be a superset containing the subject's own value, computed through the
/// same arithmetic path; a subject value with no exact match is an error
/// rather than a silent rank of zero.
pub fn percentile_rank(subject_value: f64, population: &[f64]) -> InsightResult<f64> {
	if population.is_empty() {
		return Err(InsightError::EmptyPopulation);
	}

	let mut sorted = population.to_vec();
	sorted.sort_by(|a, b| a.total_cmp(b));

	let position = sorted
		.iter()
		.position(|value| *value == subject_value)
		.map(|index| index + 1)
		.ok_or(InsightError::SubjectOutsidePopulation {
			value: subject_value,
		})?;

	Ok((position as f64 / sorted.len() as f64) * 100.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rank_within_unsorted_population() {
		// Sorted: [60, 70, 80, 90]; 80 sits at position 3 of 4
		let population = vec![90.0, 60.0, 80.0, 70.0];
		assert_eq!(percentile_rank(80.0, &population).unwrap(), 75.0);
	}

	#[test]
	fn unique_minimum_ranks_at_one_over_n() {
		let population = vec![60.0, 70.0, 80.0, 90.0];
		assert_eq!(
			percentile_rank(60.0, &population).unwrap(),
			100.0 / population.len() as f64
		);
	}

	#[test]
	fn unique_maximum_ranks_at_one_hundred() {
		let population = vec![60.0, 70.0, 80.0, 90.0];
		assert_eq!(percentile_rank(90.0, &population).unwrap(), 100.0);
	}

	#[test]
	fn ties_take_the_first_occurrence() {
		// Both subjects at 70 share position 1 of 3
		let population = vec![70.0, 70.0, 80.0];
		let rank = percentile_rank(70.0, &population).unwrap();
		assert!((rank - 100.0 / 3.0).abs() < 1e-9);
	}

	#[test]
	fn rank_is_monotonic_for_unique_members() {
		let population = vec![55.0, 62.5, 71.0, 80.0, 93.0];
		let mut previous = 0.0;
		for value in &population {
			let rank = percentile_rank(*value, &population).unwrap();
			assert!(rank > previous);
			previous = rank;
		}
	}

	#[test]
	fn empty_population_is_a_hard_error() {
		assert_eq!(
			percentile_rank(70.0, &[]).unwrap_err(),
			InsightError::EmptyPopulation
		);
	}

	#[test]
	fn unmatched_subject_is_an_explicit_error() {
		let population = vec![60.0, 70.0];
		assert_eq!(
			percentile_rank(65.0, &population).unwrap_err(),
			InsightError::SubjectOutsidePopulation { value: 65.0 }
		);
	}

	#[test]
	fn single_member_population_ranks_at_one_hundred() {
		assert_eq!(percentile_rank(42.0, &[42.0]).unwrap(), 100.0);
	}
}
