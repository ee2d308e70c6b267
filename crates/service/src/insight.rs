//! Insight service
//!
//! The only caller of the computation core: resolves records and population
//! samples from storage, runs the aggregator and ranker, and renders the
//! insight sentence.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::aggregator::mean_by_kind;
use crate::ranker::percentile_rank;
use vitals_storage::Storage;
use vitals_types::{AggregateQuery, InsightError, PercentileStanding, TimeWindow, VitalRecord};

#[derive(Debug, Error)]
pub enum InsightServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("user not found: {0}")]
	UserNotFound(String),
	#[error("no vitals found for {username} in the requested window")]
	NoSubjectData { username: String },
	#[error(transparent)]
	Insight(#[from] InsightError),
}

#[derive(Clone)]
pub struct InsightService {
	storage: Arc<dyn Storage>,
}

impl InsightService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	/// Mean per requested vital kind over the subject's records in the
	/// window. Kinds without data are absent from the result; a window with
	/// no records at all is a failure, not an empty map.
	pub async fn aggregate(
		&self,
		query: &AggregateQuery,
	) -> Result<HashMap<String, f64>, InsightServiceError> {
		self.ensure_user(&query.username).await?;

		let records = self
			.storage
			.vitals_for_subject(&query.username, query.window)
			.await
			.map_err(|e| InsightServiceError::Storage(e.to_string()))?;
		debug!(
			username = %query.username,
			records = records.len(),
			kinds = query.vital_ids.len(),
			"aggregating vitals"
		);

		Ok(mean_by_kind(&records, &query.vital_ids)?)
	}

	/// The subject's percentile standing for one vital kind, plus the
	/// rendered insight sentence.
	///
	/// Every subject's aggregate, the ranked subject's included, is computed
	/// through the same `mean_by_kind` pass over the same storage snapshot,
	/// so the exact-equality lookup inside the ranker always finds the
	/// subject's value.
	pub async fn population_standing(
		&self,
		username: &str,
		vital_id: &str,
		window: TimeWindow,
	) -> Result<(PercentileStanding, String), InsightServiceError> {
		self.ensure_user(username).await?;

		let records = self
			.storage
			.vitals_by_kind(vital_id, window)
			.await
			.map_err(|e| InsightServiceError::Storage(e.to_string()))?;

		let mut by_subject: HashMap<String, Vec<VitalRecord>> = HashMap::new();
		for record in records {
			by_subject
				.entry(record.username.clone())
				.or_default()
				.push(record);
		}
		if !by_subject.contains_key(username) {
			return Err(InsightServiceError::NoSubjectData {
				username: username.to_string(),
			});
		}

		let requested = vec![vital_id.to_string()];
		let mut population = Vec::with_capacity(by_subject.len());
		let mut subject_value = None;
		for (subject, subject_records) in &by_subject {
			let aggregates = mean_by_kind(subject_records, &requested)?;
			if let Some(mean) = aggregates.get(vital_id).copied() {
				if subject == username {
					subject_value = Some(mean);
				}
				population.push(mean);
			}
		}

		let subject_value =
			subject_value.ok_or_else(|| InsightServiceError::NoSubjectData {
				username: username.to_string(),
			})?;
		let percentile = percentile_rank(subject_value, &population)?;
		debug!(
			username,
			vital_id,
			population = population.len(),
			percentile,
			"ranked subject within population"
		);

		let standing = PercentileStanding {
			vital_id: vital_id.to_string(),
			percentile,
		};
		let insight = render_insight(vital_id, percentile);
		Ok((standing, insight))
	}

	async fn ensure_user(&self, username: &str) -> Result<(), InsightServiceError> {
		let exists = self
			.storage
			.user_exists(username)
			.await
			.map_err(|e| InsightServiceError::Storage(e.to_string()))?;
		if exists {
			Ok(())
		} else {
			Err(InsightServiceError::UserNotFound(username.to_string()))
		}
	}
}

/// Render a percentile standing as the user-facing sentence, always with
/// exactly two fractional digits.
pub fn render_insight(vital_id: &str, percentile: f64) -> String {
	format!(
		"Your {} is in the {:.2}th percentile.",
		vital_id, percentile
	)
}
