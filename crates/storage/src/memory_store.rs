//! In-memory storage implementation using DashMap

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::traits::{Storage, StorageError, StorageResult, StorageStats, UserStorage, VitalStorage};
use vitals_types::{TimeWindow, User, VitalRecord};

/// In-memory storage for users and their vital records.
///
/// Users are keyed by username; a subject's records live under the same
/// key, so removing a user drops their measurements with them.
#[derive(Clone, Default)]
pub struct MemoryStore {
	users: Arc<DashMap<String, User>>,
	vitals: Arc<DashMap<String, Vec<VitalRecord>>>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self {
			users: Arc::new(DashMap::new()),
			vitals: Arc::new(DashMap::new()),
		}
	}
}

#[async_trait]
impl UserStorage for MemoryStore {
	async fn create_user(&self, user: User) -> StorageResult<()> {
		if self.users.contains_key(&user.username) {
			return Err(StorageError::Duplicate {
				id: user.username.clone(),
			});
		}
		self.users.insert(user.username.clone(), user);
		Ok(())
	}

	async fn get_user(&self, username: &str) -> StorageResult<Option<User>> {
		Ok(self.users.get(username).map(|entry| entry.clone()))
	}

	async fn update_user(&self, user: User) -> StorageResult<()> {
		match self.users.get_mut(&user.username) {
			Some(mut entry) => {
				*entry = user;
				Ok(())
			},
			None => Err(StorageError::NotFound {
				id: user.username.clone(),
			}),
		}
	}

	async fn remove_user(&self, username: &str) -> StorageResult<bool> {
		let removed = self.users.remove(username).is_some();
		if removed {
			// Records belong to their subject; drop them alongside
			if let Some((_, records)) = self.vitals.remove(username) {
				debug!(
					username,
					count = records.len(),
					"removed vitals with their subject"
				);
			}
		}
		Ok(removed)
	}

	async fn user_exists(&self, username: &str) -> StorageResult<bool> {
		Ok(self.users.contains_key(username))
	}

	async fn user_count(&self) -> StorageResult<usize> {
		Ok(self.users.len())
	}
}

#[async_trait]
impl VitalStorage for MemoryStore {
	async fn add_vital(&self, record: VitalRecord) -> StorageResult<()> {
		self.vitals
			.entry(record.username.clone())
			.or_default()
			.push(record);
		Ok(())
	}

	async fn vitals_for_subject(
		&self,
		username: &str,
		window: TimeWindow,
	) -> StorageResult<Vec<VitalRecord>> {
		let records = match self.vitals.get(username) {
			Some(entry) => entry
				.iter()
				.filter(|record| window.contains(record.timestamp))
				.cloned()
				.collect(),
			None => Vec::new(),
		};
		Ok(records)
	}

	async fn vitals_by_kind(
		&self,
		vital_id: &str,
		window: TimeWindow,
	) -> StorageResult<Vec<VitalRecord>> {
		let mut records = Vec::new();
		for entry in self.vitals.iter() {
			records.extend(
				entry
					.value()
					.iter()
					.filter(|record| {
						record.vital_id == vital_id && window.contains(record.timestamp)
					})
					.cloned(),
			);
		}
		Ok(records)
	}

	async fn update_vital(
		&self,
		username: &str,
		vital_id: &str,
		timestamp: DateTime<Utc>,
		new_value: f64,
	) -> StorageResult<bool> {
		if let Some(mut entry) = self.vitals.get_mut(username) {
			for record in entry.iter_mut() {
				if record.vital_id == vital_id && record.timestamp == timestamp {
					record.value = new_value;
					return Ok(true);
				}
			}
		}
		Ok(false)
	}

	async fn remove_vital(
		&self,
		username: &str,
		vital_id: &str,
		timestamp: DateTime<Utc>,
	) -> StorageResult<bool> {
		if let Some(mut entry) = self.vitals.get_mut(username) {
			let before = entry.len();
			entry.retain(|record| {
				!(record.vital_id == vital_id && record.timestamp == timestamp)
			});
			return Ok(entry.len() < before);
		}
		Ok(false)
	}

	async fn vital_count(&self) -> StorageResult<usize> {
		Ok(self.vitals.iter().map(|entry| entry.value().len()).sum())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_users: self.users.len(),
			total_vitals: self.vitals.iter().map(|entry| entry.value().len()).sum(),
		})
	}

	async fn close(&self) -> StorageResult<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn ts(secs: i64) -> DateTime<Utc> {
		Utc.timestamp_opt(secs, 0).unwrap()
	}

	fn record(username: &str, vital_id: &str, value: f64, secs: i64) -> VitalRecord {
		VitalRecord::new(username, vital_id, value, ts(secs))
	}

	#[tokio::test]
	async fn create_user_rejects_duplicates() {
		let store = MemoryStore::new();
		store.create_user(User::new("alice")).await.unwrap();
		let err = store.create_user(User::new("alice")).await.unwrap_err();
		assert!(matches!(err, StorageError::Duplicate { .. }));
		assert_eq!(store.user_count().await.unwrap(), 1);
	}

	#[tokio::test]
	async fn update_user_requires_existing_user() {
		let store = MemoryStore::new();
		let err = store.update_user(User::new("ghost")).await.unwrap_err();
		assert!(matches!(err, StorageError::NotFound { .. }));
	}

	#[tokio::test]
	async fn window_query_is_inclusive_on_both_ends() {
		let store = MemoryStore::new();
		for (value, secs) in [(70.0, 100), (80.0, 150), (90.0, 200), (99.0, 201)] {
			store
				.add_vital(record("alice", "HeartRate", value, secs))
				.await
				.unwrap();
		}

		let records = store
			.vitals_for_subject("alice", TimeWindow::new(ts(100), ts(200)))
			.await
			.unwrap();
		let values: Vec<f64> = records.iter().map(|r| r.value).collect();
		assert_eq!(values, vec![70.0, 80.0, 90.0]);
	}

	#[tokio::test]
	async fn vitals_by_kind_spans_subjects_and_filters_kind() {
		let store = MemoryStore::new();
		store
			.add_vital(record("alice", "HeartRate", 70.0, 100))
			.await
			.unwrap();
		store
			.add_vital(record("bob", "HeartRate", 90.0, 120))
			.await
			.unwrap();
		store
			.add_vital(record("bob", "Temperature", 37.0, 120))
			.await
			.unwrap();

		let records = store
			.vitals_by_kind("HeartRate", TimeWindow::new(ts(0), ts(500)))
			.await
			.unwrap();
		assert_eq!(records.len(), 2);
		assert!(records.iter().all(|r| r.vital_id == "HeartRate"));
	}

	#[tokio::test]
	async fn update_vital_matches_the_exact_triple() {
		let store = MemoryStore::new();
		store
			.add_vital(record("alice", "HeartRate", 70.0, 100))
			.await
			.unwrap();

		assert!(store
			.update_vital("alice", "HeartRate", ts(100), 75.0)
			.await
			.unwrap());
		assert!(!store
			.update_vital("alice", "HeartRate", ts(101), 75.0)
			.await
			.unwrap());
		assert!(!store
			.update_vital("alice", "Temperature", ts(100), 75.0)
			.await
			.unwrap());

		let records = store
			.vitals_for_subject("alice", TimeWindow::new(ts(0), ts(500)))
			.await
			.unwrap();
		assert_eq!(records[0].value, 75.0);
	}

	#[tokio::test]
	async fn remove_vital_reports_whether_anything_matched() {
		let store = MemoryStore::new();
		store
			.add_vital(record("alice", "HeartRate", 70.0, 100))
			.await
			.unwrap();

		assert!(store
			.remove_vital("alice", "HeartRate", ts(100))
			.await
			.unwrap());
		assert!(!store
			.remove_vital("alice", "HeartRate", ts(100))
			.await
			.unwrap());
		assert_eq!(store.vital_count().await.unwrap(), 0);
	}

	#[tokio::test]
	async fn removing_a_user_cascades_to_their_vitals() {
		let store = MemoryStore::new();
		store.create_user(User::new("alice")).await.unwrap();
		store
			.add_vital(record("alice", "HeartRate", 70.0, 100))
			.await
			.unwrap();
		store
			.add_vital(record("alice", "Temperature", 36.8, 110))
			.await
			.unwrap();

		assert!(store.remove_user("alice").await.unwrap());
		assert_eq!(store.vital_count().await.unwrap(), 0);
		assert!(!store.remove_user("alice").await.unwrap());
	}

	#[tokio::test]
	async fn stats_count_users_and_vitals() {
		let store = MemoryStore::new();
		store.create_user(User::new("alice")).await.unwrap();
		store
			.add_vital(record("alice", "HeartRate", 70.0, 100))
			.await
			.unwrap();

		let stats = store.stats().await.unwrap();
		assert_eq!(stats.total_users, 1);
		assert_eq!(stats.total_vitals, 1);
	}
}
