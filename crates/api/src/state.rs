use std::sync::Arc;

use vitals_service::{InsightService, UserService, VitalService};
use vitals_storage::Storage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub user_service: Arc<UserService>,
	pub vital_service: Arc<VitalService>,
	pub insight_service: Arc<InsightService>,
	pub storage: Arc<dyn Storage>,
}
