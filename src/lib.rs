//! Vitals Aggregator Library
//!
//! A backend service that records per-user physiological measurements and
//! derives per-user means and population-relative percentile standings.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use vitals_service::{InsightService, UserService, VitalService};

// Core domain types - the most commonly used types
pub use vitals_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Requests and responses
	AggregateQuery,
	AggregateRequest,
	AggregateResponse,
	CreateUserRequest,
	// Error types
	InsightError,
	InsightValidationError,
	PercentileStanding,
	PopulationInsightRequest,
	PopulationInsightResponse,
	RecordVitalRequest,
	TimeWindow,
	UpdateUserRequest,
	// Primary domain entities
	User,
	UserValidationError,
	VitalKind,
	VitalRecord,
	VitalRegistry,
	VitalValidationError,
};

// Service layer
pub use vitals_service::{
	mean_by_kind, percentile_rank, InsightServiceError, UserServiceError, VitalServiceError,
};

// Storage layer
pub use vitals_storage::{
	traits::{Storage, StorageError, StorageResult, UserStorage, VitalStorage},
	MemoryStore,
};

// API layer
pub use vitals_api::{create_router, AppState};

// Config
pub use vitals_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for the member crates
pub mod models {
	pub use vitals_types::*;
}

pub mod storage {
	pub use vitals_storage::*;
}

pub mod config {
	pub use vitals_config::*;
}

pub mod service {
	pub use vitals_service::*;
}

pub mod api {
	pub use vitals_api::*;
	pub mod routes {
		pub use vitals_api::{create_router, AppState};
	}
}

pub mod mocks;

/// Builder pattern for configuring the vitals aggregator
pub struct VitalsBuilder<S = MemoryStore>
where
	S: Storage + Clone + 'static,
{
	settings: Option<Settings>,
	storage: S,
	registry: VitalRegistry,
	users: Vec<User>,
	vitals: Vec<VitalRecord>,
}

impl VitalsBuilder<MemoryStore> {
	/// Create a new builder with default memory storage
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::new())
	}
}

impl Default for VitalsBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S> VitalsBuilder<S>
where
	S: Storage + Clone + 'static,
{
	/// Create a new builder with the provided storage
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
			registry: VitalRegistry::with_defaults(),
			users: Vec::new(),
			vitals: Vec::new(),
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Register an additional vital kind on top of the defaults
	pub fn with_vital_kind(mut self, kind: VitalKind) -> Self {
		self.registry.register(kind);
		self
	}

	/// Seed a user into storage at startup
	pub fn with_user(mut self, user: User) -> Self {
		self.users.push(user);
		self
	}

	/// Seed a measurement into storage at startup
	pub fn with_vital(mut self, record: VitalRecord) -> Self {
		self.vitals.push(record);
		self
	}

	/// Upsert collected users into storage
	async fn seed_users(&self) -> Result<(), String> {
		let mut errors = Vec::new();

		for user in &self.users {
			if let Err(validation_error) = user.validate() {
				errors.push(format!(
					"User '{}' validation failed: {}",
					user.username, validation_error
				));
				continue;
			}
			if let Err(storage_error) = self.storage.create_user(user.clone()).await {
				errors.push(format!(
					"Failed to create user '{}': {}",
					user.username, storage_error
				));
			}
		}

		if !errors.is_empty() {
			return Err(format!("User seeding errors:\n{}", errors.join("\n")));
		}
		Ok(())
	}

	/// Upsert collected measurements into storage
	async fn seed_vitals(&self, registry: &VitalRegistry) -> Result<(), String> {
		let mut errors = Vec::new();

		for record in &self.vitals {
			if let Err(validation_error) = record.validate() {
				errors.push(format!(
					"Vital for '{}' validation failed: {}",
					record.username, validation_error
				));
				continue;
			}
			if !registry.contains(&record.vital_id) {
				errors.push(format!(
					"Vital for '{}' references unknown kind '{}'",
					record.username, record.vital_id
				));
				continue;
			}
			if let Err(storage_error) = self.storage.add_vital(record.clone()).await {
				errors.push(format!(
					"Failed to store vital for '{}': {}",
					record.username, storage_error
				));
			}
		}

		if !errors.is_empty() {
			return Err(format!("Vital seeding errors:\n{}", errors.join("\n")));
		}
		Ok(())
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use vitals_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		// Initialize tracing with the configuration
		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Start the aggregator and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		// Extend the registry with kinds declared in configuration
		let mut registry = self.registry.clone();
		for kind in settings.configured_vital_kinds() {
			registry.register(kind);
		}
		let registry = Arc::new(registry);

		// Seed collected users and measurements - fail on any validation errors
		self.seed_users().await?;
		self.seed_vitals(&registry).await?;

		info!(
			"Initialized with {} registered vital kind(s)",
			registry.len()
		);

		// Create application state
		let storage_arc: Arc<dyn Storage> = Arc::new(self.storage.clone());
		let app_state = AppState {
			user_service: Arc::new(UserService::new(Arc::clone(&storage_arc))),
			vital_service: Arc::new(VitalService::new(
				Arc::clone(&storage_arc),
				Arc::clone(&registry),
			)),
			insight_service: Arc::new(InsightService::new(Arc::clone(&storage_arc))),
			storage: storage_arc,
		};

		// Create router with state
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.clone().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		// Create the router using the builder pattern
		let (app, state) = self.start().await?;

		log_startup_complete(&bind_addr, state.vital_service.registry().len());

		let listener = tokio::net::TcpListener::bind(addr).await?;
		axum::serve(listener, app).await?;

		Ok(())
	}
}
