//! Vitals Types
//!
//! Shared models and traits for the vitals aggregator.
//! This crate contains all domain models organized by business entity.

pub mod insights;
pub mod models;
pub mod storage;
pub mod users;
pub mod vitals;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use users::{
	CreateUserRequest, UpdateUserRequest, User, UserResponse, UserValidationError,
	UserValidationResult,
};

pub use vitals::{
	AmendVitalRequest, RecordVitalRequest, RemoveVitalRequest, VitalKind, VitalRecord,
	VitalRegistry, VitalResponse, VitalValidationError, VitalValidationResult, VitalsResponse,
};

pub use insights::{
	AggregateData, AggregateQuery, AggregateRequest, AggregateResponse, InsightError,
	InsightResult, InsightValidationError, InsightValidationResult, PercentileStanding,
	PopulationInsightData, PopulationInsightRequest, PopulationInsightResponse,
};

pub use models::TimeWindow;

pub use storage::{
	StorageError, StorageResult, StorageStats, StorageTrait, UserStorageTrait, VitalStorageTrait,
};
