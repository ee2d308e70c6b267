//! Vitals Configuration
//!
//! Configuration management and startup utilities for the vitals aggregator.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::load_config;
pub use settings::{
	EnvironmentProfile, EnvironmentSettings, LogFormat, LoggingSettings, ServerSettings, Settings,
	VitalKindSettings,
};
pub use startup_logger::{log_service_info, log_startup_complete};
