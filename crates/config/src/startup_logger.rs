//! Service startup logging for the vitals aggregator

use std::env;

use tracing::info;

/// Logs service information at startup
pub fn log_service_info() {
	// Use the root package name and version, not the current crate
	let service_name = "vitals-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Vitals Aggregator Service Starting ===");
	info!("Service: {} v{}", service_name, service_version);
	info!("Platform: {}", env::consts::OS);
	info!("Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("Working directory: {}", cwd.display());
	}
	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("Log level override: {}", rust_log);
	}

	info!(
		"Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs completion of the startup sequence
pub fn log_startup_complete(bind_address: &str, vital_kinds: usize) {
	info!(
		"Startup complete: listening on {} with {} registered vital kind(s)",
		bind_address, vital_kinds
	);
}
