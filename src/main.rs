//! Vitals Aggregator Server
//!
//! Main entry point for the vitals aggregator server

use vitals_aggregator::VitalsBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	VitalsBuilder::new().start_server().await
}
