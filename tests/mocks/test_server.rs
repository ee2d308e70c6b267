//! Test server for integration tests
//!
//! Spawns the full router on an ephemeral port so tests exercise the real
//! HTTP surface.

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use vitals_aggregator::{api::routes::create_router, MemoryStore, VitalsBuilder};

/// Test server instance bound to an ephemeral local port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with default settings and empty storage
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_builder(VitalsBuilder::default()).await
	}

	/// Spawn a test server from a prepared builder (seeded users/vitals,
	/// extra vital kinds, custom settings)
	#[allow(dead_code)]
	pub async fn spawn_with_builder(
		builder: VitalsBuilder<MemoryStore>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (_router, state) = builder.start().await?;
		let app: Router = create_router().with_state(state);
		Self::spawn_server_with_app(app).await
	}

	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			axum::serve(listener, app)
				.await
				.expect("test server stopped unexpectedly");
		});

		Ok(Self {
			base_url: format!("http://{}", addr),
			handle,
		})
	}

	pub fn abort(&self) {
		self.handle.abort();
	}
}
