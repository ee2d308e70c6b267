//! E2E tests for vital record CRUD

mod mocks;

use mocks::entities::{seeded_builder, WINDOW_END, WINDOW_START};
use mocks::test_server::TestServer;
use reqwest::Client;
use serde_json::{json, Value};

async fn seeded_server() -> TestServer {
	TestServer::spawn_with_builder(seeded_builder())
		.await
		.expect("Failed to start test server")
}

#[tokio::test]
async fn record_a_vital_for_a_registered_user() {
	let server = seeded_server().await;
	let client = Client::new();

	let resp = client
		.post(format!("{}/api/v1/vitals", server.base_url))
		.json(&json!({
			"username": "alice",
			"vital_id": "HeartRate",
			"value": 84.0,
			"timestamp": "2024-01-01T01:00:00Z"
		}))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

	let json_body: Value = resp.json().await.unwrap();
	assert_eq!(json_body["status"], "success");
	assert_eq!(json_body["message"], "Vital inserted for alice.");

	server.abort();
}

#[tokio::test]
async fn recording_for_an_unknown_user_is_404() {
	let server = seeded_server().await;
	let client = Client::new();

	let resp = client
		.post(format!("{}/api/v1/vitals", server.base_url))
		.json(&json!({
			"username": "ghost",
			"vital_id": "HeartRate",
			"value": 84.0,
			"timestamp": "2024-01-01T01:00:00Z"
		}))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	let json_body: Value = resp.json().await.unwrap();
	assert_eq!(json_body["error"], "USER_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn recording_an_unknown_kind_is_rejected() {
	let server = seeded_server().await;
	let client = Client::new();

	let resp = client
		.post(format!("{}/api/v1/vitals", server.base_url))
		.json(&json!({
			"username": "alice",
			"vital_id": "ShoeSize",
			"value": 43.0,
			"timestamp": "2024-01-01T01:00:00Z"
		}))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	let json_body: Value = resp.json().await.unwrap();
	assert_eq!(json_body["error"], "VALIDATION_ERROR");
	assert!(json_body["message"]
		.as_str()
		.unwrap()
		.contains("unknown vital kind: ShoeSize"));

	server.abort();
}

#[tokio::test]
async fn listing_returns_the_window_inclusively() {
	let server = seeded_server().await;
	let client = Client::new();

	// Window clipped to [60s, 120s] past the epoch: exactly alice's first
	// two heart-rate readings, both boundary values included
	let resp = client
		.get(format!(
			"{}/api/v1/vitals/alice?start=2024-01-01T00:01:00Z&end=2024-01-01T00:02:00Z",
			server.base_url
		))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let json_body: Value = resp.json().await.unwrap();
	assert_eq!(json_body["status"], "success");
	let data = json_body["data"].as_array().unwrap();
	assert_eq!(data.len(), 2);
	let values: Vec<f64> = data.iter().map(|v| v["value"].as_f64().unwrap()).collect();
	assert_eq!(values, vec![70.0, 80.0]);

	server.abort();
}

#[tokio::test]
async fn inverted_window_is_rejected() {
	let server = seeded_server().await;
	let client = Client::new();

	let resp = client
		.get(format!(
			"{}/api/v1/vitals/alice?start={}&end={}",
			server.base_url, WINDOW_END, WINDOW_START
		))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

	server.abort();
}

#[tokio::test]
async fn amend_replaces_the_value_of_the_exact_record() {
	let server = seeded_server().await;
	let client = Client::new();

	let resp = client
		.put(format!("{}/api/v1/vitals/alice", server.base_url))
		.json(&json!({
			"vital_id": "HeartRate",
			"timestamp": "2024-01-01T00:01:00Z",
			"new_value": 75.0
		}))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let json_body: Value = resp.json().await.unwrap();
	assert_eq!(json_body["message"], "Vital updated for alice.");

	let resp = client
		.get(format!(
			"{}/api/v1/vitals/alice?start={}&end={}",
			server.base_url, WINDOW_START, WINDOW_END
		))
		.send()
		.await
		.unwrap();
	let json_body: Value = resp.json().await.unwrap();
	let values: Vec<f64> = json_body["data"]
		.as_array()
		.unwrap()
		.iter()
		.map(|v| v["value"].as_f64().unwrap())
		.collect();
	assert!(values.contains(&75.0));
	assert!(!values.contains(&70.0));

	server.abort();
}

#[tokio::test]
async fn amending_a_missing_record_is_404() {
	let server = seeded_server().await;
	let client = Client::new();

	let resp = client
		.put(format!("{}/api/v1/vitals/alice", server.base_url))
		.json(&json!({
			"vital_id": "HeartRate",
			"timestamp": "2024-01-01T12:00:00Z",
			"new_value": 75.0
		}))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

	let json_body: Value = resp.json().await.unwrap();
	assert_eq!(json_body["error"], "VITAL_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn delete_is_idempotent() {
	let server = seeded_server().await;
	let client = Client::new();

	let body = json!({
		"vital_id": "HeartRate",
		"timestamp": "2024-01-01T00:01:00Z"
	});

	let resp = client
		.delete(format!("{}/api/v1/vitals/alice", server.base_url))
		.json(&body)
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	let json_body: Value = resp.json().await.unwrap();
	assert_eq!(json_body["message"], "Vital deleted for alice.");

	// Deleting the same record again still succeeds
	let resp = client
		.delete(format!("{}/api/v1/vitals/alice", server.base_url))
		.json(&body)
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), reqwest::StatusCode::OK);

	server.abort();
}
