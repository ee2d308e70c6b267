//! OpenAPI documentation, exposed when the `openapi` feature is enabled

use utoipa::OpenApi;

use crate::handlers;
use crate::handlers::common::{ErrorResponse, MessageResponse};
use vitals_types::insights::{
	AggregateData, AggregateRequest, AggregateResponse, PopulationInsightData,
	PopulationInsightRequest, PopulationInsightResponse,
};
use vitals_types::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use vitals_types::vitals::{
	AmendVitalRequest, RecordVitalRequest, RemoveVitalRequest, VitalResponse, VitalsResponse,
};

#[derive(OpenApi)]
#[openapi(
	paths(
		handlers::health::health,
		handlers::health::ready,
		handlers::users::post_users,
		handlers::users::get_user,
		handlers::users::put_user,
		handlers::users::delete_user,
		handlers::vitals::post_vitals,
		handlers::vitals::get_vitals,
		handlers::vitals::put_vital,
		handlers::vitals::delete_vital,
		handlers::insights::post_aggregate,
		handlers::insights::post_population_insight,
	),
	components(schemas(
		ErrorResponse,
		MessageResponse,
		CreateUserRequest,
		UpdateUserRequest,
		UserResponse,
		RecordVitalRequest,
		AmendVitalRequest,
		RemoveVitalRequest,
		VitalResponse,
		VitalsResponse,
		AggregateRequest,
		AggregateResponse,
		AggregateData,
		PopulationInsightRequest,
		PopulationInsightResponse,
		PopulationInsightData,
	)),
	tags(
		(name = "health", description = "Liveness and readiness probes"),
		(name = "users", description = "Subject registration and maintenance"),
		(name = "vitals", description = "Measurement recording and maintenance"),
		(name = "insights", description = "Mean aggregation and population percentile standing")
	)
)]
pub struct ApiDoc;
