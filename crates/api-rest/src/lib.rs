//! # API REST
//!
//! REST API implementation for the ABDM mock.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, status codes, CORS, panic recovery)
//!
//! Uses `api-shared` for envelopes and `abdm-core` for record generation.

#![warn(rust_2018_idioms)]

pub mod error;

use abdm_core::{Identifier, RecordGenerator};
use api_shared::{ErrorEnvelope, HealthRes, HealthService, SuccessEnvelope};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Route of the health-records endpoint.
pub const HEALTH_RECORDS_PATH: &str = "/api/v1/health-records";

/// Application state for the REST API server
///
/// Holds the record generator. The generator is immutable and builds a fresh seeded RNG for
/// every request, so it is shared across handlers without locking.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<RecordGenerator>,
}

impl AppState {
    pub fn new(generator: RecordGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, get_health_records),
    components(schemas(
        HealthRes,
        SuccessEnvelope,
        ErrorEnvelope,
        abdm_core::HealthRecord,
        abdm_core::PatientInfo,
        abdm_core::Address,
        abdm_core::MedicalHistory,
        abdm_core::Surgery,
        abdm_core::Visit,
        abdm_core::LaboratoryResults,
        abdm_core::LabTest,
        abdm_core::InsuranceInfo,
        abdm_core::VitalsReading,
        abdm_core::IdentifierKind,
    ))
)]
pub struct ApiDoc;

/// Name of the query parameter carrying the Aadhaar or ABHA number.
pub const IDENTIFIER_PARAM: &str = "identifier";

/// Returns the first `identifier` value in the query string.
///
/// Later repetitions of the key are ignored.
fn first_identifier(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == IDENTIFIER_PARAM)
        .map(|(_, value)| value)
}

/// Builds the full application router with middleware applied.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .route(HEALTH_RECORDS_PATH, get(get_health_records))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state);

    with_middleware(routes)
}

fn with_middleware(routes: Router) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/v1/health-records",
    params(
        ("identifier" = Option<String>, Query,
            description = "12-digit Aadhaar number, or ABHA followed by 10 digits. Only the first occurrence is used.")
    ),
    responses(
        (status = 200, description = "Synthetic health record", body = SuccessEnvelope),
        (status = 400, description = "Missing or malformed identifier", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
/// Return a synthetic health record for an Aadhaar or ABHA number
///
/// The record is derived deterministically from the last four digits of the identifier.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the `identifier` parameter is missing or empty, or
/// - it is neither 12 digits nor `ABHA` followed by 10 digits.
///
/// If the parameter is repeated, the first value wins.
#[axum::debug_handler]
async fn get_health_records(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SuccessEnvelope>, ApiError> {
    let Query(pairs) = query.map_err(|e| {
        tracing::warn!("Rejected health-records query: {}", e);
        ApiError::InvalidIdentifierFormat
    })?;

    let raw = first_identifier(pairs).unwrap_or_default();
    let identifier = Identifier::parse(&raw).map_err(|e| {
        tracing::warn!("Rejected identifier: {}", e);
        ApiError::from(e)
    })?;

    let record = state.generator.generate(&identifier);
    tracing::info!(
        identifier_type = %identifier.kind(),
        "Health records retrieved"
    );

    Ok(Json(SuccessEnvelope::records(record)))
}
