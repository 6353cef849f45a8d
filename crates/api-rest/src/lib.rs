//! # API REST
//!
//! REST API implementation for the clinica service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Core data operations live in `clinica-core`; handlers stay thin and map
//! access-layer results onto HTTP statuses.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use clinica_core::{ClinicaData, ClinicaError, NovoPaciente, Paciente, PacienteService};

/// Application state shared across REST API handlers.
///
/// Holds the `PacienteService` instance, supplied at process start-up.
#[derive(Clone)]
pub struct AppState {
    service: PacienteService,
}

impl AppState {
    pub fn new(service: PacienteService) -> Self {
        Self { service }
    }
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_pacientes,
        get_paciente,
        create_paciente,
        analyze_paciente,
    ),
    components(schemas(HealthRes, Paciente, ClinicaData, NovoPaciente))
)]
struct ApiDoc;

/// Build the REST router: route table, Swagger UI, CORS, state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pacientes", get(list_pacientes))
        .route("/api/pacientes", post(create_paciente))
        .route("/api/pacientes/:id", get(get_paciente))
        .route("/api/pacientes/analise/:id", get(analyze_paciente))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
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
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "clinica REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/pacientes",
    responses(
        (status = 200, description = "List of pacientes", body = Vec<Paciente>),
        (status = 500, description = "Internal server error")
    )
)]
/// List all pacientes in the store
///
/// Returns every paciente as a JSON array, in store-native order. An empty
/// store yields an empty array with status 200.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
async fn list_pacientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Paciente>>, (StatusCode, &'static str)> {
    match state.service.list_pacientes() {
        Ok(pacientes) => Ok(Json(pacientes)),
        Err(e) => {
            tracing::error!("List pacientes error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/pacientes/{id}",
    responses(
        (status = 200, description = "Paciente found", body = Paciente),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Fetch a single paciente by id
///
/// # Errors
/// Returns `404 Not Found` if no paciente has the given id, and
/// `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
async fn get_paciente(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i64>,
) -> Result<Json<Paciente>, (StatusCode, &'static str)> {
    match state.service.find_paciente(id) {
        Ok(paciente) => Ok(Json(paciente)),
        Err(ClinicaError::PacienteNotFound(_)) => Err((StatusCode::NOT_FOUND, "Paciente not found")),
        Err(e) => {
            tracing::error!("Get paciente error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/pacientes",
    request_body = NovoPaciente,
    responses(
        (status = 201, description = "Paciente created", body = Paciente),
        (status = 400, description = "Bad request"),
        (status = 500, description = "Internal server error")
    )
)]
/// Register a new paciente
///
/// The store assigns a new unique id; any id in the request body is ignored.
/// The full persisted record is returned, with an empty clinicaData
/// collection.
///
/// # Errors
/// Returns `500 Internal Server Error` if the record cannot be persisted.
/// Malformed bodies are rejected at the serialization boundary.
#[axum::debug_handler]
async fn create_paciente(
    State(state): State<AppState>,
    Json(novo): Json<NovoPaciente>,
) -> Result<(StatusCode, Json<Paciente>), (StatusCode, &'static str)> {
    match state.service.save_paciente(&novo) {
        Ok(paciente) => Ok((StatusCode::CREATED, Json(paciente))),
        Err(e) => {
            tracing::error!("Create paciente error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/pacientes/analise/{id}",
    responses(
        (status = 200, description = "Paciente analyzed", body = Paciente),
        (status = 404, description = "Paciente not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Run the analysis pass over a paciente's clinica data
///
/// Read-only: the pass iterates a detached copy of the collection and the
/// paciente is returned unmodified.
///
/// # Errors
/// Returns `404 Not Found` if no paciente has the given id, and
/// `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
async fn analyze_paciente(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<i64>,
) -> Result<Json<Paciente>, (StatusCode, &'static str)> {
    match state.service.analyze_paciente(id) {
        Ok(paciente) => Ok(Json(paciente)),
        Err(ClinicaError::PacienteNotFound(_)) => Err((StatusCode::NOT_FOUND, "Paciente not found")),
        Err(e) => {
            tracing::error!("Analyze paciente error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}
