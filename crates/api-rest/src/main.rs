//! REST API server binary.
//!
//! Runs the clinica REST API (with OpenAPI/Swagger UI) over a SQLite store.

use std::sync::{Arc, Mutex};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{app, AppState};
use clinica_core::{
    config::{database_path_from_env_value, rest_addr_from_env_value},
    CoreConfig, Database, PacienteService,
};

/// Main entry point for the clinica REST API server
///
/// Starts the REST API server on the configured address (default:
/// 0.0.0.0:8080) over the configured SQLite database file, which is created
/// together with its schema on first start.
///
/// # Environment Variables
/// - `CLINICA_REST_ADDR`: Server address (default: "0.0.0.0:8080")
/// - `CLINICA_DB`: SQLite database path (default: "clinica.db")
///
/// # Returns
/// * `Ok(())` - If server starts and runs successfully
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the database file cannot be opened or its schema applied,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("clinica_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_path = database_path_from_env_value(std::env::var("CLINICA_DB").ok());
    let rest_addr = rest_addr_from_env_value(std::env::var("CLINICA_REST_ADDR").ok());
    let cfg = CoreConfig::new(database_path, rest_addr)?;

    tracing::info!("-- Starting clinica REST API on {}", cfg.rest_addr());

    let db = Database::open(cfg.database_path())?;
    let service = PacienteService::new(Arc::new(Mutex::new(db)));

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, app(AppState::new(service))).await?;

    Ok(())
}
