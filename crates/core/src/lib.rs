//! # Clinica Core
//!
//! Core business logic for the clinica patient record service.
//!
//! This crate contains pure data operations over the SQLite store:
//! - Paciente creation, lookup, and listing
//! - ClinicaData loading for the analysis pass
//! - Startup configuration and the error taxonomy
//!
//! **No API concerns**: HTTP servers, serialization of responses, or service
//! interfaces belong in `api-rest` and `clinica-cli`.

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod service;

pub use config::CoreConfig;
pub use db::Database;
pub use error::{ClinicaError, ClinicaResult};
pub use model::{ClinicaData, NovoPaciente, Paciente};
pub use service::PacienteService;
