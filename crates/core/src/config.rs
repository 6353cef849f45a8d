//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into core services. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use std::path::{Path, PathBuf};

use crate::error::{ClinicaError, ClinicaResult};

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "clinica.db";

/// Default REST bind address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    database_path: PathBuf,
    rest_addr: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(database_path: PathBuf, rest_addr: String) -> ClinicaResult<Self> {
        if database_path.as_os_str().is_empty() {
            return Err(ClinicaError::InvalidInput(
                "database_path cannot be empty".into(),
            ));
        }
        if rest_addr.trim().is_empty() {
            return Err(ClinicaError::InvalidInput(
                "rest_addr cannot be empty".into(),
            ));
        }

        Ok(Self {
            database_path,
            rest_addr,
        })
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }
}

/// Resolve the database path from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns the default path.
pub fn database_path_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH))
}

/// Resolve the REST bind address from an optional environment value.
///
/// If `value` is `None` or empty/whitespace, returns the default address.
pub fn rest_addr_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.into())
}
