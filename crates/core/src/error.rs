#[derive(Debug, thiserror::Error)]
pub enum ClinicaError {
    #[error("paciente not found: {0}")]
    PacienteNotFound(i64),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database lock poisoned")]
    LockPoisoned,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ClinicaResult<T> = std::result::Result<T, ClinicaError>;
