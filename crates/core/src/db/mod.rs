//! Database layer for the clinica store.

mod pacientes;
mod schema;

pub use schema::SCHEMA;

use rusqlite::Connection;
use std::path::Path;

use crate::error::ClinicaResult;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating it and its schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> ClinicaResult<Self> {
        tracing::debug!("opening clinica database at {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> ClinicaResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> ClinicaResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NovoPaciente;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"pacientes".to_string()));
        assert!(tables.contains(&"clinica_data".to_string()));
    }

    #[test]
    fn test_open_persists_across_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("clinica.db");

        let novo = NovoPaciente {
            primeiro_nome: "Ana".into(),
            ultimo_nome: "Souza".into(),
            idade: 40,
        };

        let saved = {
            let db = Database::open(&path).unwrap();
            db.insert_paciente(&novo).unwrap()
        };

        let db = Database::open(&path).unwrap();
        let reloaded = db.get_paciente(saved.id).unwrap().unwrap();
        assert_eq!(reloaded, saved);
    }
}
