//! SQLite schema definition.

/// Complete database schema for the clinica store.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Pacientes
-- ============================================================================

CREATE TABLE IF NOT EXISTS pacientes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    primeiro_nome TEXT NOT NULL,
    ultimo_nome TEXT NOT NULL,
    idade INTEGER NOT NULL
);

-- ============================================================================
-- Clinica Data (test results, each owned by exactly one paciente)
-- ============================================================================

CREATE TABLE IF NOT EXISTS clinica_data (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    paciente_id INTEGER NOT NULL REFERENCES pacientes(id),
    component_name TEXT NOT NULL,
    component_value TEXT NOT NULL,
    measured_date_time TEXT NOT NULL                -- RFC 3339 UTC timestamp
);

CREATE INDEX IF NOT EXISTS idx_clinica_data_paciente ON clinica_data(paciente_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_clinica_data_requires_owner() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        // No paciente with id 1 exists yet
        let result = conn.execute(
            "INSERT INTO clinica_data (paciente_id, component_name, component_value, measured_date_time)
             VALUES (1, 'hb', '14.2', '2026-01-01T00:00:00+00:00')",
            [],
        );
        assert!(result.is_err());

        conn.execute(
            "INSERT INTO pacientes (primeiro_nome, ultimo_nome, idade) VALUES ('Ana', 'Souza', 40)",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO clinica_data (paciente_id, component_name, component_value, measured_date_time)
             VALUES (1, 'hb', '14.2', '2026-01-01T00:00:00+00:00')",
            [],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_paciente_ids_autoincrement() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO pacientes (primeiro_nome, ultimo_nome, idade) VALUES ('Ana', 'Souza', 40)",
            [],
        )
        .unwrap();
        let first = conn.last_insert_rowid();

        conn.execute(
            "INSERT INTO pacientes (primeiro_nome, ultimo_nome, idade) VALUES ('Rui', 'Lima', 52)",
            [],
        )
        .unwrap();
        let second = conn.last_insert_rowid();

        assert!(second > first);
    }
}
