//! Paciente store operations.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use super::Database;
use crate::error::ClinicaResult;
use crate::model::{ClinicaData, NovoPaciente, Paciente};

fn paciente_from_row(row: &Row<'_>) -> rusqlite::Result<Paciente> {
    Ok(Paciente {
        id: row.get(0)?,
        primeiro_nome: row.get(1)?,
        ultimo_nome: row.get(2)?,
        idade: row.get(3)?,
        clinica_data: Vec::new(),
    })
}

fn clinica_data_from_row(row: &Row<'_>) -> rusqlite::Result<ClinicaData> {
    Ok(ClinicaData {
        id: row.get(0)?,
        component_name: row.get(1)?,
        component_value: row.get(2)?,
        measured_date_time: row.get(3)?,
    })
}

impl Database {
    /// Insert a new paciente and return the persisted record.
    ///
    /// The store assigns the id; the returned collection is empty.
    pub fn insert_paciente(&self, novo: &NovoPaciente) -> ClinicaResult<Paciente> {
        self.conn.execute(
            "INSERT INTO pacientes (primeiro_nome, ultimo_nome, idade) VALUES (?1, ?2, ?3)",
            params![novo.primeiro_nome, novo.ultimo_nome, novo.idade],
        )?;

        Ok(Paciente {
            id: self.conn.last_insert_rowid(),
            primeiro_nome: novo.primeiro_nome.clone(),
            ultimo_nome: novo.ultimo_nome.clone(),
            idade: novo.idade,
            clinica_data: Vec::new(),
        })
    }

    /// Get a paciente by id, with its clinica-data collection loaded.
    pub fn get_paciente(&self, id: i64) -> ClinicaResult<Option<Paciente>> {
        let paciente = self
            .conn
            .query_row(
                "SELECT id, primeiro_nome, ultimo_nome, idade FROM pacientes WHERE id = ?1",
                [id],
                paciente_from_row,
            )
            .optional()?;

        match paciente {
            Some(mut paciente) => {
                paciente.clinica_data = self.clinica_data_for(paciente.id)?;
                Ok(Some(paciente))
            }
            None => Ok(None),
        }
    }

    /// List all pacientes, collections loaded, in store-native order.
    pub fn list_pacientes(&self) -> ClinicaResult<Vec<Paciente>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, primeiro_nome, ultimo_nome, idade FROM pacientes")?;
        let rows = stmt.query_map([], paciente_from_row)?;

        let mut pacientes = Vec::new();
        for row in rows {
            let mut paciente = row?;
            paciente.clinica_data = self.clinica_data_for(paciente.id)?;
            pacientes.push(paciente);
        }
        Ok(pacientes)
    }

    /// Load the clinica-data entries owned by a paciente.
    pub fn clinica_data_for(&self, paciente_id: i64) -> ClinicaResult<Vec<ClinicaData>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, component_name, component_value, measured_date_time
             FROM clinica_data
             WHERE paciente_id = ?1",
        )?;
        let rows = stmt.query_map([paciente_id], clinica_data_from_row)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Record a clinica-data entry, stamped with the current time.
    pub fn insert_clinica_data(
        &self,
        paciente_id: i64,
        component_name: &str,
        component_value: &str,
    ) -> ClinicaResult<ClinicaData> {
        let measured_date_time = Utc::now();
        self.conn.execute(
            "INSERT INTO clinica_data (paciente_id, component_name, component_value, measured_date_time)
             VALUES (?1, ?2, ?3, ?4)",
            params![paciente_id, component_name, component_value, measured_date_time],
        )?;

        Ok(ClinicaData {
            id: self.conn.last_insert_rowid(),
            component_name: component_name.to_owned(),
            component_value: component_value.to_owned(),
            measured_date_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn novo(primeiro: &str, ultimo: &str, idade: i32) -> NovoPaciente {
        NovoPaciente {
            primeiro_nome: primeiro.into(),
            ultimo_nome: ultimo.into(),
            idade,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let db = setup_db();

        let saved = db.insert_paciente(&novo("Sigmund", "Balman", 33)).unwrap();
        assert!(saved.id > 0);
        assert!(saved.clinica_data.is_empty());

        let retrieved = db.get_paciente(saved.id).unwrap().unwrap();
        assert_eq!(retrieved.primeiro_nome, "Sigmund");
        assert_eq!(retrieved.ultimo_nome, "Balman");
        assert_eq!(retrieved.idade, 33);
        assert!(retrieved.clinica_data.is_empty());
    }

    #[test]
    fn test_get_missing_is_none() {
        let db = setup_db();
        assert!(db.get_paciente(42).unwrap().is_none());
    }

    #[test]
    fn test_list_contains_each_inserted_once() {
        let db = setup_db();

        let a = db.insert_paciente(&novo("Ana", "Souza", 40)).unwrap();
        let b = db.insert_paciente(&novo("Rui", "Lima", 52)).unwrap();

        let all = db.list_pacientes().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all.iter().filter(|p| p.id == a.id).count(), 1);
        assert_eq!(all.iter().filter(|p| p.id == b.id).count(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let db = setup_db();

        let a = db.insert_paciente(&novo("Ana", "Souza", 40)).unwrap();
        let b = db.insert_paciente(&novo("Ana", "Souza", 40)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_clinica_data_loaded_with_owner() {
        let db = setup_db();

        let paciente = db.insert_paciente(&novo("Ana", "Souza", 40)).unwrap();
        db.insert_clinica_data(paciente.id, "hb", "14.2").unwrap();
        db.insert_clinica_data(paciente.id, "glicose", "98").unwrap();

        let retrieved = db.get_paciente(paciente.id).unwrap().unwrap();
        assert_eq!(retrieved.clinica_data.len(), 2);
        assert!(retrieved
            .clinica_data
            .iter()
            .any(|e| e.component_name == "hb" && e.component_value == "14.2"));
    }

    #[test]
    fn test_clinica_data_requires_existing_owner() {
        let db = setup_db();
        assert!(db.insert_clinica_data(42, "hb", "14.2").is_err());
    }
}
