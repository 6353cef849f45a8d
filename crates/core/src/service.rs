//! Access layer over the paciente store.
//!
//! `PacienteService` is handed its `Database` at process start-up and shared
//! by cloning; there is no ambient registry. The underlying SQLite connection
//! is the sole shared resource, guarded by a mutex.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::db::Database;
use crate::error::{ClinicaError, ClinicaResult};
use crate::model::{ClinicaData, NovoPaciente, Paciente};

/// Paciente data operations - no API concerns.
#[derive(Clone)]
pub struct PacienteService {
    db: Arc<Mutex<Database>>,
}

impl PacienteService {
    /// Creates a new service over the given database handle.
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        Self { db }
    }

    fn db(&self) -> ClinicaResult<MutexGuard<'_, Database>> {
        self.db.lock().map_err(|_| ClinicaError::LockPoisoned)
    }

    /// List every paciente in the store, in store-native order.
    pub fn list_pacientes(&self) -> ClinicaResult<Vec<Paciente>> {
        self.db()?.list_pacientes()
    }

    /// Fetch a single paciente by id.
    ///
    /// # Errors
    /// Returns [`ClinicaError::PacienteNotFound`] if no paciente has that id.
    pub fn find_paciente(&self, id: i64) -> ClinicaResult<Paciente> {
        self.db()?
            .get_paciente(id)?
            .ok_or(ClinicaError::PacienteNotFound(id))
    }

    /// Persist a new paciente and return it with its store-assigned id.
    pub fn save_paciente(&self, novo: &NovoPaciente) -> ClinicaResult<Paciente> {
        self.db()?.insert_paciente(novo)
    }

    /// Run the analysis pass over a paciente's clinica data.
    ///
    /// The pass visits a detached copy of the collection, so per-entry
    /// processing added here can never corrupt the loaded collection
    /// mid-iteration. The record is returned unchanged.
    ///
    /// # Errors
    /// Returns [`ClinicaError::PacienteNotFound`] if no paciente has that id.
    pub fn analyze_paciente(&self, id: i64) -> ClinicaResult<Paciente> {
        let paciente = self.find_paciente(id)?;

        let entries: Vec<ClinicaData> = paciente.clinica_data.clone();
        for _entry in &entries {
            // TODO: aggregate recent test results into a report once the
            // report format is settled.
        }
        tracing::debug!(
            paciente_id = id,
            entries = entries.len(),
            "analysis pass complete"
        );

        Ok(paciente)
    }

    /// Record a clinica-data entry against an existing paciente.
    ///
    /// This is the external-collaborator path (CLI, tests); the HTTP surface
    /// never writes the collection.
    ///
    /// # Errors
    /// Returns [`ClinicaError::PacienteNotFound`] if the owner does not exist.
    pub fn record_clinica_data(
        &self,
        paciente_id: i64,
        component_name: &str,
        component_value: &str,
    ) -> ClinicaResult<ClinicaData> {
        let db = self.db()?;
        if db.get_paciente(paciente_id)?.is_none() {
            return Err(ClinicaError::PacienteNotFound(paciente_id));
        }
        db.insert_clinica_data(paciente_id, component_name, component_value)
    }
}
