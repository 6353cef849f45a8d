//! Paciente and clinica-data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A clinic patient record.
///
/// `id` is a store-assigned surrogate key; creation requests never carry one.
/// Wire names follow the domain's original-language terms (`primeiroNome`,
/// `ultimoNome`, `idade`, `clinicaData`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paciente {
    pub id: i64,
    pub primeiro_nome: String,
    pub ultimo_nome: String,
    pub idade: i32,
    /// Clinical test results owned by this patient. Empty on creation; the
    /// HTTP surface only ever reads this collection.
    #[serde(default)]
    pub clinica_data: Vec<ClinicaData>,
}

/// A single clinical test/measurement owned by exactly one paciente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClinicaData {
    pub id: i64,
    pub component_name: String,
    pub component_value: String,
    pub measured_date_time: DateTime<Utc>,
}

/// Creation request body for a paciente.
///
/// The store assigns the id; an id in the request body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NovoPaciente {
    pub primeiro_nome: String,
    pub ultimo_nome: String,
    pub idade: i32,
}
