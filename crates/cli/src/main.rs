//! Command-line front door over the clinica store.
//!
//! Shares the access layer with the REST API. `add-data` is the path through
//! which clinica-data entries enter the store; the HTTP surface only reads
//! them.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};

use clinica_core::{
    config::database_path_from_env_value, Database, NovoPaciente, PacienteService,
};

#[derive(Parser)]
#[command(name = "clinica")]
#[command(about = "Clinica patient record service CLI")]
struct Cli {
    /// SQLite database path (defaults to CLINICA_DB, then clinica.db)
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all pacientes
    List,
    /// Fetch a single paciente by id
    Get {
        /// Paciente id
        id: i64,
    },
    /// Register a new paciente
    Create {
        primeiro_nome: String,
        ultimo_nome: String,
        idade: i32,
    },
    /// Run the analysis pass over a paciente's clinica data
    Analyze {
        /// Paciente id
        id: i64,
    },
    /// Record a clinica data entry for a paciente
    AddData {
        paciente_id: i64,
        component_name: String,
        component_value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let database_path = cli
        .db
        .unwrap_or_else(|| database_path_from_env_value(std::env::var("CLINICA_DB").ok()));
    let db = Database::open(&database_path)?;
    let service = PacienteService::new(Arc::new(Mutex::new(db)));

    match cli.command {
        Commands::List => {
            let pacientes = service.list_pacientes()?;
            println!("{}", serde_json::to_string_pretty(&pacientes)?);
        }
        Commands::Get { id } => {
            let paciente = service.find_paciente(id)?;
            println!("{}", serde_json::to_string_pretty(&paciente)?);
        }
        Commands::Create {
            primeiro_nome,
            ultimo_nome,
            idade,
        } => {
            let paciente = service.save_paciente(&NovoPaciente {
                primeiro_nome,
                ultimo_nome,
                idade,
            })?;
            println!("{}", serde_json::to_string_pretty(&paciente)?);
        }
        Commands::Analyze { id } => {
            let paciente = service.analyze_paciente(id)?;
            println!("{}", serde_json::to_string_pretty(&paciente)?);
        }
        Commands::AddData {
            paciente_id,
            component_name,
            component_value,
        } => {
            let entry =
                service.record_clinica_data(paciente_id, &component_name, &component_value)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
    }

    Ok(())
}
