//! NAMASTE terminology service binary.

use std::path::Path;
use std::process::ExitCode;

use ayush_loader::{discover_dataset_files, DatasetFiles, TableConfig, TerminologyStore};
use ayush_service::responses::SearchResponse;
use ayush_service::{TerminologyServer, DEFAULT_CONCEPT_MAP_SAMPLES};
use ayush_types::Vocabulary;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use crate::cli::{Cli, Command, LogFormatArg};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let store = if cli.command.needs_datasets() {
        let config = TableConfig {
            trim_values: !cli.no_trim_values,
            ..TableConfig::default()
        };
        load_store(&cli.data_dir, &config)
    } else {
        TerminologyStore::new()
    };
    let server = TerminologyServer::new(store);

    match cli.command {
        Command::Health => print_json(&server.health())?,
        Command::Search {
            term,
            system,
            limit,
        } => {
            let response = server.search(system, &term, limit);
            print_json(&response)?;
            if !matches!(response, SearchResponse::Success { .. }) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Translate { term, system } => print_json(&server.translate(system, &term))?,
        Command::Classify { text } => print_json(&server.classify(&text))?,
        Command::CodeSystem { system } => print_json(&server.code_system(system))?,
        Command::ConceptMap { system } => print_json(
            &server.concept_map(system, DEFAULT_CONCEPT_MAP_SAMPLES),
        )?,
        Command::Rules => print_json(server.engine().rules())?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Initializes tracing on stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing(format: LogFormatArg) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    match format {
        LogFormatArg::Pretty => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init(),
        LogFormatArg::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init(),
    }
}

/// Discovers and loads the vocabulary tables. Never fails: missing or broken
/// datasets are logged and reported through health and search.
fn load_store(data_dir: &Path, config: &TableConfig) -> TerminologyStore {
    tracing::info!("Loading NAMASTE datasets from: {}", data_dir.display());

    let files = match discover_dataset_files(data_dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("Could not scan data directory: {}", e);
            DatasetFiles::new(data_dir)
        }
    };

    let store = TerminologyStore::load_all(&files, config);

    for vocabulary in Vocabulary::ALL {
        match store.table(vocabulary) {
            Some(table) => tracing::info!(
                "Loaded {} {} rows from {} ({} searchable columns)",
                table.len(),
                vocabulary,
                table.source(),
                table.searchable_columns().len()
            ),
            None => {
                if let Some(failure) = store.failure(vocabulary) {
                    tracing::warn!(
                        "Could not load {} dataset from {}: {}",
                        vocabulary,
                        failure.source,
                        failure.reason
                    );
                }
            }
        }
    }

    store
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
