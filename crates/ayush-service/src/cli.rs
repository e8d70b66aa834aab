//! Command-line arguments for the terminology service binary.

use std::path::PathBuf;

use ayush_types::Vocabulary;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "ayush-terminology",
    version,
    about = "NAMASTE to ICD-11 terminology lookup and rule-based mapping"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the NAMASTE morbidity code tables (.xls/.xlsx/.csv/.tsv).
    #[arg(long, env = "AYUSH_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Keep surrounding whitespace in cell values.
    #[arg(long = "no-trim-values", global = true)]
    pub no_trim_values: bool,

    /// Log output format. The level is taken from RUST_LOG (default: info).
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report loaded datasets and load errors.
    Health,

    /// Search a vocabulary for a term.
    Search {
        /// Text to look for (at least 2 characters).
        term: String,
        /// Vocabulary to search: ayurveda, siddha or unani.
        #[arg(long, default_value = "ayurveda")]
        system: Vocabulary,
        /// Maximum number of results.
        #[arg(long, default_value_t = ayush_loader::DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Translate a term into a Condition with TM2 and ICD-11 codings.
    Translate {
        term: String,
        /// Vocabulary the term was recorded in.
        #[arg(long)]
        system: Vocabulary,
    },

    /// Classify free text into a TM2 / ICD-11 pair.
    Classify { text: String },

    /// Print a sample FHIR CodeSystem for a vocabulary.
    CodeSystem {
        #[arg(long, default_value = "ayurveda")]
        system: Vocabulary,
    },

    /// Print the FHIR ConceptMap from a vocabulary to ICD-11.
    ConceptMap {
        #[arg(long, default_value = "ayurveda")]
        system: Vocabulary,
    },

    /// List the classification rules in evaluation order.
    Rules,
}

impl Command {
    /// Returns true if the command reads the terminology tables.
    pub fn needs_datasets(&self) -> bool {
        matches!(
            self,
            Self::Health | Self::Search { .. } | Self::CodeSystem { .. }
        )
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}
