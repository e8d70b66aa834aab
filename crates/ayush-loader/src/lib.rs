//! # ayush-loader
//!
//! Loader, term search and rule-based classification for NAMASTE
//! traditional-medicine terminology.
//!
//! - [`discover_dataset_files`] and [`TableParser`] read the morbidity code
//!   tables from CSV or tab-delimited exports, or from the published Excel
//!   workbooks.
//! - [`TerminologyStore`] holds one table per vocabulary, or the reason it
//!   failed to load, and answers [`TerminologyStore::search`].
//! - [`ClassificationEngine`] maps free text to a TM2 / ICD-11 code pair.
//!
//! ## Features
//!
//! - `parallel` (default): loads the vocabulary tables concurrently via rayon.
//! - `spreadsheet` (default): reads `.xls`/`.xlsx`/`.ods` tables via calamine.
//!   Without it those files load as unsupported.

#![warn(missing_docs)]

mod classify;
mod loader;
mod parser;
mod search;
#[cfg(feature = "spreadsheet")]
mod spreadsheet;
mod store;
mod table;
mod types;

pub use classify::ClassificationEngine;
pub use loader::{discover_dataset_files, source_name};
pub use parser::{delimiter_for_path, normalize_header, TableParser};
pub use search::{SearchError, SearchResult, DEFAULT_SEARCH_LIMIT, MIN_QUERY_LEN};
pub use store::TerminologyStore;
pub use table::TerminologyTable;
pub use types::{DatasetFiles, LoadError, LoadFailure, LoadResult, TableConfig};

// Re-export ayush-types for convenience
pub use ayush_types;
