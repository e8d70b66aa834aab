//! Loader-specific types for terminology dataset processing.

use std::path::PathBuf;

use ayush_types::Vocabulary;
use thiserror::Error;

/// Errors that can occur while discovering or parsing dataset files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading a dataset file.
    #[error("IO error reading dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Spreadsheet reading error.
    #[cfg(feature = "spreadsheet")]
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// No dataset file was discovered for a vocabulary.
    #[error("No dataset file found for {vocabulary} in {directory}")]
    DatasetMissing {
        /// The vocabulary without a file.
        vocabulary: Vocabulary,
        /// The directory that was searched.
        directory: String,
    },

    /// The file has no usable header row.
    #[error("Missing header row in {path}")]
    EmptyHeader {
        /// The file without a header.
        path: String,
    },

    /// The file extension is not a format the loader can read.
    #[error("Unsupported dataset format: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Configuration for table parsing.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field delimiter. `None` picks one from the file extension.
    pub delimiter: Option<u8>,
    /// Whether to trim surrounding whitespace from cell values.
    pub trim_values: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            trim_values: true,
        }
    }
}

/// Why a vocabulary has no table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    /// Source identifier: the file name, or the canonical stem if no file
    /// was found.
    pub source: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Discovered dataset files in a data directory.
#[derive(Debug, Clone, Default)]
pub struct DatasetFiles {
    /// Directory that was scanned.
    pub directory: PathBuf,
    /// Path to the Ayurveda table.
    pub ayurveda: Option<PathBuf>,
    /// Path to the Siddha table.
    pub siddha: Option<PathBuf>,
    /// Path to the Unani table.
    pub unani: Option<PathBuf>,
}

impl DatasetFiles {
    /// Creates a new empty DatasetFiles rooted at `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Returns the discovered file for a vocabulary.
    pub fn get(&self, vocabulary: Vocabulary) -> Option<&PathBuf> {
        match vocabulary {
            Vocabulary::Ayurveda => self.ayurveda.as_ref(),
            Vocabulary::Siddha => self.siddha.as_ref(),
            Vocabulary::Unani => self.unani.as_ref(),
        }
    }

    /// Sets the file for a vocabulary.
    pub fn set(&mut self, vocabulary: Vocabulary, path: PathBuf) {
        let slot = match vocabulary {
            Vocabulary::Ayurveda => &mut self.ayurveda,
            Vocabulary::Siddha => &mut self.siddha,
            Vocabulary::Unani => &mut self.unani,
        };
        *slot = Some(path);
    }

    /// Returns true if every vocabulary has a file.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Returns the vocabularies without a file.
    pub fn missing(&self) -> Vec<Vocabulary> {
        Vocabulary::ALL
            .into_iter()
            .filter(|v| self.get(*v).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_config_default() {
        let config = TableConfig::default();
        assert!(config.delimiter.is_none());
        assert!(config.trim_values);
    }

    #[test]
    fn test_dataset_files_missing() {
        let mut files = DatasetFiles::new("data");
        files.set(Vocabulary::Siddha, PathBuf::from("data/siddha.csv"));

        assert!(!files.is_complete());
        assert_eq!(
            files.missing(),
            vec![Vocabulary::Ayurveda, Vocabulary::Unani]
        );
        assert_eq!(
            files.get(Vocabulary::Siddha),
            Some(&PathBuf::from("data/siddha.csv"))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = LoadError::DatasetMissing {
            vocabulary: Vocabulary::Unani,
            directory: "data".to_string(),
        };
        assert_eq!(err.to_string(), "No dataset file found for unani in data");
    }
}
