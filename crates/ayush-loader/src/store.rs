//! In-memory terminology store.
//!
//! Holds, for every vocabulary, either a loaded table or the reason it could
//! not be loaded. Built once at start-up and read-only afterwards, so it can
//! be shared across threads without locking.
//!
//! ```ignore
//! let files = discover_dataset_files("data")?;
//! let store = TerminologyStore::load_all(&files, &TableConfig::default());
//!
//! for (source, reason) in store.errors() {
//!     eprintln!("{source}: {reason}");
//! }
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use ayush_types::Vocabulary;

use crate::loader::source_name;
use crate::table::TerminologyTable;
use crate::types::{DatasetFiles, LoadError, LoadFailure, LoadResult, TableConfig};

/// Per-vocabulary terminology tables.
#[derive(Debug, Clone, Default)]
pub struct TerminologyStore {
    /// Loaded tables.
    tables: BTreeMap<Vocabulary, TerminologyTable>,
    /// Load failures for vocabularies without a table.
    failures: BTreeMap<Vocabulary, LoadFailure>,
}

impl TerminologyStore {
    /// Creates an empty store. Every vocabulary starts out unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every vocabulary from the discovered files.
    ///
    /// Never fails: a vocabulary whose file is missing or unreadable is
    /// recorded as a [`LoadFailure`] and the others still load. With the
    /// `parallel` feature the files are parsed concurrently.
    pub fn load_all(files: &DatasetFiles, config: &TableConfig) -> Self {
        #[cfg(feature = "parallel")]
        let results: Vec<_> = Vocabulary::ALL
            .as_slice()
            .par_iter()
            .map(|&v| (v, load_one(files, v, config)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = Vocabulary::ALL
            .iter()
            .map(|&v| (v, load_one(files, v, config)))
            .collect();

        let mut store = Self::new();
        for (vocabulary, result) in results {
            match result {
                Ok(table) => store.insert_table(table),
                Err(failure) => store.record_failure(vocabulary, failure),
            }
        }
        store
    }

    /// Inserts a table, replacing any previous table or failure for its
    /// vocabulary.
    pub fn insert_table(&mut self, table: TerminologyTable) {
        let vocabulary = table.vocabulary();
        self.failures.remove(&vocabulary);
        self.tables.insert(vocabulary, table);
    }

    /// Marks a vocabulary as unavailable.
    pub fn record_failure(&mut self, vocabulary: Vocabulary, failure: LoadFailure) {
        self.tables.remove(&vocabulary);
        self.failures.insert(vocabulary, failure);
    }

    /// Returns the table for a vocabulary, if it loaded.
    pub fn table(&self, vocabulary: Vocabulary) -> Option<&TerminologyTable> {
        self.tables.get(&vocabulary)
    }

    /// Returns why a vocabulary has no table, if a reason was recorded.
    pub fn failure(&self, vocabulary: Vocabulary) -> Option<&LoadFailure> {
        self.failures.get(&vocabulary)
    }

    /// Returns the number of loaded tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns the row count of a vocabulary, 0 if unavailable.
    pub fn row_count(&self, vocabulary: Vocabulary) -> usize {
        self.table(vocabulary).map_or(0, TerminologyTable::len)
    }

    /// Returns load failure reasons keyed by source identifier.
    pub fn errors(&self) -> BTreeMap<String, String> {
        self.failures
            .values()
            .map(|f| (f.source.clone(), f.reason.clone()))
            .collect()
    }
}

/// Loads one vocabulary, converting any error into a [`LoadFailure`].
fn load_one(
    files: &DatasetFiles,
    vocabulary: Vocabulary,
    config: &TableConfig,
) -> Result<TerminologyTable, LoadFailure> {
    let Some(path) = files.get(vocabulary) else {
        let err = LoadError::DatasetMissing {
            vocabulary,
            directory: files.directory.display().to_string(),
        };
        return Err(LoadFailure {
            source: vocabulary.source_stem().to_string(),
            reason: err.to_string(),
        });
    };

    let result: LoadResult<_> = TerminologyTable::from_path(vocabulary, path, config.clone());
    result.map_err(|err| LoadFailure {
        source: source_name(path),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dataset(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TerminologyStore::new();
        assert_eq!(store.table_count(), 0);
        assert!(store.table(Vocabulary::Ayurveda).is_none());
        assert!(store.failure(Vocabulary::Ayurveda).is_none());
        assert!(store.errors().is_empty());
    }

    #[test]
    fn test_load_all_records_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = DatasetFiles::new(dir.path());
        files.set(
            Vocabulary::Ayurveda,
            write_dataset(
                dir.path(),
                "NATIONAL AYURVEDA MORBIDITY CODES.csv",
                "NAMC_CODE,NAMC_term\nAA-1,Jvara\nAA-2,Ajirna\n",
            ),
        );
        files.set(
            Vocabulary::Siddha,
            write_dataset(dir.path(), "siddha.tsv", ""),
        );

        let store = TerminologyStore::load_all(&files, &TableConfig::default());

        assert_eq!(store.table_count(), 1);
        assert_eq!(store.row_count(Vocabulary::Ayurveda), 2);
        assert_eq!(store.row_count(Vocabulary::Siddha), 0);
        assert_eq!(store.row_count(Vocabulary::Unani), 0);

        let siddha = store.failure(Vocabulary::Siddha).unwrap();
        assert_eq!(siddha.source, "siddha.tsv");
        assert!(siddha.reason.contains("Missing header row"));

        let unani = store.failure(Vocabulary::Unani).unwrap();
        assert_eq!(unani.source, "NATIONAL UNANI MORBIDITY CODES");
        assert!(unani.reason.starts_with("No dataset file found for unani"));

        let errors = store.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("siddha.tsv"));
    }

    #[test]
    fn test_unreadable_files_are_keyed_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "NATIONAL AYURVEDA MORBIDITY CODES.pdf", "%PDF-1.4");
        write_dataset(
            dir.path(),
            "NATIONAL SIDDHA MORBIDITY CODES.xls",
            "not a workbook",
        );
        write_dataset(
            dir.path(),
            "NATIONAL UNANI MORBIDITY CODES.csv",
            "Code,Term\nU-1,Humma\n",
        );

        let files = crate::discover_dataset_files(dir.path()).unwrap();
        let store = TerminologyStore::load_all(&files, &TableConfig::default());

        assert_eq!(store.row_count(Vocabulary::Unani), 1);

        let ayurveda = store.failure(Vocabulary::Ayurveda).unwrap();
        assert_eq!(ayurveda.source, "NATIONAL AYURVEDA MORBIDITY CODES.pdf");
        assert!(ayurveda.reason.starts_with("Unsupported dataset format"));

        let siddha = store.failure(Vocabulary::Siddha).unwrap();
        assert_eq!(siddha.source, "NATIONAL SIDDHA MORBIDITY CODES.xls");
        if cfg!(feature = "spreadsheet") {
            assert!(siddha.reason.starts_with("Spreadsheet error"));
        } else {
            assert!(siddha.reason.starts_with("Unsupported dataset format"));
        }
        assert!(!store
            .errors()
            .values()
            .any(|reason| reason.starts_with("No dataset file found")));
    }

    #[test]
    fn test_insert_table_clears_failure() {
        let mut store = TerminologyStore::new();
        store.record_failure(
            Vocabulary::Unani,
            LoadFailure {
                source: "unani.csv".to_string(),
                reason: "broken".to_string(),
            },
        );
        assert!(store.table(Vocabulary::Unani).is_none());

        store.insert_table(TerminologyTable::new(
            Vocabulary::Unani,
            "unani.csv",
            vec!["Code".to_string()],
            vec![],
        ));
        assert!(store.table(Vocabulary::Unani).is_some());
        assert!(store.failure(Vocabulary::Unani).is_none());
    }
}
