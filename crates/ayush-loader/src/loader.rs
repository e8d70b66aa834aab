//! Dataset file discovery and loading utilities.

use std::fs;
use std::path::{Path, PathBuf};

use ayush_types::Vocabulary;

use crate::types::{DatasetFiles, LoadError, LoadResult};

/// Delimited text extensions.
const DELIMITED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Workbook extensions, readable with the `spreadsheet` feature.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "ods"];

/// Discovers terminology tables in a data directory.
///
/// A file belongs to a vocabulary when its lower-cased stem contains the
/// vocabulary name, so both `NATIONAL AYURVEDA MORBIDITY CODES.xls` and
/// `ayurveda.tsv` are picked up. Files in a readable format are preferred,
/// then file-name order decides. A matching file in a format the loader
/// cannot read is still assigned, so the load reports it as unsupported
/// instead of missing. Vocabularies without any file are left unset; the
/// store records them as unavailable.
pub fn discover_dataset_files<P: AsRef<Path>>(path: P) -> LoadResult<DatasetFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(LoadError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(path)? {
        // Follows symlinks.
        let candidate = entry?.path();
        if candidate.is_file() {
            candidates.push(candidate);
        }
    }
    candidates.sort_by(|a, b| {
        is_dataset_file(b)
            .cmp(&is_dataset_file(a))
            .then_with(|| a.cmp(b))
    });

    let mut files = DatasetFiles::new(path);
    for candidate in candidates {
        let Some(vocabulary) = vocabulary_for_file(&candidate) else {
            continue;
        };
        if files.get(vocabulary).is_none() {
            files.set(vocabulary, candidate);
        }
    }

    Ok(files)
}

/// Returns true if the loader can read the file's format.
fn is_dataset_file(path: &Path) -> bool {
    has_extension(path, DELIMITED_EXTENSIONS)
        || (cfg!(feature = "spreadsheet") && is_spreadsheet_file(path))
}

/// Returns true if the path has a workbook extension.
pub(crate) fn is_spreadsheet_file(path: &Path) -> bool {
    has_extension(path, SPREADSHEET_EXTENSIONS)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// Determines which vocabulary a file belongs to from its stem.
fn vocabulary_for_file(path: &Path) -> Option<Vocabulary> {
    let stem = path.file_stem()?.to_string_lossy().to_lowercase();
    Vocabulary::ALL
        .into_iter()
        .find(|v| stem.contains(v.as_str()))
}

/// Returns the source identifier for a path: its file name.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
