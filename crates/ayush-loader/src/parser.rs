//! Delimited terminology table parser.
//!
//! Provides a streaming parser for morbidity code tables exported as CSV or
//! tab-delimited text. Column names are taken from the header row and
//! trimmed; cells are read leniently so that odd encodings and ragged rows
//! never abort a load.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ayush_types::TerminologyRow;
use csv::{ByteRecord, Reader, ReaderBuilder};

use crate::types::{LoadError, LoadResult, TableConfig};

/// A streaming parser for terminology tables.
///
/// Yields one [`TerminologyRow`] per non-blank record, keyed by the
/// normalized header names.
pub struct TableParser<R: Read> {
    reader: Reader<R>,
    columns: Vec<String>,
    config: TableConfig,
}

impl TableParser<BufReader<File>> {
    /// Creates a new parser from a file path.
    ///
    /// The delimiter comes from `config`, or from the file extension when
    /// unset.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, has an unsupported
    /// extension, or has no header row.
    pub fn from_path<P: AsRef<Path>>(path: P, config: TableConfig) -> LoadResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let delimiter = match config.delimiter {
            Some(d) => d,
            None => delimiter_for_path(path)?,
        };

        let file = File::open(path)?;
        let config = TableConfig {
            delimiter: Some(delimiter),
            ..config
        };
        Self::from_reader(BufReader::new(file), config).map_err(|e| match e {
            LoadError::EmptyHeader { .. } => LoadError::EmptyHeader {
                path: path.display().to_string(),
            },
            other => other,
        })
    }
}

impl<R: Read> TableParser<R> {
    /// Creates a new parser from a reader. Defaults to `,` when the config
    /// has no delimiter.
    pub fn from_reader(reader: R, config: TableConfig) -> LoadResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter.unwrap_or(b','))
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::None)
            .from_reader(reader);

        let columns = Self::read_columns(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            columns,
            config,
        })
    }

    /// Reads and normalizes the header row.
    fn read_columns(reader: &mut Reader<R>) -> LoadResult<Vec<String>> {
        let headers = reader.byte_headers()?;
        let raw: Vec<String> = headers
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();

        if raw.iter().all(|h| normalize_header(h).is_empty()) {
            return Err(LoadError::EmptyHeader {
                path: "<reader>".to_string(),
            });
        }

        Ok(dedupe_columns(raw))
    }

    /// Returns the normalized column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Parses all remaining rows into a Vec.
    ///
    /// Stops at the first malformed record.
    pub fn parse_all(self) -> LoadResult<Vec<TerminologyRow>> {
        self.collect()
    }

    fn to_row(&self, record: &ByteRecord) -> TerminologyRow {
        build_row(
            &self.columns,
            record.iter().map(String::from_utf8_lossy),
            self.config.trim_values,
        )
    }
}

impl<R: Read> Iterator for TableParser<R> {
    type Item = LoadResult<TerminologyRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = ByteRecord::new();
        loop {
            match self.reader.read_byte_record(&mut record) {
                Ok(true) => {
                    // Skip blank records
                    if record.iter().all(|f| f.iter().all(u8::is_ascii_whitespace)) {
                        continue;
                    }

                    let row = self.to_row(&record);
                    if row.is_empty() {
                        continue;
                    }
                    return Some(Ok(row));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Returns the delimiter implied by a file extension.
///
/// `.csv` is comma separated; `.tsv` and `.txt` are tab separated.
pub fn delimiter_for_path(path: &Path) -> LoadResult<u8> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(b','),
        "tsv" | "txt" => Ok(b'\t'),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Normalizes a header name: strips a UTF-8 BOM and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Pairs cells with their columns. Cells past the last column are dropped
/// and empty cells are left out of the row.
pub(crate) fn build_row<'a>(
    columns: &[String],
    cells: impl Iterator<Item = Cow<'a, str>>,
    trim_values: bool,
) -> TerminologyRow {
    columns
        .iter()
        .zip(cells)
        .map(|(column, value)| {
            let value = if trim_values {
                value.trim().to_string()
            } else {
                value.into_owned()
            };
            (column.clone(), value)
        })
        .collect()
}

/// Normalizes header names and makes them unique.
///
/// Blank names become `Unnamed: <index>`; repeated names get a `.1`, `.2`,
/// ... suffix so no column shadows another.
pub(crate) fn dedupe_columns(raw: Vec<String>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::with_capacity(raw.len());
    for (i, header) in raw.iter().enumerate() {
        let base = normalize_header(header);
        let base = if base.is_empty() {
            format!("Unnamed: {}", i)
        } else {
            base
        };

        let mut name = base.clone();
        let mut n = 0;
        while columns.contains(&name) {
            n += 1;
            name = format!("{}.{}", base, n);
        }
        columns.push(name);
    }
    columns
}
