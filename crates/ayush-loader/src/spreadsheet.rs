//! Spreadsheet terminology tables.
//!
//! The morbidity code tables are published as Excel workbooks. The first
//! worksheet is read with the same header and cell rules as the delimited
//! parser.

use std::borrow::Cow;
use std::path::Path;

use ayush_types::TerminologyRow;
use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::parser::{build_row, dedupe_columns, normalize_header};
use crate::types::{LoadError, LoadResult, TableConfig};

/// Reads the first worksheet of a workbook into columns and rows.
///
/// # Errors
/// Returns an error if the file is missing, is not a readable workbook, or
/// its first sheet has no header row.
pub fn read_workbook(
    path: &Path,
    config: &TableConfig,
) -> LoadResult<(Vec<String>, Vec<TerminologyRow>)> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let empty_header = || LoadError::EmptyHeader {
        path: path.display().to_string(),
    };

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(empty_header)??;

    read_range(&range, config).map_err(|e| match e {
        LoadError::EmptyHeader { .. } => empty_header(),
        other => other,
    })
}

/// Converts a worksheet range: the first row is the header, blank rows are
/// skipped.
fn read_range(
    range: &Range<Data>,
    config: &TableConfig,
) -> LoadResult<(Vec<String>, Vec<TerminologyRow>)> {
    let mut sheet_rows = range.rows();

    let raw: Vec<String> = sheet_rows
        .next()
        .map(|header| header.iter().map(cell_text).collect())
        .unwrap_or_default();
    if raw.iter().all(|h| normalize_header(h).is_empty()) {
        return Err(LoadError::EmptyHeader {
            path: "<sheet>".to_string(),
        });
    }
    let columns = dedupe_columns(raw);

    let rows = sheet_rows
        .map(|cells| cells.iter().map(cell_text).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|c| !c.trim().is_empty()))
        .map(|cells| {
            build_row(
                &columns,
                cells.into_iter().map(Cow::Owned),
                config.trim_values,
            )
        })
        .filter(|row| !row.is_empty())
        .collect();

    Ok((columns, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // f64 formatting drops the fraction of whole numbers: 7.0 reads "7".
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}
