//! Terminology table rows.
//!
//! The published morbidity tables do not share a schema: one vocabulary
//! names its columns `NAMC_CODE`/`NAMC_term`, another `Code`/`Term`, and some
//! only carry a `Word` column. Rows are therefore kept as generic
//! column-name to value records, and the code and display term are resolved
//! through fixed fallback chains.

use std::collections::BTreeMap;

/// Column names tried, in order, when resolving a row's code.
pub const CODE_FIELDS: &[&str] = &["NAMC_CODE", "Code"];

/// Column names tried, in order, when resolving a row's display term.
pub const TERM_FIELDS: &[&str] = &["NAMC_term", "Term", "Word"];

/// Column-name markers that make a column eligible for text search.
///
/// Matched case-insensitively against the column name, not its value.
pub const SEARCHABLE_COLUMN_MARKERS: &[&str] = &["term", "word", "translation"];

/// Returns true if a column with this name takes part in text search.
///
/// # Examples
///
/// ```
/// use ayush_types::is_searchable_column;
///
/// assert!(is_searchable_column("NAMC_term"));
/// assert!(is_searchable_column("Short_Translation"));
/// assert!(is_searchable_column("WORD"));
/// assert!(!is_searchable_column("NAMC_CODE"));
/// ```
pub fn is_searchable_column(name: &str) -> bool {
    let name = name.to_lowercase();
    SEARCHABLE_COLUMN_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// One row of a terminology table.
///
/// Empty cells are never stored, so a column is either present with a
/// non-empty value or absent.
///
/// # Examples
///
/// ```
/// use ayush_types::TerminologyRow;
///
/// let row: TerminologyRow = [("Code", "AAA-1"), ("Word", "Jvara"), ("Term", "")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(row.code(), Some("AAA-1"));
/// // `Term` is empty, so the chain falls through to `Word`.
/// assert_eq!(row.term(), Some("Jvara"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TerminologyRow {
    fields: BTreeMap<String, String>,
}

impl TerminologyRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a column, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Returns the value of the first column in `candidates` that is present.
    pub fn first_present(&self, candidates: &[&str]) -> Option<&str> {
        candidates.iter().find_map(|column| self.get(column))
    }

    /// Returns the row's code via [`CODE_FIELDS`].
    pub fn code(&self) -> Option<&str> {
        self.first_present(CODE_FIELDS)
    }

    /// Returns the row's display term via [`TERM_FIELDS`].
    pub fn term(&self) -> Option<&str> {
        self.first_present(TERM_FIELDS)
    }

    /// Returns the number of non-empty cells.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no non-empty cells.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TerminologyRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v): &(String, String)| !v.is_empty())
            .collect();
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> TerminologyRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_code_prefers_namc_code() {
        let r = row(&[("Code", "B-2"), ("NAMC_CODE", "A-1")]);
        assert_eq!(r.code(), Some("A-1"));

        let r = row(&[("Code", "B-2")]);
        assert_eq!(r.code(), Some("B-2"));

        let r = row(&[("code", "lower")]);
        assert_eq!(r.code(), None);
    }

    #[test]
    fn test_term_fallback_order() {
        let r = row(&[("Word", "w"), ("Term", "t"), ("NAMC_term", "n")]);
        assert_eq!(r.term(), Some("n"));

        let r = row(&[("Word", "w"), ("Term", "t")]);
        assert_eq!(r.term(), Some("t"));

        let r = row(&[("Word", "w")]);
        assert_eq!(r.term(), Some("w"));

        assert_eq!(row(&[]).term(), None);
    }

    #[test]
    fn test_empty_cells_are_dropped() {
        let r = row(&[("NAMC_term", ""), ("Term", "Kasa")]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("NAMC_term"), None);
        assert_eq!(r.term(), Some("Kasa"));
    }

    #[test]
    fn test_searchable_columns() {
        assert!(is_searchable_column("NAMC_term_diacritical"));
        assert!(is_searchable_column("Name English Translation"));
        assert!(is_searchable_column("Arabic_word"));
        assert!(!is_searchable_column("Short_definition"));
        assert!(!is_searchable_column("Sr No."));
    }
}
