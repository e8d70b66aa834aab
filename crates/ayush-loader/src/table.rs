//! In-memory terminology table for one vocabulary.

use std::path::Path;

use ayush_types::{is_searchable_column, TerminologyRow, Vocabulary};

use crate::loader::source_name;
use crate::parser::TableParser;
use crate::types::{LoadResult, TableConfig};

/// A vocabulary's rows, in source order.
///
/// Immutable after construction. The searchable columns are computed once
/// from the column names.
#[derive(Debug, Clone)]
pub struct TerminologyTable {
    vocabulary: Vocabulary,
    source: String,
    columns: Vec<String>,
    searchable_columns: Vec<String>,
    rows: Vec<TerminologyRow>,
}

impl TerminologyTable {
    /// Creates a table from already-parsed rows.
    pub fn new(
        vocabulary: Vocabulary,
        source: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<TerminologyRow>,
    ) -> Self {
        let searchable_columns = columns
            .iter()
            .filter(|c| is_searchable_column(c))
            .cloned()
            .collect();

        Self {
            vocabulary,
            source: source.into(),
            columns,
            searchable_columns,
            rows,
        }
    }

    /// Loads a table from a delimited file, or a workbook with the
    /// `spreadsheet` feature.
    pub fn from_path<P: AsRef<Path>>(
        vocabulary: Vocabulary,
        path: P,
        config: TableConfig,
    ) -> LoadResult<Self> {
        let path = path.as_ref();

        #[cfg(feature = "spreadsheet")]
        if crate::loader::is_spreadsheet_file(path) {
            let (columns, rows) = crate::spreadsheet::read_workbook(path, &config)?;
            return Ok(Self::new(vocabulary, source_name(path), columns, rows));
        }

        let parser = TableParser::from_path(path, config)?;
        let columns = parser.columns().to_vec();
        let rows = parser.parse_all()?;
        Ok(Self::new(vocabulary, source_name(path), columns, rows))
    }

    /// Returns the vocabulary this table belongs to.
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// Returns the source identifier (file name).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the columns that take part in text search.
    pub fn searchable_columns(&self) -> &[String] {
        &self.searchable_columns
    }

    /// Returns the first `n` rows.
    pub fn head(&self, n: usize) -> &[TerminologyRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns up to `limit` rows whose searchable columns contain `needle`.
    ///
    /// `needle` must already be trimmed and lower-cased. Rows come back in
    /// table order; there is no relevance ranking.
    pub fn matching_rows(&self, needle: &str, limit: usize) -> Vec<&TerminologyRow> {
        self.rows
            .iter()
            .filter(|row| self.row_matches(row, needle))
            .take(limit)
            .collect()
    }

    fn row_matches(&self, row: &TerminologyRow, needle: &str) -> bool {
        self.searchable_columns.iter().any(|column| {
            row.get(column)
                .is_some_and(|value| value.to_lowercase().contains(needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TerminologyTable {
        let columns = vec![
            "NAMC_ID".to_string(),
            "NAMC_CODE".to_string(),
            "NAMC_term".to_string(),
            "Name English Translation".to_string(),
            "Short_definition".to_string(),
        ];
        let rows = vec![
            [
                ("NAMC_ID", "1"),
                ("NAMC_CODE", "AA-1"),
                ("NAMC_term", "Jvara"),
                ("Name English Translation", "Fever"),
            ]
            .into_iter()
            .collect(),
            [
                ("NAMC_ID", "2"),
                ("NAMC_CODE", "AA-2"),
                ("NAMC_term", "Ajirna"),
                ("Short_definition", "fever-like heat in the stomach"),
            ]
            .into_iter()
            .collect(),
            [("NAMC_ID", "3"), ("NAMC_CODE", "AA-3"), ("NAMC_term", "Vishama Jvara")]
                .into_iter()
                .collect(),
        ];
        TerminologyTable::new(Vocabulary::Ayurveda, "ayurveda.csv", columns, rows)
    }

    #[test]
    fn test_searchable_columns() {
        assert_eq!(
            table().searchable_columns(),
            &["NAMC_term".to_string(), "Name English Translation".to_string()]
        );
    }

    #[test]
    fn test_matching_rows_in_table_order() {
        let t = table();
        let codes: Vec<_> = t
            .matching_rows("jvara", 20)
            .iter()
            .filter_map(|r| r.code())
            .collect();
        assert_eq!(codes, vec!["AA-1", "AA-3"]);
    }

    #[test]
    fn test_matching_ignores_non_searchable_columns() {
        let t = table();
        // "fever" only appears in a searchable column of row 1, and in the
        // non-searchable definition of row 2.
        let rows = t.matching_rows("fever", 20);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].code(), Some("AA-1"));
        assert!(t.matching_rows("aa-", 20).is_empty());
    }

    #[test]
    fn test_matching_respects_limit() {
        let t = table();
        assert_eq!(t.matching_rows("a", 2).len(), 2);
        assert!(t.matching_rows("a", 0).is_empty());
    }

    #[test]
    fn test_head() {
        let t = table();
        assert_eq!(t.head(2).len(), 2);
        assert_eq!(t.head(10).len(), 3);
    }
}
