//! Term search over terminology tables.
//!
//! Search is a case-insensitive substring match across every column whose
//! name marks it as text (see [`ayush_types::SEARCHABLE_COLUMN_MARKERS`]).
//! Results keep table order; order of appearance is the only ranking.

use ayush_types::{TerminologyRow, Vocabulary};
use thiserror::Error;

use crate::store::TerminologyStore;

/// Result limit used when the caller passes 0.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Minimum query length, in characters, after trimming.
pub const MIN_QUERY_LEN: usize = 2;

/// Why a search produced no rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The query is shorter than [`MIN_QUERY_LEN`] after trimming.
    #[error("query '{query}' is too short (minimum {min_len} characters)")]
    InvalidQuery {
        /// The query as given.
        query: String,
        /// The minimum accepted length.
        min_len: usize,
    },

    /// The vocabulary was searched and nothing matched.
    #[error("no {vocabulary} terms match '{query}'")]
    NotFound {
        /// The query as given.
        query: String,
        /// The searched vocabulary.
        vocabulary: Vocabulary,
    },

    /// The vocabulary's table failed to load.
    #[error("{vocabulary} dataset not loaded")]
    DatasetUnavailable {
        /// The unavailable vocabulary.
        vocabulary: Vocabulary,
        /// The recorded load failure, if any.
        reason: Option<String>,
    },
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

impl TerminologyStore {
    /// Searches a vocabulary for rows matching `query`.
    ///
    /// Returns at most `limit` rows (or [`DEFAULT_SEARCH_LIMIT`] when `limit`
    /// is 0) in table order. The query is validated before the vocabulary is
    /// resolved, so a too-short query is rejected even for an unavailable
    /// vocabulary.
    ///
    /// # Errors
    /// - [`SearchError::InvalidQuery`] if the trimmed query is too short.
    /// - [`SearchError::DatasetUnavailable`] if the vocabulary has no table.
    /// - [`SearchError::NotFound`] if no row matches.
    pub fn search(
        &self,
        vocabulary: Vocabulary,
        query: &str,
        limit: usize,
    ) -> SearchResult<Vec<&TerminologyRow>> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LEN {
            return Err(SearchError::InvalidQuery {
                query: query.to_string(),
                min_len: MIN_QUERY_LEN,
            });
        }

        let table = self
            .table(vocabulary)
            .ok_or_else(|| SearchError::DatasetUnavailable {
                vocabulary,
                reason: self.failure(vocabulary).map(|f| f.reason.clone()),
            })?;

        let limit = if limit > 0 { limit } else { DEFAULT_SEARCH_LIMIT };
        let needle = trimmed.to_lowercase();
        let rows = table.matching_rows(&needle, limit);

        if rows.is_empty() {
            return Err(SearchError::NotFound {
                query: query.to_string(),
                vocabulary,
            });
        }

        Ok(rows)
    }
}
