//! # ayush-types
//!
//! Type definitions for NAMASTE traditional-medicine terminology and its
//! rule-based mapping to ICD-11.
//!
//! This crate provides the source vocabularies, generic terminology rows,
//! code pairs, and the fixed table of domain classification rules.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use ayush_types::{well_known, TerminologyRow, Vocabulary};
//!
//! let row: TerminologyRow = [("NAMC_CODE", "AAA-1"), ("NAMC_term", "Jvara")]
//!     .into_iter()
//!     .collect();
//! assert_eq!(row.code(), Some("AAA-1"));
//!
//! assert_eq!(Vocabulary::Ayurveda.system(), "NAMASTE-AYURVEDA");
//! assert_eq!(well_known::DOMAIN_RULES.len(), 7);
//! ```

#![warn(missing_docs)]

mod mapping;
mod row;
mod vocabulary;
pub mod well_known;

// Re-export all public types at crate root
pub use mapping::{ClassificationRule, CodeRef, Keywords, MappingResult, RuleError};
pub use row::{
    is_searchable_column, TerminologyRow, CODE_FIELDS, SEARCHABLE_COLUMN_MARKERS, TERM_FIELDS,
};
pub use vocabulary::{ParseVocabularyError, Vocabulary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _vocab = Vocabulary::Unani;
        let _row = TerminologyRow::new();
        let _code = CodeRef::new("MG26", "Fever, unspecified");
        let _rule: &ClassificationRule = &well_known::DOMAIN_RULES[0];
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_row_serializes_as_map() {
        let row: TerminologyRow = [("NAMC_CODE", "AAA-1"), ("NAMC_term", "Jvara")]
            .into_iter()
            .collect();

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"NAMC_CODE": "AAA-1", "NAMC_term": "Jvara"})
        );

        let parsed: TerminologyRow = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, row);
    }
}
