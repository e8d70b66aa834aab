//! Response shapes returned by the terminology service.
//!
//! These serialize to the JSON documents existing clients consume.

use std::collections::BTreeMap;

use ayush_types::{CodeRef, TerminologyRow, Vocabulary};
use serde::Serialize;

/// Service liveness and dataset load summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Always `running`.
    pub status: &'static str,
    /// Row count per vocabulary, 0 when unavailable.
    pub datasets_loaded: BTreeMap<Vocabulary, usize>,
    /// Load failure reasons keyed by source identifier.
    pub errors: BTreeMap<String, String>,
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Vocabulary the row came from.
    pub system: Vocabulary,
    /// Row code, via the code fallback chain.
    pub code: Option<String>,
    /// Row display term, via the term fallback chain.
    pub term: Option<String>,
}

impl SearchHit {
    /// Builds a hit from a table row.
    pub fn from_row(system: Vocabulary, row: &TerminologyRow) -> Self {
        Self {
            system,
            code: row.code().map(str::to_string),
            term: row.term().map(str::to_string),
        }
    }
}

/// Outcome of a term search, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    /// At least one row matched.
    Success {
        /// Number of results.
        count: usize,
        /// Matching rows in table order.
        results: Vec<SearchHit>,
    },
    /// The vocabulary was searched and nothing matched.
    NotFound {
        /// The query as given.
        query: String,
        /// The searched vocabulary.
        system: Vocabulary,
    },
    /// The vocabulary's dataset is not loaded.
    Error {
        /// Human-readable message.
        message: String,
    },
    /// The query was rejected before searching.
    InvalidQuery {
        /// The query as given.
        query: String,
        /// Human-readable message.
        message: String,
    },
}

/// A single coding entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    /// Coding system identifier.
    pub system: String,
    /// Code, absent for the recorded source term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Display text.
    pub display: String,
    /// How the coding was obtained: `recorded`, `rule-based` or `suggested`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_type: Option<&'static str>,
}

impl Coding {
    /// Builds a coding from a code pair.
    pub fn from_code(system: &str, code: CodeRef, mapping_type: &'static str) -> Self {
        Self {
            system: system.to_string(),
            code: Some(code.code.into_owned()),
            display: code.display.into_owned(),
            mapping_type: Some(mapping_type),
        }
    }
}

/// A list of codings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeableConcept {
    /// Codings in fixed order.
    pub coding: Vec<Coding>,
}

/// A Condition carrying the translated codings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionResource {
    /// Always `Condition`.
    pub resource_type: &'static str,
    /// Always `active`.
    pub clinical_status: &'static str,
    /// Source term, TM2 category and ICD-11 code, in that order.
    pub code: CodeableConcept,
}

/// A CodeSystem concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concept {
    /// Row code.
    pub code: Option<String>,
    /// Row display term.
    pub display: Option<String>,
}

/// A sample CodeSystem for one vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CodeSystemResponse {
    /// The vocabulary is loaded.
    CodeSystem(CodeSystemResource),
    /// The vocabulary is not loaded.
    Unavailable {
        /// Human-readable message.
        error: String,
    },
}

/// CodeSystem body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemResource {
    /// Always `CodeSystem`.
    pub resource_type: &'static str,
    /// e.g. `namaste-ayurveda`.
    pub id: String,
    /// Canonical URL.
    pub url: String,
    /// e.g. `NAMASTE Ayurveda`.
    pub name: String,
    /// Always `active`.
    pub status: &'static str,
    /// Always `example`: only the first rows are included.
    pub content: &'static str,
    /// Sample concepts.
    pub concept: Vec<Concept>,
}

/// A ConceptMap from a vocabulary to ICD-11.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMapResource {
    /// Always `ConceptMap`.
    pub resource_type: &'static str,
    /// e.g. `namaste-ayurveda-to-icd11`.
    pub id: String,
    /// Always `active`.
    pub status: &'static str,
    /// Source vocabulary URL.
    pub source_uri: String,
    /// ICD-11 URI.
    pub target_uri: &'static str,
    /// One group per target system.
    pub group: Vec<ConceptMapGroup>,
}

/// Mappings from one source system to one target system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptMapGroup {
    /// Source system name, e.g. `NAMASTE-Ayurveda`.
    pub source: String,
    /// Target system identifier.
    pub target: &'static str,
    /// Mapped source concepts.
    pub element: Vec<ConceptMapElement>,
}

/// One source concept and its targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptMapElement {
    /// Source code.
    pub code: String,
    /// Source display.
    pub display: String,
    /// Mapped targets.
    pub target: Vec<ConceptMapTarget>,
}

/// One mapping target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptMapTarget {
    /// Target code.
    pub code: String,
    /// Target display.
    pub display: String,
    /// Always `relatedto`: the mapping is rule-based.
    pub equivalence: &'static str,
}

impl From<CodeRef> for ConceptMapTarget {
    fn from(code: CodeRef) -> Self {
        Self {
            code: code.code.into_owned(),
            display: code.display.into_owned(),
            equivalence: "relatedto",
        }
    }
}
