//! # ayush-service
//!
//! NAMASTE to ICD-11 terminology service.
//!
//! This crate wraps the tables and rules of the ayush-loader crate in a
//! cheaply cloneable [`TerminologyServer`] whose operations return
//! serializable response shapes: term search, rule-based translation,
//! health, and sample FHIR CodeSystem / ConceptMap resources.

#![warn(missing_docs)]

pub mod responses;
mod server;

pub use server::{TerminologyServer, DEFAULT_CONCEPT_MAP_SAMPLES};

// Re-export loader types for convenience
pub use ayush_loader::{ClassificationEngine, SearchError, TerminologyStore};
