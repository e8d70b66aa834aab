//! Terminology service implementation.

use std::sync::Arc;

use ayush_loader::{ClassificationEngine, SearchError, TerminologyStore};
use ayush_types::well_known::{ICD11_SYSTEM, ICD11_TM2_SYSTEM, ICD11_URI};
use ayush_types::{CodeRef, MappingResult, Vocabulary};

use crate::responses::{
    CodeSystemResource, CodeSystemResponse, CodeableConcept, Coding, Concept, ConceptMapElement,
    ConceptMapGroup, ConceptMapResource, ConditionResource, HealthReport, SearchHit,
    SearchResponse,
};

/// Number of rows included in a sample CodeSystem.
const CODE_SYSTEM_SAMPLE_SIZE: usize = 3;

/// Source concepts used by [`TerminologyServer::concept_map`] by default.
pub const DEFAULT_CONCEPT_MAP_SAMPLES: &[(&str, &str)] =
    &[("Ajirna", "Indigestion"), ("Jvara", "Fever")];

/// NAMASTE terminology server.
///
/// Cheap to clone: the store and rules are shared read-only.
#[derive(Clone)]
pub struct TerminologyServer {
    store: Arc<TerminologyStore>,
    engine: Arc<ClassificationEngine>,
}

impl TerminologyServer {
    /// Creates a new server with the given store and the built-in rules.
    pub fn new(store: TerminologyStore) -> Self {
        Self::with_engine(store, ClassificationEngine::default())
    }

    /// Creates a new server with a custom classification engine.
    pub fn with_engine(store: TerminologyStore, engine: ClassificationEngine) -> Self {
        Self {
            store: Arc::new(store),
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the classification engine.
    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }

    /// Reports row counts and load errors.
    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "running",
            datasets_loaded: Vocabulary::ALL
                .into_iter()
                .map(|v| (v, self.store.row_count(v)))
                .collect(),
            errors: self.store.errors(),
        }
    }

    /// Searches a vocabulary and maps the outcome to a response.
    pub fn search(&self, vocabulary: Vocabulary, term: &str, limit: usize) -> SearchResponse {
        match self.store.search(vocabulary, term, limit) {
            Ok(rows) => {
                tracing::debug!(%vocabulary, term, hits = rows.len(), "search matched");
                let results: Vec<SearchHit> = rows
                    .into_iter()
                    .map(|row| SearchHit::from_row(vocabulary, row))
                    .collect();
                SearchResponse::Success {
                    count: results.len(),
                    results,
                }
            }
            Err(SearchError::NotFound { query, vocabulary }) => {
                tracing::debug!(%vocabulary, term, "search found nothing");
                SearchResponse::NotFound {
                    query,
                    system: vocabulary,
                }
            }
            Err(err @ SearchError::DatasetUnavailable { .. }) => {
                tracing::warn!(%vocabulary, "search against unavailable dataset");
                SearchResponse::Error {
                    message: err.to_string(),
                }
            }
            Err(err @ SearchError::InvalidQuery { .. }) => {
                let query = term.to_string();
                SearchResponse::InvalidQuery {
                    query,
                    message: err.to_string(),
                }
            }
        }
    }

    /// Classifies free text into a TM2 / ICD-11 pair.
    pub fn classify(&self, text: &str) -> MappingResult {
        let result = self.engine.classify(text);
        tracing::debug!(
            text,
            tm2 = %result.intermediate.code,
            icd11 = %result.standard.code,
            rule = ?result.rule_index,
            "classified"
        );
        result
    }

    /// Translates a source term into a Condition with three codings: the
    /// recorded term, the rule-based TM2 category and the suggested ICD-11
    /// code.
    pub fn translate(&self, vocabulary: Vocabulary, term: &str) -> ConditionResource {
        let mapping = self.classify(term);

        ConditionResource {
            resource_type: "Condition",
            clinical_status: "active",
            code: CodeableConcept {
                coding: vec![
                    Coding {
                        system: vocabulary.system().to_string(),
                        code: None,
                        display: term.to_string(),
                        mapping_type: Some("recorded"),
                    },
                    Coding::from_code(ICD11_TM2_SYSTEM, mapping.intermediate, "rule-based"),
                    Coding::from_code(ICD11_SYSTEM, mapping.standard, "suggested"),
                ],
            },
        }
    }

    /// Returns a sample CodeSystem built from the first rows of a
    /// vocabulary.
    pub fn code_system(&self, vocabulary: Vocabulary) -> CodeSystemResponse {
        let Some(table) = self.store.table(vocabulary) else {
            return CodeSystemResponse::Unavailable {
                error: format!("{} dataset not loaded", vocabulary.display_name()),
            };
        };

        let concept = table
            .head(CODE_SYSTEM_SAMPLE_SIZE)
            .iter()
            .map(|row| Concept {
                code: row.code().map(str::to_string),
                display: row.term().map(str::to_string),
            })
            .collect();

        CodeSystemResponse::CodeSystem(CodeSystemResource {
            resource_type: "CodeSystem",
            id: format!("namaste-{}", vocabulary.as_str()),
            url: vocabulary.url(),
            name: format!("NAMASTE {}", vocabulary.display_name()),
            status: "active",
            content: "example",
            concept,
        })
    }

    /// Builds a ConceptMap from a vocabulary to ICD-11-TM2 and ICD-11.
    ///
    /// Each `(code, display)` sample is classified on its code and display
    /// together.
    pub fn concept_map(
        &self,
        vocabulary: Vocabulary,
        samples: &[(&str, &str)],
    ) -> ConceptMapResource {
        let source = format!("NAMASTE-{}", vocabulary.display_name());
        let mappings: Vec<_> = samples
            .iter()
            .map(|&(code, display)| {
                let result = self.classify(&format!("{} {}", code, display));
                (code, display, result)
            })
            .collect();

        let group = |target: &'static str, pick: fn(&MappingResult) -> CodeRef| {
            ConceptMapGroup {
                source: source.clone(),
                target,
                element: mappings
                    .iter()
                    .map(|(code, display, result)| ConceptMapElement {
                        code: code.to_string(),
                        display: display.to_string(),
                        target: vec![pick(result).into()],
                    })
                    .collect(),
            }
        };

        ConceptMapResource {
            resource_type: "ConceptMap",
            id: format!("namaste-{}-to-icd11", vocabulary.as_str()),
            status: "active",
            source_uri: vocabulary.url(),
            target_uri: ICD11_URI,
            group: vec![
                group(ICD11_TM2_SYSTEM, |r| r.intermediate.clone()),
                group(ICD11_SYSTEM, |r| r.standard.clone()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayush_loader::{LoadFailure, TerminologyTable};
    use serde_json::json;

    fn server() -> TerminologyServer {
        let mut store = TerminologyStore::new();
        store.insert_table(TerminologyTable::new(
            Vocabulary::Ayurveda,
            "NATIONAL AYURVEDA MORBIDITY CODES.csv",
            vec!["NAMC_CODE".to_string(), "NAMC_term".to_string()],
            vec![
                [("NAMC_CODE", "AAA-1"), ("NAMC_term", "Jvara")]
                    .into_iter()
                    .collect(),
                [("NAMC_CODE", "AAB-2"), ("NAMC_term", "Ajirna")]
                    .into_iter()
                    .collect(),
                [("NAMC_CODE", "AAC-3"), ("NAMC_term", "Kasa")]
                    .into_iter()
                    .collect(),
                [("NAMC_CODE", "AAD-4"), ("NAMC_term", "Shwasa")]
                    .into_iter()
                    .collect(),
            ],
        ));
        store.insert_table(TerminologyTable::new(
            Vocabulary::Siddha,
            "siddha.csv",
            vec!["Code".to_string(), "Word".to_string()],
            vec![[("Code", "S-1"), ("Word", "Suram")].into_iter().collect()],
        ));
        store.record_failure(
            Vocabulary::Unani,
            LoadFailure {
                source: "NATIONAL UNANI MORBIDITY CODES.csv".to_string(),
                reason: "CSV parsing error".to_string(),
            },
        );
        TerminologyServer::new(store)
    }

    #[test]
    fn test_health() {
        let health = serde_json::to_value(server().health()).unwrap();
        assert_eq!(
            health,
            json!({
                "status": "running",
                "datasets_loaded": {"ayurveda": 4, "siddha": 1, "unani": 0},
                "errors": {"NATIONAL UNANI MORBIDITY CODES.csv": "CSV parsing error"}
            })
        );
    }

    #[test]
    fn test_search_success() {
        let response = serde_json::to_value(server().search(Vocabulary::Ayurveda, "jv", 20)).unwrap();
        assert_eq!(
            response,
            json!({
                "status": "success",
                "count": 1,
                "results": [{"system": "ayurveda", "code": "AAA-1", "term": "Jvara"}]
            })
        );
    }

    #[test]
    fn test_search_signals() {
        let server = server();

        assert_eq!(
            serde_json::to_value(server.search(Vocabulary::Siddha, "zz", 20)).unwrap(),
            json!({"status": "not_found", "query": "zz", "system": "siddha"})
        );
        assert_eq!(
            serde_json::to_value(server.search(Vocabulary::Unani, "jv", 20)).unwrap(),
            json!({"status": "error", "message": "unani dataset not loaded"})
        );
        assert!(matches!(
            server.search(Vocabulary::Unani, "a", 20),
            SearchResponse::InvalidQuery { .. }
        ));
    }

    #[test]
    fn test_translate_codings() {
        let condition = server().translate(Vocabulary::Siddha, "chronic fever and jvara");
        assert_eq!(
            serde_json::to_value(condition).unwrap(),
            json!({
                "resourceType": "Condition",
                "clinicalStatus": "active",
                "code": {"coding": [
                    {"system": "NAMASTE-SIDDHA", "display": "chronic fever and jvara", "mappingType": "recorded"},
                    {"system": "ICD-11-TM2", "code": "TM2-FEB", "display": "Febrile disorders", "mappingType": "rule-based"},
                    {"system": "ICD-11", "code": "MG26", "display": "Fever, unspecified", "mappingType": "suggested"}
                ]}
            })
        );
    }

    #[test]
    fn test_translate_works_without_datasets() {
        let server = TerminologyServer::new(TerminologyStore::new());
        let condition = server.translate(Vocabulary::Unani, "xyzzy-unrelated-text");
        let codes: Vec<_> = condition
            .code
            .coding
            .iter()
            .map(|c| c.code.as_deref())
            .collect();
        assert_eq!(codes, vec![None, Some("TM2-GEN"), Some("ZZ00")]);
    }

    #[test]
    fn test_code_system_sample() {
        let server = server();
        let value = serde_json::to_value(server.code_system(Vocabulary::Ayurveda)).unwrap();
        assert_eq!(value["resourceType"], "CodeSystem");
        assert_eq!(value["id"], "namaste-ayurveda");
        assert_eq!(value["url"], "https://ayush.gov.in/namaste/ayurveda");
        assert_eq!(value["name"], "NAMASTE Ayurveda");
        assert_eq!(value["content"], "example");
        assert_eq!(
            value["concept"],
            json!([
                {"code": "AAA-1", "display": "Jvara"},
                {"code": "AAB-2", "display": "Ajirna"},
                {"code": "AAC-3", "display": "Kasa"}
            ])
        );

        assert_eq!(
            serde_json::to_value(server.code_system(Vocabulary::Unani)).unwrap(),
            json!({"error": "Unani dataset not loaded"})
        );
    }

    #[test]
    fn test_concept_map() {
        let map = server().concept_map(Vocabulary::Ayurveda, DEFAULT_CONCEPT_MAP_SAMPLES);
        let value = serde_json::to_value(map).unwrap();

        assert_eq!(value["id"], "namaste-ayurveda-to-icd11");
        assert_eq!(value["sourceUri"], "https://ayush.gov.in/namaste/ayurveda");
        assert_eq!(value["targetUri"], "https://icd.who.int/icd11");
        assert_eq!(value["group"][0]["source"], "NAMASTE-Ayurveda");
        assert_eq!(value["group"][0]["target"], "ICD-11-TM2");
        assert_eq!(
            value["group"][0]["element"][0],
            json!({
                "code": "Ajirna",
                "display": "Indigestion",
                "target": [{"code": "TM2-GI", "display": "Gastrointestinal disorders", "equivalence": "relatedto"}]
            })
        );
        assert_eq!(value["group"][1]["target"], "ICD-11");
        assert_eq!(value["group"][1]["element"][1]["target"][0]["code"], "MG26");
    }

    #[test]
    fn test_end_to_end_from_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("NATIONAL AYURVEDA MORBIDITY CODES.csv"),
            "NAMC_ID, NAMC_CODE ,NAMC_term,Name English\n1,AAA-1,Jvara,Fever\n2,AAB-2,Ajirna,\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("NATIONAL SIDDHA MORBIDITY CODES.tsv"),
            "Code\tWord\tTranslation\nS-1\tSuram\tfever\n",
        )
        .unwrap();

        let files = ayush_loader::discover_dataset_files(dir.path()).unwrap();
        let store = TerminologyStore::load_all(&files, &ayush_loader::TableConfig::default());
        let server = TerminologyServer::new(store);

        let health = server.health();
        assert_eq!(health.datasets_loaded[&Vocabulary::Ayurveda], 2);
        assert_eq!(health.datasets_loaded[&Vocabulary::Siddha], 1);
        assert_eq!(health.datasets_loaded[&Vocabulary::Unani], 0);
        assert!(health.errors.contains_key("NATIONAL UNANI MORBIDITY CODES"));

        match server.search(Vocabulary::Ayurveda, "JV", 20) {
            SearchResponse::Success { count, results } => {
                assert_eq!(count, 1);
                assert_eq!(results[0].code.as_deref(), Some("AAA-1"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
        // "Name English" has no searchable marker, so "fever" only hits Siddha.
        assert!(matches!(
            server.search(Vocabulary::Ayurveda, "fever", 20),
            SearchResponse::NotFound { .. }
        ));
        assert!(matches!(
            server.search(Vocabulary::Siddha, "fever", 20),
            SearchResponse::Success { count: 1, .. }
        ));
        assert!(matches!(
            server.search(Vocabulary::Unani, "fever", 20),
            SearchResponse::Error { .. }
        ));
    }
}
