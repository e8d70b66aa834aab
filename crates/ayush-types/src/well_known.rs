//! Well-known ICD-11 codes and the domain classification rules.
//!
//! Code strings are reproduced exactly as existing consumers expect them.
//!
//! # Examples
//!
//! ```
//! use ayush_types::well_known;
//!
//! assert_eq!(well_known::DOMAIN_RULES[0].intermediate.code, "TM2-FEB");
//! assert_eq!(well_known::DEFAULT_STANDARD.code, "ZZ00");
//! ```

use crate::{ClassificationRule, CodeRef, Keywords};

// =============================================================================
// Coding Systems
// =============================================================================

/// Coding system identifier for the ICD-11 Traditional Medicine chapter.
pub const ICD11_TM2_SYSTEM: &str = "ICD-11-TM2";

/// Coding system identifier for ICD-11 MMS.
pub const ICD11_SYSTEM: &str = "ICD-11";

/// Canonical ICD-11 URI, used as ConceptMap target.
pub const ICD11_URI: &str = "https://icd.who.int/icd11";

// =============================================================================
// TM2 Categories
// =============================================================================

/// Febrile disorders.
pub const TM2_FEBRILE: CodeRef = CodeRef::new("TM2-FEB", "Febrile disorders");

/// Gastrointestinal disorders.
pub const TM2_GASTROINTESTINAL: CodeRef = CodeRef::new("TM2-GI", "Gastrointestinal disorders");

/// Respiratory disorders.
pub const TM2_RESPIRATORY: CodeRef = CodeRef::new("TM2-RESP", "Respiratory disorders");

/// Neurological disorders.
pub const TM2_NEUROLOGICAL: CodeRef = CodeRef::new("TM2-NEURO", "Neurological disorders");

/// Dermatological disorders.
pub const TM2_DERMATOLOGICAL: CodeRef = CodeRef::new("TM2-DERM", "Dermatological disorders");

/// Metabolic disorders.
pub const TM2_METABOLIC: CodeRef = CodeRef::new("TM2-MET", "Metabolic disorders");

/// Musculoskeletal disorders.
pub const TM2_MUSCULOSKELETAL: CodeRef = CodeRef::new("TM2-MSK", "Musculoskeletal disorders");

/// Fallback TM2 category when no rule fires.
pub const DEFAULT_INTERMEDIATE: CodeRef =
    CodeRef::new("TM2-GEN", "General traditional medicine disorder");

// =============================================================================
// ICD-11 MMS Codes
// =============================================================================

/// MG26 Fever, unspecified.
pub const FEVER_UNSPECIFIED: CodeRef = CodeRef::new("MG26", "Fever, unspecified");

/// DA64 Functional dyspepsia.
pub const FUNCTIONAL_DYSPEPSIA: CodeRef = CodeRef::new("DA64", "Functional dyspepsia");

/// CA23 Asthma.
pub const ASTHMA: CodeRef = CodeRef::new("CA23", "Asthma");

/// 8A80 Migraine.
pub const MIGRAINE: CodeRef = CodeRef::new("8A80", "Migraine");

/// EA80 Dermatitis, unspecified.
pub const DERMATITIS_UNSPECIFIED: CodeRef = CodeRef::new("EA80", "Dermatitis, unspecified");

/// 5A11 Type 2 diabetes mellitus.
pub const TYPE_2_DIABETES: CodeRef = CodeRef::new("5A11", "Type 2 diabetes mellitus");

/// FA20 Osteoarthritis.
pub const OSTEOARTHRITIS: CodeRef = CodeRef::new("FA20", "Osteoarthritis");

/// Fallback ICD-11 code when no rule fires.
pub const DEFAULT_STANDARD: CodeRef = CodeRef::new("ZZ00", "Condition not elsewhere classified");

// =============================================================================
// Domain Rules
// =============================================================================

/// The domain classification rules, evaluated first to last.
///
/// Keyword sets overlap across domains on purpose; the first rule to match
/// wins. Do not reorder without updating the ordering tests in
/// `ayush-loader`.
pub const DOMAIN_RULES: &[ClassificationRule] = &[
    // Fever / infection
    ClassificationRule {
        keywords: Keywords::Static(&["fever", "jvara", "pyrexia", "humma", "taap"]),
        intermediate: TM2_FEBRILE,
        standard: FEVER_UNSPECIFIED,
    },
    // Digestive
    ClassificationRule {
        keywords: Keywords::Static(&[
            "digestion",
            "indigestion",
            "ajirna",
            "agnimandya",
            "grahani",
            "amlapitta",
            "gastritis",
            "diarrhea",
            "diarrhoea",
            "constipation",
            "stomach",
            "abdominal",
        ]),
        intermediate: TM2_GASTROINTESTINAL,
        standard: FUNCTIONAL_DYSPEPSIA,
    },
    // Respiratory
    ClassificationRule {
        keywords: Keywords::Static(&[
            "cough",
            "kasa",
            "shwasa",
            "asthma",
            "breathing",
            "dyspnea",
            "bronchitis",
        ]),
        intermediate: TM2_RESPIRATORY,
        standard: ASTHMA,
    },
    // Neurology
    ClassificationRule {
        keywords: Keywords::Static(&[
            "migraine",
            "headache",
            "shiroroga",
            "ardhavabhedaka",
            "vertigo",
            "dizziness",
        ]),
        intermediate: TM2_NEUROLOGICAL,
        standard: MIGRAINE,
    },
    // Skin
    ClassificationRule {
        keywords: Keywords::Static(&[
            "skin",
            "rash",
            "eczema",
            "psoriasis",
            "kushtha",
            "itching",
            "dermatitis",
        ]),
        intermediate: TM2_DERMATOLOGICAL,
        standard: DERMATITIS_UNSPECIFIED,
    },
    // Metabolic
    ClassificationRule {
        keywords: Keywords::Static(&["diabetes", "prameha", "madhumeha", "sugar", "blood sugar"]),
        intermediate: TM2_METABOLIC,
        standard: TYPE_2_DIABETES,
    },
    // Musculoskeletal
    ClassificationRule {
        keywords: Keywords::Static(&[
            "joint pain",
            "arthritis",
            "sandhivata",
            "back pain",
            "neck pain",
            "muscle pain",
        ]),
        intermediate: TM2_MUSCULOSKELETAL,
        standard: OSTEOARTHRITIS,
    },
];
