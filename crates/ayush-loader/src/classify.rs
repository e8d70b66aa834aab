//! Rule-based classification of free text into TM2 / ICD-11 code pairs.
//!
//! Rules are evaluated strictly in order and the first match wins, so the
//! order of the rule list resolves overlaps between keyword sets. The
//! function is total: text that fires no rule gets the default pair.

use std::borrow::Cow;

use ayush_types::well_known::{DEFAULT_INTERMEDIATE, DEFAULT_STANDARD, DOMAIN_RULES};
use ayush_types::{ClassificationRule, MappingResult, RuleError};

/// An ordered rule list with a guaranteed default.
///
/// # Examples
///
/// ```
/// use ayush_loader::ClassificationEngine;
///
/// let engine = ClassificationEngine::default();
/// let result = engine.classify("chronic fever and jvara");
/// assert_eq!(result.intermediate.code, "TM2-FEB");
/// assert_eq!(result.standard.code, "MG26");
///
/// assert!(engine.classify("xyzzy-unrelated-text").is_default());
/// ```
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    rules: Cow<'static, [ClassificationRule]>,
}

impl Default for ClassificationEngine {
    /// Uses the built-in domain rules.
    fn default() -> Self {
        Self {
            rules: Cow::Borrowed(DOMAIN_RULES),
        }
    }
}

impl ClassificationEngine {
    /// Creates an engine over a custom ordered rule list.
    ///
    /// Keywords are lower-cased here, once, so classification only has to
    /// lower-case the input.
    ///
    /// # Errors
    /// Returns [`RuleError`] if a rule has no keywords or a blank keyword.
    pub fn with_rules(rules: Vec<ClassificationRule>) -> Result<Self, RuleError> {
        let rules = rules
            .into_iter()
            .map(|rule| -> Result<ClassificationRule, RuleError> {
                rule.validate()?;
                Ok(rule.normalized())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rules: Cow::Owned(rules),
        })
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Classifies free text.
    ///
    /// Lower-cases the text and returns the pair of the first rule with a
    /// keyword occurring anywhere in it, including inside longer words.
    pub fn classify(&self, text: &str) -> MappingResult {
        let normalized = text.to_lowercase();

        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(&normalized))
            .map(|(index, rule)| MappingResult {
                intermediate: rule.intermediate.clone(),
                standard: rule.standard.clone(),
                rule_index: Some(index),
            })
            .unwrap_or_else(|| MappingResult {
                intermediate: DEFAULT_INTERMEDIATE,
                standard: DEFAULT_STANDARD,
                rule_index: None,
            })
    }
}
