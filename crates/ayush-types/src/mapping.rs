//! Code pairs and classification rules.

use std::borrow::Cow;
use std::fmt;

/// A code with its display text.
///
/// Built-in codes borrow `'static` strings; codes read at runtime own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CodeRef {
    /// The code, e.g. `MG26`.
    pub code: Cow<'static, str>,
    /// Human-readable display text.
    pub display: Cow<'static, str>,
}

impl CodeRef {
    /// Creates a code reference from static strings.
    pub const fn new(code: &'static str, display: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            display: Cow::Borrowed(display),
        }
    }

    /// Creates a code reference that owns its strings.
    pub fn owned(code: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            display: Cow::Owned(display.into()),
        }
    }
}

/// The outcome of classifying a piece of free text.
///
/// Always populated: when no rule fires, it holds the default pair and
/// `rule_index` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MappingResult {
    /// ICD-11 Traditional Medicine chapter (TM2) category.
    pub intermediate: CodeRef,
    /// Suggested ICD-11 MMS code.
    pub standard: CodeRef,
    /// Position of the rule that fired, `None` for the default pair.
    pub rule_index: Option<usize>,
}

impl MappingResult {
    /// Returns true if no rule fired.
    pub fn is_default(&self) -> bool {
        self.rule_index.is_none()
    }
}

/// The keyword list of a [`ClassificationRule`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Keywords {
    /// Keywords compiled into the binary.
    Static(&'static [&'static str]),
    /// Keywords supplied at runtime.
    Owned(Vec<String>),
}

impl Keywords {
    /// Iterates over the keywords in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (fixed, owned): (&[&str], &[String]) = match self {
            Self::Static(k) => (*k, &[]),
            Self::Owned(k) => (&[], k.as_slice()),
        };
        fixed
            .iter()
            .copied()
            .chain(owned.iter().map(String::as_str))
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        match self {
            Self::Static(k) => k.len(),
            Self::Owned(k) => k.len(),
        }
    }

    /// Returns true if there are no keywords.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for Keywords {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Keywords {}

/// A keyword rule mapping free text to a `(TM2, ICD-11)` code pair.
///
/// Keywords are matched as substrings of lower-cased input, with no
/// word-boundary check: `fever` matches inside `feverish`. They must be
/// lower-case themselves; [`ClassificationRule::new`] and
/// [`ClassificationRule::normalized`] take care of that.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClassificationRule {
    /// Keywords; any one of them fires the rule.
    pub keywords: Keywords,
    /// TM2 category returned when the rule fires.
    pub intermediate: CodeRef,
    /// ICD-11 code returned when the rule fires.
    pub standard: CodeRef,
}

impl ClassificationRule {
    /// Creates a rule from runtime keywords, lower-casing them.
    pub fn new<I, S>(keywords: I, intermediate: CodeRef, standard: CodeRef) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: Keywords::Owned(
                keywords
                    .into_iter()
                    .map(|k| k.as_ref().to_lowercase())
                    .collect(),
            ),
            intermediate,
            standard,
        }
    }

    /// Returns the rule with lower-cased keywords.
    ///
    /// Keywords that are already lower-case are kept as they are.
    pub fn normalized(self) -> Self {
        if self.keywords.iter().all(|k| k.to_lowercase() == k) {
            return self;
        }
        let keywords: Vec<String> = self.keywords.iter().map(str::to_string).collect();
        Self::new(keywords, self.intermediate, self.standard)
    }

    /// Returns true if any keyword occurs in `normalized`.
    ///
    /// `normalized` must already be lower-cased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|keyword| normalized.contains(keyword))
    }

    /// Validates that the rule can fire selectively.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.keywords.is_empty() {
            return Err(RuleError::NoKeywords {
                code: self.intermediate.code.to_string(),
            });
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(RuleError::BlankKeyword {
                code: self.intermediate.code.to_string(),
            });
        }
        Ok(())
    }
}

/// Error for a rule that cannot be used in a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule has no keywords and could never fire.
    NoKeywords {
        /// Intermediate code of the offending rule.
        code: String,
    },
    /// The rule has a blank keyword, which would match every input.
    BlankKeyword {
        /// Intermediate code of the offending rule.
        code: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoKeywords { code } => write!(f, "rule '{}' has no keywords", code),
            Self::BlankKeyword { code } => write!(f, "rule '{}' has a blank keyword", code),
        }
    }
}

impl std::error::Error for RuleError {}
