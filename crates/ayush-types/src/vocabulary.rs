//! Traditional-medicine source vocabularies.
//!
//! The three NAMASTE morbidity code tables form a closed set. Every request
//! names exactly one of them.

use std::fmt;
use std::str::FromStr;

/// A NAMASTE source vocabulary.
///
/// # Examples
///
/// ```
/// use ayush_types::Vocabulary;
///
/// let vocab: Vocabulary = "Siddha".parse().unwrap();
/// assert_eq!(vocab, Vocabulary::Siddha);
/// assert_eq!(vocab.system(), "NAMASTE-SIDDHA");
/// assert!("homeopathy".parse::<Vocabulary>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Vocabulary {
    /// National Ayurveda Morbidity Codes.
    Ayurveda,
    /// National Siddha Morbidity Codes.
    Siddha,
    /// National Unani Morbidity Codes.
    Unani,
}

impl Vocabulary {
    /// All vocabularies, in their canonical order.
    pub const ALL: [Vocabulary; 3] = [Self::Ayurveda, Self::Siddha, Self::Unani];

    /// Returns the lower-case identifier used in requests and responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ayurveda => "ayurveda",
            Self::Siddha => "siddha",
            Self::Unani => "unani",
        }
    }

    /// Returns the capitalised name, e.g. `Ayurveda`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ayurveda => "Ayurveda",
            Self::Siddha => "Siddha",
            Self::Unani => "Unani",
        }
    }

    /// Returns the coding system identifier, e.g. `NAMASTE-AYURVEDA`.
    pub fn system(self) -> &'static str {
        match self {
            Self::Ayurveda => "NAMASTE-AYURVEDA",
            Self::Siddha => "NAMASTE-SIDDHA",
            Self::Unani => "NAMASTE-UNANI",
        }
    }

    /// Returns the canonical code system URL.
    pub fn url(self) -> String {
        format!("https://ayush.gov.in/namaste/{}", self.as_str())
    }

    /// Returns the file stem of the published morbidity code table.
    pub fn source_stem(self) -> &'static str {
        match self {
            Self::Ayurveda => "NATIONAL AYURVEDA MORBIDITY CODES",
            Self::Siddha => "NATIONAL SIDDHA MORBIDITY CODES",
            Self::Unani => "NATIONAL UNANI MORBIDITY CODES",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a vocabulary name is not one of the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVocabularyError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseVocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown vocabulary '{}' (expected ayurveda, siddha or unani)",
            self.value
        )
    }
}

impl std::error::Error for ParseVocabularyError {}

impl FromStr for Vocabulary {
    type Err = ParseVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| ParseVocabularyError {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary() {
        assert_eq!("ayurveda".parse::<Vocabulary>(), Ok(Vocabulary::Ayurveda));
        assert_eq!(" UNANI ".parse::<Vocabulary>(), Ok(Vocabulary::Unani));
        assert_eq!(
            "yoga".parse::<Vocabulary>(),
            Err(ParseVocabularyError {
                value: "yoga".to_string()
            })
        );
        assert!("".parse::<Vocabulary>().is_err());
    }

    #[test]
    fn test_vocabulary_identifiers() {
        assert_eq!(Vocabulary::Unani.system(), "NAMASTE-UNANI");
        assert_eq!(Vocabulary::Siddha.to_string(), "siddha");
        assert_eq!(
            Vocabulary::Ayurveda.url(),
            "https://ayush.gov.in/namaste/ayurveda"
        );
        assert_eq!(
            Vocabulary::Ayurveda.source_stem(),
            "NATIONAL AYURVEDA MORBIDITY CODES"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_vocabulary_serializes_lowercase() {
        let json = serde_json::to_string(&Vocabulary::Siddha).unwrap();
        assert_eq!(json, "\"siddha\"");
        let parsed: Vocabulary = serde_json::from_str("\"unani\"").unwrap();
        assert_eq!(parsed, Vocabulary::Unani);
    }
}
