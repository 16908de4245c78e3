use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// Spoken language of the recommended movies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Telugu,
    Tamil,
    Malayalam,
    Kannada,
}

/// Which code to emit for Kannada in search targets.
///
/// Existing search targets use `ka` (the ISO-639 code for Georgian). `kn` is the
/// ISO-639 code for Kannada and is opt-in so current consumers see no change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum KannadaCode {
    #[default]
    #[serde(rename = "ka")]
    Legacy,
    #[serde(rename = "kn")]
    Iso,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Hindi,
        Language::Telugu,
        Language::Tamil,
        Language::Malayalam,
        Language::Kannada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Telugu => "telugu",
            Language::Tamil => "tamil",
            Language::Malayalam => "malayalam",
            Language::Kannada => "kannada",
        }
    }

    /// Two-letter code used in the `languages=` search parameter
    pub fn code(&self, kannada: KannadaCode) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
            Language::Tamil => "ta",
            Language::Malayalam => "ml",
            Language::Kannada => match kannada {
                KannadaCode::Legacy => "ka",
                KannadaCode::Iso => "kn",
            },
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == normalized)
            .ok_or_else(|| AppError::InvalidLanguage(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("MALAYALAM\n".parse::<Language>().unwrap(), Language::Malayalam);
    }

    #[test]
    fn test_parse_unknown_language() {
        assert!(matches!(
            "bengali".parse::<Language>(),
            Err(AppError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn test_codes() {
        let codes: Vec<&str> = Language::ALL
            .iter()
            .map(|l| l.code(KannadaCode::Legacy))
            .collect();
        assert_eq!(codes, vec!["en", "hi", "te", "ta", "ml", "ka"]);
    }

    #[test]
    fn test_kannada_iso_code() {
        assert_eq!(Language::Kannada.code(KannadaCode::Iso), "kn");
        assert_eq!(Language::Tamil.code(KannadaCode::Iso), "ta");
    }
}
