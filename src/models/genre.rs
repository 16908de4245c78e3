use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::error::AppError;

/// Movie genre a recommendation is requested for (the "emotion" in requests)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Drama,
    Action,
    Comedy,
    Horror,
    Crime,
    Fantasy,
    Thriller,
    Romance,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Drama,
        Genre::Action,
        Genre::Comedy,
        Genre::Horror,
        Genre::Crime,
        Genre::Fantasy,
        Genre::Thriller,
        Genre::Romance,
    ];

    /// Lowercase name, as used in search targets and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Drama => "drama",
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Horror => "horror",
            Genre::Crime => "crime",
            Genre::Fantasy => "fantasy",
            Genre::Thriller => "thriller",
            Genre::Romance => "romance",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == normalized)
            .ok_or_else(|| AppError::InvalidGenre(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ACTION".parse::<Genre>().unwrap(), Genre::Action);
        assert_eq!("  Thriller ".parse::<Genre>().unwrap(), Genre::Thriller);
    }

    #[test]
    fn test_parse_unknown_genre() {
        let err = "musical".parse::<Genre>().unwrap_err();
        assert!(matches!(err, AppError::InvalidGenre(ref g) if g == "musical"));
    }

    #[test]
    fn test_display_round_trips() {
        for genre in Genre::ALL {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn test_genre_serialization() {
        assert_eq!(serde_json::to_string(&Genre::Romance).unwrap(), "\"romance\"");
    }
}
