use serde::{Deserialize, Serialize};

pub mod genre;
pub mod language;

pub use genre::Genre;
pub use language::{KannadaCode, Language};

/// Where the titles of a recommendation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Static curated table, or placeholder titles for sparse pairs
    Curated,
    /// Scraped from the search target
    Fetched,
}

/// Recommendation returned to callers
///
/// `count` always equals `titles.len()`; use [`RecommendationResult::new`] to build one.
/// Serialize-only so a mismatched `count` can't come back in from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub genre: Genre,
    pub language: Language,
    /// Search page URL, empty when the catalog has no target for the pair
    pub search_target: String,
    pub titles: Vec<String>,
    pub count: usize,
    pub source: Source,
}

impl RecommendationResult {
    pub fn new(
        genre: Genre,
        language: Language,
        search_target: String,
        titles: Vec<String>,
        source: Source,
    ) -> Self {
        Self {
            genre,
            language,
            search_target,
            count: titles.len(),
            titles,
            source,
        }
    }
}

/// Genres and languages accepted by the recommender
#[derive(Debug, Clone, Serialize)]
pub struct CatalogOptions {
    pub genres: Vec<Genre>,
    pub languages: Vec<Language>,
}
