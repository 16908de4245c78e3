//! Static lookup tables for search targets and curated titles
//!
//! Built once at startup and shared behind an `Arc`. Nothing mutates a `Catalog`
//! after construction.

use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogOptions, Genre, KannadaCode, Language},
    services::extraction::dedup_titles,
};

mod curated;

#[derive(Debug, Clone)]
pub struct Catalog {
    search_targets: HashMap<(Language, Genre), String>,
    curated: HashMap<(Language, Genre), Vec<String>>,
}

/// Search results URL for one (language, genre) pair
pub fn search_url(base_url: &str, language: Language, genre: Genre, kannada: KannadaCode) -> String {
    format!(
        "{}/search/title/?title_type=feature&genres={}&languages={}",
        base_url.trim_end_matches('/'),
        genre,
        language.code(kannada)
    )
}

impl Catalog {
    /// Full catalog: a search target for every pair plus the curated table
    pub fn standard(base_url: &str, kannada: KannadaCode) -> Self {
        let search_targets: HashMap<_, String> = Language::ALL
            .into_iter()
            .flat_map(|language| Genre::ALL.into_iter().map(move |genre| (language, genre)))
            .map(|(language, genre)| {
                (
                    (language, genre),
                    search_url(base_url, language, genre, kannada),
                )
            })
            .collect();

        let curated: HashMap<_, Vec<String>> = curated::CURATED
            .iter()
            .map(|(genre, language, titles)| {
                (
                    (*language, *genre),
                    titles.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();

        Self::from_parts(search_targets, curated)
    }

    /// Builds a catalog from explicit tables. Either table may be sparse.
    pub fn from_parts(
        search_targets: HashMap<(Language, Genre), String>,
        curated: HashMap<(Language, Genre), Vec<String>>,
    ) -> Self {
        let curated = curated
            .into_iter()
            .map(|(key, titles)| (key, dedup_titles(titles)))
            .collect();

        Self {
            search_targets,
            curated,
        }
    }

    pub fn search_target(&self, language: Language, genre: Genre) -> Option<&str> {
        self.search_targets
            .get(&(language, genre))
            .map(String::as_str)
            .filter(|target| !target.is_empty())
    }

    /// Curated titles for the pair, or templated placeholders when the pair has none
    pub fn curated_titles(&self, language: Language, genre: Genre) -> Vec<String> {
        match self.curated.get(&(language, genre)) {
            Some(titles) if !titles.is_empty() => titles.clone(),
            _ => placeholder_titles(language, genre),
        }
    }

    /// String-keyed lookup of a search target
    pub fn resolve_search_target(&self, language: &str, genre: &str) -> AppResult<String> {
        let (language, genre) = parse_keys(language, genre)?;
        self.search_target(language, genre)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::NotFound(format!("No search target for {} {}", language, genre))
            })
    }

    /// String-keyed lookup of curated titles
    pub fn resolve_curated_titles(&self, language: &str, genre: &str) -> AppResult<Vec<String>> {
        let (language, genre) = parse_keys(language, genre)?;
        Ok(self.curated_titles(language, genre))
    }

    pub fn options(&self) -> CatalogOptions {
        CatalogOptions {
            genres: Genre::ALL.to_vec(),
            languages: Language::ALL.to_vec(),
        }
    }
}

fn parse_keys(language: &str, genre: &str) -> AppResult<(Language, Genre)> {
    let genre = genre.parse::<Genre>()?;
    let language = language.parse::<Language>()?;
    Ok((language, genre))
}

fn placeholder_titles(language: Language, genre: Genre) -> Vec<String> {
    vec![
        format!("Popular {} movie in {}", genre, language),
        format!("Best {} film", genre),
        format!("Top rated {} movie", genre),
        format!("Classic {} cinema", genre),
        format!("Award winning {} film", genre),
    ]
}
