use std::sync::Arc;
use tracing::instrument;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{Genre, Language, RecommendationResult, Source},
    services::{extraction::extract_titles, providers::DocumentFetcher},
};

/// Fetch-or-fallback movie recommender
///
/// Resolves a search target from the catalog, tries to scrape titles from it and
/// falls back to curated titles when the scrape fails or finds nothing. Without a
/// fetcher it always serves curated titles.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    fetcher: Option<Arc<dyn DocumentFetcher>>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, fetcher: Option<Arc<dyn DocumentFetcher>>) -> Self {
        Self { catalog, fetcher }
    }

    /// Curated titles only, no fetch attempted
    pub fn curated_only(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, None)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend movies for a genre and language.
    ///
    /// Only `InvalidGenre` and `InvalidLanguage` are returned as errors. Fetch and
    /// extraction failures are logged and answered with curated titles.
    #[instrument(skip(self))]
    pub async fn recommend(&self, genre: &str, language: &str) -> AppResult<RecommendationResult> {
        let genre = genre.parse::<Genre>()?;
        let language = language.parse::<Language>()?;

        let Some(target) = self.catalog.search_target(language, genre) else {
            tracing::debug!(%genre, %language, "No search target, serving curated titles");
            return Ok(self.curated(genre, language, String::new()));
        };

        let Some(fetcher) = &self.fetcher else {
            return Ok(self.curated(genre, language, target.to_string()));
        };

        match self.scrape(fetcher.as_ref(), target).await {
            Ok(titles) => {
                tracing::info!(
                    %genre,
                    %language,
                    count = titles.len(),
                    fetcher = fetcher.name(),
                    "Recommendations fetched"
                );
                Ok(RecommendationResult::new(
                    genre,
                    language,
                    target.to_string(),
                    titles,
                    Source::Fetched,
                ))
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    %genre,
                    %language,
                    fetcher = fetcher.name(),
                    "Scrape failed, falling back to curated titles"
                );
                Ok(self.curated(genre, language, target.to_string()))
            }
        }
    }

    async fn scrape(&self, fetcher: &dyn DocumentFetcher, target: &str) -> AppResult<Vec<String>> {
        let document = fetcher.fetch_document(target).await?;
        let titles = extract_titles(&document);

        if titles.is_empty() {
            return Err(AppError::ExtractionEmpty(target.to_string()));
        }

        Ok(titles)
    }

    fn curated(&self, genre: Genre, language: Language, search_target: String) -> RecommendationResult {
        RecommendationResult::new(
            genre,
            language,
            search_target,
            self.catalog.curated_titles(language, genre),
            Source::Curated,
        )
    }
}
