use std::sync::Arc;

use crate::{
    catalog::Catalog,
    config::Config,
    error::AppResult,
    services::{
        providers::{DocumentFetcher, HttpDocumentFetcher},
        Recommender,
    },
};

/// Shared application state
///
/// Everything in here is immutable after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }

    /// Builds the catalog and, when scraping is enabled, the HTTP fetcher
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let catalog = Arc::new(Catalog::standard(
            &config.search_base_url,
            config.kannada_code,
        ));

        let fetcher: Option<Arc<dyn DocumentFetcher>> = if config.scrape_enabled {
            Some(Arc::new(HttpDocumentFetcher::from_config(config)?))
        } else {
            None
        };

        tracing::info!(
            scrape_enabled = config.scrape_enabled,
            fetch_timeout_secs = config.fetch_timeout_secs,
            kannada_code = ?config.kannada_code,
            "Recommender initialized"
        );

        Ok(Self::new(Recommender::new(catalog, fetcher)))
    }
}
