/// Search page fetch abstraction
///
/// The recommender never talks to the network directly. It asks a `DocumentFetcher`
/// for the markup behind a search target, so the scrape path can be swapped for a
/// canned document in tests or disabled entirely.
use crate::error::AppResult;

pub mod imdb;

pub use imdb::HttpDocumentFetcher;

/// Trait for search page sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the HTML document behind a search target
    ///
    /// Any network error, expired wait or non-success status is reported as
    /// `AppError::FetchFailed`.
    async fn fetch_document(&self, target: &str) -> AppResult<String>;

    /// Fetcher name for logging and debugging
    fn name(&self) -> &'static str;
}
