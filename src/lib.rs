//! Movie recommendations by genre and language.
//!
//! A [`Recommender`](services::Recommender) scrapes titles from a movie database
//! search page and falls back to a curated [`Catalog`](catalog::Catalog) whenever
//! the scrape fails or finds nothing. The [`api`] module exposes it over HTTP.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

/// Installs the global tracing subscriber on stderr, honouring `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinemood_api=info,tower_http=info".into()),
        )
        .init();
}
