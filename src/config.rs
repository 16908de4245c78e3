use serde::Deserialize;

use crate::models::KannadaCode;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the movie database whose search pages are scraped
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Upper bound on a single search page fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// When false, only curated titles are served and no fetch is attempted
    #[serde(default = "default_scrape_enabled")]
    pub scrape_enabled: bool,

    /// Browser-identifying User-Agent sent with search page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Language code used for Kannada search targets (`ka` or `kn`)
    #[serde(default)]
    pub kannada_code: KannadaCode,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_search_base_url() -> String {
    "https://www.imdb.com".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    3
}

fn default_scrape_enabled() -> bool {
    true
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            search_base_url: default_search_base_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            scrape_enabled: default_scrape_enabled(),
            user_agent: default_user_agent(),
            kannada_code: KannadaCode::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the HTTP service binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
