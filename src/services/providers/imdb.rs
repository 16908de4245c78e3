/// Movie database search page fetcher
///
/// Issues a single GET per call with a browser User-Agent. The whole exchange
/// (connect, headers and body) is bounded by the client's request timeout.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::DocumentFetcher,
};
use reqwest::{header, Client as HttpClient};
use std::time::Duration;

const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

#[derive(Clone)]
pub struct HttpDocumentFetcher {
    http_client: HttpClient,
    timeout: Duration,
}

impl HttpDocumentFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            &config.user_agent,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait::async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch_document(&self, target: &str) -> AppResult<String> {
        let response = self
            .http_client
            .get(target)
            .header(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::FetchFailed(format!(
                "Search page returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;

        tracing::debug!(
            target_url = %target,
            bytes = body.len(),
            fetcher = self.name(),
            "Search page fetched"
        );

        Ok(body)
    }

    fn name(&self) -> &'static str {
        "imdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{io::AsyncWriteExt, net::TcpListener};

    /// Serves one canned HTTP response on a local port and returns its base URL
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = tokio::io::AsyncReadExt::read(&mut socket, &mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    fn create_test_fetcher(timeout: Duration) -> HttpDocumentFetcher {
        HttpDocumentFetcher::new("test-agent", timeout).unwrap()
    }

    #[test]
    fn test_from_config_uses_timeout() {
        let config = Config {
            fetch_timeout_secs: 7,
            ..Config::default()
        };
        let fetcher = HttpDocumentFetcher::from_config(&config).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(7));
        assert_eq!(fetcher.name(), "imdb");
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: text/html\r\ncontent-length: 13\r\nconnection: close\r\n\r\n<p>hello</p>\n",
        )
        .await;

        let body = create_test_fetcher(Duration::from_secs(3))
            .fetch_document(&url)
            .await
            .unwrap();
        assert_eq!(body, "<p>hello</p>\n");
    }

    #[tokio::test]
    async fn test_non_success_status_is_fetch_failure() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;

        let result = create_test_fetcher(Duration::from_secs(3))
            .fetch_document(&url)
            .await;
        assert!(matches!(result, Err(AppError::FetchFailed(msg)) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_unreachable_target_is_fetch_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = create_test_fetcher(Duration::from_secs(1))
            .fetch_document(&format!("http://{}", addr))
            .await;
        assert!(matches!(result, Err(AppError::FetchFailed(_))));
    }

    #[tokio::test]
    async fn test_slow_target_is_bounded_by_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and never answer
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let started = std::time::Instant::now();
        let result = create_test_fetcher(Duration::from_millis(300))
            .fetch_document(&format!("http://{}", addr))
            .await;

        assert!(matches!(result, Err(AppError::FetchFailed(_))));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
