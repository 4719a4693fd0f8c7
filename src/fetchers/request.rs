use crate::config::FetchConfig;
use crate::error::ImportError;
use log::debug;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;

/// Fetches a page body with a single GET request. No retries.
#[derive(Debug, Clone)]
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, ImportError> {
        let defaults = FetchConfig::default();
        let timeout = timeout.unwrap_or(defaults.timeout_duration());
        let user_agent = HeaderValue::from_str(user_agent.unwrap_or(&defaults.user_agent))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self, ImportError> {
        Self::new(Some(config.timeout_duration()), Some(&config.user_agent))
    }

    /// Returns the response body; any non-2xx status is an error
    pub async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml,*/*")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body>ok</body></html>")
            .create_async()
            .await;

        let fetcher = RequestFetcher::new(None, None).unwrap();
        let body = fetcher.fetch(&format!("{}/page", server.url())).await.unwrap();

        assert!(body.contains("ok"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_sends_configured_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .match_header("user-agent", "test-agent/0.1")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let fetcher = RequestFetcher::new(None, Some("test-agent/0.1")).unwrap();
        fetcher.fetch(&format!("{}/page", server.url())).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = RequestFetcher::new(None, None).unwrap();
        let url = format!("{}/missing", server.url());

        match fetcher.fetch(&url).await {
            Err(ImportError::HttpStatus { status, url: failed }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(failed, url);
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_user_agent() {
        let result = RequestFetcher::new(None, Some("bad\nagent"));
        assert!(matches!(result, Err(ImportError::HeaderError(_))));
    }
}
