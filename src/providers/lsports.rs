use crate::config::{FetchConfig, ProviderConfig};
use crate::error::ImportError;
use crate::providers::{build_client, get_json, RacingDataProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub struct LSportsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LSportsProvider {
    pub fn new(config: &ProviderConfig, fetch: &FetchConfig) -> Result<Self, ImportError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("LSPORTS_API_KEY").ok())
            .ok_or_else(|| ImportError::MissingApiKey("lsports".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.lsports.eu".to_string());

        Ok(LSportsProvider {
            client: build_client(fetch)?,
            api_key,
            base_url,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ImportError> {
        Ok(LSportsProvider {
            client: build_client(&FetchConfig::default())?,
            api_key,
            base_url,
        })
    }
}

#[async_trait]
impl RacingDataProvider for LSportsProvider {
    fn provider_name(&self) -> &str {
        "lsports"
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ImportError> {
        get_json(
            &self.client,
            "LSports",
            &self.base_url,
            &self.api_key,
            endpoint,
            params,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_fetch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/fixtures")
            .match_query(Matcher::UrlEncoded("api_key".into(), "ls-key".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Body": [{"FixtureId": 42}]}"#)
            .create_async()
            .await;

        let provider =
            LSportsProvider::with_base_url("ls-key".to_string(), server.url()).unwrap();
        let body = provider.fetch("fixtures", &[]).await.unwrap();

        assert_eq!(body["Body"][0]["FixtureId"], 42);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_an_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/fixtures")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let provider =
            LSportsProvider::with_base_url("ls-key".to_string(), server.url()).unwrap();
        let result = provider.fetch("fixtures", &[]).await;
        assert!(matches!(result, Err(ImportError::FetchError(_))));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/fixtures")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let provider =
            LSportsProvider::with_base_url("ls-key".to_string(), server.url()).unwrap();
        let err = provider.fetch("fixtures", &[]).await.unwrap_err();
        assert!(err.is_fetch_failure());
    }
}
