use crate::config::{FetchConfig, ProviderConfig};
use crate::error::ImportError;
use crate::providers::{build_client, get_json, RacingDataProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://api.theracingapi.com";

/// Client for The Racing API
pub struct RacingApiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl RacingApiProvider {
    /// Create a new provider from configuration
    pub fn new(config: &ProviderConfig, fetch: &FetchConfig) -> Result<Self, ImportError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("RACING_API_KEY").ok())
            .ok_or_else(|| ImportError::MissingApiKey("racing_api".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(RacingApiProvider {
            client: build_client(fetch)?,
            api_key,
            base_url,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ImportError> {
        Ok(RacingApiProvider {
            client: build_client(&FetchConfig::default())?,
            api_key,
            base_url,
        })
    }
}

#[async_trait]
impl RacingDataProvider for RacingApiProvider {
    fn provider_name(&self) -> &str {
        "racing_api"
    }

    async fn fetch(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ImportError> {
        get_json(
            &self.client,
            "The Racing API",
            &self.base_url,
            &self.api_key,
            endpoint,
            params,
        )
        .await
    }
}
