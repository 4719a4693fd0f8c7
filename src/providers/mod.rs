mod factory;
mod lsports;
mod racing_api;

pub use factory::ProviderFactory;
pub use lsports::LSportsProvider;
pub use racing_api::RacingApiProvider;

use crate::config::FetchConfig;
use crate::error::ImportError;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;

/// Unified trait for the third-party racing data APIs
#[async_trait]
pub trait RacingDataProvider: Send + Sync {
    /// Get the provider name (e.g., "racing_api", "lsports")
    fn provider_name(&self) -> &str;

    /// GET `endpoint` with the given query parameters and return the JSON body
    async fn fetch(&self, endpoint: &str, params: &[(String, String)])
        -> Result<Value, ImportError>;
}

/// HTTP client honouring the configured timeout and user agent
fn build_client(fetch: &FetchConfig) -> Result<Client, ImportError> {
    Ok(Client::builder()
        .timeout(fetch.timeout_duration())
        .user_agent(fetch.user_agent.as_str())
        .build()?)
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Shared request path: caller params followed by `api_key`. Failures are
/// logged before being returned.
async fn get_json(
    client: &Client,
    provider: &str,
    base_url: &str,
    api_key: &str,
    endpoint: &str,
    params: &[(String, String)],
) -> Result<Value, ImportError> {
    let url = endpoint_url(base_url, endpoint);
    debug!("Requesting {} from {}", url, provider);

    send(client, &url, api_key, params).await.map_err(|e| {
        error!("Error fetching data from {}: {}", provider, e);
        e
    })
}

async fn send(
    client: &Client,
    url: &str,
    api_key: &str,
    params: &[(String, String)],
) -> Result<Value, ImportError> {
    let response = client
        .get(url)
        .query(params)
        .query(&[("api_key", api_key)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ImportError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    Ok(response.json().await?)
}
