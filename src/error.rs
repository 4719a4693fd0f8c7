use thiserror::Error;

/// Errors that can occur while scraping results or querying racing data APIs
#[derive(Error, Debug)]
pub enum ImportError {
    /// Transport failure: unreachable host, timeout, unreadable or undecodable body
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} returned by {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// A configured CSS selector could not be parsed
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// No API key in configuration or environment for the named provider
    #[error("No API key configured for provider '{0}'")]
    MissingApiKey(String),

    /// Provider could not be created (unknown or disabled)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl ImportError {
    /// True for the failures that mean the page or API could not be retrieved
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ImportError::FetchError(_) | ImportError::HttpStatus { .. }
        )
    }
}
