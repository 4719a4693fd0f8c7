use std::time::Duration;

use log::{debug, error, info};

use crate::config::{AppConfig, SelectorConfig};
use crate::error::ImportError;
use crate::extractors::ResultsTableExtractor;
use crate::fetchers::RequestFetcher;
use crate::model::ResultRow;

/// Fetches a race-meeting results page and extracts its result rows.
///
/// Holds only immutable state (compiled selectors and an HTTP client), so a
/// single instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct RaceResultScraper {
    fetcher: RequestFetcher,
    extractor: ResultsTableExtractor,
}

impl RaceResultScraper {
    /// Creates a new builder for configuring a scraper
    ///
    /// # Example
    /// ```
    /// use racing_import::RaceResultScraper;
    ///
    /// let scraper = RaceResultScraper::builder().build().unwrap();
    /// ```
    pub fn builder() -> RaceResultScraperBuilder {
        RaceResultScraperBuilder::default()
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ImportError> {
        Ok(Self {
            fetcher: RequestFetcher::from_config(&config.fetch)?,
            extractor: ResultsTableExtractor::new(&config.selectors)?,
        })
    }

    /// Fetch `url` and extract every result row in document order.
    ///
    /// A page with no matching rows gives an empty vector. A transport
    /// failure or non-2xx status is logged and returned; there is no partial
    /// result.
    pub async fn scrape(&self, url: &str) -> Result<Vec<ResultRow>, ImportError> {
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error scraping race results from {}: {}", url, e);
                return Err(e);
            }
        };

        let rows = self.extractor.extract_html(&html);
        info!("Scraped {} result rows from {}", rows.len(), url);
        Ok(rows)
    }

    /// Extract rows from HTML that has already been fetched
    pub fn extract(&self, html: &str) -> Vec<ResultRow> {
        self.extractor.extract_html(html)
    }
}

/// Builder for [`RaceResultScraper`]
#[derive(Debug, Default)]
pub struct RaceResultScraperBuilder {
    selectors: Option<SelectorConfig>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RaceResultScraperBuilder {
    /// Use a custom selector set instead of the built-in one
    ///
    /// # Example
    /// ```
    /// use racing_import::{RaceResultScraper, SelectorConfig};
    ///
    /// let selectors = SelectorConfig {
    ///     container: "#results".to_string(),
    ///     ..Default::default()
    /// };
    /// let scraper = RaceResultScraper::builder().selectors(selectors).build().unwrap();
    /// ```
    pub fn selectors(mut self, selectors: SelectorConfig) -> Self {
        self.selectors = Some(selectors);
        self
    }

    /// Set a timeout for the page request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// # Errors
    /// Returns `ImportError` if a selector does not parse, the user agent is
    /// not a valid header value, or the HTTP client cannot be created.
    pub fn build(self) -> Result<RaceResultScraper, ImportError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ImportError::BuilderError(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        let selectors = self.selectors.unwrap_or_default();
        debug!(
            "Building scraper with rows '{}' inside '{}'",
            selectors.row, selectors.container
        );

        Ok(RaceResultScraper {
            fetcher: RequestFetcher::new(self.timeout, self.user_agent.as_deref())?,
            extractor: ResultsTableExtractor::new(&selectors)?,
        })
    }
}
