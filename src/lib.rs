pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod model;
pub mod providers;
pub mod race_results;

pub use config::{AppConfig, FetchConfig, ProviderConfig, SelectorConfig};
pub use error::ImportError;
pub use model::ResultRow;
pub use providers::{ProviderFactory, RacingDataProvider};
pub use race_results::{RaceResultScraper, RaceResultScraperBuilder};

use extractors::ResultsTableExtractor;

/// Extract result rows from results-page HTML using the built-in selectors
///
/// # Example
/// ```
/// let html = r#"<table class="results-table"><tr>
///     <td class="horse-name"> Thunder Bolt </td>
///     <td class="finishing-position">1</td>
/// </tr></table>"#;
///
/// let rows = racing_import::extract_race_results(html);
/// assert_eq!(rows[0].horse_name, "Thunder Bolt");
/// assert_eq!(rows[0].jockey_name, "");
/// ```
pub fn extract_race_results(html: &str) -> Vec<ResultRow> {
    ResultsTableExtractor::default().extract_html(html)
}

/// Fetch a race-meeting results page and extract its rows using default settings
pub async fn scrape_race_results(url: &str) -> Result<Vec<ResultRow>, ImportError> {
    RaceResultScraper::builder().build()?.scrape(url).await
}

/// Fetch and extract using a loaded configuration (selectors and HTTP settings)
pub async fn scrape_race_results_with_config(
    url: &str,
    config: &AppConfig,
) -> Result<Vec<ResultRow>, ImportError> {
    RaceResultScraper::from_config(config)?.scrape(url).await
}
