use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// CSS selectors used to locate result rows and their fields
    #[serde(default)]
    pub selectors: SelectorConfig,
    /// HTTP settings for page fetches
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Selector set for a results page.
///
/// Rows are the elements matching `row` that sit inside an element matching
/// `container`; each field is the trimmed text of the row's descendants
/// matching the field selector. Any selector may be a comma-separated list.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    pub container: String,
    pub row: String,
    pub horse_name: String,
    pub jockey_name: String,
    pub trainer_name: String,
    pub finishing_position: String,
    /// Drop rows where all four fields come out empty (header rows, spacers)
    pub skip_empty_rows: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: ".results-table".to_string(),
            row: "tr".to_string(),
            horse_name: ".horse-name".to_string(),
            jockey_name: ".jockey-name".to_string(),
            trainer_name: ".trainer-name".to_string(),
            finishing_position: ".finishing-position".to_string(),
            skip_empty_rows: false,
        }
    }
}

/// HTTP client settings
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl FetchConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Configuration for a racing data API provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// API key (can also be set via the provider's environment variable)
    pub api_key: Option<String>,
    /// Base URL override, e.g. for a proxy or a test server
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_key: None,
            base_url: None,
        }
    }
}

// Default value functions
fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RacingImportBot/1.0)".to_string()
}

fn default_enabled() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Parse configuration from a TOML string, without consulting the environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Configuration for `name`, or defaults when the provider has no section
    pub fn provider(&self, name: &str) -> ProviderConfig {
        self.providers.get(name).cloned().unwrap_or_default()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RACING__ prefix
/// 2. The given file, or config.toml in the current directory if none is given
/// 3. Default values
///
/// Environment variable format: RACING__PROVIDERS__LSPORTS__API_KEY
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        // An explicitly requested file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RACING")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
