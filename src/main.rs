use clap::{Parser, Subcommand};
use log::{debug, info};
use racing_import::config::load_config;
use racing_import::{ProviderFactory, RaceResultScraper};
use std::path::PathBuf;

/// Scrape race results and query racing data APIs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape a race-meeting results page and print the rows as JSON
    Results {
        /// URL of the results page
        url: String,

        /// Drop rows with no extracted fields (e.g. table headers)
        #[arg(long)]
        skip_empty_rows: bool,
    },
    /// Query a racing data API and print the JSON response
    Api {
        /// Provider name: racing_api or lsports
        provider: String,

        /// Endpoint path, e.g. v1/racecards
        endpoint: String,

        /// Query parameter as key=value, may be repeated
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Results {
            url,
            skip_empty_rows,
        } => {
            if skip_empty_rows {
                config.selectors.skip_empty_rows = true;
            }
            let scraper = RaceResultScraper::from_config(&config)?;
            let rows = scraper.scrape(&url).await?;
            info!("{} rows extracted", rows.len());
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Api {
            provider,
            endpoint,
            params,
        } => {
            let provider = ProviderFactory::from_app_config(&provider, &config)?;
            let body = provider.fetch(&endpoint, &params).await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
