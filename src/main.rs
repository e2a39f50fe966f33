use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use url::Url;

use fyyur::backend::HttpVenueBackend;
use fyyur::config::Config;
use fyyur::constants::{VENUE_DELETE_BUTTON_ID, VENUE_ID_ATTRIBUTE};
use fyyur::logger;
use fyyur::ui::{ConsoleNavigator, Element, Page, VenueDeleteButton};
use fyyur::utils::datetime::{self, DateFormat, ParseMode};

#[derive(Parser)]
#[command(name = "fyyur")]
#[command(about = "Client-side tools for the Fyyur venue site")]
struct Cli {
    /// Configuration file (defaults to ./fyyur.toml or the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a date string the way venue pages do and print it
    ParseDate {
        /// Date string, e.g. "2019-05-21T10:30:00.000"
        input: String,

        /// Reject short or out-of-range input
        #[arg(long)]
        strict: bool,

        /// Display format: "full", "medium", or a strftime pattern
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Delete a venue as the venue page's delete button would
    DeleteVenue {
        /// Venue id
        id: String,

        /// Server base URL (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Write a default configuration file
    InitConfig {
        /// Target path (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    match cli.command {
        Commands::ParseDate { input, strict, format } => parse_date(&config, &input, strict, format),
        Commands::DeleteVenue { id, base_url } => delete_venue(&config, id, base_url).await,
        Commands::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)
        }
    }
}

fn parse_date(config: &Config, input: &str, strict: bool, format: Option<String>) -> Result<()> {
    let mode = if strict { ParseMode::Strict } else { config.display.parse_mode() };
    let format = match format {
        Some(format) => DateFormat::from_str(&format).unwrap_or_default(),
        None => config.display.date_format(),
    };

    let timestamp = datetime::parse_with_mode(input, mode).with_context(|| format!("Cannot parse '{}'", input))?;
    println!("{}", timestamp);

    match timestamp.to_datetime() {
        Some(dt) => println!("{}", datetime::format_datetime(&dt, &format)),
        None => log::warn!("'{}' does not produce a valid timestamp", input),
    }
    Ok(())
}

async fn delete_venue(config: &Config, id: String, base_url: Option<String>) -> Result<()> {
    let backend = match base_url {
        Some(base_url) => {
            let url = Url::parse(&base_url).with_context(|| format!("Invalid base URL: {}", base_url))?;
            HttpVenueBackend::new(url)
        }
        None => HttpVenueBackend::from_config(&config.server)?,
    };

    let page = Page::new(vec![Element::new(VENUE_DELETE_BUTTON_ID).with_data(VENUE_ID_ATTRIBUTE, id)]);
    let button = VenueDeleteButton::attach(&page, Arc::new(backend), Arc::new(ConsoleNavigator))?;
    button.click().await?;
    Ok(())
}
