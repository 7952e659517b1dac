//! CLI administration tool for url-shortener.
//!
//! Inspects the configured store without going through the HTTP API (and
//! therefore without touching click counters or rate limits).
//!
//! # Usage
//!
//! ```bash
//! # Show statistics for a short code
//! cargo run --bin admin -- stats aB3xY9
//!
//! # Find the short code of a long URL
//! cargo run --bin admin -- lookup https://example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show backend and record count
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (default `sqlite://urls.db`), `BASE_URL`.

use url_shortener::application::services::UrlService;
use url_shortener::config::{self, Config};
use url_shortener::error::AppError;
use url_shortener::infrastructure::persistence::{StorageBackend, connect};
use url_shortener::utils::base_url::FALLBACK_BASE_URL;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting url-shortener storage.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show click statistics for a short code
    Stats {
        /// Short code to inspect
        short_code: String,
    },

    /// Find the record stored for a long URL
    Lookup {
        /// Exact original URL
        url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let repository = connect(&config)
        .await
        .context("Failed to connect to database")?;
    let service = UrlService::new(repository);

    match cli.command {
        Commands::Stats { short_code } => show_stats(&service, &short_code).await?,
        Commands::Lookup { url } => lookup(&service, &config, &url).await?,
        Commands::Db { action } => handle_db_action(action, &service, &config).await?,
    }

    Ok(())
}

type Service = UrlService<dyn url_shortener::domain::repositories::UrlRepository>;

/// Prints the statistics of one short code.
async fn show_stats(service: &Service, short_code: &str) -> Result<()> {
    match service.get_stats(short_code).await {
        Ok(stats) => {
            println!("{}", "📊 Link Statistics".bright_blue().bold());
            println!();
            println!("  {}  {}", "Code:".bold(), short_code.bright_yellow());
            println!("  {}   {}", "URL:".bold(), stats.url);
            println!("  {}  {}", "Clicks:".bold(), stats.clicks.to_string().green());
            println!("  {} {}", "Created:".bold(), stats.created_at.to_rfc3339());
        }
        Err(AppError::NotFound) => {
            println!("{} {}", "❌ Short code not found:".red(), short_code);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Prints the short URL stored for `url`, if any.
async fn lookup(service: &Service, config: &Config, url: &str) -> Result<()> {
    let record = service.repository().find_by_url(url).await?;

    match record {
        Some(record) => {
            let base_url = config.base_url.as_deref().unwrap_or(FALLBACK_BASE_URL);
            println!("{}", "🔗 Found".green().bold());
            println!();
            println!("  {}      {}", "Code:".bold(), record.short_code.bright_yellow());
            println!("  {} {}", "Short URL:".bold(), record.short_url(base_url));
            println!("  {}    {}", "Clicks:".bold(), record.click_count);
        }
        None => {
            println!("{} {}", "❌ URL has not been shortened:".red(), url);
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &Service, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            service.repository().ping().await?;
            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            let backend = StorageBackend::from_url(&config.database_url)?;
            let count = service.repository().count().await?;

            println!("{}", "🗄  Database Info".bright_blue().bold());
            println!();
            println!("  {} {}", "Backend:".bold(), backend.name());
            println!("  {} {}", "Records:".bold(), count.to_string().green());
        }
    }

    Ok(())
}
