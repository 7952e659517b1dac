use anyhow::Result;
use clap::Parser;

use url_shortener::{config, logging, server};

/// URL shortener HTTP service.
#[derive(Parser)]
#[command(name = "url-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the bind address (otherwise `LISTEN` or `0.0.0.0:8000`)
    #[arg(short, long)]
    listen: Option<String>,

    /// Validate configuration and exit without starting the server
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
        config.validate()?;
    }

    logging::init(&config);
    config.print_summary();

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    server::run(config).await
}
