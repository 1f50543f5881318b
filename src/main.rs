//! CHKO Dashboard Server Binary
//!
//! Starts the local web server that renders the care-program dashboard:
//! ownership analysis, external map embeds and the PDF map browser.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, config from the platform config dir)
//! chko-dashboard
//!
//! # Serve a specific data checkout on another port
//! chko-dashboard --port 8080 --data-dir ~/chko-data
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chko_dashboard::config::Config;
use chko_dashboard::web;

/// CHKO Dashboard - local web dashboard for the care program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Explicit config file path (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the default relative data paths are resolved against
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(data_dir) = &args.data_dir {
        config = config.with_data_dir(data_dir);
    }

    info!("Spreadsheet: {}", config.paths.spreadsheet.display());
    info!("PDF root: {}", config.paths.pdf_root.display());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    web::run_server(config, addr).await
}
