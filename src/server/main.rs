//! SOS server.
//!
//! Accepts emergency alerts over HTTP, finds the nearest hospital and
//! notifies it by SMS.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hospital_sos::alert::build_dispatcher;
use hospital_sos::api::{router, AppState};
use hospital_sos::config::Config;
use hospital_sos::service::EmergencyService;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Emergency alert server")]
struct Args {
    /// TOML config file (SMS provider, hospital list)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file
    #[arg(short, long)]
    listen: Option<String>,

    /// Log alerts instead of sending SMS
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Hospital SOS Server");

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };

    let directory = Arc::new(config.directory()?);
    info!("Serving {} hospitals", directory.len());

    let sms = if args.dry_run { None } else { config.sms.as_ref() };
    let dispatcher = build_dispatcher(sms).context("Failed to set up SMS provider")?;

    let state = Arc::new(AppState {
        service: EmergencyService::new(directory, dispatcher),
    });

    let app = router(state);

    let listen = args.listen.unwrap_or(config.server.listen);
    info!("Starting server on {}", listen);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
