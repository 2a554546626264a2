//! Command-line nearest-hospital lookup, optionally sending the alert.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hospital_sos::alert::{build_dispatcher, AlertDispatcher, DryRunDispatcher};
use hospital_sos::config::Config;
use hospital_sos::models::Coordinate;
use hospital_sos::service::EmergencyService;

#[derive(Parser, Debug)]
#[command(name = "locate")]
#[command(about = "Find the nearest hospital to a location")]
struct Args {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// TOML config file (SMS provider, hospital list)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Send the SOS alert to the hospital found
    #[arg(long)]
    send: bool,

    /// Note included in the alert
    #[arg(short, long)]
    message: Option<String>,

    /// Log the alert instead of sending SMS
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    let directory = Arc::new(config.directory()?);
    let dispatcher: Arc<dyn AlertDispatcher> = if args.send && !args.dry_run {
        build_dispatcher(config.sms.as_ref())?
    } else {
        Arc::new(DryRunDispatcher)
    };
    let service = EmergencyService::new(directory, dispatcher);

    let location = Coordinate::new(args.lat, args.lon);
    let Some(nearest) = service.nearest(location)? else {
        println!("No hospitals found");
        return Ok(());
    };

    println!(
        "Nearest hospital: {} ({:.2} km)",
        nearest.hospital.name,
        nearest.distance_km()
    );
    println!("  {}", nearest.hospital.address);
    println!("  {}", nearest.hospital.phone);

    if args.send {
        let outcome = service
            .send_alert(location, args.message.as_deref())
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", e.user_message(), e))?;
        info!(
            "Alert {} sent to {} at {}",
            outcome.message_sid, outcome.hospital.name, outcome.sent_at
        );
        println!("SMS sent to {} successfully!", outcome.hospital.name);
    }

    Ok(())
}
