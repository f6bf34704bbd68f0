use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use reqwest::Client;

use shoplist::config::{Config, ConfigStore, LocationSourceKind, PermissionSetting};
use shoplist::list::ListStore;
use shoplist::location::{
    AddressResolver, FixedLocation, GoogleGeocoder, IpLocation, LocationSource, LookupBridge,
    NullResolver, PermissionTracker,
};
use shoplist::ui::{self, App, EventHandler};

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "Keep a shopping list in the terminal", long_about = None)]
struct Args {
    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed latitude for the location source
    #[arg(long, requires = "longitude", allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Fixed longitude for the location source
    #[arg(long, requires = "latitude", allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Start with location permission already granted
    #[arg(long)]
    grant_location: bool,

    /// Log filter, e.g. "debug" or "shoplist=trace"
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) {
            config.location.source = LocationSourceKind::Fixed;
            config.location.latitude = latitude;
            config.location.longitude = longitude;
        }
        if self.grant_location {
            config.location.permission = PermissionSetting::Granted;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    args.apply(&mut config);
    config.validate().context("invalid command-line overrides")?;

    let log_path = shoplist::logging::init(&config.logging, args.log_level.as_deref())
        .context("initializing logging")?;
    tracing::info!(config = %path.display(), log = %log_path.display(), "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let client = Client::builder()
        .timeout(Duration::from_secs(u64::from(config.geocoding.timeout_seconds)))
        .build()
        .context("building HTTP client")?;

    let source: Arc<dyn LocationSource> = match config.location.source {
        LocationSourceKind::Fixed => Arc::new(FixedLocation::new(config.location.fixed_location())),
        LocationSourceKind::Ip => Arc::new(IpLocation::new(
            client.clone(),
            config.location.ip_lookup_url.clone(),
        )),
    };
    let resolver: Arc<dyn AddressResolver> = match &config.geocoding.api_key {
        Some(key) if !key.is_empty() => Arc::new(GoogleGeocoder::new(
            client,
            config.geocoding.base_url.clone(),
            key.clone(),
        )),
        _ => {
            tracing::warn!("no geocoding api key configured; addresses will be empty");
            Arc::new(NullResolver)
        }
    };

    let events = EventHandler::new(ui::runtime::TICK_RATE);
    let bridge = LookupBridge::new(runtime.handle().clone(), events.sender(), source, resolver);
    let permission = PermissionTracker::new(config.location.permission.initial_status());
    let store = ConfigStore::new(config, path);
    let app = App::new(ListStore::new(), store, permission, bridge);

    ui::run(app, events).context("running terminal ui")?;
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}
