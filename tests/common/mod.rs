//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_geocoder;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shoplist::config::{Config, ConfigStore};
use shoplist::list::ListStore;
use shoplist::location::{
    AddressResolver, FixedLocation, GeocodeError, LocationData, LocationError, LocationSource,
    LookupBridge, LookupEvent, PermissionStatus, PermissionTracker,
};
use shoplist::ui::app::App;
use shoplist::ui::events::AppEvent;
use shoplist::ui::input::handle_key;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Location doubles ---------------------------------------------------------

/// Resolver returning a fixed candidate list.
pub struct StaticResolver(pub Vec<String>);

#[async_trait]
impl AddressResolver for StaticResolver {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn resolve(&self, _query: &str) -> Result<Vec<String>, GeocodeError> {
        Ok(self.0.clone())
    }
}

/// Resolver that always fails.
pub struct FailingResolver;

#[async_trait]
impl AddressResolver for FailingResolver {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn resolve(&self, _query: &str) -> Result<Vec<String>, GeocodeError> {
        Err(GeocodeError::Status { status: 500 })
    }
}

/// Location source that always fails.
pub struct FailingSource;

#[async_trait]
impl LocationSource for FailingSource {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn current_location(&self) -> Result<LocationData, LocationError> {
        Err(LocationError::Status { status: 503 })
    }
}

// -- App harness --------------------------------------------------------------

pub const BERLIN: LocationData = LocationData {
    latitude: 52.5,
    longitude: 13.5,
};

/// An [`App`] wired to a real runtime and the event channel its lookups
/// report on.
pub struct TestApp {
    pub app: App,
    pub events: Receiver<AppEvent>,
    _runtime: Runtime,
}

impl TestApp {
    pub fn new(permission: PermissionStatus) -> Self {
        Self::with(
            Arc::new(FixedLocation::new(BERLIN)),
            Arc::new(StaticResolver(vec!["Alexanderplatz 1, Berlin".to_string()])),
            permission,
        )
    }

    pub fn with(
        source: Arc<dyn LocationSource>,
        resolver: Arc<dyn AddressResolver>,
        permission: PermissionStatus,
    ) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to build runtime");
        let (tx, rx) = mpsc::channel();
        let bridge = LookupBridge::new(runtime.handle().clone(), tx, source, resolver);
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/shoplist-test.toml"));
        let app = App::new(
            ListStore::new(),
            config,
            PermissionTracker::new(permission),
            bridge,
        );
        Self {
            app,
            events: rx,
            _runtime: runtime,
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        handle_key(&mut self.app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn ctrl(&mut self, ch: char) {
        handle_key(
            &mut self.app,
            KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL),
        );
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Open the add dialog, fill both fields and submit.
    pub fn add_item(&mut self, name: &str, quantity: &str) {
        self.press(KeyCode::Char('a'));
        self.type_text(name);
        self.press(KeyCode::Tab);
        self.type_text(quantity);
        self.press(KeyCode::Enter);
    }

    /// Wait for the next lookup result and hand it to the app.
    pub fn pump_lookup(&mut self) -> LookupEvent {
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        loop {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            match self.events.recv_timeout(remaining) {
                Ok(AppEvent::Lookup(event)) => {
                    self.app.on_lookup_event(event.clone());
                    return event;
                }
                Ok(_) => continue,
                Err(err) => panic!("no lookup event: {err:?}"),
            }
        }
    }
}
