//! Shared configuration storage.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Sections that differ between the config before and after a reload.
///
/// Only `[map]` is read while the app runs. The other sections are consumed
/// at startup, so changes to them take effect on the next launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReloadSummary {
    pub map: bool,
    pub geocoding: bool,
    pub location: bool,
    pub logging: bool,
}

impl ReloadSummary {
    fn between(old: &Config, new: &Config) -> Self {
        Self {
            map: old.map != new.map,
            geocoding: old.geocoding != new.geocoding,
            location: old.location != new.location,
            logging: old.logging != new.logging,
        }
    }

    /// Changed sections that only apply after a restart.
    pub fn needs_restart(&self) -> Vec<&'static str> {
        [
            ("geocoding", self.geocoding),
            ("location", self.location),
            ("logging", self.logging),
        ]
        .into_iter()
        .filter_map(|(name, changed)| changed.then_some(name))
        .collect()
    }

    /// One-line description for the footer.
    pub fn describe(&self) -> String {
        let restart = self.needs_restart();
        let map = if self.map {
            "Map settings updated"
        } else {
            "Map settings unchanged"
        };
        if restart.is_empty() {
            map.to_string()
        } else {
            format!("{}; restart to apply [{}]", map, restart.join(", "))
        }
    }
}

/// Config shared between the UI and whoever needs a snapshot.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Snapshot of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Re-read the file and report which sections changed. A file that fails
    /// to load or validate leaves the current config in place.
    pub fn reload(&self) -> Result<ReloadSummary, ConfigError> {
        let config = Config::load_from(&self.path)?;
        let mut current = self.inner.write();
        let summary = ReloadSummary::between(&current, &config);
        *current = config;
        Ok(summary)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
