//! Configuration: TOML file, defaults, validation, shared store.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::{ConfigStore, ReloadSummary};
pub use types::{
    Config, GeocodingConfig, LocationConfig, LocationSourceKind, LoggingConfig, MapConfig,
    PermissionSetting,
};
