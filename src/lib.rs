//! Terminal shopping list with optional location-derived addresses.

pub mod config;
pub mod list;
pub mod location;
pub mod logging;
pub mod ui;
