//! Location collaborators: device/user coordinates, permission state, and
//! reverse geocoding.
//!
//! The list core never talks to these directly. The UI drives the flow and
//! hands the final address string to `ListStore::add`.

mod data;
mod error;
mod geocoder;
mod lookup;
mod permission;
mod source;

pub use data::LocationData;
pub use error::{GeocodeError, LocationError};
pub use geocoder::{first_address, AddressResolver, GoogleGeocoder, NullResolver, NO_ADDRESS};
pub use lookup::{LookupBridge, LookupEvent};
pub use permission::{PermissionAdvisory, PermissionStatus, PermissionTracker};
pub use source::{FixedLocation, IpLocation, LocationSource};
