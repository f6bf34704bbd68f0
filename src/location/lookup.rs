//! Asynchronous location and address requests for the UI thread.
//!
//! The UI loop is synchronous. Requests run on the tokio runtime and report
//! back through the UI event channel. Each request carries a generation
//! number; starting a new request or cancelling aborts the one in flight and
//! bumps the generation so late results are recognisably stale.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use super::data::LocationData;
use super::geocoder::{first_address, AddressResolver, NO_ADDRESS};
use super::source::LocationSource;
use crate::ui::events::AppEvent;

/// Result of a lookup request, tagged with its generation.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupEvent {
    LocationFix {
        generation: u64,
        location: LocationData,
    },
    LocationFailed {
        generation: u64,
        message: String,
    },
    AddressResolved {
        generation: u64,
        address: String,
    },
}

impl LookupEvent {
    pub fn generation(&self) -> u64 {
        match self {
            LookupEvent::LocationFix { generation, .. }
            | LookupEvent::LocationFailed { generation, .. }
            | LookupEvent::AddressResolved { generation, .. } => *generation,
        }
    }
}

pub struct LookupBridge {
    runtime: Handle,
    events: Sender<AppEvent>,
    source: Arc<dyn LocationSource>,
    resolver: Arc<dyn AddressResolver>,
    generation: u64,
    in_flight: Option<AbortHandle>,
}

impl LookupBridge {
    pub fn new(
        runtime: Handle,
        events: Sender<AppEvent>,
        source: Arc<dyn LocationSource>,
        resolver: Arc<dyn AddressResolver>,
    ) -> Self {
        Self {
            runtime,
            events,
            source,
            resolver,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True if `event` belongs to the latest request.
    pub fn is_current(&self, event: &LookupEvent) -> bool {
        event.generation() == self.generation
    }

    /// Ask the location source for a fix.
    pub fn request_location(&mut self) -> u64 {
        let generation = self.next_generation();
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        tracing::debug!(generation, source = source.name(), "location requested");

        let task = self.runtime.spawn(async move {
            let event = match source.current_location().await {
                Ok(location) => LookupEvent::LocationFix {
                    generation,
                    location,
                },
                Err(err) => {
                    tracing::warn!(generation, error = %err, "location request failed");
                    LookupEvent::LocationFailed {
                        generation,
                        message: err.to_string(),
                    }
                }
            };
            let _ = events.send(AppEvent::Lookup(event));
        });
        self.in_flight = Some(task.abort_handle());
        generation
    }

    /// Reverse-geocode `location`. Errors degrade to [`NO_ADDRESS`].
    pub fn resolve_address(&mut self, location: LocationData) -> u64 {
        let generation = self.next_generation();
        let resolver = Arc::clone(&self.resolver);
        let events = self.events.clone();
        let query = location.query();
        tracing::debug!(generation, resolver = resolver.name(), %query, "address lookup");

        let task = self.runtime.spawn(async move {
            let address = match resolver.resolve(&query).await {
                Ok(candidates) => first_address(&candidates),
                Err(err) => {
                    tracing::warn!(generation, error = %err, "address lookup failed");
                    NO_ADDRESS.to_string()
                }
            };
            let _ = events.send(AppEvent::Lookup(LookupEvent::AddressResolved {
                generation,
                address,
            }));
        });
        self.in_flight = Some(task.abort_handle());
        generation
    }

    /// Abandon whatever is in flight.
    pub fn cancel(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
            tracing::debug!(generation = self.generation, "lookup cancelled");
        }
        self.generation += 1;
    }

    fn next_generation(&mut self) -> u64 {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
        self.generation += 1;
        self.generation
    }
}
