//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationService;

/// Shared application state.
///
/// Generic over the upstream source so the same router serves the live
/// feed and a local snapshot.
pub struct AppState<S> {
    /// Station queries
    pub stations: Arc<StationService<S>>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(stations: StationService<S>) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            stations: Arc::clone(&self.stations),
        }
    }
}
