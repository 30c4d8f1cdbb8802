//! Application state for the web layer.

use std::sync::Arc;

use crate::query::StationQueryEngine;
use crate::stations::StationClient;

/// Shared application state.
///
/// Holds only immutable services; nothing is carried between requests.
#[derive(Clone)]
pub struct AppState {
    /// Upstream dataset client
    pub stations: Arc<StationClient>,

    /// Filter-and-rank engine
    pub engine: StationQueryEngine,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationClient) -> Self {
        Self {
            stations: Arc::new(stations),
            engine: StationQueryEngine::new(),
        }
    }
}
