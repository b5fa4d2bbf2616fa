//! Application state containing shared clients

use crate::modules::integrations::overpass::OverpassClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Overpass API client (one reqwest client for the whole process)
    pub overpass: OverpassClient,
}

impl AppState {
    pub fn new(overpass: OverpassClient) -> Self {
        Self { overpass }
    }
}
