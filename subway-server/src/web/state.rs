//! Application state for the web layer.

use crate::store::{LineStore, StationStore};

/// Shared application state.
///
/// Both stores are cheap clones around shared interiors.
#[derive(Clone)]
pub struct AppState {
    /// Station repository
    pub stations: StationStore,

    /// Line repository
    pub lines: LineStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationStore, lines: LineStore) -> Self {
        Self { stations, lines }
    }
}
