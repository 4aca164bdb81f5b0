//! Station identity and metadata.

use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque identifier for a station.
///
/// The path algorithm only ever compares identifiers for equality; the
/// station's metadata lives in [`Station`] and is resolved by the store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Identifier assigned by the store.
    pub id: StationId,

    /// Display name.
    pub name: String,

    /// When the station was created.
    pub created_at: DateTime<Utc>,

    /// When the station was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Station {
    /// Create a new station stamped with the current time.
    pub fn new(id: StationId, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", StationId(42)), "42");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", StationId(7)), "StationId(7)");
    }

    #[test]
    fn equality() {
        assert_eq!(StationId(1), StationId(1));
        assert_ne!(StationId(1), StationId(2));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId(3));
        assert!(set.contains(&StationId(3)));
        assert!(!set.contains(&StationId(4)));
    }

    #[test]
    fn new_station_timestamps_match() {
        let station = Station::new(StationId(1), "Gangnam".to_string());
        assert_eq!(station.created_at, station.updated_at);
    }
}
