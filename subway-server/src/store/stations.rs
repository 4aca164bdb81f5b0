//! Station repository.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::{Station, StationId};

use super::error::StoreError;

/// Thread-safe in-memory station repository.
///
/// Ids are allocated sequentially, the way the original storage layer's
/// identity column would.
#[derive(Clone, Default)]
pub struct StationStore {
    inner: Arc<RwLock<HashMap<StationId, Station>>>,
    next_id: Arc<AtomicU64>,
}

impl StationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a station and return it.
    pub async fn create(&self, name: String) -> Station {
        let id = StationId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let station = Station::new(id, name);

        let mut guard = self.inner.write().await;
        guard.insert(id, station.clone());
        station
    }

    /// Look up a station by id.
    pub async fn get(&self, id: StationId) -> Result<Station, StoreError> {
        let guard = self.inner.read().await;
        guard.get(&id).cloned().ok_or(StoreError::StationNotFound(id))
    }

    /// All stations, ordered by id.
    pub async fn all(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        let mut stations: Vec<Station> = guard.values().cloned().collect();
        stations.sort_by_key(|s| s.id);
        stations
    }

    /// Remove a station.
    pub async fn remove(&self, id: StationId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::StationNotFound(id))
    }

    /// Number of stations in the store.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// True when the store holds no stations.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_allocates_sequential_ids() {
        let store = StationStore::new();
        let a = store.create("Gangnam".to_string()).await;
        let b = store.create("Yeoksam".to_string()).await;
        assert_eq!(a.id, StationId(1));
        assert_eq!(b.id, StationId(2));
    }

    #[tokio::test]
    async fn get_returns_created_station() {
        let store = StationStore::new();
        let created = store.create("Gangnam".to_string()).await;
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "Gangnam");
    }

    #[tokio::test]
    async fn get_unknown_id_fails() {
        let store = StationStore::new();
        assert_eq!(
            store.get(StationId(9)).await,
            Err(StoreError::StationNotFound(StationId(9)))
        );
    }

    #[tokio::test]
    async fn all_is_ordered_by_id() {
        let store = StationStore::new();
        store.create("A".to_string()).await;
        store.create("B".to_string()).await;
        store.create("C".to_string()).await;

        let names: Vec<String> = store.all().await.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn remove_deletes_station() {
        let store = StationStore::new();
        let station = store.create("A".to_string()).await;
        store.remove(station.id).await.unwrap();
        assert!(store.get(station.id).await.is_err());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_unknown_id_fails() {
        let store = StationStore::new();
        assert!(store.remove(StationId(1)).await.is_err());
    }
}
