//! Line repository.
//!
//! Each line lives behind its own lock, giving the single-writer-per-line
//! discipline the path algorithm requires: a mutation holds the line's
//! write guard for the whole read-validate-apply cycle, so no interleaved
//! writer can observe or produce a half-applied path.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::{Line, LineId};

use super::error::StoreError;

/// Shared handle to one line.
pub type LineHandle = Arc<RwLock<Line>>;

/// Thread-safe in-memory line repository.
#[derive(Clone, Default)]
pub struct LineStore {
    inner: Arc<RwLock<HashMap<LineId, LineHandle>>>,
    next_id: Arc<AtomicU64>,
}

impl LineStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line and return a handle to it.
    ///
    /// Fails when a live line already uses the name; names are unique the
    /// way the original storage layer's unique column made them.
    pub async fn create(&self, name: String, color: String) -> Result<LineHandle, StoreError> {
        let mut guard = self.inner.write().await;

        for handle in guard.values() {
            let line = handle.read().await;
            if !line.is_deleted() && line.name() == name {
                return Err(StoreError::DuplicateLineName(name));
            }
        }

        let id = LineId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let handle = Arc::new(RwLock::new(Line::new(id, name, color)));
        guard.insert(id, handle.clone());
        Ok(handle)
    }

    /// Look up a live line by id.
    ///
    /// Deleted lines are treated as absent.
    pub async fn get(&self, id: LineId) -> Result<LineHandle, StoreError> {
        let handle = {
            let guard = self.inner.read().await;
            guard.get(&id).cloned()
        };
        let handle = handle.ok_or(StoreError::LineNotFound(id))?;

        if handle.read().await.is_deleted() {
            return Err(StoreError::LineNotFound(id));
        }
        Ok(handle)
    }

    /// Handles to all live lines, ordered by id.
    pub async fn all(&self) -> Vec<LineHandle> {
        let handles: Vec<(LineId, LineHandle)> = {
            let guard = self.inner.read().await;
            guard.iter().map(|(id, h)| (*id, h.clone())).collect()
        };

        let mut live = Vec::with_capacity(handles.len());
        for (id, handle) in handles {
            if !handle.read().await.is_deleted() {
                live.push((id, handle));
            }
        }
        live.sort_by_key(|(id, _)| *id);
        live.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Soft-delete a line.
    pub async fn remove(&self, id: LineId) -> Result<(), StoreError> {
        let handle = self.get(id).await?;
        handle.write().await.delete();
        Ok(())
    }
}
