//! In-process `StateStore`.
//!
//! Snapshots are kept bincode-encoded, the same bytes a remote store would
//! hold, so every load hands back an independent value. Clones of a
//! `MemoryStore` share the same backing map.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::{Listener, StateStore, Subscription};
use crate::core::error::GameError;
use crate::core::state::GameState;

struct StoredSnapshot {
    version: u64,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct Inner {
    snapshots: Mutex<FxHashMap<String, StoredSnapshot>>,
    listeners: Mutex<FxHashMap<String, Vec<(u64, Listener)>>>,
    next_listener: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared in-memory snapshot store with versioned writes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored version of a match.
    #[must_use]
    pub fn version(&self, match_id: &str) -> Option<u64> {
        lock(&self.inner.snapshots).get(match_id).map(|s| s.version)
    }

    /// Number of listeners registered for a match.
    #[must_use]
    pub fn listener_count(&self, match_id: &str) -> usize {
        lock(&self.inner.listeners).get(match_id).map_or(0, Vec::len)
    }

    fn notify(&self, match_id: &str, state: &GameState) {
        let listeners: Vec<Listener> = lock(&self.inner.listeners)
            .get(match_id)
            .map(|entries| entries.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        for listener in listeners {
            listener(state);
        }
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let matches = lock(&self.inner.snapshots).len();
        f.debug_struct("MemoryStore").field("matches", &matches).finish()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, match_id: &str) -> Result<Option<GameState>, GameError> {
        let snapshots = lock(&self.inner.snapshots);
        let Some(stored) = snapshots.get(match_id) else {
            return Ok(None);
        };
        let state = bincode::deserialize(&stored.bytes).map_err(|e| GameError::Storage(e.to_string()))?;
        Ok(Some(state))
    }

    fn save(&self, match_id: &str, state: &GameState, base_version: Option<u64>) -> Result<(), GameError> {
        {
            let mut snapshots = lock(&self.inner.snapshots);
            match (snapshots.get(match_id), base_version) {
                (None, None) => {}
                (None, Some(_)) => return Err(GameError::UnknownMatch(match_id.to_string())),
                (Some(stored), Some(base)) if stored.version == base => {}
                (Some(stored), base) => {
                    let expected = base.unwrap_or(0);
                    warn!(match_id, expected, found = stored.version, "rejected stale write");
                    return Err(GameError::SyncConflict {
                        expected,
                        found: stored.version,
                    });
                }
            }

            let bytes = bincode::serialize(state).map_err(|e| GameError::Storage(e.to_string()))?;
            snapshots.insert(
                match_id.to_string(),
                StoredSnapshot {
                    version: state.version,
                    bytes,
                },
            );
        }

        debug!(match_id, version = state.version, "saved snapshot");
        self.notify(match_id, state);
        Ok(())
    }

    fn subscribe(&self, match_id: &str, on_change: Listener) -> Subscription {
        let id = self.inner.next_listener.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners)
            .entry(match_id.to_string())
            .or_default()
            .push((id, on_change));

        let inner = Arc::downgrade(&self.inner);
        let match_id = match_id.to_string();
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                if let Some(entries) = lock(&inner.listeners).get_mut(&match_id) {
                    entries.retain(|(listener_id, _)| *listener_id != id);
                }
            }
        })
    }
}
