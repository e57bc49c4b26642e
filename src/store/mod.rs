//! Boundary with the external state store.
//!
//! The engine is pure; persistence and fan-out live behind `StateStore`.
//! Writes are conditional on the version the caller based its change on,
//! so two clients acting on the same snapshot cannot both win.
//!
//! ## Delivery
//!
//! Subscribers may see duplicate or out-of-order snapshots. Use a
//! `SnapshotTracker` to drop anything not newer than what was already seen.

pub mod memory;
pub mod session;

use std::sync::Arc;

use crate::core::error::GameError;
use crate::core::state::GameState;

pub use memory::MemoryStore;
pub use session::MatchSession;

/// Callback invoked with every saved snapshot of a match.
pub type Listener = Arc<dyn Fn(&GameState) + Send + Sync>;

/// Persistence and notification for match snapshots.
pub trait StateStore {
    /// Latest snapshot of a match, if one exists.
    fn load(&self, match_id: &str) -> Result<Option<GameState>, GameError>;

    /// Store a snapshot.
    ///
    /// `base_version` is the version of the snapshot the change was derived
    /// from, or `None` to create the match. The write fails with
    /// `GameError::SyncConflict` if the stored version differs.
    fn save(&self, match_id: &str, state: &GameState, base_version: Option<u64>) -> Result<(), GameError>;

    /// Register a listener for saved snapshots of a match.
    fn subscribe(&self, match_id: &str, on_change: Listener) -> Subscription;
}

/// Handle returned by `StateStore::subscribe`.
///
/// Dropping the handle keeps the listener registered; call `unsubscribe`
/// to remove it.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap a cancellation callback.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop receiving notifications.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

/// Filters stale and duplicate snapshot notifications.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapshotTracker {
    last_seen: Option<u64>,
}

impl SnapshotTracker {
    /// Create a tracker that has seen nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a snapshot if it is newer than anything seen so far.
    pub fn accept(&mut self, state: &GameState) -> bool {
        match self.last_seen {
            Some(seen) if state.version <= seen => false,
            _ => {
                self.last_seen = Some(state.version);
                true
            }
        }
    }

    /// Version of the newest accepted snapshot.
    #[must_use]
    pub fn last_seen(&self) -> Option<u64> {
        self.last_seen
    }
}
