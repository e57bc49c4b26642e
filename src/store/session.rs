//! Match session: the engine wired to a store.
//!
//! Every write goes through load → check base version → apply → versioned
//! save. Epoch settlement is committed only by the evaluator (the first
//! seat); any other observer of a terminal state gets `NotEvaluator` and
//! waits for the evaluator's snapshot to arrive.

use tracing::{info, warn};

use super::{Listener, StateStore, Subscription};
use crate::core::action::Action;
use crate::core::config::MatchConfig;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::epoch::{EpochController, Settlement};
use crate::rules::TurnEngine;

/// Runs matches against a `StateStore`.
#[derive(Clone, Debug)]
pub struct MatchSession<S> {
    store: S,
    engine: TurnEngine,
    controller: EpochController,
}

impl<S: StateStore> MatchSession<S> {
    /// Create a session over a store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            engine: TurnEngine::new(),
            controller: EpochController::new(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create and store epoch 1 of a new match.
    pub fn create(&self, match_id: &str, config: &MatchConfig) -> Result<GameState, GameError> {
        let state = GameState::new(config)?;
        self.store.save(match_id, &state, None)?;
        info!(match_id, players = state.player_count(), "match created");
        Ok(state)
    }

    /// Latest snapshot.
    pub fn load(&self, match_id: &str) -> Result<GameState, GameError> {
        self.store
            .load(match_id)?
            .ok_or_else(|| GameError::UnknownMatch(match_id.to_string()))
    }

    /// Apply an action that `actor` chose while looking at `base_version`.
    ///
    /// Fails with `SyncConflict` if the match moved on since then; the
    /// caller should reload and decide again.
    pub fn submit(
        &self,
        match_id: &str,
        actor: &PlayerId,
        base_version: u64,
        action: Action,
    ) -> Result<GameState, GameError> {
        let current = self.load(match_id)?;
        if current.version != base_version {
            warn!(match_id, player = %actor, base_version, found = current.version, "stale action");
            return Err(GameError::SyncConflict {
                expected: base_version,
                found: current.version,
            });
        }

        let next = self.engine.apply(&current, actor, action)?;
        self.store.save(match_id, &next, Some(current.version))?;
        Ok(next)
    }

    /// Settle the current epoch on behalf of `observer` if it has ended.
    ///
    /// In-progress and already-settled epochs are reported to anyone.
    /// Only the evaluator may commit a settlement.
    pub fn settle(&self, match_id: &str, observer: &PlayerId) -> Result<Settlement, GameError> {
        let current = self.load(match_id)?;
        let settlement = self.controller.settle(&current);

        if let Settlement::Settled(next) = &settlement {
            if !self.controller.is_evaluator(&current, observer) {
                return Err(GameError::NotEvaluator(observer.clone()));
            }
            self.store.save(match_id, next, Some(current.version))?;
        }
        Ok(settlement)
    }

    /// Remove a player who left the match.
    pub fn leave(&self, match_id: &str, player: &PlayerId) -> Result<GameState, GameError> {
        let current = self.load(match_id)?;
        let next = self.engine.remove_player(&current, player)?;
        self.store.save(match_id, &next, Some(current.version))?;
        Ok(next)
    }

    /// Listen for new snapshots of a match.
    pub fn subscribe(&self, match_id: &str, on_change: Listener) -> Subscription {
        self.store.subscribe(match_id, on_change)
    }
}
