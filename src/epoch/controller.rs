//! Epoch lifecycle: termination, settlement, reset and finalization.
//!
//! ```text
//! epoch 1 ──settle──▶ epoch 2 ──settle──▶ epoch 3 ──settle──▶ finished
//! ```
//!
//! An epoch ends when the board is full or when no seated player can act.
//! Settlement is keyed by epoch number: once `scores_by_epoch` holds the
//! current epoch, settling again is a no-op.

use tracing::info;

use crate::board::{Board, Castle};
use crate::core::action::LogEvent;
use crate::core::config::EPOCH_COUNT;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase};
use crate::rules::anyone_can_act;
use crate::scoring::ScoringEngine;
use crate::supply;

/// Outcome of an epoch-end evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// The epoch is still being played.
    InProgress,
    /// This epoch's scores are already committed. Nothing changed.
    AlreadySettled,
    /// Scores committed; the snapshot is either the next epoch or the
    /// finished match.
    Settled(Box<GameState>),
}

impl Settlement {
    /// The new snapshot, if settlement produced one.
    #[must_use]
    pub fn into_state(self) -> Option<GameState> {
        match self {
            Settlement::Settled(state) => Some(*state),
            Settlement::InProgress | Settlement::AlreadySettled => None,
        }
    }
}

/// Drives the match from epoch to epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct EpochController {
    scoring: ScoringEngine,
}

impl EpochController {
    /// Create an epoch controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Has the current epoch reached an end condition?
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> bool {
        state.board.is_full() || !anyone_can_act(state)
    }

    /// The one player allowed to commit settlements: the first seat still
    /// in the match.
    #[must_use]
    pub fn evaluator<'a>(&self, state: &'a GameState) -> &'a PlayerId {
        &state.players[0].id
    }

    /// Is `player` the designated evaluator?
    #[must_use]
    pub fn is_evaluator(&self, state: &GameState, player: &PlayerId) -> bool {
        self.evaluator(state) == player
    }

    /// Settle the current epoch if it has ended.
    pub fn settle(&self, state: &GameState) -> Settlement {
        if state.is_finished() || state.is_epoch_settled(state.epoch) {
            return Settlement::AlreadySettled;
        }
        if !self.is_terminal(state) {
            return Settlement::InProgress;
        }

        let scores = self.scoring.score(state);
        let mut next = state.next_version();
        for player in next.players.iter_mut() {
            player.settle(scores.get(&player.id).copied().unwrap_or(0));
        }
        next.scores_by_epoch.insert(state.epoch, scores.clone());
        next.record(None, LogEvent::EpochScored { scores });
        info!(epoch = state.epoch, version = next.version, "epoch settled");

        if state.epoch >= EPOCH_COUNT {
            let winner = next.players[next.richest_player_index()].id.clone();
            info!(winner = %winner, "match finished");
            next.phase = Phase::Finished { winner: winner.clone() };
            next.record(None, LogEvent::MatchFinished { winner });
        } else {
            start_next_epoch(&mut next);
        }

        Settlement::Settled(Box::new(next))
    }
}

/// Reset supply, board and castles for the next epoch.
///
/// Unplaced castles of rank 2 and up carry over. Every player gets a full
/// fresh rank-1 set regardless of how many rank-1 castles they placed.
/// Placed castles leave with the old board.
fn start_next_epoch(next: &mut GameState) {
    let player_count = next.player_count();
    let mut rng = GameRng::from_state(&next.rng);
    let deal = supply::deal_epoch(&mut rng, player_count);
    let mut ids = next.castle_ids;

    for (player, tile) in next.players.iter_mut().zip(deal.starting_tiles) {
        let carried: Vec<Castle> = player
            .castles
            .iter()
            .filter(|c| !c.is_placed() && c.rank > 1)
            .copied()
            .collect();
        let mut castles = supply::rank_one_castles(player.color, player_count, &mut ids);
        castles.extend(carried);
        player.castles = castles;
        player.starting_tile = Some(tile);
    }

    next.castle_ids = ids;
    next.rng = rng.state();
    next.board = Board::new();
    next.tile_supply = deal.supply;
    next.held_tile = None;
    next.epoch += 1;
    next.current_player_index = next.richest_player_index();
    next.record(None, LogEvent::EpochStarted);
    info!(epoch = next.epoch, first = %next.current_player().id, "epoch started");
}
