//! Match state snapshot.
//!
//! ## GameState
//!
//! One immutable value per version of the match:
//! - Roster with gold, castles and starting tiles
//! - Board, tile supply and the held (drawn) tile
//! - Epoch, phase, committed scores per epoch
//! - Log, version counter, RNG state, castle id allocator
//!
//! Engine operations never mutate a snapshot in place. They clone it (cheap:
//! players, supply and log are `im` persistent vectors), change the clone,
//! bump `version`, and return it. The external store compares versions to
//! reject stale writes.

use std::collections::BTreeMap;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{LogEntry, LogEvent};
use super::config::MatchConfig;
use super::entity::CastleIdAllocator;
use super::error::GameError;
use super::player::{Color, Player, PlayerId};
use super::rng::{GameRng, GameRngState};
use crate::board::{Board, Tile};
use crate::supply;

/// Match progression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Turns are being played in the current epoch.
    Playing,
    /// All epochs are scored.
    Finished { winner: PlayerId },
}

/// Scores committed for one epoch, by player.
pub type EpochScores = FxHashMap<PlayerId, i64>;

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vector<Player>,

    /// Index into `players` of the player to act.
    pub current_player_index: usize,

    /// Current epoch, `1..=EPOCH_COUNT`.
    pub epoch: u8,

    /// The grid.
    pub board: Board,

    /// Undrawn tiles; the front is drawn next.
    pub tile_supply: Vector<Tile>,

    /// Tile drawn by the current player and not yet placed.
    pub held_tile: Option<Tile>,

    /// Playing or finished.
    pub phase: Phase,

    /// Committed scores keyed by epoch. Presence of a key means that epoch
    /// has been settled.
    pub scores_by_epoch: BTreeMap<u8, EpochScores>,

    /// Everything that happened so far.
    pub log: Vector<LogEntry>,

    /// Incremented by every engine operation.
    pub version: u64,

    /// RNG position for the next deck shuffle.
    pub rng: GameRngState,

    /// Source of fresh castle ids.
    pub castle_ids: CastleIdAllocator,
}

impl GameState {
    /// Create epoch 1 of a match.
    ///
    /// Validates the roster, builds every player's castles, shuffles the
    /// deck and deals one starting tile per player in seat order. The host
    /// (first seat) acts first.
    pub fn new(config: &MatchConfig) -> Result<Self, GameError> {
        config.validate()?;

        let player_count = config.player_count();
        let mut rng = GameRng::new(config.seed);
        let mut castle_ids = CastleIdAllocator::new();
        let dealt = supply::deal_epoch(&mut rng, player_count);

        let players = config
            .roster
            .iter()
            .zip(dealt.starting_tiles)
            .map(|(entry, starting_tile)| {
                let mut player = Player::new(entry.id.clone(), entry.name.clone(), entry.color);
                player.castles = supply::build_castles(entry.color, player_count, &mut castle_ids);
                player.starting_tile = Some(starting_tile);
                player
            })
            .collect();

        let mut state = Self {
            players,
            current_player_index: 0,
            epoch: 1,
            board: Board::new(),
            tile_supply: dealt.supply,
            held_tile: None,
            phase: Phase::Playing,
            scores_by_epoch: BTreeMap::new(),
            log: Vector::new(),
            version: 0,
            rng: rng.state(),
            castle_ids,
        };
        state.record(None, LogEvent::EpochStarted);

        Ok(state)
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Seat index of a player.
    #[must_use]
    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Look up the player owning a color.
    #[must_use]
    pub fn player_by_color(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color == color)
    }

    /// Has the last epoch been scored?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    /// Match winner, once finished.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        match &self.phase {
            Phase::Finished { winner } => Some(winner),
            Phase::Playing => None,
        }
    }

    /// Has the given epoch already been settled?
    #[must_use]
    pub fn is_epoch_settled(&self, epoch: u8) -> bool {
        self.scores_by_epoch.contains_key(&epoch)
    }

    /// Committed scores for an epoch.
    #[must_use]
    pub fn scores_for(&self, epoch: u8) -> Option<&EpochScores> {
        self.scores_by_epoch.get(&epoch)
    }

    /// Seat index of the player with the most gold; ties go to the
    /// earliest seat.
    #[must_use]
    pub fn richest_player_index(&self) -> usize {
        let mut best = 0;
        for (i, player) in self.players.iter().enumerate() {
            if player.gold > self.players[best].gold {
                best = i;
            }
        }
        best
    }

    /// Clone this snapshot as the starting point for the next version.
    pub(crate) fn next_version(&self) -> Self {
        let mut next = self.clone();
        next.version += 1;
        next
    }

    /// Append a log entry stamped with the current epoch and version.
    pub(crate) fn record(&mut self, player: Option<PlayerId>, event: LogEvent) {
        self.log.push_back(LogEntry::new(self.epoch, self.version, player, event));
    }

    /// Hand the turn to the next seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }
}
