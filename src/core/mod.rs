//! Core engine types: ids, players, configuration, actions, errors, RNG,
//! and the match state snapshot.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, LogEntry, LogEvent};
pub use config::{MatchConfig, RosterEntry, BOARD_COLS, BOARD_ROWS, EPOCH_COUNT, MAX_PLAYERS, MIN_PLAYERS};
pub use entity::{CastleId, CastleIdAllocator, TileId};
pub use error::{GameError, MoveRejection, SetupError, Shortage};
pub use player::{Color, Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{EpochScores, GameState, Phase};
