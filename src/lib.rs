//! # kingdoms
//!
//! Rules engine for a three-epoch castle and tile territory board game.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: Every operation takes a `GameState` and
//!    returns a new one with `version` bumped. The input is never touched,
//!    so a store can compare versions and reject stale writes.
//!
//! 2. **Rejections are values**: Invalid actions return `GameError` and
//!    leave the match exactly as it was. Nothing in the engine is fatal.
//!
//! 3. **Deterministic**: Deck shuffles come from a seeded ChaCha8 stream
//!    whose position is stored in the snapshot.
//!
//! ## Modules
//!
//! - `core`: ids, players, configuration, actions, errors, RNG, state
//! - `board`: the 5×6 grid, castles and tiles
//! - `supply`: deck and castle construction, epoch dealing
//! - `rules`: turn engine (action validation and turn order)
//! - `scoring`: row/column segment scoring
//! - `epoch`: epoch termination, settlement and reset
//! - `store`: versioned snapshot store boundary and match sessions
//! - `playout`: automated players and whole-match simulation
//!
//! ## Example
//!
//! ```
//! use kingdoms::board::Position;
//! use kingdoms::core::{Action, GameState, MatchConfig, PlayerId};
//! use kingdoms::rules::TurnEngine;
//!
//! let state = GameState::new(&MatchConfig::seated(42, 2)).unwrap();
//! let engine = TurnEngine::new();
//! let p1 = PlayerId::new("p1");
//!
//! let next = engine
//!     .apply(&state, &p1, Action::PlaceStartingTile { at: Position::new(0, 0) })
//!     .unwrap();
//!
//! assert_eq!(next.version, 1);
//! assert_eq!(next.current_player().id, PlayerId::new("p2"));
//! assert_eq!(state.version, 0);
//! ```

pub mod board;
pub mod core;
pub mod epoch;
pub mod playout;
pub mod rules;
pub mod scoring;
pub mod store;
pub mod supply;

// Re-export commonly used types
pub use crate::core::{
    Action, CastleId, Color, EpochScores, GameError, GameRng, GameRngState, GameState, LogEntry, LogEvent,
    MatchConfig, MoveRejection, Phase, Player, PlayerId, RosterEntry, SetupError, Shortage, TileId,
};

pub use crate::board::{Board, Castle, Cell, Position, Tile, TileKind};

pub use crate::rules::{can_act, TurnEngine};

pub use crate::scoring::{ScoringEngine, SegmentScore};

pub use crate::epoch::{EpochController, Settlement};

pub use crate::store::{MatchSession, MemoryStore, SnapshotTracker, StateStore, Subscription};
