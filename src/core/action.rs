//! Player actions and the match log.
//!
//! Five actions exist. Each one names everything it needs; the acting
//! player is supplied separately so the engine can check turn ownership.
//!
//! ```
//! use kingdoms::board::Position;
//! use kingdoms::core::{Action, CastleId};
//!
//! let place = Action::PlaceCastle { castle: CastleId(3), at: Position::new(0, 2) };
//! assert!(place.advances_turn());
//! assert!(!Action::DrawTile.advances_turn());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::entity::CastleId;
use super::player::PlayerId;
use crate::board::{Position, Tile};

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put one of the actor's unplaced castles on an empty cell.
    PlaceCastle { castle: CastleId, at: Position },

    /// Take the front tile of the supply into the held slot.
    DrawTile,

    /// Put the held tile on an empty cell.
    PlaceHeldTile { at: Position },

    /// Commit the actor's start-of-epoch tile to an empty cell.
    PlaceStartingTile { at: Position },

    /// Skip the turn. Only legal when no other action is.
    Pass,
}

impl Action {
    /// Does completing this action hand the turn to the next player?
    #[must_use]
    pub fn advances_turn(&self) -> bool {
        !matches!(self, Action::DrawTile)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceCastle { castle, at } => write!(f, "place {castle} at {at}"),
            Action::DrawTile => f.write_str("draw"),
            Action::PlaceHeldTile { at } => write!(f, "place drawn tile at {at}"),
            Action::PlaceStartingTile { at } => write!(f, "place starting tile at {at}"),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// Something that happened in the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogEvent {
    CastlePlaced { castle: CastleId, rank: u8, at: Position },
    TileDrawn { tile: Tile },
    TilePlaced { tile: Tile, at: Position },
    StartingTilePlaced { tile: Tile, at: Position },
    Passed,
    PlayerLeft,
    EpochScored { scores: FxHashMap<PlayerId, i64> },
    EpochStarted,
    MatchFinished { winner: PlayerId },
}

/// A log line: what happened, to whom, and at which snapshot version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Epoch in which the event happened.
    pub epoch: u8,

    /// Snapshot version produced by the event.
    pub version: u64,

    /// Acting player. `None` for lifecycle events.
    pub player: Option<PlayerId>,

    /// The event.
    pub event: LogEvent,
}

impl LogEntry {
    /// Create a log entry.
    #[must_use]
    pub fn new(epoch: u8, version: u64, player: Option<PlayerId>, event: LogEvent) -> Self {
        Self {
            epoch,
            version,
            player,
            event,
        }
    }
}
