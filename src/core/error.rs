//! Error taxonomy for the engine.
//!
//! Every error is recoverable: a rejected action leaves the match exactly as
//! it was, and the caller retries against a fresh snapshot. Re-settling an
//! already scored epoch is not an error at all; see
//! `epoch::Settlement::AlreadySettled`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{Color, PlayerId};

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// The action breaks a turn or placement rule.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    /// The action needs something the actor does not have.
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(#[from] Shortage),

    /// The store holds a newer snapshot than the one the action was based on.
    #[error("stale snapshot: based on version {expected}, store is at version {found}")]
    SyncConflict { expected: u64, found: u64 },

    /// The match could not be created.
    #[error("invalid match setup: {0}")]
    Setup(#[from] SetupError),

    /// No snapshot is stored for the match.
    #[error("unknown match {0}")]
    UnknownMatch(String),

    /// Only the designated evaluator may commit an epoch settlement.
    #[error("player {0} is not the epoch evaluator")]
    NotEvaluator(PlayerId),

    /// A snapshot could not be encoded or decoded by the store.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Why an action was rejected as an invalid move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveRejection {
    #[error("not your turn")]
    NotYourTurn,

    #[error("player is not in this match")]
    UnknownPlayer,

    #[error("no such castle")]
    UnknownCastle,

    #[error("castle belongs to another player")]
    NotYourCastle,

    #[error("castle is already on the board")]
    CastleAlreadyPlaced,

    #[error("cell is outside the board")]
    OutOfBounds,

    #[error("cell is occupied")]
    CellOccupied,

    #[error("a drawn tile must be placed first")]
    TilePending,

    #[error("cannot pass while another action is available")]
    CannotPass,

    #[error("match is finished")]
    MatchFinished,

    #[error("the last player cannot leave")]
    LastPlayer,
}

/// What the actor is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Shortage {
    #[error("no tiles left in the supply")]
    NoTiles,

    #[error("no castles left to place")]
    NoCastles,

    #[error("no starting tile held")]
    NoStartingTile,

    #[error("no drawn tile held")]
    NoHeldTile,

    #[error("no empty cell on the board")]
    BoardFull,
}

/// Roster problems detected when creating a match.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SetupError {
    #[error("a match needs 2 to 4 players, got {0}")]
    PlayerCount(usize),

    #[error("color {0} is taken by more than one player")]
    DuplicateColor(Color),

    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::from(MoveRejection::CellOccupied);
        assert_eq!(err.to_string(), "invalid move: cell is occupied");

        let err = GameError::from(Shortage::NoTiles);
        assert_eq!(err.to_string(), "resource unavailable: no tiles left in the supply");

        let err = GameError::SyncConflict { expected: 3, found: 5 };
        assert_eq!(err.to_string(), "stale snapshot: based on version 3, store is at version 5");

        let err = GameError::from(SetupError::DuplicateColor(Color::Blue));
        assert_eq!(err.to_string(), "invalid match setup: color blue is taken by more than one player");
    }

    #[test]
    fn test_error_serialization() {
        let err = GameError::from(MoveRejection::NotYourTurn);
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: GameError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
