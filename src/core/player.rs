//! Player identification and per-player match data.
//!
//! ## PlayerId
//!
//! Opaque identifier supplied by the roster (lobby). The engine never
//! interprets it beyond equality.
//!
//! ## Player
//!
//! Everything a player owns during a match: gold, castles, and the
//! uncommitted starting tile for the current epoch.

use serde::{Deserialize, Serialize};

use crate::board::{Castle, Tile};
use crate::core::entity::CastleId;

/// Roster-assigned player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Castle color. Exactly one player per color in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors, in seating order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Roster id.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Castle color, fixed for the match.
    pub color: Color,

    /// Cumulative score. Never negative.
    pub gold: u32,

    /// Placed and unplaced castles for the current epoch.
    pub castles: Vec<Castle>,

    /// Start-of-epoch tile not yet committed to the board.
    pub starting_tile: Option<Tile>,
}

impl Player {
    /// Create a player with no gold, castles, or starting tile.
    pub fn new(id: PlayerId, name: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            gold: 0,
            castles: Vec::new(),
            starting_tile: None,
        }
    }

    /// Castles that have not been placed on the board yet.
    pub fn unplaced_castles(&self) -> impl Iterator<Item = &Castle> {
        self.castles.iter().filter(|c| !c.is_placed())
    }

    /// Does this player still have a castle to place?
    #[must_use]
    pub fn has_unplaced_castle(&self) -> bool {
        self.unplaced_castles().next().is_some()
    }

    /// Look up one of this player's castles.
    #[must_use]
    pub fn castle(&self, id: CastleId) -> Option<&Castle> {
        self.castles.iter().find(|c| c.id == id)
    }

    pub(crate) fn castle_mut(&mut self, id: CastleId) -> Option<&mut Castle> {
        self.castles.iter_mut().find(|c| c.id == id)
    }

    /// Apply a (possibly negative) epoch score, flooring gold at zero.
    pub fn settle(&mut self, score: i64) {
        let total = i64::from(self.gold) + score;
        self.gold = u32::try_from(total.max(0)).unwrap_or(u32::MAX);
    }
}
