//! Castles and tiles: the two kinds of piece that occupy board cells.

use serde::{Deserialize, Serialize};

use super::grid::Position;
use crate::core::entity::{CastleId, TileId};
use crate::core::player::Color;

/// Lowest castle rank.
pub const MIN_RANK: u8 = 1;

/// Highest castle rank.
pub const MAX_RANK: u8 = 4;

/// A castle owned by the player of its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Castle {
    /// Match-unique id.
    pub id: CastleId,

    /// Printed rank, `1..=4`.
    pub rank: u8,

    /// Owner color.
    pub color: Color,

    /// Board cell, once placed. Permanent until the epoch reset.
    pub position: Option<Position>,
}

impl Castle {
    /// Create an unplaced castle.
    #[must_use]
    pub fn new(id: CastleId, rank: u8, color: Color) -> Self {
        debug_assert!((MIN_RANK..=MAX_RANK).contains(&rank), "castle rank out of range");
        Self {
            id,
            rank,
            color,
            position: None,
        }
    }

    /// Is the castle on the board?
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}

/// Tile category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Adds its value to the segment.
    Resource,
    /// Subtracts from the segment. Never cancelled by a dragon.
    Hazard,
    /// Splits rows and columns into independent segments.
    Mountain,
    /// Cancels resource values in its segment.
    Dragon,
    /// Doubles its segment's base value.
    Goldmine,
    /// Raises the rank of orthogonally adjacent castles by one.
    Wizard,
}

/// A tile from the epoch deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Deck-local id.
    pub id: TileId,

    /// Category.
    pub kind: TileKind,

    /// Positive for resources, negative for hazards, zero otherwise.
    pub value: i32,

    /// Board cell, once placed.
    pub position: Option<Position>,
}

impl Tile {
    fn with_kind(id: TileId, kind: TileKind, value: i32) -> Self {
        Self {
            id,
            kind,
            value,
            position: None,
        }
    }

    /// A resource tile worth `value` (1..=6).
    #[must_use]
    pub fn resource(id: TileId, value: u8) -> Self {
        Self::with_kind(id, TileKind::Resource, i32::from(value))
    }

    /// A hazard tile costing `penalty` (given as a positive magnitude).
    #[must_use]
    pub fn hazard(id: TileId, penalty: u8) -> Self {
        Self::with_kind(id, TileKind::Hazard, -i32::from(penalty))
    }

    /// A mountain.
    #[must_use]
    pub fn mountain(id: TileId) -> Self {
        Self::with_kind(id, TileKind::Mountain, 0)
    }

    /// The dragon.
    #[must_use]
    pub fn dragon(id: TileId) -> Self {
        Self::with_kind(id, TileKind::Dragon, 0)
    }

    /// The goldmine.
    #[must_use]
    pub fn goldmine(id: TileId) -> Self {
        Self::with_kind(id, TileKind::Goldmine, 0)
    }

    /// The wizard.
    #[must_use]
    pub fn wizard(id: TileId) -> Self {
        Self::with_kind(id, TileKind::Wizard, 0)
    }

    /// Is this a mountain?
    #[must_use]
    pub fn is_mountain(&self) -> bool {
        self.kind == TileKind::Mountain
    }
}
