//! Identifiers for the physical pieces of the game.
//!
//! ## ID Layout
//!
//! - `CastleId`: allocated from a per-match counter stored in `GameState`.
//!   Castles survive across epochs, so their ids must never repeat within
//!   a match.
//! - `TileId`: deck-local. A fresh deck is built every epoch and tiles never
//!   outlive their epoch, so ids `0..DECK_SIZE` are reused each epoch.
//!
//! ```
//! use kingdoms::core::{CastleId, TileId};
//!
//! let castle = CastleId::new(7);
//! assert_eq!(castle.raw(), 7);
//!
//! let tile = TileId::new(22);
//! assert_eq!(format!("{}", tile), "Tile(22)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a castle within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CastleId(pub u32);

impl CastleId {
    /// Create a new castle ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CastleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Castle({})", self.0)
    }
}

/// Identifier for a tile within the current epoch's deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Sequential allocator for castle ids.
///
/// Serialized as part of the game state so that ids stay unique after a
/// snapshot round-trips through a store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleIdAllocator {
    next: u32,
}

impl CastleIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next castle id.
    pub fn alloc(&mut self) -> CastleId {
        let id = CastleId(self.next);
        self.next += 1;
        id
    }

    /// Peek at the id the next call to `alloc` would return.
    #[must_use]
    pub fn peek(&self) -> CastleId {
        CastleId(self.next)
    }
}
