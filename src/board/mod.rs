//! Board grid and the pieces placed on it.
//!
//! - `Board`: fixed 5×6 grid of `Cell`s
//! - `Cell`: empty, castle, or tile
//! - `Castle`, `Tile`, `TileKind`: the pieces

pub mod grid;
pub mod piece;

pub use grid::{Board, Cell, Position};
pub use piece::{Castle, Tile, TileKind, MAX_RANK, MIN_RANK};
