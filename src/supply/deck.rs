//! The 23-tile epoch deck.

use crate::board::Tile;
use crate::core::entity::TileId;
use crate::core::rng::GameRng;

/// Tiles in a full deck.
pub const DECK_SIZE: usize = 23;

/// Build the deck in its fixed, unshuffled order.
///
/// 12 resources (two each of 1..=6), 6 hazards (one each of -1..=-6),
/// 2 mountains, then one dragon, goldmine and wizard. Ids follow this order.
#[must_use]
pub fn build_deck() -> Vec<Tile> {
    let mut next = 0u8;
    let mut id = || {
        let tile_id = TileId(next);
        next += 1;
        tile_id
    };

    let mut deck = Vec::with_capacity(DECK_SIZE);
    for value in 1..=6 {
        deck.push(Tile::resource(id(), value));
        deck.push(Tile::resource(id(), value));
    }
    for penalty in 1..=6 {
        deck.push(Tile::hazard(id(), penalty));
    }
    deck.push(Tile::mountain(id()));
    deck.push(Tile::mountain(id()));
    deck.push(Tile::dragon(id()));
    deck.push(Tile::goldmine(id()));
    deck.push(Tile::wizard(id()));
    deck
}

/// Build a deck and shuffle it.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Tile> {
    let mut deck = build_deck();
    rng.shuffle(&mut deck);
    deck
}
