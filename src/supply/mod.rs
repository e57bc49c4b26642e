//! Supply manager: tile deck and castle sets.
//!
//! A fresh deck is built and shuffled at the start of every epoch; the
//! shuffled order is the draw order for the whole epoch. Each player is
//! dealt one starting tile off the front before play begins.

pub mod castles;
pub mod deck;

use im::Vector;

use crate::board::Tile;
use crate::core::rng::GameRng;

pub use castles::{build_castles, castle_allotment, rank_one_castles, rank_one_count};
pub use deck::{build_deck, shuffled_deck, DECK_SIZE};

/// Tiles for one epoch after dealing.
#[derive(Clone, Debug)]
pub struct EpochDeal {
    /// One starting tile per player, in seat order.
    pub starting_tiles: Vec<Tile>,
    /// Remaining draw pile.
    pub supply: Vector<Tile>,
}

/// Shuffle a fresh deck and deal one starting tile per player.
pub fn deal_epoch(rng: &mut GameRng, player_count: usize) -> EpochDeal {
    let mut supply: Vector<Tile> = shuffled_deck(rng).into_iter().collect();
    let starting_tiles = (0..player_count).filter_map(|_| supply.pop_front()).collect();
    EpochDeal { starting_tiles, supply }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_epoch() {
        let mut rng = GameRng::new(11);
        let deal = deal_epoch(&mut rng, 4);

        assert_eq!(deal.starting_tiles.len(), 4);
        assert_eq!(deal.supply.len(), DECK_SIZE - 4);

        let mut all: Vec<_> = deal.starting_tiles.iter().chain(deal.supply.iter()).map(|t| t.id).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_takes_from_front() {
        let mut rng_a = GameRng::new(5);
        let mut rng_b = GameRng::new(5);

        let deck = shuffled_deck(&mut rng_a);
        let deal = deal_epoch(&mut rng_b, 2);

        assert_eq!(deal.starting_tiles, deck[..2].to_vec());
        assert_eq!(deal.supply.front(), deck.get(2));
    }
}
