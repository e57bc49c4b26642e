//! Per-player castle sets.
//!
//! | Players | Rank 1 | Rank 2 | Rank 3 | Rank 4 | Total |
//! |---------|--------|--------|--------|--------|-------|
//! | 2       | 4      | 3      | 2      | 1      | 10    |
//! | 3       | 3      | 3      | 2      | 1      | 9     |
//! | 4       | 2      | 3      | 2      | 1      | 8     |

use crate::board::Castle;
use crate::core::entity::CastleIdAllocator;
use crate::core::player::Color;

/// Castles of ranks 2, 3 and 4, independent of player count.
const UPPER_RANKS: [(u8, usize); 3] = [(2, 3), (3, 2), (4, 1)];

/// Rank-1 castles per player.
///
/// Rosters that shrink below two players mid-match keep the two-player count.
#[must_use]
pub fn rank_one_count(player_count: usize) -> usize {
    match player_count {
        0..=2 => 4,
        3 => 3,
        _ => 2,
    }
}

/// Total castles per player per epoch.
#[must_use]
pub fn castle_allotment(player_count: usize) -> usize {
    rank_one_count(player_count) + UPPER_RANKS.iter().map(|&(_, n)| n).sum::<usize>()
}

/// A fresh set of rank-1 castles.
pub fn rank_one_castles(color: Color, player_count: usize, ids: &mut CastleIdAllocator) -> Vec<Castle> {
    (0..rank_one_count(player_count))
        .map(|_| Castle::new(ids.alloc(), 1, color))
        .collect()
}

/// A player's full castle set, lowest rank first.
pub fn build_castles(color: Color, player_count: usize, ids: &mut CastleIdAllocator) -> Vec<Castle> {
    let mut castles = rank_one_castles(color, player_count, ids);
    for &(rank, count) in &UPPER_RANKS {
        castles.extend((0..count).map(|_| Castle::new(ids.alloc(), rank, color)));
    }
    castles
}
