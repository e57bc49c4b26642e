//! Line segmentation and per-segment scoring.
//!
//! A line (row or column) is cut at every mountain. Each maximal run of
//! non-mountain cells is a segment, scored on its own:
//!
//! ```text
//! base  = Σ resources (0 if a dragon is present) + Σ hazards
//! base *= 2 if a goldmine is present
//! score(color) = base × Σ effective rank of that color's castles
//! ```
//!
//! Effective rank is the printed rank plus one when the castle's cell is
//! orthogonally adjacent to the wizard anywhere on the board, so the
//! adjacency check uses the whole board, not just the segment.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Cell, Position, TileKind};
use crate::core::player::Color;

/// Direction of a scored line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

/// Cells of one line, in order.
pub type Line = Vec<(Position, Cell)>;

/// Score contribution of one segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentScore {
    /// Line direction.
    pub axis: Axis,
    /// Row or column index.
    pub index: usize,
    /// Positions covered by the segment.
    pub cells: Vec<Position>,
    /// Base value after dragon cancellation and goldmine doubling.
    pub base: i64,
    /// Summed effective castle rank per color.
    pub ranks: FxHashMap<Color, i64>,
}

impl SegmentScore {
    /// Score for one color: base × that color's total effective rank.
    #[must_use]
    pub fn score_for(&self, color: Color) -> i64 {
        self.base * self.ranks.get(&color).copied().unwrap_or(0)
    }

    /// Iterate over `(color, score)` for every color with a castle here.
    pub fn scores(&self) -> impl Iterator<Item = (Color, i64)> + '_ {
        self.ranks.iter().map(move |(&color, &rank)| (color, self.base * rank))
    }
}

/// Split a line into segments at mountains. Empty runs are dropped.
#[must_use]
pub fn split_segments(line: &[(Position, Cell)]) -> SmallVec<[&[(Position, Cell)]; 3]> {
    line.split(|(_, cell)| cell.is_tile(TileKind::Mountain))
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Net resource/hazard value of a segment.
#[must_use]
pub fn base_value(segment: &[(Position, Cell)]) -> i64 {
    let contains = |kind| segment.iter().any(|(_, cell)| cell.is_tile(kind));
    let dragon = contains(TileKind::Dragon);

    let base: i64 = segment
        .iter()
        .filter_map(|(_, cell)| cell.tile())
        .map(|tile| match tile.kind {
            TileKind::Resource if !dragon => i64::from(tile.value),
            TileKind::Hazard => i64::from(tile.value),
            _ => 0,
        })
        .sum();

    if contains(TileKind::Goldmine) {
        base * 2
    } else {
        base
    }
}

/// Castle rank plus the wizard bonus.
#[must_use]
pub fn effective_rank(board: &Board, pos: Position, rank: u8) -> i64 {
    let bonus = i64::from(board.adjacent_to(pos, TileKind::Wizard));
    i64::from(rank) + bonus
}

/// Summed effective rank per color within a segment.
#[must_use]
pub fn castle_ranks(board: &Board, segment: &[(Position, Cell)]) -> FxHashMap<Color, i64> {
    let mut ranks = FxHashMap::default();
    for (pos, cell) in segment {
        if let Some(castle) = cell.castle() {
            *ranks.entry(castle.color).or_insert(0) += effective_rank(board, *pos, castle.rank);
        }
    }
    ranks
}

/// Score every segment of one line.
#[must_use]
pub fn score_line(board: &Board, axis: Axis, index: usize, line: &[(Position, Cell)]) -> Vec<SegmentScore> {
    split_segments(line)
        .into_iter()
        .map(|segment| SegmentScore {
            axis,
            index,
            cells: segment.iter().map(|(pos, _)| *pos).collect(),
            base: base_value(segment),
            ranks: castle_ranks(board, segment),
        })
        .collect()
}
