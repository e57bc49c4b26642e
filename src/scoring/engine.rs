//! Board-wide epoch scoring.
//!
//! Every row and every column is scored independently and the results are
//! summed per player. A cell therefore counts once for its row and once for
//! its column; that double count is the scoring rule.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::segment::{score_line, Axis, SegmentScore};
use crate::board::Board;
use crate::core::config::{BOARD_COLS, BOARD_ROWS};
use crate::core::player::Color;
use crate::core::state::{EpochScores, GameState};

/// Computes epoch scores from a board.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Create a scoring engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every segment of every row, then every column.
    #[must_use]
    pub fn breakdown(&self, board: &Board) -> Vec<SegmentScore> {
        let rows = (0..BOARD_ROWS).flat_map(|row| score_line(board, Axis::Row, row, &board.row(row)));
        let cols = (0..BOARD_COLS).flat_map(|col| score_line(board, Axis::Column, col, &board.column(col)));
        rows.chain(cols).collect()
    }

    /// Total score per castle color present on the board.
    #[must_use]
    pub fn score_colors(&self, board: &Board) -> FxHashMap<Color, i64> {
        let mut totals = FxHashMap::default();
        for segment in self.breakdown(board) {
            for (color, score) in segment.scores() {
                *totals.entry(color).or_insert(0) += score;
            }
        }
        totals
    }

    /// Epoch score for every seated player. Players with no castles on the
    /// board score zero.
    #[must_use]
    pub fn score(&self, state: &GameState) -> EpochScores {
        let by_color = self.score_colors(&state.board);
        let scores: EpochScores = state
            .players
            .iter()
            .map(|player| (player.id.clone(), by_color.get(&player.color).copied().unwrap_or(0)))
            .collect();

        debug!(epoch = state.epoch, ?scores, "scored board");
        scores
    }
}
