//! Scoring engine: rows and columns, mountain segments, dragon, goldmine
//! and wizard modifiers.

pub mod engine;
pub mod segment;

pub use engine::ScoringEngine;
pub use segment::{base_value, castle_ranks, effective_rank, score_line, split_segments, Axis, SegmentScore};
