//! Turn engine: action validation, application, and turn order.
//!
//! `can_act` is shared with the epoch controller, which uses it to detect
//! that no one can make progress.

pub mod engine;

pub use engine::{anyone_can_act, can_act, TurnEngine};
