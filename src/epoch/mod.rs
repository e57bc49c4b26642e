//! Epoch controller: detects the end of an epoch, commits gold, and either
//! deals the next epoch or finishes the match.

pub mod controller;

pub use controller::{EpochController, Settlement};
