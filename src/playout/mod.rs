//! Automated playouts for simulation and testing.
//!
//! - `Policy`: picks an action from the legal set
//! - `RandomPolicy`, `FirstLegalPolicy`: built-in policies
//! - `play_match`: runs a whole match through the turn engine and epoch
//!   controller

pub mod policy;
pub mod runner;

pub use policy::{FirstLegalPolicy, Policy, RandomPolicy};
pub use runner::{play_from, play_match, PlayoutConfig, PlayoutReport};
