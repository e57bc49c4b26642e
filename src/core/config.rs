//! Match configuration and fixed rules constants.
//!
//! The rules themselves are not configurable: board size, deck composition,
//! castle allotments and epoch count are constants. What a match does
//! configure is its roster (from the lobby) and its RNG seed.
//!
//! ```
//! use kingdoms::core::{Color, MatchConfig};
//!
//! let config = MatchConfig::new(42)
//!     .with_player("p1", "Ann", Color::Red)
//!     .with_player("p2", "Bob", Color::Blue);
//!
//! assert_eq!(config.player_count(), 2);
//! assert!(config.validate().is_ok());
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::player::{Color, PlayerId};

/// Board height.
pub const BOARD_ROWS: usize = 5;

/// Board width.
pub const BOARD_COLS: usize = 6;

/// Number of epochs in a match.
pub const EPOCH_COUNT: u8 = 3;

/// Smallest supported roster.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported roster.
pub const MAX_PLAYERS: usize = 4;

/// One seat as supplied by the lobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Player id.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Castle color.
    pub color: Color,
}

impl RosterEntry {
    /// Create a roster entry.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
        }
    }
}

/// Everything needed to start a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed for deck shuffles across all three epochs.
    pub seed: u64,

    /// Seats in turn order. The first seat is the host.
    pub roster: Vec<RosterEntry>,
}

impl MatchConfig {
    /// Create an empty configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            roster: Vec::new(),
        }
    }

    /// Add a seat to the roster.
    #[must_use]
    pub fn with_player(mut self, id: impl Into<PlayerId>, name: impl Into<String>, color: Color) -> Self {
        self.roster.push(RosterEntry::new(id, name, color));
        self
    }

    /// Replace the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build a roster of `count` placeholder seats (`p1`, `p2`, ...),
    /// colored in `Color::ALL` order.
    #[must_use]
    pub fn seated(seed: u64, count: usize) -> Self {
        Color::ALL
            .iter()
            .take(count)
            .enumerate()
            .fold(Self::new(seed), |config, (i, &color)| {
                config.with_player(format!("p{}", i + 1), format!("Player {}", i + 1), color)
            })
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Check player count and uniqueness of colors and ids.
    pub fn validate(&self) -> Result<(), SetupError> {
        let count = self.roster.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }

        let mut colors = FxHashSet::default();
        let mut ids = FxHashSet::default();
        for entry in &self.roster {
            if !colors.insert(entry.color) {
                return Err(SetupError::DuplicateColor(entry.color));
            }
            if !ids.insert(&entry.id) {
                return Err(SetupError::DuplicatePlayer(entry.id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = MatchConfig::new(1)
            .with_player("a", "Ann", Color::Red)
            .with_player("b", "Bob", Color::Blue)
            .with_seed(9);

        assert_eq!(config.seed, 9);
        assert_eq!(config.player_count(), 2);
        assert_eq!(config.roster[1].id, PlayerId::new("b"));
        assert_eq!(config.roster[1].color, Color::Blue);
    }

    #[test]
    fn test_seated() {
        let config = MatchConfig::seated(3, 4);

        assert_eq!(config.player_count(), 4);
        assert_eq!(config.roster[0].id, PlayerId::new("p1"));
        assert_eq!(config.roster[3].color, Color::Yellow);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_player_count() {
        assert_eq!(MatchConfig::seated(0, 1).validate(), Err(SetupError::PlayerCount(1)));

        let five = MatchConfig::seated(0, 4).with_player("p5", "Extra", Color::Red);
        assert_eq!(five.validate(), Err(SetupError::PlayerCount(5)));
    }

    #[test]
    fn test_validate_duplicate_color() {
        let config = MatchConfig::new(0)
            .with_player("a", "Ann", Color::Red)
            .with_player("b", "Bob", Color::Red);

        assert_eq!(config.validate(), Err(SetupError::DuplicateColor(Color::Red)));
    }

    #[test]
    fn test_validate_duplicate_id() {
        let config = MatchConfig::new(0)
            .with_player("a", "Ann", Color::Red)
            .with_player("a", "Ann again", Color::Green);

        assert_eq!(config.validate(), Err(SetupError::DuplicatePlayer(PlayerId::new("a"))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "seed": 7,
            "roster": [
                { "id": "a", "name": "Ann", "color": "Red" },
                { "id": "b", "name": "Bob", "color": "Green" }
            ]
        }"#;

        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.roster[1].color, Color::Green);
        assert!(config.validate().is_ok());
    }
}
