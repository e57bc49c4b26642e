//! Action selection policies for automated players.

use crate::core::action::Action;
use crate::core::rng::GameRng;
use crate::core::state::GameState;

/// Picks one action from the legal set.
pub trait Policy {
    /// Choose an action. `legal` is never empty while the match is running;
    /// returning `None` stops the playout.
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Option<Action>;
}

/// Uniformly random choice among legal actions.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a random policy with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a random policy drawing from an existing stream, typically a
    /// fork of a match-level RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, legal: &[Action]) -> Option<Action> {
        self.rng.choose(legal).copied()
    }
}

/// Always takes the first legal action. Deterministic; handy in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalPolicy;

impl Policy for FirstLegalPolicy {
    fn choose(&mut self, _state: &GameState, legal: &[Action]) -> Option<Action> {
        legal.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MatchConfig;

    #[test]
    fn test_random_policy_picks_from_legal() {
        let state = GameState::new(&MatchConfig::seated(1, 2)).unwrap();
        let legal = vec![Action::DrawTile, Action::Pass];
        let mut policy = RandomPolicy::new(3);

        for _ in 0..20 {
            let chosen = policy.choose(&state, &legal).unwrap();
            assert!(legal.contains(&chosen));
        }
        assert_eq!(policy.choose(&state, &[]), None);
    }

    #[test]
    fn test_first_legal_policy() {
        let state = GameState::new(&MatchConfig::seated(1, 2)).unwrap();
        let mut policy = FirstLegalPolicy;

        assert_eq!(policy.choose(&state, &[Action::Pass, Action::DrawTile]), Some(Action::Pass));
        assert_eq!(policy.choose(&state, &[]), None);
    }
}
