//! Full-match playouts: engine and epoch controller driven by a policy.

use tracing::debug;

use super::policy::Policy;
use crate::core::config::MatchConfig;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::epoch::EpochController;
use crate::rules::TurnEngine;

/// Limits for a playout.
#[derive(Clone, Copy, Debug)]
pub struct PlayoutConfig {
    /// Stop after this many player actions even if the match is unfinished.
    pub max_actions: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self { max_actions: 10_000 }
    }
}

impl PlayoutConfig {
    /// Set the action limit.
    #[must_use]
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }
}

/// Result of a playout.
#[derive(Clone, Debug)]
pub struct PlayoutReport {
    /// Last snapshot reached.
    pub final_state: GameState,
    /// Player actions applied.
    pub actions: usize,
}

impl PlayoutReport {
    /// Winner, if the match finished.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.final_state.winner()
    }

    /// Final gold per seat, in seat order.
    #[must_use]
    pub fn gold(&self) -> Vec<(PlayerId, u32)> {
        self.final_state.players.iter().map(|p| (p.id.clone(), p.gold)).collect()
    }
}

/// Play a match from `config` to the end, settling each epoch as soon as
/// it terminates.
pub fn play_match<P: Policy>(
    config: &MatchConfig,
    policy: &mut P,
    limits: PlayoutConfig,
) -> Result<PlayoutReport, GameError> {
    let state = GameState::new(config)?;
    play_from(state, policy, limits)
}

/// Continue a playout from an existing snapshot.
pub fn play_from<P: Policy>(
    mut state: GameState,
    policy: &mut P,
    limits: PlayoutConfig,
) -> Result<PlayoutReport, GameError> {
    let engine = TurnEngine::new();
    let controller = EpochController::new();
    let mut actions = 0;

    while !state.is_finished() && actions < limits.max_actions {
        if let Some(next) = controller.settle(&state).into_state() {
            state = next;
            continue;
        }

        let actor = state.current_player().id.clone();
        let legal = engine.legal_actions(&state, &actor);
        let Some(action) = policy.choose(&state, &legal) else {
            debug!(player = %actor, "policy declined to act");
            break;
        };
        state = engine.apply(&state, &actor, action)?;
        actions += 1;
    }

    Ok(PlayoutReport {
        final_state: state,
        actions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EPOCH_COUNT;
    use crate::playout::{FirstLegalPolicy, RandomPolicy};

    #[test]
    fn test_random_playout_finishes() {
        let report = play_match(&MatchConfig::seated(4, 3), &mut RandomPolicy::new(4), PlayoutConfig::default())
            .unwrap();

        assert!(report.final_state.is_finished());
        assert!(report.winner().is_some());
        assert_eq!(report.final_state.scores_by_epoch.len(), usize::from(EPOCH_COUNT));
        assert_eq!(report.gold().len(), 3);
    }

    #[test]
    fn test_first_legal_playout_finishes() {
        let report =
            play_match(&MatchConfig::seated(1, 2), &mut FirstLegalPolicy, PlayoutConfig::default()).unwrap();

        assert!(report.final_state.is_finished());
    }

    #[test]
    fn test_action_limit() {
        let limits = PlayoutConfig::default().with_max_actions(5);
        let report = play_match(&MatchConfig::seated(1, 2), &mut RandomPolicy::new(1), limits).unwrap();

        assert_eq!(report.actions, 5);
        assert!(!report.final_state.is_finished());
    }
}
