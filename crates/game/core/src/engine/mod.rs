//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! orchestrates the transition phases and surfaces rich error information
//! for the runtime. Wager edits, rolls, settlements and refills all flow
//! through the same [`GameEngine::execute`] pipeline.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::Action;
use crate::env::GameEnv;
use crate::round::Resolution;
use crate::state::{GameState, StateDelta};

/// Action-specific value returned alongside the delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// The wager after clamping.
    WagerSet(u64),
    RollStarted,
    Settled(Resolution),
    Refilled,
}

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Which fields changed.
    pub delta: StateDelta,

    pub result: ActionResult,
}

/// Game engine that applies actions to a borrowed [`GameState`].
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// A failed phase may leave the state partially mutated; callers that need
/// atomicity execute against a copy and commit it on success.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action and bumps the nonce on success.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        let result = transition::execute_transition(action, self.state, &env)?;

        self.state.nonce += 1;

        let delta = StateDelta::from_states(*action, &before, self.state);
        Ok(ExecutionOutcome { delta, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DicePair;
    use crate::error::GameError;
    use crate::round::RoundOutcome;
    use crate::state::{RoundPhase, StateFields};
    use crate::wager::QuickBet;
    use crate::{GameConfig, PcgRng, StartRollError};

    fn pair(a: u8, b: u8) -> DicePair {
        DicePair::from_faces(a, b).unwrap()
    }

    #[test]
    fn full_round_flows_through_engine() {
        let mut state = GameState::default();
        let env = GameEnv::standard();

        let mut engine = GameEngine::new(&mut state);
        let outcome = engine.execute(env, &Action::quick_bet(QuickBet::Double)).unwrap();
        assert_eq!(outcome.result, ActionResult::WagerSet(20));

        let outcome = engine.execute(env, &Action::start_roll()).unwrap();
        assert_eq!(outcome.result, ActionResult::RollStarted);
        assert_eq!(outcome.delta.fields, StateFields::PHASE);

        let outcome = engine
            .execute(env, &Action::settle(pair(6, 6), pair(3, 2)))
            .unwrap();
        match outcome.result {
            ActionResult::Settled(resolution) => {
                assert_eq!(resolution.outcome, RoundOutcome::CriticalWin);
                assert_eq!(resolution.balance_delta, 100);
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(outcome.delta.balance_before, 100);
        assert_eq!(outcome.delta.balance_after, 200);
        assert!(outcome.delta.touches(StateFields::HISTORY | StateFields::DICE));

        assert_eq!(state.nonce, 3);
        assert_eq!(state.phase, RoundPhase::Settled(RoundOutcome::CriticalWin));
    }

    #[test]
    fn rejected_action_keeps_nonce() {
        let mut state = GameState::default();
        state.balance = 5;
        let mut engine = GameEngine::new(&mut state);

        let err = engine
            .execute(GameEnv::standard(), &Action::start_roll())
            .unwrap_err();
        assert_eq!(
            err,
            ExecuteError::StartRoll(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                StartRollError::InsufficientFunds {
                    wager: 10,
                    balance: 5
                },
            ))
        );
        assert_eq!(err.phase(), TransitionPhase::PreValidate);
        assert_eq!(err.error_code(), "INSUFFICIENT_FUNDS");
        assert_eq!(state.nonce, 0);
    }

    #[test]
    fn refill_uses_env_config() {
        let config = GameConfig::default()
            .with_starting_balance(40)
            .with_default_wager(4);
        let env = GameEnv::new(&config, &PcgRng);
        let mut state = GameState::new(&config, 1);
        state.balance = 0;

        let outcome = GameEngine::new(&mut state)
            .execute(env, &Action::refill())
            .unwrap();
        assert_eq!(outcome.result, ActionResult::Refilled);
        assert_eq!((state.balance, state.wager), (40, 4));
    }
}
