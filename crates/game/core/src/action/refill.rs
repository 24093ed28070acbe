use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, RoundPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefillError {
    #[error("refill requires an empty balance (have {balance})")]
    NotBankrupt { balance: u64 },
    #[error("refill left an unplayable purse (balance {balance}, wager {wager})")]
    Unplayable { balance: u64, wager: u64 },
}

impl GameError for RefillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RefillError::NotBankrupt { .. } => ErrorSeverity::Validation,
            RefillError::Unplayable { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RefillError::NotBankrupt { .. } => "NOT_BANKRUPT",
            RefillError::Unplayable { .. } => "UNPLAYABLE_REFILL",
        }
    }
}

/// Restarts a bankrupt session with the starting purse.
///
/// Resets balance and wager from [`crate::GameConfig`] and clears history and streak.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefillAction;

impl ActionTransition for RefillAction {
    type Error = RefillError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_bankrupt() {
            Ok(())
        } else {
            Err(RefillError::NotBankrupt {
                balance: state.balance,
            })
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config();
        state.balance = config.opening_balance();
        state.wager = config.opening_wager();
        state.streak = 0;
        state.history.clear();
        state.phase = RoundPhase::Idle;
        Ok(())
    }

    /// The refilled wager must be rollable straight away.
    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.balance > 0 && (1..=state.balance).contains(&state.wager) {
            Ok(())
        } else {
            Err(RefillError::Unplayable {
                balance: state.balance,
                wager: state.wager,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::round::RoundOutcome;
    use crate::state::HistoryEntry;

    #[test]
    fn refill_restores_the_starting_purse() {
        let env = GameEnv::standard();
        let mut state = GameState::default();
        state.balance = 0;
        state.wager = 73;
        state.streak = 3;
        state.phase = RoundPhase::Settled(RoundOutcome::CriticalLose);
        state.history.record(HistoryEntry {
            round: 1,
            outcome: RoundOutcome::CriticalLose,
            balance_delta: -100,
        });

        RefillAction.pre_validate(&state, &env).unwrap();
        RefillAction.apply(&mut state, &env).unwrap();

        assert_eq!(state.balance, 100);
        assert_eq!(state.wager, 10);
        assert_eq!(state.streak, 0);
        assert!(state.history.is_empty());
        assert_eq!(state.phase, RoundPhase::Idle);
    }

    #[test]
    fn refill_never_leaves_an_empty_purse() {
        let config = GameConfig {
            starting_balance: 0,
            default_wager: 25,
            ..GameConfig::DEFAULT
        };
        let env = GameEnv::new(&config, &PcgRng);
        let mut state = GameState::default();
        state.balance = 0;

        RefillAction.apply(&mut state, &env).unwrap();
        RefillAction.post_validate(&state, &env).unwrap();
        assert_eq!(state.balance, 1);
        assert_eq!(state.wager, 1);
    }

    #[test]
    fn unplayable_purse_fails_post_validation() {
        let mut state = GameState::default();
        state.balance = 0;
        let error = RefillAction
            .post_validate(&state, &GameEnv::standard())
            .unwrap_err();
        assert_eq!(error, RefillError::Unplayable { balance: 0, wager: 10 });
        assert!(error.severity().is_internal());
    }

    #[test]
    fn refill_rejected_with_money_left() {
        let state = GameState::default();
        assert_eq!(
            RefillAction.pre_validate(&state, &GameEnv::standard()),
            Err(RefillError::NotBankrupt { balance: 100 })
        );
    }
}
