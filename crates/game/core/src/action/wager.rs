use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameState;
use crate::wager::{QuickBet, clamp_wager};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WagerError {
    #[error("wager is locked while the dice are rolling")]
    Locked,

    #[error("wager {wager} is outside 1..={upper}")]
    OutOfRange { wager: u64, upper: u64 },
}

impl GameError for WagerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            WagerError::Locked => ErrorSeverity::Recoverable,
            WagerError::OutOfRange { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            WagerError::Locked => "WAGER_LOCKED",
            WagerError::OutOfRange { .. } => "WAGER_OUT_OF_RANGE",
        }
    }
}

/// Sets the wager to a typed amount, clamped into `[1, balance]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetWagerAction {
    pub requested: i64,
}

impl SetWagerAction {
    pub fn new(requested: i64) -> Self {
        Self { requested }
    }
}

impl ActionTransition for SetWagerAction {
    type Error = WagerError;
    type Result = u64;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_unlocked(state)
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<u64, Self::Error> {
        state.wager = clamp_wager(self.requested, state.balance);
        Ok(state.wager)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_in_range(state)
    }
}

/// Applies one of the quick-set buttons to the current wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuickBetAction {
    pub bet: QuickBet,
}

impl QuickBetAction {
    pub fn new(bet: QuickBet) -> Self {
        Self { bet }
    }
}

impl ActionTransition for QuickBetAction {
    type Error = WagerError;
    type Result = u64;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_unlocked(state)
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<u64, Self::Error> {
        state.wager = self.bet.apply(state.wager, state.balance);
        Ok(state.wager)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        ensure_in_range(state)
    }
}

fn ensure_unlocked(state: &GameState) -> Result<(), WagerError> {
    if state.is_rolling() {
        return Err(WagerError::Locked);
    }
    Ok(())
}

fn ensure_in_range(state: &GameState) -> Result<(), WagerError> {
    let upper = state.balance.max(1);
    if state.wager == 0 || state.wager > upper {
        return Err(WagerError::OutOfRange {
            wager: state.wager,
            upper,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RoundPhase;

    fn run<T: ActionTransition>(action: &T, state: &mut GameState) -> Result<T::Result, T::Error> {
        let env = GameEnv::standard();
        action.pre_validate(state, &env)?;
        let result = action.apply(state, &env)?;
        action.post_validate(state, &env)?;
        Ok(result)
    }

    #[test]
    fn set_wager_clamps_to_balance() {
        let mut state = GameState::default();
        state.balance = 30;

        assert_eq!(run(&SetWagerAction::new(1000), &mut state), Ok(30));
        assert_eq!(run(&SetWagerAction::new(-5), &mut state), Ok(1));
        assert_eq!(state.wager, 1);
    }

    #[test]
    fn wager_is_locked_while_rolling() {
        let mut state = GameState::default();
        state.phase = RoundPhase::Rolling;

        assert_eq!(
            run(&SetWagerAction::new(50), &mut state),
            Err(WagerError::Locked)
        );
        assert_eq!(
            run(&QuickBetAction::new(QuickBet::Max), &mut state),
            Err(WagerError::Locked)
        );
        assert_eq!(state.wager, GameState::default().wager);
    }

    #[test]
    fn quick_bet_uses_current_wager() {
        let mut state = GameState::default();
        assert_eq!(run(&QuickBetAction::new(QuickBet::Quintuple), &mut state), Ok(50));
        assert_eq!(run(&QuickBetAction::new(QuickBet::Double), &mut state), Ok(100));
        assert_eq!(run(&QuickBetAction::new(QuickBet::Half), &mut state), Ok(50));
        assert_eq!(run(&QuickBetAction::new(QuickBet::Min), &mut state), Ok(1));
    }

    #[test]
    fn post_validate_catches_corrupted_wager() {
        let mut state = GameState::default();
        state.wager = 0;
        let result = SetWagerAction::new(5).post_validate(&state, &GameEnv::standard());
        assert!(matches!(result, Err(WagerError::OutOfRange { wager: 0, .. })));
    }
}
