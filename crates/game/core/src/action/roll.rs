use crate::action::ActionTransition;
use crate::dice::DicePair;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::round::{Resolution, RoundOutcome, resolve_round};
use crate::state::{GameState, HistoryEntry, RoundPhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartRollError {
    #[error("dice are already rolling")]
    AlreadyRolling,

    #[error("balance is empty")]
    Bankrupt,

    #[error("wager {wager} exceeds balance {balance}")]
    InsufficientFunds { wager: u64, balance: u64 },

    #[error("nothing wagered")]
    NothingWagered,

    #[error("round did not enter the rolling phase")]
    PhaseDesync,
}

impl GameError for StartRollError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StartRollError::AlreadyRolling | StartRollError::Bankrupt => {
                ErrorSeverity::Recoverable
            }
            StartRollError::InsufficientFunds { .. } | StartRollError::NothingWagered => {
                ErrorSeverity::Validation
            }
            StartRollError::PhaseDesync => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StartRollError::AlreadyRolling => "ALREADY_ROLLING",
            StartRollError::Bankrupt => "BANKRUPT",
            StartRollError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            StartRollError::NothingWagered => "NOTHING_WAGERED",
            StartRollError::PhaseDesync => "PHASE_DESYNC",
        }
    }
}

/// Moves the round from idle (or a settled round) into the rolling phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartRollAction;

impl ActionTransition for StartRollAction {
    type Error = StartRollError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_rolling() {
            return Err(StartRollError::AlreadyRolling);
        }
        if state.is_bankrupt() {
            return Err(StartRollError::Bankrupt);
        }
        if state.wager > state.balance {
            return Err(StartRollError::InsufficientFunds {
                wager: state.wager,
                balance: state.balance,
            });
        }
        if state.wager == 0 {
            return Err(StartRollError::NothingWagered);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state.phase = RoundPhase::Rolling;
        Ok(())
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_rolling() {
            Ok(())
        } else {
            Err(StartRollError::PhaseDesync)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettleError {
    #[error("no round is rolling")]
    NotRolling,

    #[error("settled phase does not match history")]
    HistoryDesync,

    #[error("snake eyes left {balance} logs on the table")]
    BalanceNotForfeited { balance: u64 },
}

impl GameError for SettleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SettleError::NotRolling => ErrorSeverity::Validation,
            SettleError::HistoryDesync | SettleError::BalanceNotForfeited { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SettleError::NotRolling => "NOT_ROLLING",
            SettleError::HistoryDesync => "HISTORY_DESYNC",
            SettleError::BalanceNotForfeited { .. } => "BALANCE_NOT_FORFEITED",
        }
    }
}

/// Ends the rolling phase with the dice that actually landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettleAction {
    pub player: DicePair,
    pub opponent: DicePair,
}

impl SettleAction {
    pub fn new(player: DicePair, opponent: DicePair) -> Self {
        Self { player, opponent }
    }
}

impl ActionTransition for SettleAction {
    type Error = SettleError;
    type Result = Resolution;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_rolling() {
            Ok(())
        } else {
            Err(SettleError::NotRolling)
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Resolution, Self::Error> {
        let resolution = resolve_round(
            self.player,
            self.opponent,
            state.balance,
            state.wager,
            env.config().critical_multiplier,
        );

        state.balance = resolution.apply_to(state.balance);
        state.streak = resolution.outcome.next_streak(state.streak);
        state.player_dice = self.player;
        state.opponent_dice = self.opponent;
        state.phase = RoundPhase::Settled(resolution.outcome);
        state.rounds_played = state.rounds_played.saturating_add(1);
        state.history.record(HistoryEntry {
            round: state.rounds_played,
            outcome: resolution.outcome,
            balance_delta: resolution.balance_delta,
        });

        Ok(resolution)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let latest = state.history.latest().map(|entry| entry.outcome);
        if state.phase.outcome().is_none() || latest != state.phase.outcome() {
            return Err(SettleError::HistoryDesync);
        }
        if latest == Some(RoundOutcome::CriticalLose) && state.balance != 0 {
            return Err(SettleError::BalanceNotForfeited {
                balance: state.balance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: u8, b: u8) -> DicePair {
        DicePair::from_faces(a, b).unwrap()
    }

    fn rolling_state(balance: u64, wager: u64) -> GameState {
        let mut state = GameState::default();
        state.balance = balance;
        state.wager = wager;
        state.phase = RoundPhase::Rolling;
        state
    }

    fn settle(state: &mut GameState, player: DicePair, opponent: DicePair) -> Resolution {
        let env = GameEnv::standard();
        let action = SettleAction::new(player, opponent);
        action.pre_validate(state, &env).unwrap();
        let resolution = action.apply(state, &env).unwrap();
        action.post_validate(state, &env).unwrap();
        resolution
    }

    #[test]
    fn start_roll_checks_in_order() {
        let env = GameEnv::standard();

        let mut state = GameState::default();
        state.phase = RoundPhase::Rolling;
        assert_eq!(
            StartRollAction.pre_validate(&state, &env),
            Err(StartRollError::AlreadyRolling)
        );

        let mut state = GameState::default();
        state.balance = 0;
        assert_eq!(
            StartRollAction.pre_validate(&state, &env),
            Err(StartRollError::Bankrupt)
        );

        let mut state = GameState::default();
        state.balance = 5;
        assert_eq!(
            StartRollAction.pre_validate(&state, &env),
            Err(StartRollError::InsufficientFunds {
                wager: 10,
                balance: 5
            })
        );

        let mut state = GameState::default();
        state.wager = 0;
        assert_eq!(
            StartRollAction.pre_validate(&state, &env),
            Err(StartRollError::NothingWagered)
        );
    }

    #[test]
    fn settled_round_accepts_a_new_roll() {
        let env = GameEnv::standard();
        let mut state = GameState::default();
        state.phase = RoundPhase::Settled(RoundOutcome::Tie);

        StartRollAction.pre_validate(&state, &env).unwrap();
        StartRollAction.apply(&mut state, &env).unwrap();
        StartRollAction.post_validate(&state, &env).unwrap();
        assert!(state.is_rolling());
    }

    #[test]
    fn boxcars_example() {
        let mut state = rolling_state(100, 20);
        let resolution = settle(&mut state, pair(6, 6), pair(3, 2));

        assert_eq!(resolution.outcome, RoundOutcome::CriticalWin);
        assert_eq!(state.balance, 200);
        assert_eq!(state.streak, 1);
        assert_eq!(state.phase, RoundPhase::Settled(RoundOutcome::CriticalWin));
        assert_eq!(state.player_dice, pair(6, 6));
        assert_eq!(state.opponent_dice, pair(3, 2));
    }

    #[test]
    fn snake_eyes_example() {
        let mut state = rolling_state(50, 50);
        state.streak = 4;
        let resolution = settle(&mut state, pair(1, 1), pair(6, 5));

        assert_eq!(resolution.outcome, RoundOutcome::CriticalLose);
        assert_eq!(resolution.balance_delta, -50);
        assert_eq!(state.balance, 0);
        assert_eq!(state.streak, 0);
    }

    #[test]
    fn tie_keeps_streak_and_balance() {
        let mut state = rolling_state(80, 10);
        state.streak = 2;
        let resolution = settle(&mut state, pair(3, 4), pair(5, 2));

        assert_eq!(resolution.outcome, RoundOutcome::Tie);
        assert_eq!(state.balance, 80);
        assert_eq!(state.streak, 2);
    }

    #[test]
    fn history_records_newest_first() {
        let mut state = rolling_state(100, 10);
        settle(&mut state, pair(5, 5), pair(1, 2));
        state.phase = RoundPhase::Rolling;
        settle(&mut state, pair(1, 2), pair(5, 5));

        let entries: Vec<_> = state.history.iter().map(|e| (e.round, e.outcome)).collect();
        assert_eq!(
            entries,
            vec![(2, RoundOutcome::Lose), (1, RoundOutcome::Win)]
        );
        assert_eq!(state.history.latest().map(|e| e.balance_delta), Some(-10));
    }

    #[test]
    fn settle_requires_rolling_phase() {
        let state = GameState::default();
        let action = SettleAction::new(pair(2, 2), pair(3, 3));
        assert_eq!(
            action.pre_validate(&state, &GameEnv::standard()),
            Err(SettleError::NotRolling)
        );
    }
}
