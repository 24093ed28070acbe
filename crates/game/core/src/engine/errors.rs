//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, RefillAction, SetWagerAction, SettleAction, StartRollAction,
};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: core::fmt::Display> core::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: core::fmt::Display + core::fmt::Debug> core::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
///
/// Both wager actions share [`crate::WagerError`], so they share a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("wager action failed: {0}")]
    Wager(TransitionPhaseError<<SetWagerAction as ActionTransition>::Error>),

    #[error("start roll action failed: {0}")]
    StartRoll(TransitionPhaseError<<StartRollAction as ActionTransition>::Error>),

    #[error("settle action failed: {0}")]
    Settle(TransitionPhaseError<<SettleAction as ActionTransition>::Error>),

    #[error("refill action failed: {0}")]
    Refill(TransitionPhaseError<<RefillAction as ActionTransition>::Error>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Wager(e) => e.phase,
            ExecuteError::StartRoll(e) => e.phase,
            ExecuteError::Settle(e) => e.phase,
            ExecuteError::Refill(e) => e.phase,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Wager(e) => e.error.severity(),
            ExecuteError::StartRoll(e) => e.error.severity(),
            ExecuteError::Settle(e) => e.error.severity(),
            ExecuteError::Refill(e) => e.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Wager(e) => e.error.error_code(),
            ExecuteError::StartRoll(e) => e.error.error_code(),
            ExecuteError::Settle(e) => e.error.error_code(),
            ExecuteError::Refill(e) => e.error.error_code(),
        }
    }
}
