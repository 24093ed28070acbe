//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player's purse,
//! the round lifecycle, and the recent-round history. Runtime layers clone or
//! query this state but mutate it exclusively through the engine.
mod delta;
mod history;

pub use delta::{StateDelta, StateFields};
pub use history::{History, HistoryEntry};

use crate::config::GameConfig;
use crate::dice::DicePair;
use crate::round::RoundOutcome;

/// Lifecycle of a round.
///
/// `Settled` is informational only: it drives feedback and accepts the next
/// roll immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundPhase {
    #[default]
    Idle,
    Rolling,
    Settled(RoundOutcome),
}

impl RoundPhase {
    pub const fn is_rolling(self) -> bool {
        matches!(self, RoundPhase::Rolling)
    }

    pub const fn outcome(self) -> Option<RoundOutcome> {
        match self {
            RoundPhase::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundPhase::Idle => "IDLE",
            RoundPhase::Rolling => "ROLLING",
            RoundPhase::Settled(outcome) => outcome.into(),
        }
    }
}

impl core::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic dice.
    ///
    /// Set once at session start and never modified.
    /// Combined with `nonce` to generate unique seeds for each roll.
    pub game_seed: u64,

    /// Number of successfully executed actions.
    pub nonce: u64,

    /// Player's logs. Never negative.
    pub balance: u64,

    /// Amount at risk next round. Always at least 1.
    pub wager: u64,

    /// Consecutive rounds without a loss.
    pub streak: u32,

    pub phase: RoundPhase,

    /// Dice on the table after the last settled round.
    pub player_dice: DicePair,
    pub opponent_dice: DicePair,

    /// Most recent settled rounds, newest first.
    pub history: History,

    /// Settled rounds since session start; survives refills so round ids stay unique.
    pub(crate) rounds_played: u64,
}

impl GameState {
    /// Creates a fresh session with the configured starting purse.
    pub fn new(config: &GameConfig, game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            balance: config.opening_balance(),
            wager: config.opening_wager(),
            streak: 0,
            phase: RoundPhase::Idle,
            player_dice: DicePair::default(),
            opponent_dice: DicePair::default(),
            history: History::default(),
            rounds_played: 0,
        }
    }

    pub fn is_rolling(&self) -> bool {
        self.phase.is_rolling()
    }

    /// No logs left; only a refill gets the player back in.
    pub fn is_bankrupt(&self) -> bool {
        self.balance == 0
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Win shown next to the wager field for an ordinary win.
    pub fn potential_win(&self) -> u64 {
        self.wager
    }

    /// Win shown next to the wager field for boxcars.
    pub fn boxcars_win(&self, config: &GameConfig) -> u64 {
        self.wager.saturating_mul(config.critical_multiplier)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::DEFAULT, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_uses_config() {
        let config = GameConfig::default()
            .with_starting_balance(250)
            .with_default_wager(0);
        let state = GameState::new(&config, 7);

        assert_eq!(state.balance, 250);
        assert_eq!(state.wager, 1);
        assert_eq!(state.phase, RoundPhase::Idle);
        assert!(state.history.is_empty());
        assert_eq!(state.game_seed, 7);
    }

    #[test]
    fn phase_labels() {
        assert_eq!(RoundPhase::Idle.to_string(), "IDLE");
        assert_eq!(RoundPhase::Rolling.to_string(), "ROLLING");
        assert_eq!(
            RoundPhase::Settled(RoundOutcome::CriticalLose).to_string(),
            "CRITICAL_LOSE"
        );
    }
}
