//! Player-facing and lifecycle actions.
//!
//! Every mutation of [`GameState`] is expressed as an [`Action`] and driven
//! through [`ActionTransition`] by the engine:
//!
//! - `wager`: typed wager edits and quick-set buttons
//! - `roll`: entering the rolling phase and settling it with real dice
//! - `refill`: restarting a bankrupt session

mod refill;
mod roll;
mod transition;
mod wager;

pub use refill::{RefillAction, RefillError};
pub use roll::{SettleAction, SettleError, StartRollAction, StartRollError};
pub use transition::ActionTransition;
pub use wager::{QuickBetAction, SetWagerAction, WagerError};

use crate::dice::DicePair;
use crate::wager::QuickBet;

#[cfg(doc)]
use crate::state::GameState;

/// Every state transition the engine accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    SetWager(SetWagerAction),
    QuickBet(QuickBetAction),
    StartRoll(StartRollAction),
    Settle(SettleAction),
    Refill(RefillAction),
}

impl Action {
    pub fn set_wager(requested: i64) -> Self {
        Self::SetWager(SetWagerAction::new(requested))
    }

    pub fn quick_bet(bet: QuickBet) -> Self {
        Self::QuickBet(QuickBetAction::new(bet))
    }

    pub fn start_roll() -> Self {
        Self::StartRoll(StartRollAction)
    }

    pub fn settle(player: DicePair, opponent: DicePair) -> Self {
        Self::Settle(SettleAction::new(player, opponent))
    }

    pub fn refill() -> Self {
        Self::Refill(RefillAction)
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetWager(_) => ActionKind::SetWager,
            Action::QuickBet(_) => ActionKind::QuickBet,
            Action::StartRoll(_) => ActionKind::StartRoll,
            Action::Settle(_) => ActionKind::Settle,
            Action::Refill(_) => ActionKind::Refill,
        }
    }

    /// Returns the snake_case name of the action, used as a logging key.
    pub fn as_snake_case(&self) -> &'static str {
        self.kind().into()
    }

    /// Wager edits the player makes directly, as opposed to lifecycle steps.
    pub fn is_wager_edit(&self) -> bool {
        matches!(self, Action::SetWager(_) | Action::QuickBet(_))
    }
}

impl From<SetWagerAction> for Action {
    fn from(action: SetWagerAction) -> Self {
        Self::SetWager(action)
    }
}

impl From<QuickBetAction> for Action {
    fn from(action: QuickBetAction) -> Self {
        Self::QuickBet(action)
    }
}

impl From<SettleAction> for Action {
    fn from(action: SettleAction) -> Self {
        Self::Settle(action)
    }
}

/// Discriminant of [`Action`] without its payload.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    SetWager,
    QuickBet,
    StartRoll,
    Settle,
    Refill,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_names_are_snake_case() {
        let names: Vec<&'static str> = ActionKind::iter().map(Into::into).collect();
        assert_eq!(
            names,
            vec!["set_wager", "quick_bet", "start_roll", "settle", "refill"]
        );
        assert_eq!(Action::start_roll().as_snake_case(), "start_roll");
    }

    #[test]
    fn wager_edits_are_flagged() {
        assert!(Action::set_wager(5).is_wager_edit());
        assert!(Action::quick_bet(QuickBet::Max).is_wager_edit());
        assert!(!Action::refill().is_wager_edit());
        assert!(!Action::settle(DicePair::SNAKE_EYES, DicePair::BOXCARS).is_wager_edit());
    }
}
