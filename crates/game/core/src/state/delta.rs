use bitflags::bitflags;

use super::GameState;
use crate::action::Action;

bitflags! {
    /// Tracks which fields of [`GameState`] changed during a state transition.
    ///
    /// Frontends use this to redraw only the panels that changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateFields: u8 {
        const BALANCE = 1 << 0;
        const WAGER   = 1 << 1;
        const STREAK  = 1 << 2;
        const PHASE   = 1 << 3;
        const DICE    = 1 << 4;
        const HISTORY = 1 << 5;
    }
}

/// Summary of what an executed action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    pub action: Action,
    pub fields: StateFields,
    pub balance_before: u64,
    pub balance_after: u64,
}

impl StateDelta {
    /// Compares two states field by field.
    pub fn from_states(action: Action, before: &GameState, after: &GameState) -> Self {
        let mut fields = StateFields::empty();
        fields.set(StateFields::BALANCE, before.balance != after.balance);
        fields.set(StateFields::WAGER, before.wager != after.wager);
        fields.set(StateFields::STREAK, before.streak != after.streak);
        fields.set(StateFields::PHASE, before.phase != after.phase);
        fields.set(
            StateFields::DICE,
            before.player_dice != after.player_dice || before.opponent_dice != after.opponent_dice,
        );
        fields.set(StateFields::HISTORY, before.history != after.history);

        Self {
            action,
            fields,
            balance_before: before.balance,
            balance_after: after.balance,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn touches(&self, fields: StateFields) -> bool {
        self.fields.intersects(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wager::QuickBet;

    #[test]
    fn detects_changed_fields() {
        let before = GameState::default();
        let mut after = before.clone();
        after.wager = 50;

        let delta = StateDelta::from_states(Action::quick_bet(QuickBet::Quintuple), &before, &after);
        assert_eq!(delta.fields, StateFields::WAGER);
        assert!(delta.touches(StateFields::WAGER | StateFields::BALANCE));
        assert!(!delta.touches(StateFields::HISTORY));
    }

    #[test]
    fn identical_states_yield_empty_delta() {
        let state = GameState::default();
        let delta = StateDelta::from_states(Action::set_wager(10), &state, &state);
        assert!(delta.is_empty());
        assert_eq!(delta.balance_before, delta.balance_after);
    }
}
