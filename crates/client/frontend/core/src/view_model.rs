//! View-model snapshot derived from [`game_core::GameState`].
//!
//! The view model is owned by the event loop and updated incrementally as
//! runtime events arrive; see [`crate::ViewModelUpdater`].

use game_core::{DicePair, GameConfig, GameState, HistoryEntry, RoundOutcome, RoundPhase, Side};
use runtime::Feedback;

/// Colour family of a history marker, independent of any toolkit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Boxcars.
    Jackpot,
    Win,
    /// Snake eyes.
    Wipeout,
    Loss,
    Push,
}

impl From<RoundOutcome> for Highlight {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::CriticalWin => Highlight::Jackpot,
            RoundOutcome::Win => Highlight::Win,
            RoundOutcome::CriticalLose => Highlight::Wipeout,
            RoundOutcome::Lose => Highlight::Loss,
            RoundOutcome::Tie => Highlight::Push,
        }
    }
}

/// One entry of the history ribbon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryMarker {
    pub round: u64,
    pub outcome: RoundOutcome,
    pub balance_delta: i64,
    pub highlight: Highlight,
}

impl From<&HistoryEntry> for HistoryMarker {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            round: entry.round,
            outcome: entry.outcome,
            balance_delta: entry.balance_delta,
            highlight: entry.outcome.into(),
        }
    }
}

/// Stateful view model owned by the event loop.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub balance: u64,
    pub wager: u64,
    pub streak: u32,
    pub phase: RoundPhase,

    /// Dice on the table. While rolling these are the latest tumble frame.
    pub player_dice: DicePair,
    pub opponent_dice: DicePair,

    /// Newest first.
    pub history: Vec<HistoryMarker>,

    pub feedback: Option<Feedback>,

    /// `(frame, total_frames)` of the tumble in progress.
    pub tumble: Option<(u32, u32)>,

    pub critical_multiplier: u64,

    /// Last synchronized GameState nonce for sync verification.
    pub last_sync_nonce: u64,
}

impl ViewModel {
    pub fn from_state(state: &GameState, config: &GameConfig) -> Self {
        let mut view_model = Self {
            balance: 0,
            wager: 0,
            streak: 0,
            phase: RoundPhase::Idle,
            player_dice: DicePair::default(),
            opponent_dice: DicePair::default(),
            history: Vec::new(),
            feedback: None,
            tumble: None,
            critical_multiplier: config.critical_multiplier,
            last_sync_nonce: 0,
        };
        view_model.rebuild_from_state(state);
        view_model
    }

    /// Full rebuild of everything the state owns. Feedback and tumble are kept.
    pub fn rebuild_from_state(&mut self, state: &GameState) {
        self.balance = state.balance;
        self.wager = state.wager;
        self.streak = state.streak;
        self.phase = state.phase;
        if !state.is_rolling() {
            self.player_dice = state.player_dice;
            self.opponent_dice = state.opponent_dice;
            self.tumble = None;
        }
        self.history = state.history.iter().map(HistoryMarker::from).collect();
        self.last_sync_nonce = state.nonce;
    }

    /// Check if the view model is synchronized with given GameState.
    pub fn is_synced(&self, state: &GameState) -> bool {
        self.last_sync_nonce == state.nonce
    }

    pub fn is_rolling(&self) -> bool {
        self.phase.is_rolling()
    }

    /// Wager buttons and typing are disabled while the dice tumble.
    pub fn wager_locked(&self) -> bool {
        self.is_rolling()
    }

    /// Payout shown next to the wager for an ordinary win.
    pub fn potential_win(&self) -> u64 {
        self.wager
    }

    /// Payout shown next to the wager for boxcars.
    pub fn boxcars_win(&self) -> u64 {
        self.wager.saturating_mul(self.critical_multiplier)
    }

    /// Streak badge only appears from two wins in a row.
    pub fn show_streak_badge(&self) -> bool {
        self.streak > 1
    }

    /// Bober's face for the current phase.
    pub fn mascot(&self) -> &'static str {
        match self.phase {
            RoundPhase::Idle => "🦫",
            RoundPhase::Rolling => "🫨",
            RoundPhase::Settled(RoundOutcome::Win) => "🤑",
            RoundPhase::Settled(RoundOutcome::CriticalWin) => "🚀",
            RoundPhase::Settled(RoundOutcome::Lose) => "😭",
            RoundPhase::Settled(RoundOutcome::CriticalLose) => "💀",
            RoundPhase::Settled(RoundOutcome::Tie) => "😐",
        }
    }

    /// Side that took the last settled round, if anyone did.
    pub fn round_winner(&self) -> Option<Side> {
        match self.phase.outcome()? {
            outcome if outcome.is_win() => Some(Side::Player),
            outcome if outcome.is_loss() => Some(Side::Opponent),
            _ => None,
        }
    }

    /// Indicator drawn next to a side's dice: ✨ for the player, 😈 for Bober.
    pub fn winner_indicator(&self, side: Side) -> Option<&'static str> {
        match (self.round_winner()?, side) {
            (Side::Player, Side::Player) => Some("✨"),
            (Side::Opponent, Side::Opponent) => Some("😈"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(outcome: RoundOutcome) -> ViewModel {
        let mut state = GameState::default();
        state.phase = RoundPhase::Settled(outcome);
        ViewModel::from_state(&state, &GameConfig::default())
    }

    #[test]
    fn mascot_follows_phase() {
        let mut state = GameState::default();
        let config = GameConfig::default();
        assert_eq!(ViewModel::from_state(&state, &config).mascot(), "🦫");

        state.phase = RoundPhase::Rolling;
        assert_eq!(ViewModel::from_state(&state, &config).mascot(), "🫨");

        assert_eq!(settled(RoundOutcome::CriticalWin).mascot(), "🚀");
        assert_eq!(settled(RoundOutcome::CriticalLose).mascot(), "💀");
        assert_eq!(settled(RoundOutcome::Tie).mascot(), "😐");
    }

    #[test]
    fn winner_indicators() {
        let win = settled(RoundOutcome::Win);
        assert_eq!(win.winner_indicator(Side::Player), Some("✨"));
        assert_eq!(win.winner_indicator(Side::Opponent), None);

        let wipeout = settled(RoundOutcome::CriticalLose);
        assert_eq!(wipeout.winner_indicator(Side::Opponent), Some("😈"));

        let tie = settled(RoundOutcome::Tie);
        assert_eq!(tie.round_winner(), None);
    }

    #[test]
    fn potential_wins_and_streak_badge() {
        let mut state = GameState::default();
        state.wager = 20;
        state.streak = 1;
        let mut view_model = ViewModel::from_state(&state, &GameConfig::default());

        assert_eq!(view_model.potential_win(), 20);
        assert_eq!(view_model.boxcars_win(), 100);
        assert!(!view_model.show_streak_badge());

        view_model.streak = 2;
        assert!(view_model.show_streak_badge());
    }

    #[test]
    fn history_markers_carry_highlight() {
        let mut state = GameState::default();
        state.history.record(HistoryEntry {
            round: 1,
            outcome: RoundOutcome::CriticalLose,
            balance_delta: -100,
        });
        let view_model = ViewModel::from_state(&state, &GameConfig::default());
        assert_eq!(view_model.history[0].highlight, Highlight::Wipeout);
    }
}
