//! Short-lived banners shown over the table.
//!
//! The runtime decides *what* to say; frontends decide how long to keep it and
//! acknowledge it by id when it expires.

use std::fmt;

use game_core::RoundOutcome;
use serde::{Deserialize, Serialize};

/// Monotonic identifier of a feedback message within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeedbackId(pub u64);

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Colour family of a feedback banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackTone {
    Success,
    Danger,
    /// Boxcars only.
    Jackpot,
    Neutral,
}

/// Why a feedback message was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackKind {
    Round(RoundOutcome),
    InsufficientFunds,
    NothingWagered,
    GameOver,
    Refilled,
}

impl FeedbackKind {
    pub const fn text(self) -> &'static str {
        match self {
            FeedbackKind::Round(RoundOutcome::CriticalLose) => "BOBER BITE!",
            FeedbackKind::Round(RoundOutcome::CriticalWin) => "MEGA BOBER!",
            FeedbackKind::Round(RoundOutcome::Win) => "NICE BEAVER!",
            FeedbackKind::Round(RoundOutcome::Lose) => "O KURWA...",
            FeedbackKind::Round(RoundOutcome::Tie) => "JAKIE BYDLE!",
            FeedbackKind::InsufficientFunds => "TOO POOR!",
            FeedbackKind::NothingWagered => "BET SOMETHING!",
            FeedbackKind::GameOver => "GAME OVER!",
            FeedbackKind::Refilled => "REFILLED!",
        }
    }

    pub const fn tone(self) -> FeedbackTone {
        match self {
            FeedbackKind::Round(RoundOutcome::CriticalWin) => FeedbackTone::Jackpot,
            FeedbackKind::Round(RoundOutcome::Win) | FeedbackKind::Refilled => {
                FeedbackTone::Success
            }
            FeedbackKind::Round(RoundOutcome::Tie) => FeedbackTone::Neutral,
            FeedbackKind::Round(RoundOutcome::Lose | RoundOutcome::CriticalLose)
            | FeedbackKind::InsufficientFunds
            | FeedbackKind::NothingWagered
            | FeedbackKind::GameOver => FeedbackTone::Danger,
        }
    }
}

/// A feedback message currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn text(&self) -> &'static str {
        self.kind.text()
    }

    pub fn tone(&self) -> FeedbackTone {
        self.kind.tone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_feedback_matches_outcome() {
        let cases = [
            (RoundOutcome::CriticalLose, "BOBER BITE!", FeedbackTone::Danger),
            (RoundOutcome::CriticalWin, "MEGA BOBER!", FeedbackTone::Jackpot),
            (RoundOutcome::Win, "NICE BEAVER!", FeedbackTone::Success),
            (RoundOutcome::Lose, "O KURWA...", FeedbackTone::Danger),
            (RoundOutcome::Tie, "JAKIE BYDLE!", FeedbackTone::Neutral),
        ];
        for (outcome, text, tone) in cases {
            let kind = FeedbackKind::Round(outcome);
            assert_eq!((kind.text(), kind.tone()), (text, tone), "{outcome}");
        }
    }

    #[test]
    fn refill_is_good_news() {
        assert_eq!(FeedbackKind::Refilled.tone(), FeedbackTone::Success);
        assert_eq!(FeedbackKind::GameOver.tone(), FeedbackTone::Danger);
    }
}
