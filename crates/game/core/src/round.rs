//! Round resolution: turns two dice pairs into an outcome and a balance delta.
//!
//! Only the player's own doubles are special. Bober rolling snake eyes or
//! boxcars is just a low or high sum; the asymmetry is the house edge.
use crate::dice::DicePair;
use crate::wager::saturating_i64;

/// Classification of a settled round.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundOutcome {
    Win,
    Lose,
    Tie,
    /// Player rolled boxcars.
    CriticalWin,
    /// Player rolled snake eyes; the whole balance is forfeited.
    CriticalLose,
}

impl RoundOutcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win | Self::CriticalWin)
    }

    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::CriticalLose)
    }

    /// Streak after a round with this outcome.
    pub const fn next_streak(self, streak: u32) -> u32 {
        match self {
            Self::Win | Self::CriticalWin => streak.saturating_add(1),
            Self::Lose | Self::CriticalLose => 0,
            Self::Tie => streak,
        }
    }
}

/// Outcome of a round together with the signed balance change it causes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub outcome: RoundOutcome,
    pub balance_delta: i64,
}

impl Resolution {
    /// Applies the delta to `balance`, flooring at zero.
    pub fn apply_to(&self, balance: u64) -> u64 {
        if self.balance_delta >= 0 {
            balance.saturating_add(self.balance_delta.unsigned_abs())
        } else {
            balance.saturating_sub(self.balance_delta.unsigned_abs())
        }
    }
}

/// Resolves a round in priority order: player snake eyes, player boxcars,
/// then the comparison of sums.
pub fn resolve_round(
    player: DicePair,
    opponent: DicePair,
    balance: u64,
    wager: u64,
    critical_multiplier: u64,
) -> Resolution {
    let (outcome, balance_delta) = if player.is_snake_eyes() {
        (RoundOutcome::CriticalLose, -saturating_i64(balance))
    } else if player.is_boxcars() {
        (
            RoundOutcome::CriticalWin,
            saturating_i64(wager.saturating_mul(critical_multiplier)),
        )
    } else {
        match player.sum().cmp(&opponent.sum()) {
            core::cmp::Ordering::Greater => (RoundOutcome::Win, saturating_i64(wager)),
            core::cmp::Ordering::Less => (RoundOutcome::Lose, -saturating_i64(wager)),
            core::cmp::Ordering::Equal => (RoundOutcome::Tie, 0),
        }
    };

    Resolution {
        outcome,
        balance_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn pair(a: u8, b: u8) -> DicePair {
        DicePair::from_faces(a, b).unwrap()
    }

    #[test]
    fn boxcars_pays_five_times_the_wager() {
        let resolution = resolve_round(pair(6, 6), pair(3, 2), 100, 20, 5);
        assert_eq!(resolution.outcome, RoundOutcome::CriticalWin);
        assert_eq!(resolution.balance_delta, 100);
        assert_eq!(resolution.apply_to(100), 200);
    }

    #[test]
    fn snake_eyes_forfeits_everything_regardless_of_opponent() {
        for opponent in [pair(1, 1), pair(6, 6), pair(1, 2)] {
            let resolution = resolve_round(pair(1, 1), opponent, 50, 50, 5);
            assert_eq!(resolution.outcome, RoundOutcome::CriticalLose);
            assert_eq!(resolution.balance_delta, -50);
            assert_eq!(resolution.apply_to(50), 0);
        }

        let small_wager = resolve_round(pair(1, 1), pair(2, 2), 730, 1, 5);
        assert_eq!(small_wager.balance_delta, -730);
    }

    #[test]
    fn opponent_doubles_are_not_special() {
        let resolution = resolve_round(pair(5, 4), pair(1, 1), 100, 10, 5);
        assert_eq!(resolution.outcome, RoundOutcome::Win);
        assert_eq!(resolution.balance_delta, 10);

        let resolution = resolve_round(pair(5, 4), pair(6, 6), 100, 10, 5);
        assert_eq!(resolution.outcome, RoundOutcome::Lose);
        assert_eq!(resolution.balance_delta, -10);
    }

    #[test]
    fn sums_decide_ordinary_rounds() {
        for p1 in 1..=6u8 {
            for p2 in 1..=6u8 {
                let player = pair(p1, p2);
                if player.is_snake_eyes() || player.is_boxcars() {
                    continue;
                }
                for o1 in 1..=6u8 {
                    for o2 in 1..=6u8 {
                        let opponent = pair(o1, o2);
                        let resolution = resolve_round(player, opponent, 40, 7, 5);
                        let expected = match player.sum().cmp(&opponent.sum()) {
                            core::cmp::Ordering::Greater => (RoundOutcome::Win, 7),
                            core::cmp::Ordering::Less => (RoundOutcome::Lose, -7),
                            core::cmp::Ordering::Equal => (RoundOutcome::Tie, 0),
                        };
                        assert_eq!((resolution.outcome, resolution.balance_delta), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn streak_rules() {
        for outcome in RoundOutcome::iter() {
            let next = outcome.next_streak(3);
            match outcome {
                RoundOutcome::Win | RoundOutcome::CriticalWin => assert_eq!(next, 4),
                RoundOutcome::Lose | RoundOutcome::CriticalLose => assert_eq!(next, 0),
                RoundOutcome::Tie => assert_eq!(next, 3),
            }
        }
    }

    #[test]
    fn outcome_labels_match_lifecycle_names() {
        assert_eq!(RoundOutcome::CriticalWin.to_string(), "CRITICAL_WIN");
        let label: &'static str = RoundOutcome::Tie.into();
        assert_eq!(label, "TIE");
    }

    #[test]
    fn loss_never_drives_balance_negative() {
        let resolution = Resolution {
            outcome: RoundOutcome::Lose,
            balance_delta: -500,
        };
        assert_eq!(resolution.apply_to(30), 0);
    }
}
