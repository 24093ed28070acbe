//! Wager clamping and the quick-set buttons.

/// Converts an unsigned amount to `i64`, saturating at `i64::MAX`.
pub(crate) fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Clamps a requested wager into `[1, balance]`.
///
/// The lower bound wins when the balance is zero, so the result is never 0.
pub fn clamp_wager(requested: i64, balance: u64) -> u64 {
    if requested < 1 {
        return 1;
    }
    requested.unsigned_abs().min(balance.max(1))
}

/// Shortcut buttons next to the wager field.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuickBet {
    Min,
    Half,
    Double,
    Quintuple,
    Max,
}

impl QuickBet {
    pub const ALL: [QuickBet; 5] = [
        QuickBet::Min,
        QuickBet::Half,
        QuickBet::Double,
        QuickBet::Quintuple,
        QuickBet::Max,
    ];

    /// Short button label.
    pub const fn label(self) -> &'static str {
        match self {
            QuickBet::Min => "MIN",
            QuickBet::Half => "½",
            QuickBet::Double => "2x",
            QuickBet::Quintuple => "5x",
            QuickBet::Max => "MAX",
        }
    }

    /// Unclamped wager this button asks for.
    pub fn target(self, current: u64, balance: u64) -> i64 {
        match self {
            QuickBet::Min => 1,
            QuickBet::Half => saturating_i64(current / 2),
            QuickBet::Double => saturating_i64(current.saturating_mul(2)),
            QuickBet::Quintuple => saturating_i64(current.saturating_mul(5)),
            QuickBet::Max => saturating_i64(balance),
        }
    }

    /// Wager after pressing this button.
    pub fn apply(self, current: u64, balance: u64) -> u64 {
        clamp_wager(self.target(current, balance), balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_balance() {
        assert_eq!(clamp_wager(1000, 30), 30);
        assert_eq!(clamp_wager(0, 30), 1);
        assert_eq!(clamp_wager(-12, 30), 1);
        assert_eq!(clamp_wager(17, 30), 17);
        assert_eq!(clamp_wager(i64::MAX, u64::MAX), i64::MAX as u64);
    }

    #[test]
    fn clamp_range_holds_for_many_inputs() {
        for balance in [0u64, 1, 2, 29, 100, 12_345] {
            for requested in [-100i64, -1, 0, 1, 2, 50, 99, 100, 101, 1_000_000] {
                let wager = clamp_wager(requested, balance);
                assert!(wager >= 1);
                assert!(wager <= balance.max(1), "balance {balance} requested {requested}");
            }
        }
    }

    #[test]
    fn empty_balance_still_wagers_one() {
        assert_eq!(clamp_wager(10, 0), 1);
        assert_eq!(QuickBet::Max.apply(10, 0), 1);
    }

    #[test]
    fn quick_bets() {
        assert_eq!(QuickBet::Min.apply(40, 100), 1);
        assert_eq!(QuickBet::Half.apply(41, 100), 20);
        assert_eq!(QuickBet::Half.apply(1, 100), 1);
        assert_eq!(QuickBet::Double.apply(40, 100), 80);
        assert_eq!(QuickBet::Double.apply(60, 100), 100);
        assert_eq!(QuickBet::Quintuple.apply(10, 100), 50);
        assert_eq!(QuickBet::Quintuple.apply(30, 100), 100);
        assert_eq!(QuickBet::Max.apply(10, 100), 100);
    }

    #[test]
    fn parses_button_names() {
        assert_eq!("HALF".parse::<QuickBet>(), Ok(QuickBet::Half));
        assert_eq!("quintuple".parse::<QuickBet>(), Ok(QuickBet::Quintuple));
        assert!("triple".parse::<QuickBet>().is_err());
    }
}
