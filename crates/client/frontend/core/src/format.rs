//! Number and message formatting shared by every frontend.

use game_core::{DicePair, RoundOutcome};

/// Currency label shown next to amounts.
pub const CURRENCY: &str = "$BOBER";

/// Formats an amount with comma thousands separators: `1234567` → `1,234,567`.
pub fn format_logs(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a balance change with an explicit sign. Zero has no sign.
pub fn format_signed(delta: i64) -> String {
    let magnitude = format_logs(delta.unsigned_abs());
    match delta.signum() {
        1 => format!("+{magnitude}"),
        -1 => format!("-{magnitude}"),
        _ => magnitude,
    }
}

/// Short outcome label used in the round log.
pub fn outcome_label(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "WIN",
        RoundOutcome::Lose => "LOSE",
        RoundOutcome::Tie => "TIE",
        RoundOutcome::CriticalWin => "BOXCARS",
        RoundOutcome::CriticalLose => "SNAKE EYES",
    }
}

/// One line of the round log, e.g. `#3 6+6 vs 3+2 BOXCARS +100`.
pub fn format_round_message(
    round: u64,
    player: DicePair,
    opponent: DicePair,
    outcome: RoundOutcome,
    balance_delta: i64,
) -> String {
    format!(
        "#{round} {player} vs {opponent} {} {}",
        outcome_label(outcome),
        format_signed(balance_delta)
    )
}

pub fn format_refill(balance: u64) -> String {
    format!("Bober refills your pile: {} {CURRENCY}", format_logs(balance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_logs(0), "0");
        assert_eq!(format_logs(999), "999");
        assert_eq!(format_logs(1000), "1,000");
        assert_eq!(format_logs(1234567), "1,234,567");
        assert_eq!(format_logs(100000), "100,000");
    }

    #[test]
    fn signed_deltas() {
        assert_eq!(format_signed(100), "+100");
        assert_eq!(format_signed(-2500), "-2,500");
        assert_eq!(format_signed(0), "0");
        assert_eq!(format_signed(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn round_line() {
        let player = DicePair::BOXCARS;
        let opponent = DicePair::from_faces(3, 2).unwrap();
        assert_eq!(
            format_round_message(3, player, opponent, RoundOutcome::CriticalWin, 100),
            "#3 6+6 vs 3+2 BOXCARS +100"
        );
    }
}
