/// Game configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Balance granted at session start and after every refill.
    pub starting_balance: u64,
    /// Wager restored at session start and after every refill.
    pub default_wager: u64,
    /// Payout multiplier applied to the wager on boxcars.
    pub critical_multiplier: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of settled rounds retained in [`crate::History`].
    pub const HISTORY_CAPACITY: usize = 10;
    pub const DIE_FACES: u8 = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_BALANCE: u64 = 100;
    pub const DEFAULT_WAGER: u64 = 10;
    pub const DEFAULT_CRITICAL_MULTIPLIER: u64 = 5;

    /// Default configuration usable in `'static` contexts.
    pub const DEFAULT: GameConfig = GameConfig::new();

    pub const fn new() -> Self {
        Self {
            starting_balance: Self::DEFAULT_STARTING_BALANCE,
            default_wager: Self::DEFAULT_WAGER,
            critical_multiplier: Self::DEFAULT_CRITICAL_MULTIPLIER,
        }
    }

    /// Sets the starting purse. An empty purse is raised to one.
    pub fn with_starting_balance(mut self, starting_balance: u64) -> Self {
        self.starting_balance = starting_balance.max(1);
        self
    }

    /// Sets the refill wager. A wager of zero is raised to one.
    pub fn with_default_wager(mut self, default_wager: u64) -> Self {
        self.default_wager = default_wager.max(1);
        self
    }

    /// Balance a fresh or refilled session opens with; never empty.
    pub const fn opening_balance(&self) -> u64 {
        if self.starting_balance == 0 {
            1
        } else {
            self.starting_balance
        }
    }

    /// Wager a fresh or refilled session opens with, capped by the opening balance.
    pub const fn opening_wager(&self) -> u64 {
        let balance = self.opening_balance();
        if self.default_wager == 0 {
            1
        } else if self.default_wager > balance {
            balance
        } else {
            self.default_wager
        }
    }

    pub fn with_critical_multiplier(mut self, critical_multiplier: u64) -> Self {
        self.critical_multiplier = critical_multiplier;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_purse_is_raised_to_one() {
        let config = GameConfig::default().with_starting_balance(0);
        assert_eq!(config.starting_balance, 1);
        assert_eq!(config.opening_balance(), 1);
        assert_eq!(config.opening_wager(), 1);
    }

    #[test]
    fn opening_wager_fits_the_purse() {
        let config = GameConfig::default()
            .with_starting_balance(50)
            .with_default_wager(80);
        assert_eq!(config.opening_wager(), 50);

        let literal = GameConfig {
            starting_balance: 0,
            default_wager: 0,
            ..GameConfig::DEFAULT
        };
        assert_eq!(literal.opening_balance(), 1);
        assert_eq!(literal.opening_wager(), 1);
        assert_eq!(GameConfig::DEFAULT.opening_wager(), 10);
    }
}
