use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::round::RoundOutcome;

/// One settled round as shown in the history ribbon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    /// Session-wide round number, starting at 1.
    pub round: u64,
    pub outcome: RoundOutcome,
    pub balance_delta: i64,
}

/// Bounded list of recent rounds, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    entries: ArrayVec<HistoryEntry, { GameConfig::HISTORY_CAPACITY }>,
}

impl History {
    pub const CAPACITY: usize = GameConfig::HISTORY_CAPACITY;

    /// Prepends `entry`, dropping the oldest entry when full.
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.entries.is_full() {
            self.entries.pop();
        }
        self.entries.insert(0, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(round: u64) -> HistoryEntry {
        HistoryEntry {
            round,
            outcome: RoundOutcome::Tie,
            balance_delta: 0,
        }
    }

    #[test]
    fn keeps_newest_first_and_caps_length() {
        let mut history = History::default();
        for round in 1..=25 {
            history.record(entry(round));
            assert!(history.len() <= History::CAPACITY);
            assert_eq!(history.latest().map(|e| e.round), Some(round));
        }

        let rounds: Vec<u64> = history.iter().map(|e| e.round).collect();
        assert_eq!(rounds, (16..=25).rev().collect::<Vec<_>>());
    }
}
