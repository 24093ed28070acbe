//! Application state for mode management and UI context.

use runtime::FeedbackId;
use tokio::time::{Duration, Instant};

/// Longest wager the edit box accepts; keeps the value inside `i64`.
const MAX_WAGER_DIGITS: usize = 18;

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Rolling and quick bets.
    Normal,
    /// "HOW TO PLAY" overlay.
    Rules,
    /// Typing a wager.
    EditingWager(WagerInput),
}

/// Digits typed into the wager box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WagerInput {
    buffer: String,
}

impl WagerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit. Anything else is ignored.
    pub fn push(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() || self.buffer.len() >= MAX_WAGER_DIGITS {
            return false;
        }
        self.buffer.push(ch);
        true
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Requested wager, or `None` when nothing was typed.
    pub fn value(&self) -> Option<i64> {
        self.buffer.parse().ok()
    }
}

/// Feedback banner waiting for its acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAcknowledge {
    pub id: FeedbackId,
    pub deadline: Instant,
}

/// Mutable application state tracking the current mode and timers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub pending_acknowledge: Option<PendingAcknowledge>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            pending_acknowledge: None,
        }
    }

    pub fn toggle_rules(&mut self) {
        self.mode = match self.mode {
            AppMode::Rules => AppMode::Normal,
            _ => AppMode::Rules,
        };
    }

    pub fn begin_wager_edit(&mut self) {
        self.mode = AppMode::EditingWager(WagerInput::new());
    }

    /// Leaves edit mode, returning what was typed.
    pub fn finish_wager_edit(&mut self) -> Option<WagerInput> {
        match std::mem::replace(&mut self.mode, AppMode::Normal) {
            AppMode::EditingWager(input) => Some(input),
            other => {
                self.mode = other;
                None
            }
        }
    }

    pub fn wager_input_mut(&mut self) -> Option<&mut WagerInput> {
        match &mut self.mode {
            AppMode::EditingWager(input) => Some(input),
            _ => None,
        }
    }

    /// Replaces any earlier pending banner; only the newest one is shown.
    pub fn schedule_acknowledge(&mut self, id: FeedbackId, ttl: Duration) {
        self.pending_acknowledge = Some(PendingAcknowledge {
            id,
            deadline: Instant::now() + ttl,
        });
    }

    /// Realigns timers and mode with a fresh runtime snapshot.
    ///
    /// A banner that is already pending keeps its deadline; any other active
    /// banner gets a full ttl.
    pub fn resync(&mut self, active: Option<FeedbackId>, wager_locked: bool, ttl: Duration) {
        match active {
            Some(id) if self.pending_acknowledge.is_some_and(|p| p.id == id) => {}
            Some(id) => self.schedule_acknowledge(id, ttl),
            None => self.pending_acknowledge = None,
        }
        if wager_locked {
            self.finish_wager_edit();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wager_input_ignores_non_digits() {
        let mut input = WagerInput::new();
        assert!(input.push('4'));
        assert!(!input.push('x'));
        assert!(!input.push('-'));
        assert!(input.push('2'));
        assert_eq!(input.as_str(), "42");
        assert_eq!(input.value(), Some(42));

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), None);
    }

    #[test]
    fn wager_input_stays_inside_i64() {
        let mut input = WagerInput::new();
        for _ in 0..30 {
            input.push('9');
        }
        assert_eq!(input.as_str().len(), MAX_WAGER_DIGITS);
        assert!(input.value().is_some());
    }

    #[test]
    fn resync_schedules_the_active_banner() {
        let ttl = Duration::from_millis(1500);
        let mut state = AppState::new();
        state.schedule_acknowledge(FeedbackId(4), ttl);
        state.begin_wager_edit();

        state.resync(Some(FeedbackId(5)), true, ttl);
        assert_eq!(state.pending_acknowledge.map(|p| p.id), Some(FeedbackId(5)));
        assert_eq!(state.mode, AppMode::Normal);

        let deadline = state.pending_acknowledge.map(|p| p.deadline);
        state.resync(Some(FeedbackId(5)), false, ttl);
        assert_eq!(state.pending_acknowledge.map(|p| p.deadline), deadline);

        state.begin_wager_edit();
        state.resync(None, false, ttl);
        assert!(state.pending_acknowledge.is_none());
        assert!(state.wager_input_mut().is_some());
    }

    #[test]
    fn finishing_edit_returns_to_normal() {
        let mut state = AppState::new();
        state.begin_wager_edit();
        if let Some(input) = state.wager_input_mut() {
            input.push('7');
        }

        let input = state.finish_wager_edit().unwrap();
        assert_eq!(input.value(), Some(7));
        assert_eq!(state.mode, AppMode::Normal);

        state.toggle_rules();
        assert!(state.finish_wager_edit().is_none());
        assert_eq!(state.mode, AppMode::Rules);
    }
}
