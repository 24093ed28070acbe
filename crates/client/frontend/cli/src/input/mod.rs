//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::QuickBet;

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    Roll,
    QuickBet(QuickBet),
    BeginWagerEdit,
    WagerDigit(char),
    WagerBackspace,
    CommitWager,
    CancelWagerEdit,
    ToggleRules,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into table commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// `wager_locked` disables the quick-set keys and the edit box while the
    /// dice tumble.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode, wager_locked: bool) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Normal => self.normal(key, wager_locked),
            AppMode::Rules => self.rules(key),
            AppMode::EditingWager(_) => self.editing(key),
        }
    }

    fn normal(&self, key: KeyEvent, wager_locked: bool) -> KeyAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Roll,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                '?' => KeyAction::ToggleRules,
                'e' if !wager_locked => KeyAction::BeginWagerEdit,
                '1'..='5' if !wager_locked => quick_bet(ch),
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }

    fn rules(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => KeyAction::ToggleRules,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn editing(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => KeyAction::WagerDigit(ch),
            KeyCode::Backspace => KeyAction::WagerBackspace,
            KeyCode::Enter => KeyAction::CommitWager,
            KeyCode::Esc => KeyAction::CancelWagerEdit,
            _ => KeyAction::None,
        }
    }
}

fn quick_bet(ch: char) -> KeyAction {
    ch.to_digit(10)
        .and_then(|digit| QuickBet::ALL.get(digit as usize - 1).copied())
        .map_or(KeyAction::None, KeyAction::QuickBet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WagerInput;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_roll_and_quit() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(handler.handle_key(key(KeyCode::Char(' ')), &mode, false), KeyAction::Roll);
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &mode, false), KeyAction::Roll);
        assert_eq!(handler.handle_key(key(KeyCode::Char('Q')), &mode, false), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), &mode, false), KeyAction::Quit);
    }

    #[test]
    fn maps_quick_bets_in_order() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        let bets: Vec<_> = ['1', '2', '3', '4', '5']
            .into_iter()
            .map(|ch| handler.handle_key(key(KeyCode::Char(ch)), &mode, false))
            .collect();
        assert_eq!(
            bets,
            vec![
                KeyAction::QuickBet(QuickBet::Min),
                KeyAction::QuickBet(QuickBet::Half),
                KeyAction::QuickBet(QuickBet::Double),
                KeyAction::QuickBet(QuickBet::Quintuple),
                KeyAction::QuickBet(QuickBet::Max),
            ]
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('6')), &mode, false), KeyAction::None);
    }

    #[test]
    fn wager_keys_disabled_while_rolling() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(handler.handle_key(key(KeyCode::Char('3')), &mode, true), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('e')), &mode, true), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char(' ')), &mode, true), KeyAction::Roll);
    }

    #[test]
    fn editing_accepts_only_digits() {
        let handler = InputHandler::new();
        let mode = AppMode::EditingWager(WagerInput::new());
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('7')), &mode, false),
            KeyAction::WagerDigit('7')
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('x')), &mode, false), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &mode, false), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &mode, false), KeyAction::CommitWager);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), &mode, false), KeyAction::CancelWagerEdit);
    }

    #[test]
    fn rules_overlay_toggles() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('?')), &AppMode::Normal, false),
            KeyAction::ToggleRules
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), &AppMode::Rules, false),
            KeyAction::ToggleRules
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), &AppMode::Rules, false),
            KeyAction::None
        );
    }

    #[test]
    fn ctrl_c_always_quits() {
        let handler = InputHandler::new();
        let mut event = key(KeyCode::Char('c'));
        event.modifiers = KeyModifiers::CONTROL;
        let mode = AppMode::EditingWager(WagerInput::new());
        assert_eq!(handler.handle_key(event, &mode, false), KeyAction::Quit);
    }
}
