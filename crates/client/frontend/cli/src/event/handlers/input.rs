//! Input handling (keyboard).

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::QuickBet;
use runtime::{RollStatus, RuntimeError};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to appropriate handler.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let action = self.input.handle_key(
            key,
            &self.app_state.mode,
            self.view_model.wager_locked(),
        );

        match action {
            KeyAction::Quit => {
                self.consumer
                    .message_log_mut()
                    .push_text("Bober waves goodbye.");
                self.render(terminal)?;
                return Ok(true);
            }
            KeyAction::Roll => self.roll().await?,
            KeyAction::QuickBet(bet) => self.quick_bet(bet).await?,
            KeyAction::BeginWagerEdit => self.app_state.begin_wager_edit(),
            KeyAction::WagerDigit(ch) => {
                if let Some(input) = self.app_state.wager_input_mut() {
                    input.push(ch);
                }
            }
            KeyAction::WagerBackspace => {
                if let Some(input) = self.app_state.wager_input_mut() {
                    input.backspace();
                }
            }
            KeyAction::CommitWager => {
                let requested = self
                    .app_state
                    .finish_wager_edit()
                    .and_then(|input| input.value());
                if let Some(requested) = requested {
                    self.set_wager(requested).await?;
                }
            }
            KeyAction::CancelWagerEdit => {
                self.app_state.finish_wager_edit();
            }
            KeyAction::ToggleRules => self.app_state.toggle_rules(),
            KeyAction::None => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }

    async fn roll(&mut self) -> Result<()> {
        match self.handle.roll().await? {
            RollStatus::Started => tracing::debug!("roll started"),
            RollStatus::Ignored => tracing::trace!("roll ignored while tumbling"),
            // The runtime shows the matching banner.
            RollStatus::Rejected(reason) => tracing::debug!(%reason, "roll rejected"),
        }
        Ok(())
    }

    async fn quick_bet(&mut self, bet: QuickBet) -> Result<()> {
        let result = self.handle.quick_bet(bet).await;
        self.wager_reply(result)
    }

    async fn set_wager(&mut self, requested: i64) -> Result<()> {
        let result = self.handle.set_wager(requested).await;
        self.wager_reply(result)
    }

    fn wager_reply(&self, result: Result<u64, RuntimeError>) -> Result<()> {
        match result {
            Ok(wager) => {
                tracing::debug!(wager, "wager updated");
                Ok(())
            }
            Err(error) if error.is_rejection() => {
                tracing::debug!(%error, "wager request rejected");
                Ok(())
            }
            Err(error) => Err(error.into()),
        }
    }
}
