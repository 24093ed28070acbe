//! CLI frontend implementation.
//!
//! CliFrontend is a pure UI layer that receives RuntimeHandle from Client.
//! It does NOT own or build the Runtime.
use anyhow::{Context, Result};
use async_trait::async_trait;

use game_core::GameConfig;
use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{
    FrontendConfig, format::{CURRENCY, format_logs}, frontend::Frontend, message::MessageLog,
    view_model::ViewModel,
};

/// CLI frontend - pure UI layer.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    /// Rules the table was built with; the view model needs the boxcars multiplier.
    game_config: GameConfig,
}

impl CliFrontend {
    pub fn new(
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        game_config: GameConfig,
    ) -> Self {
        Self {
            frontend_config,
            cli_config,
            game_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before the snapshot so nothing published in between is lost.
        let subscriptions = handle.subscribe_multiple(&Topic::ALL);
        let initial_state = handle
            .query_state()
            .await
            .context("failed to query initial table state")?;

        let mut view_model = ViewModel::from_state(&initial_state, &self.game_config);
        view_model.feedback = handle.active_feedback().await?;

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text(format!(
            "Bober sits down across the table. You have {} {CURRENCY}.",
            format_logs(initial_state.balance)
        ));

        let consumer = CliEventConsumer::new(messages);
        let event_loop = EventLoop::new(
            handle,
            subscriptions,
            consumer,
            view_model,
            self.cli_config.clone(),
            self.frontend_config.feedback.ttl,
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let _consumer = event_loop.run(&mut terminal).await?;

        tracing::info!("CLI frontend exiting");
        Ok(())
    }
}
