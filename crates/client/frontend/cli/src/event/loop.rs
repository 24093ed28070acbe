//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Runtime event consumption and ViewModel updates (via ViewModelUpdater)
//! - Keyboard input processing (rolls, wagers and UI navigation)
//! - Acknowledging feedback banners once they have been on screen long enough

use std::collections::HashMap;

use anyhow::Result;
use runtime::{Event as RuntimeEvent, FeedbackEvent, RuntimeHandle, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration, Instant},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{EventConsumer, ViewModelUpdater, view_model::ViewModel};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop managing ViewModel state and coordinating UI updates.
///
/// This is the main orchestrator that:
/// - Owns the ViewModel (single source of truth for presentation state)
/// - Uses ViewModelUpdater service to apply runtime events incrementally
/// - Handles user input and forwards requests to the runtime
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) handle: RuntimeHandle,
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    /// Owned ViewModel - incrementally updated via ViewModelUpdater
    pub(crate) view_model: ViewModel,
    pub(crate) cli_config: CliConfig,
    /// How long a feedback banner stays before it is acknowledged.
    pub(crate) feedback_ttl: Duration,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        consumer: C,
        view_model: ViewModel,
        cli_config: CliConfig,
        feedback_ttl: Duration,
    ) -> Self {
        let mut app_state = AppState::new();
        if cli_config.ui.show_rules_on_start {
            app_state.toggle_rules();
        }
        if let Some(feedback) = view_model.feedback {
            app_state.schedule_acknowledge(feedback.id, feedback_ttl);
        }

        Self {
            handle,
            subscriptions,
            input: InputHandler::new(),
            consumer,
            app_state,
            view_model,
            cli_config,
            feedback_ttl,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        // Initial render
        self.render(terminal)?;

        let mut game_rx = self.subscriptions.remove(&Topic::GameState);
        let mut feedback_rx = self.subscriptions.remove(&Topic::Feedback);
        let mut animation_rx = self.subscriptions.remove(&Topic::Animation);

        loop {
            let acknowledge_at = self.app_state.pending_acknowledge.map(|p| p.deadline);

            tokio::select! {
                result = recv(&mut game_rx), if game_rx.is_some() => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                result = recv(&mut feedback_rx), if feedback_rx.is_some() => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                result = recv(&mut animation_rx), if animation_rx.is_some() => {
                    if self.handle_runtime_event(result, terminal).await? {
                        break;
                    }
                }
                _ = sleep_until(acknowledge_at), if acknowledge_at.is_some() => {
                    self.acknowledge_feedback().await?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    /// Handle runtime event and update ViewModel incrementally.
    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                // Let consumer process event (round log)
                let impact = self.consumer.on_event(&event);

                let scope = ViewModelUpdater::update(&mut self.view_model, &event);

                if let RuntimeEvent::Feedback(FeedbackEvent::Shown(feedback)) = &event {
                    self.app_state
                        .schedule_acknowledge(feedback.id, self.feedback_ttl);
                }

                if self.view_model.wager_locked() {
                    // Typing is disabled while the dice tumble.
                    self.app_state.finish_wager_edit();
                }

                if impact.requires_redraw || !scope.is_empty() {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events, resyncing", skipped);
                self.resync(terminal).await?;
                Ok(false)
            }
        }
    }

    /// Rebuilds the view model from a fresh snapshot after missed events.
    async fn resync(&mut self, terminal: &mut Tui) -> Result<()> {
        let state = self.handle.query_state().await?;
        self.view_model.rebuild_from_state(&state);
        self.view_model.feedback = self.handle.active_feedback().await?;
        self.app_state.resync(
            self.view_model.feedback.map(|feedback| feedback.id),
            self.view_model.wager_locked(),
            self.feedback_ttl,
        );
        self.render(terminal)
    }

    async fn acknowledge_feedback(&mut self) -> Result<()> {
        let Some(pending) = self.app_state.pending_acknowledge.take() else {
            return Ok(());
        };

        // The runtime publishes `Expired`, which clears the banner.
        if !self.handle.acknowledge_feedback(pending.id).await? {
            tracing::debug!(id = %pending.id, "feedback already replaced");
        }
        Ok(())
    }
}

async fn recv(
    rx: &mut Option<broadcast::Receiver<RuntimeEvent>>,
) -> Result<RuntimeEvent, RecvError> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
