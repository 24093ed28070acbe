//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! rolling, editing the wager, or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{GameState, QuickBet, StartRollError};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Feedback, FeedbackId, Topic};
use crate::workers::Command;

/// What happened to a roll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollStatus {
    /// The dice are tumbling; a settle follows after the animation.
    Started,
    /// A round was already rolling; nothing changed and nothing was shown.
    Ignored,
    /// The round could not start; feedback explains why.
    Rejected(StartRollError),
}

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Ask the table to roll with the current wager.
    pub async fn roll(&self) -> Result<RollStatus> {
        self.request(|reply| Command::Roll { reply }).await?
    }

    /// Set the wager to a typed amount. Returns the clamped wager.
    pub async fn set_wager(&self, requested: i64) -> Result<u64> {
        self.request(|reply| Command::SetWager { requested, reply })
            .await?
    }

    /// Apply a quick-set button. Returns the clamped wager.
    pub async fn quick_bet(&self, bet: QuickBet) -> Result<u64> {
        self.request(|reply| Command::QuickBet { bet, reply }).await?
    }

    /// Dismiss a feedback banner. Returns false if it was already replaced.
    pub async fn acknowledge_feedback(&self, id: FeedbackId) -> Result<bool> {
        self.request(|reply| Command::AcknowledgeFeedback { id, reply })
            .await
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// The banner currently on screen, if any.
    pub async fn active_feedback(&self) -> Result<Option<Feedback>> {
        self.request(|reply| Command::ActiveFeedback { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::GameState` - Action execution and rejections
    /// - `Topic::Feedback` - Banners shown and expired
    /// - `Topic::Animation` - Tumble frames while rolling
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut feedback_rx = handle.subscribe(Topic::Feedback);
    /// while let Ok(event) = feedback_rx.recv().await {
    ///     // Show or hide the banner
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
