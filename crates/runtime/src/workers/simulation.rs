//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], executes actions via
//! [`game_core::GameEngine`], drives the tumble animation and the bankrupt
//! refill timer, and publishes events to the [`EventBus`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, error, info};

use game_core::engine::ActionResult;
use game_core::{
    Action, ExecuteError, ExecutionOutcome, GameConfig, GameEngine, GameEnv, GameError,
    GameState, QuickBet, RngOracle, Side, StartRollError,
};

use crate::api::{Result, RollStatus, RuntimeError};
use crate::events::{
    AnimationEvent, Event, EventBus, Feedback, FeedbackEvent, FeedbackId, FeedbackKind,
    GameStateEvent,
};
use crate::runtime::TimingConfig;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Start a round with the current wager.
    Roll {
        reply: oneshot::Sender<Result<RollStatus>>,
    },
    /// Set the wager to a typed amount.
    SetWager {
        requested: i64,
        reply: oneshot::Sender<Result<u64>>,
    },
    /// Apply a quick-set button.
    QuickBet {
        bet: QuickBet,
        reply: oneshot::Sender<Result<u64>>,
    },
    /// Expire a feedback banner.
    AcknowledgeFeedback {
        id: FeedbackId,
        reply: oneshot::Sender<bool>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
    ActiveFeedback {
        reply: oneshot::Sender<Option<Feedback>>,
    },
}

/// Tumble animation of the round in flight.
struct RollAnimation {
    frame: u32,
    ticker: Interval,
}

/// Background task that processes gameplay commands and timers.
pub struct SimulationWorker {
    state: GameState,
    config: GameConfig,
    timing: TimingConfig,
    rng: Arc<dyn RngOracle>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,

    animation: Option<RollAnimation>,
    refill_at: Option<Instant>,
    feedback: Option<Feedback>,
    next_feedback_id: u64,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        config: GameConfig,
        timing: TimingConfig,
        rng: Arc<dyn RngOracle>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            balance = state.balance,
            wager = state.wager,
            "SimulationWorker initialized"
        );

        Self {
            state,
            config,
            timing,
            rng,
            command_rx,
            event_bus,
            animation: None,
            refill_at: None,
            feedback: None,
            next_feedback_id: 0,
        }
    }

    /// Main worker loop.
    ///
    /// Exits when every command sender has been dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = next_frame(&mut self.animation), if self.animation.is_some() => {
                    self.advance_animation();
                }
                _ = sleep_until(self.refill_at), if self.refill_at.is_some() => {
                    self.refill_at = None;
                    self.refill();
                }
            }
        }
        debug!("SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Roll { reply } => {
                let result = self.handle_roll();
                if reply.send(result).is_err() {
                    debug!("Roll reply channel closed (caller dropped)");
                }
            }
            Command::SetWager { requested, reply } => {
                let result = self.handle_wager(Action::set_wager(requested));
                if reply.send(result).is_err() {
                    debug!("SetWager reply channel closed (caller dropped)");
                }
            }
            Command::QuickBet { bet, reply } => {
                let result = self.handle_wager(Action::quick_bet(bet));
                if reply.send(result).is_err() {
                    debug!("QuickBet reply channel closed (caller dropped)");
                }
            }
            Command::AcknowledgeFeedback { id, reply } => {
                let expired = self.acknowledge_feedback(id);
                if reply.send(expired).is_err() {
                    debug!("AcknowledgeFeedback reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::ActiveFeedback { reply } => {
                if reply.send(self.feedback).is_err() {
                    debug!("ActiveFeedback reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_roll(&mut self) -> Result<RollStatus> {
        let error = match self.execute(Action::start_roll()) {
            Ok(_) => {
                self.start_animation();
                return Ok(RollStatus::Started);
            }
            Err(ExecuteError::StartRoll(phase_error)) => phase_error.error,
            Err(other) => return Err(RuntimeError::Rejected(other)),
        };

        match error {
            StartRollError::AlreadyRolling => return Ok(RollStatus::Ignored),
            StartRollError::Bankrupt => {
                self.show_feedback(FeedbackKind::GameOver);
                self.schedule_refill();
            }
            StartRollError::InsufficientFunds { .. } => {
                self.show_feedback(FeedbackKind::InsufficientFunds);
            }
            StartRollError::NothingWagered => {
                self.show_feedback(FeedbackKind::NothingWagered);
            }
            StartRollError::PhaseDesync => {}
        }
        Ok(RollStatus::Rejected(error))
    }

    fn handle_wager(&mut self, action: Action) -> Result<u64> {
        match self.execute(action)?.result {
            ActionResult::WagerSet(wager) => Ok(wager),
            _ => Ok(self.state.wager),
        }
    }

    fn start_animation(&mut self) {
        let period = self.timing.tick_interval;
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.animation = Some(RollAnimation { frame: 0, ticker });
        self.event_bus
            .publish(Event::Animation(AnimationEvent::Started {
                nonce: self.state.nonce,
                total_frames: self.total_frames(),
            }));
    }

    fn total_frames(&self) -> u32 {
        self.timing.roll_ticks.max(1)
    }

    fn advance_animation(&mut self) {
        let total_frames = self.total_frames();
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.frame += 1;
        let frame = animation.frame;

        let env = GameEnv::new(&self.config, self.rng.as_ref());
        let seed = self.state.game_seed;
        let nonce = self.state.nonce;
        self.event_bus
            .publish(Event::Animation(AnimationEvent::Frame {
                frame,
                total_frames,
                player: env.tumble_pair(seed, nonce, frame, Side::Player),
                opponent: env.tumble_pair(seed, nonce, frame, Side::Opponent),
            }));

        if frame >= total_frames {
            self.animation = None;
            self.settle();
        }
    }

    /// Draws the real dice and settles the round.
    fn settle(&mut self) {
        let env = GameEnv::new(&self.config, self.rng.as_ref());
        let seed = self.state.game_seed;
        let nonce = self.state.nonce;
        let player = env.roll_pair(seed, nonce, Side::Player);
        let opponent = env.roll_pair(seed, nonce, Side::Opponent);

        let Ok(outcome) = self.execute(Action::settle(player, opponent)) else {
            return;
        };

        self.event_bus
            .publish(Event::Animation(AnimationEvent::Finished { player, opponent }));

        if let ActionResult::Settled(resolution) = outcome.result {
            info!(
                player = %player,
                opponent = %opponent,
                outcome = %resolution.outcome,
                delta = resolution.balance_delta,
                balance = self.state.balance,
                streak = self.state.streak,
                "round settled"
            );
            self.show_feedback(FeedbackKind::Round(resolution.outcome));
        }
    }

    fn schedule_refill(&mut self) {
        if self.refill_at.is_some() {
            debug!("refill already pending");
            return;
        }
        self.refill_at = Some(Instant::now() + self.timing.refill_delay);
    }

    fn refill(&mut self) {
        if self.execute(Action::refill()).is_ok() {
            info!(balance = self.state.balance, "balance refilled");
            self.show_feedback(FeedbackKind::Refilled);
        }
    }

    fn show_feedback(&mut self, kind: FeedbackKind) {
        self.next_feedback_id += 1;
        let feedback = Feedback {
            id: FeedbackId(self.next_feedback_id),
            kind,
        };
        self.feedback = Some(feedback);
        self.event_bus
            .publish(Event::Feedback(FeedbackEvent::Shown(feedback)));
    }

    fn acknowledge_feedback(&mut self, id: FeedbackId) -> bool {
        match self.feedback {
            Some(active) if active.id == id => {
                self.feedback = None;
                self.event_bus
                    .publish(Event::Feedback(FeedbackEvent::Expired { id }));
                true
            }
            _ => false,
        }
    }

    /// Executes an action against a working copy and commits it on success.
    ///
    /// This is the ONLY method that calls `GameEngine::execute()`, so every
    /// executed or rejected action is published exactly once.
    fn execute(&mut self, action: Action) -> std::result::Result<ExecutionOutcome, ExecuteError> {
        let nonce = self.state.nonce;
        let env = GameEnv::new(&self.config, self.rng.as_ref());

        let mut working_state = self.state.clone();
        let outcome = GameEngine::new(&mut working_state).execute(env, &action);

        match outcome {
            Ok(outcome) => {
                self.state = working_state;
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::ActionExecuted {
                        nonce,
                        action,
                        delta: Box::new(outcome.delta.clone()),
                        result: outcome.result,
                        after_state: Box::new(self.state.clone()),
                    }));
                Ok(outcome)
            }
            Err(error) => {
                let severity = error.severity();
                if severity.is_internal() {
                    error!(
                        target: "runtime::worker",
                        action = action.as_snake_case(),
                        phase = error.phase().as_str(),
                        severity = severity.as_str(),
                        code = error.error_code(),
                        "action failed validation: {error}"
                    );
                } else {
                    debug!(
                        target: "runtime::worker",
                        action = action.as_snake_case(),
                        code = error.error_code(),
                        "action rejected: {error}"
                    );
                }
                self.event_bus
                    .publish(Event::GameState(GameStateEvent::ActionRejected {
                        action,
                        phase: error.phase(),
                        severity,
                        error: error.to_string(),
                    }));
                Err(error)
            }
        }
    }
}

async fn next_frame(animation: &mut Option<RollAnimation>) {
    match animation {
        Some(animation) => {
            animation.ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
